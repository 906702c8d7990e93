/// Unique identifier for a body in the solar system.
/// Doubles as the body's index in the flat arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Arena index for this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
