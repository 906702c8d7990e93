// extensions/mod.rs
//
// Optional placement helpers built on top of the propagated system.
// Nothing in core depends on them.

pub mod rings;

pub use rings::{Ring, RingPlacement, RingSet};
