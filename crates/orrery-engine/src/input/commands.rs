use crate::core::clock::SimulationClock;

/// Time-control commands the host can issue between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockCommand {
    TogglePause,
    /// Simulated days per real second.
    SetRate(f64),
    SpeedUp,
    SlowDown,
    /// Restore the default rate.
    ResetRate,
    /// Jump to a Julian date.
    SetTime(f64),
}

/// A queue of clock commands.
/// The host pushes at any time; the runner drains once per tick, before the
/// clock advances.
pub struct CommandQueue {
    commands: Vec<ClockCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, command: ClockCommand) {
        self.commands.push(command);
    }

    /// Drain all pending commands. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<ClockCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Apply every pending command to `clock`, in push order.
    /// Returns how many were applied.
    pub fn apply(&mut self, clock: &mut SimulationClock) -> usize {
        let commands = self.drain();
        for command in &commands {
            clock.apply(*command);
        }
        commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}
