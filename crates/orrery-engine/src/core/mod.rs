pub mod calendar;
pub mod clock;
pub mod propagate;
pub mod system;
