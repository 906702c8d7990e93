use crate::api::config::PropagatorConfig;
use crate::core::calendar::CalendarDate;
use crate::input::commands::ClockCommand;

/// Simulated time: a continuous Julian date advanced from real frame time.
///
/// The clock is the only shared mutable state the propagator reads. It is
/// owned by the host and passed into each tick, never reached through a global.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Current simulated time (Julian date).
    julian_date: f64,
    /// Simulated days per real second. Negative runs time backward.
    rate: f64,
    /// Rate restored by `reset`.
    default_rate: f64,
    /// Multiplier used by `speed_up` / `slow_down`.
    rate_step: f64,
    paused: bool,
}

impl SimulationClock {
    pub fn new(julian_date: f64, default_rate: f64) -> Self {
        Self {
            julian_date,
            rate: default_rate,
            default_rate,
            rate_step: 1.25,
            paused: false,
        }
    }

    pub fn from_config(config: &PropagatorConfig) -> Self {
        Self {
            rate_step: config.rate_step,
            ..Self::new(config.start_julian_date, config.default_rate)
        }
    }

    /// Advance by a real frame delta. Returns the simulated days applied,
    /// which is zero while paused.
    pub fn advance(&mut self, real_delta_seconds: f64) -> f64 {
        if self.paused {
            return 0.0;
        }
        let delta_days = real_delta_seconds * self.rate;
        self.julian_date += delta_days;
        delta_days
    }

    pub fn julian_date(&self) -> f64 {
        self.julian_date
    }

    /// Jump to an absolute time. Rate and pause state are untouched.
    pub fn set_time(&mut self, julian_date: f64) {
        self.julian_date = julian_date;
    }

    /// Current simulated time as a calendar date. Formatting is left to the caller.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_julian(self.julian_date)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
        log::debug!("clock rate set to {rate:.3} days/s");
    }

    pub fn speed_up(&mut self) {
        self.set_rate(self.rate * self.rate_step);
    }

    pub fn slow_down(&mut self) {
        self.set_rate(self.rate / self.rate_step);
    }

    /// Restore the default rate. Simulated time is kept.
    pub fn reset(&mut self) {
        self.rate = self.default_rate;
        log::info!("clock rate reset to {:.3} days/s", self.default_rate);
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    /// Flip the pause flag. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("clock {}", if self.paused { "paused" } else { "running" });
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn apply(&mut self, command: ClockCommand) {
        match command {
            ClockCommand::TogglePause => {
                self.toggle_pause();
            }
            ClockCommand::SetRate(rate) => self.set_rate(rate),
            ClockCommand::SpeedUp => self.speed_up(),
            ClockCommand::SlowDown => self.slow_down(),
            ClockCommand::ResetRate => self.reset(),
            ClockCommand::SetTime(julian_date) => self.set_time(julian_date),
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::from_config(&PropagatorConfig::default())
    }
}
