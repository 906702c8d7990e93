use serde::{Deserialize, Serialize};

/// Configuration for the propagator, provided by the host at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagatorConfig {
    /// World length units per astronomical unit (default: 5.0).
    pub world_units_per_au: f64,
    /// Julian date the clock starts at (default: 2026-01-16 00:00 UTC).
    pub start_julian_date: f64,
    /// Simulated days per real second; `reset` restores this (default: 12.0).
    pub default_rate: f64,
    /// Multiplicative rate step for speed-up / slow-down (default: 1.25).
    pub rate_step: f64,
    /// Number of segments in a sampled orbit path (default: 128).
    pub path_segments: usize,
    /// Simulated days a precessing path may drift before it is resampled (default: 1.0).
    pub path_resample_interval_days: f64,
    /// Minimum-separation factor k for fixed orbits (default: 1.6).
    pub fixed_separation_factor: f64,
    /// Minimum-separation factor k for precessing elements (default: 1.2).
    pub elements_separation_factor: f64,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        Self {
            world_units_per_au: 5.0,
            start_julian_date: 2_461_056.5,
            default_rate: 12.0,
            rate_step: 1.25,
            path_segments: 128,
            path_resample_interval_days: 1.0,
            fixed_separation_factor: 1.6,
            elements_separation_factor: 1.2,
        }
    }
}

impl PropagatorConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
