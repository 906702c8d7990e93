//! Osculating orbital elements with linear secular rates.
//!
//! Angles are stored in degrees and rates per Julian century, the way
//! published element tables list them. Only the snapshot evaluated for a
//! given date is converted to radians.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::calendar::{DAYS_PER_CENTURY, J2000_JD};

/// Keplerian elements at the J2000 epoch with secular rates per century.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis at epoch (AU in catalogues, world units once scaled).
    #[serde(rename = "a")]
    pub semi_major_axis: f64,
    #[serde(rename = "a_dot", default)]
    pub semi_major_axis_rate: f64,
    #[serde(rename = "e")]
    pub eccentricity: f64,
    #[serde(rename = "e_dot", default)]
    pub eccentricity_rate: f64,
    /// Inclination (degrees).
    #[serde(rename = "i")]
    pub inclination: f64,
    #[serde(rename = "i_dot", default)]
    pub inclination_rate: f64,
    /// Longitude of the ascending node, Ω (degrees).
    #[serde(rename = "node")]
    pub ascending_node: f64,
    #[serde(rename = "node_dot", default)]
    pub ascending_node_rate: f64,
    /// Argument of periapsis, w (degrees).
    #[serde(rename = "w")]
    pub periapsis: f64,
    #[serde(rename = "w_dot", default)]
    pub periapsis_rate: f64,
    /// Mean anomaly at epoch (degrees).
    #[serde(rename = "m")]
    pub mean_anomaly: f64,
    #[serde(rename = "m_dot", default)]
    pub mean_anomaly_rate: f64,
}

/// Elements evaluated at one instant. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSnapshot {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ascending_node: f64,
    pub periapsis: f64,
    /// Wrapped into `[0, 2π)`.
    pub mean_anomaly: f64,
}

/// Julian centuries elapsed since J2000.
pub fn centuries_since_j2000(julian_date: f64) -> f64 {
    (julian_date - J2000_JD) / DAYS_PER_CENTURY
}

impl OrbitalElements {
    /// Copy with the semi-major axis (and its rate) multiplied by `factor`.
    /// Used to move catalogue AU values into world units.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.semi_major_axis *= factor;
        self.semi_major_axis_rate *= factor;
        self
    }

    /// Linearly extrapolate every element to `julian_date`.
    pub fn at(&self, julian_date: f64) -> ElementSnapshot {
        let t = centuries_since_j2000(julian_date);
        ElementSnapshot {
            semi_major_axis: self.semi_major_axis + self.semi_major_axis_rate * t,
            eccentricity: self.eccentricity + self.eccentricity_rate * t,
            inclination: (self.inclination + self.inclination_rate * t).to_radians(),
            ascending_node: (self.ascending_node + self.ascending_node_rate * t).to_radians(),
            periapsis: (self.periapsis + self.periapsis_rate * t).to_radians(),
            mean_anomaly: (self.mean_anomaly + self.mean_anomaly_rate * t).to_radians().rem_euclid(TAU),
        }
    }

    /// Eccentricity reached after `centuries` of secular drift either way.
    pub fn eccentricity_range(&self, centuries: f64) -> (f64, f64) {
        let a = self.eccentricity - self.eccentricity_rate * centuries;
        let b = self.eccentricity + self.eccentricity_rate * centuries;
        (a.min(b), a.max(b))
    }
}
