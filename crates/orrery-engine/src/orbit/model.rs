use crate::orbit::elements::OrbitalElements;
use crate::orbit::frame::OrbitalFrame;

/// Simple orbit: constant shape, phase integrated incrementally from time deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOrbit {
    /// Semi-major axis in world units.
    pub radius: f64,
    pub eccentricity: f64,
    /// Tilt of the orbital plane about the parent's x axis (degrees).
    pub inclination_deg: f64,
    /// Orbital period in days. Negative runs the orbit retrograde.
    /// `None` leaves the body parked wherever it was last placed.
    pub period_days: Option<f64>,
}

impl FixedOrbit {
    pub fn new(radius: f64, eccentricity: f64, period_days: f64) -> Self {
        Self {
            radius,
            eccentricity,
            inclination_deg: 0.0,
            period_days: Some(period_days),
        }
    }

    pub fn with_inclination(mut self, inclination_deg: f64) -> Self {
        self.inclination_deg = inclination_deg;
        self
    }
}

/// How a body is placed relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitModel {
    /// Fixed circular/eccentric orbit driven by the body's accumulated phase.
    Fixed(FixedOrbit),
    /// Osculating elements evaluated at absolute simulated time.
    Elements(OrbitalElements),
}

impl OrbitModel {
    /// Whether the orbit's shape drifts with time (paths need resampling).
    pub fn is_precessing(&self) -> bool {
        matches!(self, OrbitModel::Elements(_))
    }

    /// Frame for this orbit at `julian_date`. The fixed model ignores the date.
    pub fn frame_at(&self, julian_date: f64, min_separation: f64) -> OrbitalFrame {
        match self {
            OrbitModel::Fixed(orbit) => OrbitalFrame::fixed(orbit, min_separation),
            OrbitModel::Elements(elements) => {
                OrbitalFrame::from_snapshot(&elements.at(julian_date), min_separation)
            }
        }
    }
}
