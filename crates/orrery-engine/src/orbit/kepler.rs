//! Kepler's equation solver: pure math, no engine state.
//!
//! Uses f64 throughout. The iteration budget is fixed: there is no
//! convergence test and no dynamic loop, so the cost per call is constant.
//! Accuracy is bounded rather than guaranteed: for e <= 0.9 the residual
//! `|E - e·sin(E) - M|` stays below 1e-6 after the budget, but as e
//! approaches 1 the seed `E₀ = M` is too far from the root and the result
//! degrades. Eccentricities that high are rejected when the catalogue is
//! built, not here.

/// Newton-Raphson steps per solve.
pub const KEPLER_ITERATIONS: usize = 6;

/// Solve Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly.
///
/// `mean_anomaly` is in radians and may be any real value (it does not need
/// to be wrapped into `[0, 2π)`). Returns the eccentric anomaly in radians,
/// on the same branch as the input.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ea = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        let delta = ea - eccentricity * ea.sin() - mean_anomaly;
        let derivative = 1.0 - eccentricity * ea.cos();
        ea -= delta / derivative;
    }
    ea
}

/// Residual of Kepler's equation for a candidate eccentric anomaly.
pub fn kepler_residual(eccentric_anomaly: f64, mean_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly
}
