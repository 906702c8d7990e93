use std::f64::consts::TAU;

use glam::DVec3;

use crate::api::config::PropagatorConfig;
use crate::api::types::BodyId;
use crate::core::system::SolarSystem;

/// A sampled orbit ellipse in the parent's frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    pub body: BodyId,
    pub parent: BodyId,
    /// `segments + 1` points. The last one closes the loop onto the first.
    pub points: Vec<DVec3>,
    /// Julian date the shape was evaluated at.
    pub sampled_at: f64,
    /// Shape drifts with time and must be resampled now and then.
    pub precessing: bool,
}

impl OrbitPath {
    /// Whether the shape is at least `interval_days` out of date.
    /// Fixed orbits never are.
    pub fn needs_resample(&self, julian_date: f64, interval_days: f64) -> bool {
        self.precessing && (julian_date - self.sampled_at).abs() >= interval_days
    }

    /// Points moved onto the parent's current world position.
    pub fn translated(&self, parent_position: DVec3) -> impl Iterator<Item = DVec3> + '_ {
        self.points.iter().map(move |p| *p + parent_position)
    }
}

/// Sweeps mean anomaly uniformly over one revolution and records the clamped
/// offsets, using the same frame math as live propagation.
#[derive(Debug, Clone, Copy)]
pub struct OrbitPathSampler {
    segments: usize,
}

impl OrbitPathSampler {
    /// `segments` is raised to at least 3.
    pub fn new(segments: usize) -> Self {
        Self { segments: segments.max(3) }
    }

    pub fn from_config(config: &PropagatorConfig) -> Self {
        Self::new(config.path_segments)
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Sample one body's orbit as it stands at `julian_date`.
    /// `None` for the root and for bodies without an orbit model.
    pub fn sample(&self, system: &SolarSystem, id: BodyId, julian_date: f64) -> Option<OrbitPath> {
        let body = system.get(id)?;
        let parent = body.parent?;
        let model = body.orbit?;

        let frame = model.frame_at(julian_date, body.min_separation());
        let n = self.segments as f64;
        let points = (0..=self.segments)
            .map(|s| frame.offset_at(TAU * s as f64 / n))
            .collect();

        Some(OrbitPath {
            body: id,
            parent,
            points,
            sampled_at: julian_date,
            precessing: model.is_precessing(),
        })
    }

    /// One path per orbiting body, in arena order.
    pub fn sample_all(&self, system: &SolarSystem, julian_date: f64) -> Vec<OrbitPath> {
        let paths: Vec<OrbitPath> = system
            .iter()
            .filter_map(|body| self.sample(system, body.id, julian_date))
            .collect();
        log::info!("sampled {} orbit paths ({} segments)", paths.len(), self.segments);
        paths
    }

    /// Resample precessing paths that are `interval_days` stale.
    /// Returns how many were replaced.
    pub fn refresh(
        &self,
        system: &SolarSystem,
        paths: &mut [OrbitPath],
        julian_date: f64,
        interval_days: f64,
    ) -> usize {
        let mut refreshed = 0;
        for path in paths.iter_mut().filter(|p| p.needs_resample(julian_date, interval_days)) {
            if let Some(fresh) = self.sample(system, path.body, julian_date) {
                *path = fresh;
                refreshed += 1;
            }
        }
        if refreshed > 0 {
            log::debug!("resampled {refreshed} precessing orbit paths");
        }
        refreshed
    }
}

impl Default for OrbitPathSampler {
    fn default() -> Self {
        Self::from_config(&PropagatorConfig::default())
    }
}
