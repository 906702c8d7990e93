use std::collections::HashMap;

use crate::api::config::PropagatorConfig;
use crate::api::error::{CatalogueError, CatalogueResult};
use crate::api::types::BodyId;
use crate::assets::catalogue::Catalogue;
use crate::components::body::{Body, BodyDesc};
use crate::orbit::frame::min_separation;
use crate::orbit::model::OrbitModel;

/// Secular drift horizon checked at construction (centuries either side of J2000).
const ECCENTRICITY_HORIZON_CENTURIES: f64 = 100.0;

/// The body hierarchy, stored as a flat arena.
///
/// Bodies are appended in topological order: a parent must exist before any
/// child refers to it, so arena order is already a valid root-to-leaf walk.
pub struct SolarSystem {
    bodies: Vec<Body>,
    names: HashMap<String, BodyId>,
    root: Option<BodyId>,
    fixed_separation_factor: f64,
    elements_separation_factor: f64,
    /// Date used to place precessing bodies on insertion.
    epoch: f64,
}

impl SolarSystem {
    pub fn new(config: &PropagatorConfig) -> Self {
        Self {
            bodies: Vec::with_capacity(32),
            names: HashMap::new(),
            root: None,
            fixed_separation_factor: config.fixed_separation_factor,
            elements_separation_factor: config.elements_separation_factor,
            epoch: config.start_julian_date,
        }
    }

    /// Build the whole hierarchy from catalogue records, in record order.
    pub fn from_catalogue(catalogue: &Catalogue, config: &PropagatorConfig) -> CatalogueResult<Self> {
        let mut system = Self::new(config);
        for record in &catalogue.bodies {
            let parent = match &record.parent {
                Some(name) => Some(system.id_of(name).ok_or_else(|| CatalogueError::UnknownParent {
                    body: record.name.clone(),
                    parent: name.clone(),
                })?),
                None => None,
            };
            system.insert(record.to_desc(parent, config.world_units_per_au))?;
        }
        log::info!(
            "solar system built: {} bodies, root {}",
            system.len(),
            system.root().and_then(|id| system.get(id)).map_or("<none>", |b| b.name.as_str()),
        );
        Ok(system)
    }

    /// Validate and append a body. Returns its id.
    ///
    /// The body is placed immediately: roots at their anchor, orbiting bodies
    /// at their initial phase (fixed) or at the configured start date (elements).
    pub fn insert(&mut self, desc: BodyDesc) -> CatalogueResult<BodyId> {
        self.validate(&desc)?;

        let min_sep = match (desc.parent, &desc.orbit) {
            (Some(parent), Some(orbit)) => {
                let factor = match orbit {
                    OrbitModel::Fixed(_) => self.fixed_separation_factor,
                    OrbitModel::Elements(_) => self.elements_separation_factor,
                };
                min_separation(
                    self.bodies[parent.index()].scaled_radius(),
                    desc.radius * desc.visual_scale,
                    factor,
                )
            }
            _ => 0.0,
        };

        let id = BodyId(self.bodies.len() as u32);
        let mut body = Body::from_desc(id, desc, min_sep);

        if let (Some(parent), Some(orbit)) = (body.parent, body.orbit) {
            let frame = orbit.frame_at(self.epoch, min_sep);
            let raw = frame.shape().offset_at(0.0);
            if raw.length() < min_sep {
                log::debug!("{}: periapsis inside {min_sep:.4}, orbit will be clamped", body.name);
            }
            let mean_anomaly = match orbit {
                OrbitModel::Fixed(_) => body.orbit_angle.rem_euclid(std::f64::consts::TAU),
                OrbitModel::Elements(elements) => elements.at(self.epoch).mean_anomaly,
            };
            body.offset = frame.offset_at(mean_anomaly);
            body.position = self.bodies[parent.index()].position + body.offset;
        }

        if body.parent.is_none() {
            self.root = Some(id);
        }
        self.names.insert(body.name.clone(), id);
        self.bodies.push(body);
        Ok(id)
    }

    fn validate(&self, desc: &BodyDesc) -> CatalogueResult<()> {
        let name = || desc.name.clone();

        if self.names.contains_key(&desc.name) {
            return Err(CatalogueError::DuplicateName(name()));
        }
        if !desc.radius.is_finite() || desc.radius < 0.0 {
            return Err(CatalogueError::InvalidRadius { body: name(), radius: desc.radius });
        }
        if !desc.visual_scale.is_finite() || desc.visual_scale <= 0.0 {
            return Err(CatalogueError::InvalidScale { body: name(), scale: desc.visual_scale });
        }
        if let Some(period) = desc.rotation_period_days {
            check_period(&desc.name, period)?;
        }

        match desc.parent {
            Some(parent) if parent.index() >= self.bodies.len() => {
                return Err(CatalogueError::UnknownParent {
                    body: name(),
                    parent: format!("#{}", parent.0),
                });
            }
            Some(_) => {}
            None => {
                match desc.orbit {
                    Some(OrbitModel::Elements(_)) => return Err(CatalogueError::ElementsWithoutParent(name())),
                    Some(OrbitModel::Fixed(_)) => return Err(CatalogueError::OrbitWithoutParent(name())),
                    None => {}
                }
                if let Some(root) = self.root.and_then(|id| self.get(id)) {
                    return Err(CatalogueError::MultipleRoots { body: name(), root: root.name.clone() });
                }
            }
        }

        match &desc.orbit {
            Some(OrbitModel::Fixed(orbit)) => {
                check_orbit_shape(&desc.name, orbit.radius, orbit.eccentricity)?;
                if let Some(period) = orbit.period_days {
                    check_period(&desc.name, period)?;
                }
            }
            Some(OrbitModel::Elements(elements)) => {
                check_orbit_shape(&desc.name, elements.semi_major_axis, elements.eccentricity)?;
                let (low, high) = elements.eccentricity_range(ECCENTRICITY_HORIZON_CENTURIES);
                if low < 0.0 || high >= 1.0 {
                    log::warn!(
                        "{}: eccentricity drifts to [{low:.5}, {high:.5}] within {ECCENTRICITY_HORIZON_CENTURIES} centuries",
                        desc.name
                    );
                }
            }
            None => {}
        }
        Ok(())
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.names.get(name).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Body> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Bodies in arena order (parents before children).
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn children_of(&self, id: BodyId) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(move |b| b.parent == Some(id))
    }

    pub fn root(&self) -> Option<BodyId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

fn check_orbit_shape(body: &str, radius: f64, eccentricity: f64) -> CatalogueResult<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(CatalogueError::InvalidOrbitRadius { body: body.to_string(), radius });
    }
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(CatalogueError::EccentricityOutOfRange { body: body.to_string(), eccentricity });
    }
    Ok(())
}

fn check_period(body: &str, period: f64) -> CatalogueResult<()> {
    if !period.is_finite() || period == 0.0 {
        return Err(CatalogueError::InvalidPeriod { body: body.to_string(), period });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::elements::OrbitalElements;
    use crate::orbit::model::FixedOrbit;

    fn config() -> PropagatorConfig {
        PropagatorConfig::default()
    }

    fn sun(system: &mut SolarSystem) -> BodyId {
        system.insert(BodyDesc::new("Sun", 1.8).with_rotation_period(25.0)).unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut system = SolarSystem::new(&config());
        let s = sun(&mut system);
        let e = system
            .insert(BodyDesc::new("Earth", 0.3).orbiting(s, OrbitModel::Fixed(FixedOrbit::new(5.0, 0.017, 365.2))))
            .unwrap();
        assert_eq!((s, e), (BodyId(0), BodyId(1)));
        assert_eq!(system.root(), Some(s));
        assert_eq!(system.id_of("Earth"), Some(e));
        assert_eq!(system.children_of(s).count(), 1);
    }

    #[test]
    fn min_separation_uses_model_factor() {
        let mut system = SolarSystem::new(&config());
        let s = sun(&mut system);
        let fixed = system
            .insert(BodyDesc::new("A", 0.5).orbiting(s, OrbitModel::Fixed(FixedOrbit::new(10.0, 0.0, 100.0))))
            .unwrap();
        let elements = OrbitalElements {
            semi_major_axis: 10.0, semi_major_axis_rate: 0.0,
            eccentricity: 0.0, eccentricity_rate: 0.0,
            inclination: 0.0, inclination_rate: 0.0,
            ascending_node: 0.0, ascending_node_rate: 0.0,
            periapsis: 0.0, periapsis_rate: 0.0,
            mean_anomaly: 0.0, mean_anomaly_rate: 0.0,
        };
        let precessing = system
            .insert(BodyDesc::new("B", 0.5).orbiting(s, OrbitModel::Elements(elements)))
            .unwrap();
        assert!((system.get(fixed).unwrap().min_separation() - (1.8 + 0.5 * 1.6)).abs() < 1e-12);
        assert!((system.get(precessing).unwrap().min_separation() - (1.8 + 0.5 * 1.2)).abs() < 1e-12);
    }

    #[test]
    fn insert_places_fixed_body_at_phase() {
        let mut system = SolarSystem::new(&config());
        let s = sun(&mut system);
        let id = system
            .insert(BodyDesc::new("Earth", 0.3).orbiting(s, OrbitModel::Fixed(FixedOrbit::new(5.0, 0.0, 365.2))))
            .unwrap();
        let earth = system.get(id).unwrap();
        assert!((earth.position - glam::DVec3::new(5.0, 0.0, 0.0)).length() < 1e-12);
        assert_eq!(earth.offset, earth.position);
    }

    #[test]
    fn rejects_bad_records() {
        let mut system = SolarSystem::new(&config());
        let s = sun(&mut system);
        let orbit = |r: f64, e: f64, p: f64| OrbitModel::Fixed(FixedOrbit::new(r, e, p));

        let err = system.insert(BodyDesc::new("Sun", 1.0)).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateName(_)));

        let err = system.insert(BodyDesc::new("Star", 1.0)).unwrap_err();
        assert!(matches!(err, CatalogueError::MultipleRoots { .. }));

        let err = system.insert(BodyDesc::new("X", -1.0).orbiting(s, orbit(1.0, 0.0, 1.0))).unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidRadius { .. }));

        let err = system
            .insert(BodyDesc::new("X", 1.0).with_visual_scale(0.0).orbiting(s, orbit(1.0, 0.0, 1.0)))
            .unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidScale { .. }));

        let err = system.insert(BodyDesc::new("X", 1.0).orbiting(s, orbit(1.0, 1.0, 1.0))).unwrap_err();
        assert!(matches!(err, CatalogueError::EccentricityOutOfRange { .. }));

        let err = system.insert(BodyDesc::new("X", 1.0).orbiting(s, orbit(-2.0, 0.0, 1.0))).unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidOrbitRadius { .. }));

        let err = system.insert(BodyDesc::new("X", 1.0).orbiting(s, orbit(1.0, 0.0, 0.0))).unwrap_err();
        assert!(matches!(err, CatalogueError::InvalidPeriod { .. }));

        let err = system
            .insert(BodyDesc::new("X", 1.0).orbiting(BodyId(7), orbit(1.0, 0.0, 1.0)))
            .unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownParent { .. }));

        let mut desc = BodyDesc::new("X", 1.0);
        desc.orbit = Some(orbit(1.0, 0.0, 1.0));
        let err = system.insert(desc).unwrap_err();
        assert!(matches!(err, CatalogueError::OrbitWithoutParent(_)));

        // Failed inserts leave the system untouched.
        assert_eq!(system.len(), 1);
    }
}
