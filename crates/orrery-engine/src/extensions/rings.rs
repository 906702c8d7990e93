use glam::{DQuat, DVec3};

use crate::api::error::{CatalogueError, CatalogueResult};
use crate::api::types::BodyId;
use crate::assets::catalogue::RingRecord;
use crate::core::system::SolarSystem;

/// A ring resolved against the system: radii already in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub body: BodyId,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub tilt_deg: f64,
}

/// Where to draw a ring this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPlacement {
    pub body: BodyId,
    pub center: DVec3,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Rotation of the ring plane (XZ) about the x axis.
    pub tilt: DQuat,
}

#[derive(Debug, Clone, Default)]
pub struct RingSet {
    rings: Vec<Ring>,
}

impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve ring records by body name. Multipliers apply to the body's scaled radius.
    pub fn from_catalogue(records: &[RingRecord], system: &SolarSystem) -> CatalogueResult<Self> {
        let rings = records
            .iter()
            .map(|record| -> CatalogueResult<Ring> {
                let body = system
                    .get_by_name(&record.body)
                    .ok_or_else(|| CatalogueError::UnknownRingBody(record.body.clone()))?;
                let r = body.scaled_radius();
                Ok(Ring {
                    body: body.id,
                    inner_radius: r * record.inner,
                    outer_radius: r * record.outer,
                    tilt_deg: record.tilt_deg,
                })
            })
            .collect::<CatalogueResult<Vec<_>>>()?;
        Ok(Self { rings })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter()
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Ring placements from the system's current output state.
    pub fn placements<'a>(&'a self, system: &'a SolarSystem) -> impl Iterator<Item = RingPlacement> + 'a {
        self.rings.iter().filter_map(move |ring| {
            let body = system.get(ring.body)?;
            Some(RingPlacement {
                body: ring.body,
                center: body.position,
                inner_radius: ring.inner_radius,
                outer_radius: ring.outer_radius,
                tilt: DQuat::from_rotation_x(-ring.tilt_deg.to_radians()),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::PropagatorConfig;
    use crate::assets::builtin::builtin_catalogue;
    use crate::core::propagate::evaluate;

    #[test]
    fn builtin_rings_follow_planets() {
        let catalogue = builtin_catalogue();
        let mut system = SolarSystem::from_catalogue(&catalogue, &PropagatorConfig::default()).unwrap();
        let rings = RingSet::from_catalogue(&catalogue.rings, &system).unwrap();
        assert_eq!(rings.len(), 4);

        evaluate(&mut system, 2_461_100.0, 3.0);
        let saturn = system.get_by_name("Saturn").unwrap();
        let placement = rings.placements(&system).find(|p| p.body == saturn.id).unwrap();
        assert_eq!(placement.center, saturn.position);
        assert!((placement.inner_radius - 0.6 * 1.3).abs() < 1e-12);
        assert!((placement.outer_radius - 0.6 * 2.6).abs() < 1e-12);

        // Tilt raises the ring's +Z edge.
        let edge = placement.tilt * DVec3::Z;
        assert!((edge.y - 26.73f64.to_radians().sin()).abs() < 1e-12, "edge {edge:?}");
    }

    #[test]
    fn unknown_body_is_rejected() {
        let system = SolarSystem::new(&PropagatorConfig::default());
        assert!(RingSet::new().is_empty());
        let records = [RingRecord { body: "Vulcan".into(), inner: 1.0, outer: 2.0, tilt_deg: 0.0 }];
        let err = RingSet::from_catalogue(&records, &system).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownRingBody(name) if name == "Vulcan"));
    }
}
