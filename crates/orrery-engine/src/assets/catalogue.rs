use serde::{Deserialize, Serialize};

use crate::api::error::CatalogueResult;
use crate::api::types::BodyId;
use crate::components::body::BodyDesc;
use crate::orbit::elements::OrbitalElements;
use crate::orbit::model::{FixedOrbit, OrbitModel};

/// Static body catalogue, loaded once at startup.
///
/// Example JSON:
/// ```json
/// {
///   "bodies": [
///     { "name": "Sun", "radius": 1.8, "rotation_period_days": 25.0 },
///     { "name": "Earth", "radius": 0.3, "parent": "Sun",
///       "orbit": { "radius_au": 1.0, "eccentricity": 0.017, "period_days": 365.2 } }
///   ],
///   "rings": [ { "body": "Earth", "inner": 1.2, "outer": 1.5, "tilt_deg": 10.0 } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    /// Parents must come before their children.
    pub bodies: Vec<BodyRecord>,
    #[serde(default)]
    pub rings: Vec<RingRecord>,
}

/// One body as it appears in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    pub radius: f64,
    #[serde(default = "default_visual_scale")]
    pub visual_scale: f64,
    #[serde(default)]
    pub parent: Option<String>,
    /// Circular-model parameters. Ignored when `elements` is present.
    #[serde(default)]
    pub orbit: Option<FixedOrbitRecord>,
    /// Osculating elements, `a` in AU.
    #[serde(default)]
    pub elements: Option<OrbitalElements>,
    #[serde(default)]
    pub rotation_period_days: Option<f64>,
    #[serde(default)]
    pub tidally_locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedOrbitRecord {
    pub radius_au: f64,
    #[serde(default)]
    pub eccentricity: f64,
    #[serde(default)]
    pub inclination_deg: f64,
    #[serde(default)]
    pub period_days: Option<f64>,
}

/// A flat ring around a body, sized in multiples of its scaled radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingRecord {
    pub body: String,
    pub inner: f64,
    pub outer: f64,
    #[serde(default)]
    pub tilt_deg: f64,
}

fn default_visual_scale() -> f64 {
    1.0
}

impl Catalogue {
    /// Parse a catalogue from a JSON string.
    pub fn from_json(json: &str) -> CatalogueResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl BodyRecord {
    /// Orbit model for this record with AU lengths converted to world units.
    pub fn orbit_model(&self, world_units_per_au: f64) -> Option<OrbitModel> {
        if let Some(elements) = self.elements {
            return Some(OrbitModel::Elements(elements.scaled(world_units_per_au)));
        }
        self.orbit.map(|orbit| {
            OrbitModel::Fixed(FixedOrbit {
                radius: orbit.radius_au * world_units_per_au,
                eccentricity: orbit.eccentricity,
                inclination_deg: orbit.inclination_deg,
                period_days: orbit.period_days,
            })
        })
    }

    /// Body description with the parent name already resolved to an id.
    pub fn to_desc(&self, parent: Option<BodyId>, world_units_per_au: f64) -> BodyDesc {
        let mut desc = BodyDesc::new(self.name.clone(), self.radius).with_visual_scale(self.visual_scale);
        desc.parent = parent;
        desc.orbit = self.orbit_model(world_units_per_au);
        desc.rotation_period_days = self.rotation_period_days;
        desc.tidally_locked = self.tidally_locked;
        desc
    }
}
