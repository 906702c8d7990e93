use glam::{DMat3, DQuat, DVec3};

use crate::api::types::BodyId;
use crate::orbit::model::OrbitModel;

/// Construction-time description of a body. Consumed by `SolarSystem::insert`.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDesc {
    pub name: String,
    /// Physical radius in world units.
    pub radius: f64,
    /// Multiplier applied to `radius` for display and separation.
    pub visual_scale: f64,
    pub parent: Option<BodyId>,
    pub orbit: Option<OrbitModel>,
    /// Sidereal spin period in days. Negative spins retrograde.
    pub rotation_period_days: Option<f64>,
    pub tidally_locked: bool,
    /// Starting world position. Roots stay here, and so does a parented body
    /// without an orbit model. Ignored for bodies that have an orbit.
    pub anchor: DVec3,
    /// Starting `orbit_angle` for the fixed model (radians).
    pub initial_phase: f64,
}

impl BodyDesc {
    /// A parentless body sitting at the origin.
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        Self {
            name: name.into(),
            radius,
            visual_scale: 1.0,
            parent: None,
            orbit: None,
            rotation_period_days: None,
            tidally_locked: false,
            anchor: DVec3::ZERO,
            initial_phase: 0.0,
        }
    }

    pub fn orbiting(mut self, parent: BodyId, orbit: OrbitModel) -> Self {
        self.parent = Some(parent);
        self.orbit = Some(orbit);
        self
    }

    pub fn with_visual_scale(mut self, visual_scale: f64) -> Self {
        self.visual_scale = visual_scale;
        self
    }

    pub fn with_rotation_period(mut self, days: f64) -> Self {
        self.rotation_period_days = Some(days);
        self
    }

    pub fn tidally_locked(mut self) -> Self {
        self.tidally_locked = true;
        self
    }

    pub fn with_anchor(mut self, anchor: DVec3) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_phase(mut self, orbit_angle: f64) -> Self {
        self.initial_phase = orbit_angle;
        self
    }
}

/// A node in the orbit hierarchy.
///
/// Parameters are fixed after construction. The phase angles integrate
/// time deltas tick by tick, and `position`, `orientation` and `offset`
/// are output state rewritten by every propagation pass.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub radius: f64,
    pub visual_scale: f64,
    /// Lookup relation only. A parent always has a smaller id than its children.
    pub parent: Option<BodyId>,
    pub orbit: Option<OrbitModel>,
    pub rotation_period_days: Option<f64>,
    pub tidally_locked: bool,

    /// Accumulated mean anomaly of a fixed orbit (radians, unwrapped).
    pub orbit_angle: f64,
    /// Accumulated spin about local +Y (radians, unwrapped).
    pub spin_angle: f64,

    pub position: DVec3,
    pub orientation: DQuat,
    /// Offset from the parent at the last pass. Zero for the root.
    pub offset: DVec3,

    pub(crate) min_separation: f64,
}

impl Body {
    pub(crate) fn from_desc(id: BodyId, desc: BodyDesc, min_separation: f64) -> Self {
        Self {
            id,
            name: desc.name,
            radius: desc.radius,
            visual_scale: desc.visual_scale,
            parent: desc.parent,
            orbit: desc.orbit,
            rotation_period_days: desc.rotation_period_days,
            tidally_locked: desc.tidally_locked,
            orbit_angle: desc.initial_phase,
            spin_angle: 0.0,
            position: desc.anchor,
            orientation: DQuat::IDENTITY,
            offset: DVec3::ZERO,
            min_separation,
        }
    }

    /// Radius as drawn: `radius * visual_scale`.
    pub fn scaled_radius(&self) -> f64 {
        self.radius * self.visual_scale
    }

    /// Closest this body may sit to its parent.
    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// World direction of the local +Z marker axis. Faces the parent when tidally locked.
    pub fn marker_direction(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }
}

/// Rotation taking local +Z onto the direction from `from` to `target`,
/// keeping local +Y as close to world +Y as possible.
/// `None` when the two points coincide.
pub fn facing(from: DVec3, target: DVec3) -> Option<DQuat> {
    let forward = (target - from).try_normalize()?;
    let right = match DVec3::Y.cross(forward).try_normalize() {
        Some(right) => right,
        // Looking straight up or down.
        None => (DVec3::X - forward * forward.x).normalize(),
    };
    let up = forward.cross(right);
    Some(DQuat::from_mat3(&DMat3::from_cols(right, up, forward)).normalize())
}
