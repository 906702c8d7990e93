// orbit/frame.rs
//
// Places a body on its orbit, in the parent's local frame.
//
// Two shapes with two different axis conventions:
//   Fixed     perifocal x/z plane, tilted once about x by the inclination.
//   Oriented  perifocal x/y plane rotated by (w, i, Ω) into the ecliptic,
//             then remapped so ecliptic z becomes world y.
// Each convention is paired with its own path sampling, so they are kept apart.

use glam::{DMat3, DVec3};

use crate::orbit::elements::ElementSnapshot;
use crate::orbit::kepler::solve_kepler;
use crate::orbit::model::FixedOrbit;

/// Orbit geometry at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameShape {
    Fixed {
        semi_major_axis: f64,
        eccentricity: f64,
        /// Radians.
        inclination: f64,
    },
    Oriented {
        semi_major_axis: f64,
        eccentricity: f64,
        /// Perifocal → ecliptic rotation, Rz(Ω)·Rx(i)·Rz(w).
        rotation: DMat3,
    },
}

/// Perifocal coordinates (along periapsis, along the minor axis) for eccentric anomaly `ea`.
pub fn perifocal(semi_major_axis: f64, eccentricity: f64, ea: f64) -> (f64, f64) {
    let along = semi_major_axis * (ea.cos() - eccentricity);
    let across = semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt() * ea.sin();
    (along, across)
}

/// Minimum distance a child may sit from its parent: `parent + child * k`,
/// both radii already multiplied by their visual scale.
pub fn min_separation(parent_radius: f64, child_radius: f64, factor: f64) -> f64 {
    parent_radius + child_radius * factor
}

/// Push `offset` out to at least `min_separation`, keeping its direction.
/// A zero offset has no direction and is pushed out along +X.
pub fn clamp_separation(offset: DVec3, min_separation: f64) -> DVec3 {
    let distance = offset.length();
    if distance >= min_separation {
        offset
    } else if distance > 0.0 {
        offset * (min_separation / distance)
    } else {
        DVec3::X * min_separation
    }
}

impl FrameShape {
    /// Unclamped offset from the parent at `mean_anomaly` (radians).
    pub fn offset_at(&self, mean_anomaly: f64) -> DVec3 {
        match *self {
            FrameShape::Fixed { semi_major_axis, eccentricity, inclination } => {
                let ea = solve_kepler(mean_anomaly, eccentricity);
                let (x, z) = perifocal(semi_major_axis, eccentricity, ea);
                if inclination == 0.0 {
                    DVec3::new(x, 0.0, z)
                } else {
                    let (sin_i, cos_i) = inclination.sin_cos();
                    DVec3::new(x, z * sin_i, z * cos_i)
                }
            }
            FrameShape::Oriented { semi_major_axis, eccentricity, rotation } => {
                let ea = solve_kepler(mean_anomaly, eccentricity);
                let (x, y) = perifocal(semi_major_axis, eccentricity, ea);
                let ecliptic = rotation * DVec3::new(x, y, 0.0);
                DVec3::new(ecliptic.x, ecliptic.z, ecliptic.y)
            }
        }
    }
}

/// An orbit's shape plus the separation guard for the body riding on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalFrame {
    shape: FrameShape,
    min_separation: f64,
}

impl OrbitalFrame {
    pub fn fixed(orbit: &FixedOrbit, min_separation: f64) -> Self {
        Self {
            shape: FrameShape::Fixed {
                semi_major_axis: orbit.radius,
                eccentricity: orbit.eccentricity,
                inclination: orbit.inclination_deg.to_radians(),
            },
            min_separation,
        }
    }

    pub fn from_snapshot(snapshot: &ElementSnapshot, min_separation: f64) -> Self {
        let rotation = DMat3::from_rotation_z(snapshot.ascending_node)
            * DMat3::from_rotation_x(snapshot.inclination)
            * DMat3::from_rotation_z(snapshot.periapsis);
        Self {
            shape: FrameShape::Oriented {
                semi_major_axis: snapshot.semi_major_axis,
                eccentricity: snapshot.eccentricity,
                rotation,
            },
            min_separation,
        }
    }

    /// Offset from the parent at `mean_anomaly`, after the separation clamp.
    pub fn offset_at(&self, mean_anomaly: f64) -> DVec3 {
        clamp_separation(self.shape.offset_at(mean_anomaly), self.min_separation)
    }

    pub fn shape(&self) -> &FrameShape {
        &self.shape
    }

    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }
}
