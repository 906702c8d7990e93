//! Reference data set: the Sun, the eight planets with J2000 elements
//! (JPL approximate positions, valid 1800-2050), twenty moons on circular
//! approximations, and the giant planets' rings.
//!
//! Radii and moon distances are exaggerated for readability.

use crate::assets::catalogue::{BodyRecord, Catalogue, FixedOrbitRecord, RingRecord};
use crate::orbit::elements::OrbitalElements;

const SUN_RADIUS: f64 = 1.8;
const SUN_ROTATION_DAYS: f64 = 25.0;
const MOON_VISUAL_SCALE: f64 = 0.6;

struct PlanetRow {
    name: &'static str,
    radius: f64,
    orbit_au: f64,
    eccentricity: f64,
    period_days: f64,
    /// Negative for retrograde spin.
    rotation_days: f64,
    /// a, e, i, Ω, w, M at J2000 followed by their rates per century,
    /// interleaved: [a, ȧ, e, ė, i, i̇, Ω, Ω̇, w, ẇ, M, Ṁ].
    elements: [f64; 12],
}

#[rustfmt::skip]
const PLANETS: [PlanetRow; 8] = [
    PlanetRow { name: "Mercury", radius: 0.18, orbit_au: 0.387, eccentricity: 0.206, period_days: 88.0, rotation_days: 58.65,
        elements: [0.38709927, 0.00000037, 0.20563593, 0.00001906, 7.00497902, -0.00594749, 48.33076593, -0.12534081, 29.124279, 0.010000, 168.6562, 149472.6741] },
    PlanetRow { name: "Venus", radius: 0.28, orbit_au: 0.723, eccentricity: 0.007, period_days: 224.7, rotation_days: -243.02,
        elements: [0.72333566, 0.00000390, 0.00677672, -0.00004107, 3.39467605, -0.00078890, 76.67984255, -0.27769418, 54.922624, 0.013000, 48.0052, 58517.8156] },
    PlanetRow { name: "Earth", radius: 0.3, orbit_au: 1.0, eccentricity: 0.017, period_days: 365.2, rotation_days: 0.996,
        elements: [1.00000261, 0.00000562, 0.01671123, -0.00004392, -0.00001531, -0.01294668, 0.0, 0.0, 102.93768193, 0.32327364, 357.51716, 35999.37328] },
    PlanetRow { name: "Mars", radius: 0.22, orbit_au: 1.524, eccentricity: 0.094, period_days: 687.0, rotation_days: 1.025,
        elements: [1.52371034, 0.00001847, 0.09339410, 0.00007882, 1.84969142, -0.00813131, 49.55953891, -0.29257343, 286.537, 0.007000, 19.41248, 19140.30268] },
    PlanetRow { name: "Jupiter", radius: 0.7, orbit_au: 5.204, eccentricity: 0.049, period_days: 4331.0, rotation_days: 0.4125,
        elements: [5.20288700, -0.00011607, 0.04838624, -0.00013253, 1.30439695, -0.00183714, 100.47390909, 0.20469106, 273.867, 0.017000, 20.0202, 3034.903717] },
    PlanetRow { name: "Saturn", radius: 0.6, orbit_au: 9.58, eccentricity: 0.052, period_days: 10747.0, rotation_days: 0.4458,
        elements: [9.53667594, -0.00125060, 0.05386179, -0.00050991, 2.48599187, 0.00193609, 113.66242448, -0.28867794, 339.392, 0.002000, 317.0207, 1222.114947] },
    PlanetRow { name: "Uranus", radius: 0.5, orbit_au: 19.16, eccentricity: 0.047, period_days: 30589.0, rotation_days: -0.7167,
        elements: [19.18916464, -0.00196176, 0.04725744, -0.00004397, 0.77263783, -0.00242939, 74.01692503, 0.04240589, 96.998857, 0.002000, 142.2386, 428.495125] },
    PlanetRow { name: "Neptune", radius: 0.5, orbit_au: 30.17, eccentricity: 0.010, period_days: 59800.0, rotation_days: 0.6708,
        elements: [30.06992276, 0.00026291, 0.00859048, 0.00005105, 1.77004347, 0.00035372, 131.78422574, -0.00508664, 273.187, 0.000000, 256.228, 218.465153] },
];

/// (name, parent, orbit AU, period days, radius, eccentricity, inclination °).
/// All tidally locked. A negative period is a retrograde orbit.
#[rustfmt::skip]
const MOONS: [(&str, &str, f64, f64, f64, f64, f64); 20] = [
    ("Moon",      "Earth",   0.08,   27.3217,  0.1,  0.0549, 5.145),
    ("Phobos",    "Mars",    0.00006, 0.32,    0.06, 0.0, 1.093),
    ("Deimos",    "Mars",    0.00016, 1.26,    0.05, 0.0, 0.93),
    ("Io",        "Jupiter", 0.0028,  1.76914, 0.09, 0.0, 0.04),
    ("Europa",    "Jupiter", 0.0045,  3.55118, 0.08, 0.0, 0.47),
    ("Ganymede",  "Jupiter", 0.0071,  7.15455, 0.11, 0.0, 0.18),
    ("Callisto",  "Jupiter", 0.0126, 16.68902, 0.1,  0.0, 0.19),
    ("Titan",     "Saturn",  0.0082, 15.94542, 0.11, 0.0, 0.30),
    ("Enceladus", "Saturn",  0.0016,  1.37022, 0.05, 0.0, 0.03),
    ("Rhea",      "Saturn",  0.0035,  4.51750, 0.08, 0.0, 0.35),
    ("Iapetus",   "Saturn",  0.0238, 79.33018, 0.09, 0.0, 18.5),
    ("Dione",     "Saturn",  0.0025,  2.74,    0.07, 0.0, 0.01),
    ("Tethys",    "Saturn",  0.0020,  1.89,    0.06, 0.0, 1.10),
    ("Titania",   "Uranus",  0.0029,  8.71,    0.09, 0.0, 0.08),
    ("Oberon",    "Uranus",  0.0039, 13.46,    0.09, 0.0, 0.07),
    ("Ariel",     "Uranus",  0.0013,  2.52,    0.07, 0.0, 0.04),
    ("Umbriel",   "Uranus",  0.0018,  4.14,    0.07, 0.0, 0.13),
    ("Miranda",   "Uranus",  0.0009,  1.41,    0.05, 0.0, 4.34),
    ("Triton",    "Neptune", 0.0024, -5.87685, 0.1,  0.0, 157.345),
    ("Proteus",   "Neptune", 0.0012,  1.12,    0.06, 0.0, 0.04),
];

/// (planet, inner × radius, outer × radius, tilt °).
const RINGS: [(&str, f64, f64, f64); 4] = [
    ("Jupiter", 1.2, 1.5, 3.13),
    ("Saturn", 1.3, 2.6, 26.73),
    ("Uranus", 1.2, 1.7, 97.77),
    ("Neptune", 1.3, 1.8, 28.32),
];

fn elements_from_row(e: &[f64; 12]) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: e[0],
        semi_major_axis_rate: e[1],
        eccentricity: e[2],
        eccentricity_rate: e[3],
        inclination: e[4],
        inclination_rate: e[5],
        ascending_node: e[6],
        ascending_node_rate: e[7],
        periapsis: e[8],
        periapsis_rate: e[9],
        mean_anomaly: e[10],
        mean_anomaly_rate: e[11],
    }
}

/// The built-in catalogue, parents listed before children.
pub fn builtin_catalogue() -> Catalogue {
    let mut bodies = Vec::with_capacity(1 + PLANETS.len() + MOONS.len());

    bodies.push(BodyRecord {
        name: "Sun".into(),
        radius: SUN_RADIUS,
        visual_scale: 1.0,
        parent: None,
        orbit: None,
        elements: None,
        rotation_period_days: Some(SUN_ROTATION_DAYS),
        tidally_locked: false,
    });

    for planet in &PLANETS {
        bodies.push(BodyRecord {
            name: planet.name.into(),
            radius: planet.radius,
            visual_scale: 1.0,
            parent: Some("Sun".into()),
            orbit: Some(FixedOrbitRecord {
                radius_au: planet.orbit_au,
                eccentricity: planet.eccentricity,
                inclination_deg: 0.0,
                period_days: Some(planet.period_days),
            }),
            elements: Some(elements_from_row(&planet.elements)),
            rotation_period_days: Some(planet.rotation_days),
            tidally_locked: false,
        });
    }

    for &(name, parent, orbit_au, period_days, radius, eccentricity, inclination_deg) in &MOONS {
        bodies.push(BodyRecord {
            name: name.into(),
            radius,
            visual_scale: MOON_VISUAL_SCALE,
            parent: Some(parent.into()),
            orbit: Some(FixedOrbitRecord {
                radius_au: orbit_au,
                eccentricity,
                inclination_deg,
                period_days: Some(period_days),
            }),
            elements: None,
            rotation_period_days: None,
            tidally_locked: true,
        });
    }

    let rings = RINGS
        .iter()
        .map(|&(body, inner, outer, tilt_deg)| RingRecord { body: body.into(), inner, outer, tilt_deg })
        .collect();

    Catalogue { bodies, rings }
}
