//! One propagation pass: advance the clock once, then place and orient every
//! body root-to-leaf.
//!
//! Arena order is topological, so by the time a body is evaluated its parent
//! already holds this tick's position. The pass has no error path.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3};

use crate::components::body::{facing, Body};
use crate::core::clock::SimulationClock;
use crate::core::system::SolarSystem;
use crate::orbit::frame::OrbitalFrame;
use crate::orbit::model::OrbitModel;

/// What a tick did to simulated time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Clock value every body was evaluated at.
    pub julian_date: f64,
    /// Simulated days applied (zero while paused).
    pub delta_days: f64,
}

/// Advance `clock` by a real frame delta and re-evaluate the hierarchy.
pub fn tick(clock: &mut SimulationClock, system: &mut SolarSystem, real_delta_seconds: f64) -> TickReport {
    let delta_days = clock.advance(real_delta_seconds);
    let julian_date = clock.julian_date();
    evaluate(system, julian_date, delta_days);
    TickReport { julian_date, delta_days }
}

/// Evaluate every body at `julian_date`, integrating fixed-orbit and spin
/// phases by `delta_days`. Deterministic in its inputs.
pub fn evaluate(system: &mut SolarSystem, julian_date: f64, delta_days: f64) {
    let bodies = system.bodies_mut();
    for index in 0..bodies.len() {
        let (ancestors, rest) = bodies.split_at_mut(index);
        let Some((body, _)) = rest.split_first_mut() else {
            break;
        };
        let parent = body.parent.and_then(|id| ancestors.get(id.index()));
        place(body, parent, julian_date, delta_days);
        orient(body, parent, delta_days);
    }
}

fn place(body: &mut Body, parent: Option<&Body>, julian_date: f64, delta_days: f64) {
    let Some(parent) = parent else {
        // Root stays on its anchor.
        body.offset = DVec3::ZERO;
        return;
    };
    let Some(model) = body.orbit else {
        return;
    };

    let offset = match model {
        OrbitModel::Elements(elements) => {
            let snapshot = elements.at(julian_date);
            OrbitalFrame::from_snapshot(&snapshot, body.min_separation).offset_at(snapshot.mean_anomaly)
        }
        OrbitModel::Fixed(orbit) => {
            let Some(period) = orbit.period_days else {
                return;
            };
            body.orbit_angle += TAU * (delta_days / period);
            OrbitalFrame::fixed(&orbit, body.min_separation).offset_at(body.orbit_angle.rem_euclid(TAU))
        }
    };

    body.offset = offset;
    body.position = parent.position + offset;
}

fn orient(body: &mut Body, parent: Option<&Body>, delta_days: f64) {
    if let (true, Some(parent)) = (body.tidally_locked, parent) {
        if let Some(rotation) = facing(body.position, parent.position) {
            body.orientation = rotation;
        }
        return;
    }
    if let Some(period) = body.rotation_period_days {
        body.spin_angle += TAU * (delta_days / period);
        body.orientation = DQuat::from_rotation_y(body.spin_angle.rem_euclid(TAU));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::PropagatorConfig;
    use crate::api::types::BodyId;
    use crate::components::body::BodyDesc;
    use crate::orbit::elements::OrbitalElements;
    use crate::orbit::kepler::solve_kepler;
    use crate::orbit::model::FixedOrbit;

    struct Trio {
        system: SolarSystem,
        sun: BodyId,
        planet: BodyId,
        moon: BodyId,
    }

    fn trio() -> Trio {
        let mut system = SolarSystem::new(&PropagatorConfig::default());
        let sun = system.insert(BodyDesc::new("Sun", 1.8).with_rotation_period(25.0)).unwrap();
        let planet = system
            .insert(
                BodyDesc::new("Earth", 0.3)
                    .orbiting(sun, OrbitModel::Fixed(FixedOrbit::new(5.0, 0.017, 365.2)))
                    .with_rotation_period(0.996),
            )
            .unwrap();
        let moon = system
            .insert(
                BodyDesc::new("Moon", 0.1)
                    .with_visual_scale(0.6)
                    .orbiting(planet, OrbitModel::Fixed(FixedOrbit::new(0.4, 0.0549, 27.3217).with_inclination(5.145)))
                    .tidally_locked(),
            )
            .unwrap();
        Trio { system, sun, planet, moon }
    }

    fn mars_elements() -> OrbitalElements {
        OrbitalElements {
            semi_major_axis: 1.52371034, semi_major_axis_rate: 0.00001847,
            eccentricity: 0.09339410, eccentricity_rate: 0.00007882,
            inclination: 1.84969142, inclination_rate: -0.00813131,
            ascending_node: 49.55953891, ascending_node_rate: -0.29257343,
            periapsis: 286.537, periapsis_rate: 0.007,
            mean_anomaly: 19.41248, mean_anomaly_rate: 19140.30268,
        }
        .scaled(5.0)
    }

    #[test]
    fn earth_quarter_orbit() {
        let Trio { mut system, planet, .. } = trio();
        evaluate(&mut system, 2_451_545.0, 365.2 / 4.0);

        let (a, e) = (5.0, 0.017);
        let ea = solve_kepler(std::f64::consts::FRAC_PI_2, e);
        let expected = DVec3::new(a * (ea.cos() - e), 0.0, a * (1.0 - e * e).sqrt() * ea.sin());
        let earth = system.get(planet).unwrap();
        assert!((earth.offset - expected).length() < 1e-9, "offset {:?}", earth.offset);
        assert!((earth.position - DVec3::new(-0.16998362901036554, 0.0, 4.998555278280015)).length() < 1e-9);
    }

    #[test]
    fn moon_decomposes_into_planet_plus_offset() {
        let Trio { mut system, sun, planet, moon } = trio();
        for step in 0..50 {
            evaluate(&mut system, 2_451_545.0 + step as f64, 1.7);
            let p = system.get(planet).unwrap();
            let m = system.get(moon).unwrap();
            assert_eq!(m.position, p.position + m.offset, "step {step}");
            assert_eq!(p.position, system.get(sun).unwrap().position + p.offset);
        }
    }

    #[test]
    fn replay_is_bit_identical() {
        let deltas = [0.2, 1.5, -0.7, 12.0, 0.016, -3.3, 40.0];
        let run = || {
            let Trio { mut system, .. } = trio();
            let mut clock = SimulationClock::new(2_451_545.0, 1.0);
            let mut trace = Vec::new();
            for dt in deltas {
                tick(&mut clock, &mut system, dt);
                trace.extend(system.iter().map(|b| (b.position, b.orientation)));
            }
            trace
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn forward_then_back_restores_phase() {
        let Trio { mut system, planet, .. } = trio();
        let before = system.get(planet).unwrap().orbit_angle;
        let before_pos = system.get(planet).unwrap().position;
        evaluate(&mut system, 2_451_545.0, 37.25);
        evaluate(&mut system, 2_451_545.0, -37.25);
        let earth = system.get(planet).unwrap();
        assert!((earth.orbit_angle - before).abs() < 1e-12, "angle {}", earth.orbit_angle);
        assert!((earth.position - before_pos).length() < 1e-10);
    }

    #[test]
    fn nonzero_start_phase_replays_and_returns() {
        let build = || {
            let mut system = SolarSystem::new(&PropagatorConfig::default());
            let sun = system.insert(BodyDesc::new("Sun", 1.8)).unwrap();
            let orbit = FixedOrbit::new(5.0, 0.017, 365.2);
            let id = system
                .insert(BodyDesc::new("Earth", 0.3).orbiting(sun, OrbitModel::Fixed(orbit)).with_phase(1.0))
                .unwrap();
            (system, id, orbit)
        };

        let (mut system, id, orbit) = build();
        let body = system.get(id).unwrap();
        assert_eq!(body.orbit_angle, 1.0);
        let start = body.position;
        assert_eq!(start, OrbitalFrame::fixed(&orbit, body.min_separation()).offset_at(1.0));

        let mut clock = SimulationClock::new(2_451_545.0, 7.3);
        let mut trace = Vec::new();
        for _ in 0..10 {
            tick(&mut clock, &mut system, 1.0);
            trace.push(system.get(id).unwrap().position);
        }
        clock.set_rate(-7.3);
        for _ in 0..10 {
            tick(&mut clock, &mut system, 1.0);
        }
        let earth = system.get(id).unwrap();
        assert!((earth.orbit_angle - 1.0).abs() < 1e-12, "angle {}", earth.orbit_angle);
        assert!((earth.position - start).length() < 1e-10);
        assert_eq!(earth.orientation, DQuat::IDENTITY);

        // Same start phase, same deltas: same positions.
        let (mut replay, id, _) = build();
        let mut clock = SimulationClock::new(2_451_545.0, 7.3);
        let again: Vec<_> = (0..10)
            .map(|_| {
                tick(&mut clock, &mut replay, 1.0);
                replay.get(id).unwrap().position
            })
            .collect();
        assert_eq!(trace, again);
    }

    #[test]
    fn paused_tick_changes_nothing() {
        let Trio { mut system, .. } = trio();
        let mut clock = SimulationClock::new(2_451_545.0, 12.0);
        tick(&mut clock, &mut system, 0.5);
        let snapshot: Vec<_> = system.iter().map(|b| (b.position, b.orientation)).collect();
        let time = clock.julian_date();

        clock.toggle_pause();
        let report = tick(&mut clock, &mut system, 3.0);
        assert_eq!(report.delta_days, 0.0);
        assert_eq!(clock.julian_date(), time);
        let after: Vec<_> = system.iter().map(|b| (b.position, b.orientation)).collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn tidally_locked_moon_faces_parent() {
        let Trio { mut system, planet, moon, .. } = trio();
        for step in 0..40 {
            evaluate(&mut system, 2_451_545.0, 0.9 * step as f64 - 10.0);
            let p = system.get(planet).unwrap();
            let m = system.get(moon).unwrap();
            let to_parent = (p.position - m.position).normalize();
            let dot = m.marker_direction().dot(to_parent);
            assert!((dot - 1.0).abs() < 1e-9, "step {step}: dot = {dot}");
        }
    }

    #[test]
    fn spin_follows_period_sign() {
        let mut system = SolarSystem::new(&PropagatorConfig::default());
        let sun = system.insert(BodyDesc::new("Sun", 1.8)).unwrap();
        let orbit = OrbitModel::Fixed(FixedOrbit::new(10.0, 0.0, 100.0));
        let pro = system.insert(BodyDesc::new("Pro", 0.2).orbiting(sun, orbit).with_rotation_period(4.0)).unwrap();
        let retro = system.insert(BodyDesc::new("Retro", 0.2).orbiting(sun, orbit).with_rotation_period(-4.0)).unwrap();

        evaluate(&mut system, 2_451_545.0, 1.0);
        let pro = system.get(pro).unwrap();
        let retro = system.get(retro).unwrap();
        assert!((pro.spin_angle - TAU / 4.0).abs() < 1e-15);
        assert!((retro.spin_angle + TAU / 4.0).abs() < 1e-15);
        // A quarter turn about +Y takes +Z to +X (prograde) or -X (retrograde).
        assert!((pro.marker_direction() - DVec3::X).length() < 1e-12);
        assert!((retro.marker_direction() + DVec3::X).length() < 1e-12);
    }

    #[test]
    fn root_and_static_bodies_stay_put() {
        let mut system = SolarSystem::new(&PropagatorConfig::default());
        let anchor = DVec3::new(1.0, 2.0, 3.0);
        let sun = system.insert(BodyDesc::new("Sun", 1.0).with_anchor(anchor)).unwrap();
        let mut parked = FixedOrbit::new(6.0, 0.0, 1.0);
        parked.period_days = None;
        let rock = system.insert(BodyDesc::new("Rock", 0.1).orbiting(sun, OrbitModel::Fixed(parked))).unwrap();
        let start = system.get(rock).unwrap().position;

        evaluate(&mut system, 2_451_600.0, 25.0);
        assert_eq!(system.get(sun).unwrap().position, anchor);
        assert_eq!(system.get(sun).unwrap().offset, DVec3::ZERO);
        assert_eq!(system.get(rock).unwrap().position, start);
        // Neither spinning nor locked: orientation is left alone.
        assert_eq!(system.get(sun).unwrap().orientation, DQuat::IDENTITY);
        assert_eq!(system.get(rock).unwrap().orientation, DQuat::IDENTITY);
        assert!((start - (anchor + DVec3::new(6.0, 0.0, 0.0))).length() < 1e-12);
    }

    #[test]
    fn elements_use_absolute_time() {
        let mut system = SolarSystem::new(&PropagatorConfig::default());
        let sun = system.insert(BodyDesc::new("Sun", 1.8)).unwrap();
        let mars = system
            .insert(BodyDesc::new("Mars", 0.22).orbiting(sun, OrbitModel::Elements(mars_elements())))
            .unwrap();

        // Same date reached through different deltas gives the same place.
        evaluate(&mut system, 2_460_000.0, 5.0);
        let a = system.get(mars).unwrap().position;
        evaluate(&mut system, 2_460_000.0, -300.0);
        let b = system.get(mars).unwrap().position;
        assert_eq!(a, b);

        let el = mars_elements();
        let snap = el.at(2_460_000.0);
        let expected = OrbitalFrame::from_snapshot(&snap, system.get(mars).unwrap().min_separation())
            .offset_at(snap.mean_anomaly);
        assert_eq!(a, expected);
    }

    #[test]
    fn every_offset_respects_min_separation() {
        let mut system = SolarSystem::new(&PropagatorConfig::default());
        let sun = system.insert(BodyDesc::new("Sun", 1.8)).unwrap();
        let mars = system
            .insert(BodyDesc::new("Mars", 0.22).orbiting(sun, OrbitModel::Elements(mars_elements())))
            .unwrap();
        let phobos = system
            .insert(
                BodyDesc::new("Phobos", 0.06)
                    .with_visual_scale(0.6)
                    .orbiting(mars, OrbitModel::Fixed(FixedOrbit::new(0.0003, 0.0, 0.32).with_inclination(1.093)))
                    .tidally_locked(),
            )
            .unwrap();
        for step in 0..100 {
            evaluate(&mut system, 2_451_545.0 + 3.1 * step as f64, 0.07);
            for id in [mars, phobos] {
                let body = system.get(id).unwrap();
                assert!(body.offset.length() >= body.min_separation() - 1e-12, "{} step {step}", body.name);
            }
        }
    }
}
