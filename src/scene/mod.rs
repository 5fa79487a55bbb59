//! Scene coordination module
//!
//! Builds the fixed sun/earth/moon hierarchy, drives the per-tick body
//! updates, and owns focus selection.

use anyhow::Result;
use bevy::prelude::*;

pub mod bodies;
pub mod focus;

pub use bodies::{BodyId, BodyParams, CelestialBody, OrbitId, SolarSystem};
pub use focus::{FocusConfig, FocusedBody, focus_selection_system, nudge_orbit_system};

use crate::orbital::SimulationClock;
use crate::orbital::geometry::Orbit;

/// Handles into the scene for the fixed hierarchy.
#[derive(Resource, Clone, Copy)]
pub struct SceneHandles {
    #[allow(dead_code)]
    pub sun: BodyId,
    #[allow(dead_code)]
    pub earth: BodyId,
    #[allow(dead_code)]
    pub moon: BodyId,
    /// Body the focus hit test tracks.
    pub trackable: BodyId,
}

/// Builds the reference scene: a sun circling the world origin, an earth
/// parented to it, and a moon that shares the earth's orbit record at its
/// own fraction of the period.
pub fn build_reference_scene() -> Result<(SolarSystem, SceneHandles)> {
    let mut system = SolarSystem::new();

    let sun_orbit = system.add_orbit(Orbit {
        inclination: 0.0,
        apoapsis: 300.0,
        periapsis: 100.0,
        period: 1.0,
    })?;
    let earth_orbit = system.add_orbit(Orbit {
        inclination: 0.0,
        apoapsis: 30.0,
        periapsis: 20.0,
        period: 1.0,
    })?;

    let sun = system.add_body(BodyParams {
        name: "sun",
        parent: None,
        orbit: sun_orbit,
        position_on_orbit: 0.25,
        mass: 5.9,
        gravity: 8.0,
    })?;
    let earth = system.add_body(BodyParams {
        name: "earth",
        parent: Some(sun),
        orbit: earth_orbit,
        position_on_orbit: 0.25,
        mass: 0.9,
        gravity: 8.0,
    })?;
    let moon = system.add_body(BodyParams {
        name: "moon",
        parent: Some(sun),
        orbit: earth_orbit,
        position_on_orbit: 0.75,
        mass: 0.9,
        gravity: 3.0,
    })?;

    let handles = SceneHandles {
        sun,
        earth,
        moon,
        trackable: earth,
    };
    Ok((system, handles))
}

/// Startup system inserting the scene resources. Construction failures are
/// unrecoverable: log the chain and terminate.
fn setup_scene(mut commands: Commands) {
    match build_reference_scene() {
        Ok((system, handles)) => {
            commands.insert_resource(system);
            commands.insert_resource(handles);
        }
        Err(err) => {
            error!("failed to build the scene: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Advances every body once per frame. All scene readers are ordered after
/// this system, so a render pass only ever sees fully updated positions.
pub fn advance_bodies_system(clock: Res<SimulationClock>, mut system: ResMut<SolarSystem>) {
    system.advance_all(clock.current_utc);
}

/// Plugin wiring scene construction, the tick, and focus input.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusedBody>()
            .init_resource::<FocusConfig>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (
                    advance_bodies_system,
                    nudge_orbit_system.after(advance_bodies_system),
                    focus_selection_system.after(nudge_orbit_system),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::motion::advance_position_on_orbit;
    use chrono::Utc;

    #[test]
    fn test_reference_scene_layout() {
        let (system, handles) = build_reference_scene().unwrap();

        assert!(system.body(handles.sun).parent.is_none());
        assert_eq!(system.body(handles.earth).parent, Some(handles.sun));
        assert_eq!(system.body(handles.moon).parent, Some(handles.sun));
        // The moon rides the earth's orbit record, at its own fraction.
        assert_eq!(
            system.body(handles.moon).orbit,
            system.body(handles.earth).orbit
        );
        assert_eq!(handles.trackable, handles.earth);
    }

    #[test]
    fn test_reference_scene_composition() {
        let (system, handles) = build_reference_scene().unwrap();

        // Sun orbit: a = 200, e = 0.5; the sun sits a quarter of the way
        // around, theta = pi/2, so the earth resolves to (0, 150) plus the
        // sun's own resolved position (the origin).
        let pos = system.resolve_position(handles.earth);
        assert!(pos.x.abs() < 1e-6, "x = {}", pos.x);
        assert!((pos.y - 150.0).abs() < 1e-6, "y = {}", pos.y);
    }

    #[test]
    fn test_sun_advance_regression() {
        let (mut system, handles) = build_reference_scene().unwrap();

        system.advance_all(Utc::now());
        let position = system.body(handles.sun).position_on_orbit;
        let delta = position - 0.25;
        assert!(
            (delta - 5.244444444444444e-4).abs() < 1e-9,
            "sun advanced by {delta}"
        );
    }

    #[test]
    fn test_shared_orbit_advances_independently() {
        let (mut system, handles) = build_reference_scene().unwrap();

        let orbit = *system.orbit(system.body(handles.earth).orbit);
        let expected_earth = advance_position_on_orbit(0.25, &orbit, 0.9, 8.0);
        let expected_moon = advance_position_on_orbit(0.75, &orbit, 0.9, 3.0);

        system.advance_all(Utc::now());

        // Each body advanced from its own fraction; sharing the orbit
        // record mutated neither the record nor the other body.
        let earth = system.body(handles.earth).position_on_orbit;
        let moon = system.body(handles.moon).position_on_orbit;
        assert_eq!(earth, expected_earth);
        assert_eq!(moon, expected_moon);
        assert_eq!(*system.orbit(system.body(handles.earth).orbit), orbit);
    }
}
