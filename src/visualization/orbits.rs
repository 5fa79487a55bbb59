//! Orbit path gizmo rendering.

use bevy::prelude::*;
use std::f64::consts::TAU;

use crate::orbital::geometry::true_anomaly_to_position;
use crate::scene::bodies::SolarSystem;
use crate::scene::focus::FocusedBody;

/// Orbit path rendering configuration.
#[derive(Resource)]
pub struct OrbitGizmoConfig {
    pub enabled: bool,
    /// Line segments per sampled ellipse.
    pub segments: u32,
    pub color: Color,
}

impl Default for OrbitGizmoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            segments: 256,
            color: Color::WHITE,
        }
    }
}

/// Draws every body's orbit as a closed polyline sampled over the true
/// anomaly, centered on the body's resolved position. Skipped entirely in
/// the detail view.
pub fn draw_orbit_gizmos(
    mut gizmos: Gizmos,
    config: Res<OrbitGizmoConfig>,
    focused: Res<FocusedBody>,
    system: Res<SolarSystem>,
) {
    if !config.enabled || focused.0.is_some() {
        return;
    }

    for (id, body) in system.bodies() {
        let orbit = system.orbit(body.orbit);
        let a = orbit.semi_major_axis();
        let e = orbit.eccentricity();
        let center = system.resolve_position(id).as_vec2();

        for segment in 0..config.segments {
            let theta_0 = f64::from(segment) / f64::from(config.segments) * TAU;
            let theta_1 = f64::from(segment + 1) / f64::from(config.segments) * TAU;
            let p0 = true_anomaly_to_position(a, e, orbit.inclination, theta_0).as_vec2();
            let p1 = true_anomaly_to_position(a, e, orbit.inclination, theta_1).as_vec2();
            gizmos.line_2d(center + p0, center + p1, config.color);
        }
    }
}
