//! Focus selection and orbit perturbation input.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::scene::SceneHandles;
use crate::scene::bodies::{BodyId, SolarSystem};
use crate::ui::MainCamera;

/// Body currently shown in the detail view, if any. Non-owning and
/// nullable; cleared with Escape.
#[derive(Resource, Default)]
pub struct FocusedBody(pub Option<BodyId>);

/// Focus interaction tuning.
#[derive(Resource)]
pub struct FocusConfig {
    /// The cursor must be within this world-space distance of the
    /// trackable body's rendered position. Matches the drawn disc radius.
    pub hit_radius: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self { hit_radius: 5.0 }
    }
}

/// True when `cursor` lies within `radius` of `target`.
pub fn within_focus_radius(target: DVec2, cursor: DVec2, radius: f64) -> bool {
    target.distance(cursor) < radius
}

/// Projects the cursor into world coordinates, if it is over the window.
pub fn cursor_world_position(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<DVec2> {
    let cursor = window.cursor_position()?;
    camera
        .viewport_to_world_2d(camera_transform, cursor)
        .ok()
        .map(|world| world.as_dvec2())
}

/// Sets focus to the trackable body while the select key is held with the
/// cursor inside the hit radius; Escape leaves the detail view.
pub fn focus_selection_system(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<FocusConfig>,
    system: Res<SolarSystem>,
    handles: Res<SceneHandles>,
    mut focused: ResMut<FocusedBody>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        if focused.0.take().is_some() {
            info!("focus cleared");
        }
        return;
    }
    if !keys.pressed(KeyCode::KeyS) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(cursor) = cursor_world_position(window, camera, camera_transform) else {
        return;
    };

    let target = system.rendered_position(handles.trackable);
    if within_focus_radius(target, cursor, config.hit_radius) {
        if focused.0 != Some(handles.trackable) {
            info!("focused {}", system.body(handles.trackable).name);
        }
        focused.0 = Some(handles.trackable);
    }
}

/// Arrow keys nudge the trackable body's orbit, for poking at how the
/// ellipse and the speed heuristic react. The mutation goes through the
/// scene so shared orbit records stay consistent.
pub fn nudge_orbit_system(
    keys: Res<ButtonInput<KeyCode>>,
    handles: Res<SceneHandles>,
    mut system: ResMut<SolarSystem>,
) {
    const STEP: f64 = 1.0;

    let mut d_apoapsis = 0.0;
    let mut d_periapsis = 0.0;
    if keys.pressed(KeyCode::ArrowUp) {
        d_apoapsis += STEP;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        d_apoapsis -= STEP;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        d_periapsis += STEP;
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        d_periapsis -= STEP;
    }

    if d_apoapsis != 0.0 || d_periapsis != 0.0 {
        let orbit_id = system.body(handles.trackable).orbit;
        system.nudge_orbit(orbit_id, d_apoapsis, d_periapsis);
    }
}
