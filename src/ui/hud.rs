//! Debug text overlay.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use chrono::SecondsFormat;

use crate::orbital::SimulationClock;
use crate::scene::SceneHandles;
use crate::scene::bodies::SolarSystem;
use crate::scene::focus::{FocusedBody, cursor_world_position};
use crate::ui::MainCamera;

/// Marker for the HUD text node.
#[derive(Component)]
pub struct HudText;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        HudText,
    ));
}

/// Refreshes the overlay once per frame, after the tick.
pub fn update_hud(
    clock: Res<SimulationClock>,
    system: Res<SolarSystem>,
    handles: Res<SceneHandles>,
    focused: Res<FocusedBody>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut texts: Query<&mut Text, With<HudText>>,
) {
    let trackable = system.body(handles.trackable);
    let orbit = system.orbit(trackable.orbit);

    let focus_line = match focused.0 {
        Some(id) => format!("focus: {}", system.body(id).name),
        None => String::from("focus: none"),
    };

    let cursor_line = windows
        .single()
        .ok()
        .zip(cameras.single().ok())
        .and_then(|(window, (camera, camera_transform))| {
            cursor_world_position(window, camera, camera_transform)
        })
        .map(|cursor| {
            let distance = system.rendered_position(handles.trackable).distance(cursor);
            format!("cursor -> {}: {:.1}", trackable.name, distance)
        })
        .unwrap_or_else(|| String::from("cursor off screen"));

    for mut text in texts.iter_mut() {
        text.0 = format!(
            "solsys  {}\n\
             {} orbit  apo {:.1}  peri {:.1}  e {:.3}\n\
             {}   {}\n\
             [s] focus under cursor   [esc] back   [arrows] nudge orbit",
            clock.current_utc.to_rfc3339_opts(SecondsFormat::Secs, true),
            trackable.name,
            orbit.apoapsis,
            orbit.periapsis,
            orbit.eccentricity(),
            focus_line,
            cursor_line,
        );
    }
}
