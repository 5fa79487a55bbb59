use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

mod orbital;
mod scene;
mod ui;
mod visualization;

use orbital::OrbitalPlugin;
use scene::ScenePlugin;
use ui::{MainCamera, UiPlugin};
use visualization::VisualizationPlugin;

/// The scene is laid out on a 1600x900 logical canvas; at the default
/// 1280x720 window this projection scale shows exactly that much world.
const CANVAS_SCALE: f32 = 1.25;

/// Camera over the logical canvas, cleared to black each frame.
fn setup(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        Projection::Orthographic(OrthographicProjection {
            scale: CANVAS_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        MainCamera,
    ));
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "solsys".to_string(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(OrbitalPlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(VisualizationPlugin)
        .add_plugins(UiPlugin)
        .add_systems(Startup, setup)
        .run();
}
