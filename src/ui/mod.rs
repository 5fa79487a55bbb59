//! User interface module
//!
//! The heads-up debug overlay and the camera marker.

use bevy::prelude::*;

pub mod hud;

pub use hud::{HudText, spawn_hud, update_hud};

/// Marker for the scene camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin for the debug overlay.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            update_hud.after(crate::scene::focus_selection_system),
        );
    }
}
