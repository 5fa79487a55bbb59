//! Visualization module
//!
//! Rendering systems for the body discs, orbit paths, focal marker, and
//! the focused-body detail view. Everything here reads the scene strictly
//! after the tick has finished.

use bevy::prelude::*;

pub mod bodies;
pub mod detail;
pub mod orbits;

pub use bodies::{BODY_RADIUS, BodyRef, SceneView};
pub use orbits::OrbitGizmoConfig;

use crate::scene::{advance_bodies_system, focus_selection_system};
use bodies::{apply_focus_visibility, spawn_body_entities, sync_body_transforms};
use detail::{spawn_detail_view, update_detail_view};
use orbits::draw_orbit_gizmos;

/// Plugin for scene rendering and the detail view.
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitGizmoConfig>()
            // PostStartup so the scene resources from Startup are visible.
            .add_systems(PostStartup, (spawn_body_entities, spawn_detail_view))
            .add_systems(
                Update,
                (
                    sync_body_transforms.after(advance_bodies_system),
                    draw_orbit_gizmos.after(advance_bodies_system),
                    apply_focus_visibility.after(focus_selection_system),
                    update_detail_view.after(focus_selection_system),
                ),
            );
    }
}
