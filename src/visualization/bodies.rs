//! Body disc entities and transform sync.

use bevy::prelude::*;

use crate::scene::bodies::{BodyId, SolarSystem};
use crate::scene::focus::FocusedBody;

/// Drawn radius of every body disc; also the focus hit radius.
pub const BODY_RADIUS: f32 = 5.0;

/// Radius of the focal marker at the world origin.
pub const FOCAL_MARKER_RADIUS: f32 = 15.0;

/// Ties a drawable entity to a body in the scene.
#[derive(Component, Clone, Copy)]
pub struct BodyRef(pub BodyId);

/// Marker for entities that belong to the full-scene view and hide while
/// a body is focused.
#[derive(Component)]
pub struct SceneView;

/// Spawns one filled disc per body, plus the focal marker at the origin.
pub fn spawn_body_entities(
    mut commands: Commands,
    system: Res<SolarSystem>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let disc = meshes.add(Circle::new(BODY_RADIUS));
    let body_color = materials.add(Color::srgb(1.0, 0.0, 0.0));

    for (id, body) in system.bodies() {
        commands.spawn((
            Mesh2d(disc.clone()),
            MeshMaterial2d(body_color.clone()),
            Transform::from_xyz(0.0, 0.0, 1.0),
            BodyRef(id),
            SceneView,
            Name::new(body.name),
        ));
    }

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(FOCAL_MARKER_RADIUS))),
        MeshMaterial2d(materials.add(Color::srgb(0.0, 1.0, 0.0))),
        Transform::from_xyz(0.0, 0.0, 0.0),
        SceneView,
        Name::new("focal marker"),
    ));
}

/// Copies rendered positions out of the scene, after the tick.
pub fn sync_body_transforms(
    system: Res<SolarSystem>,
    mut discs: Query<(&BodyRef, &mut Transform)>,
) {
    for (body_ref, mut transform) in discs.iter_mut() {
        let position = system.rendered_position(body_ref.0).as_vec2();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

/// Hides the full-scene entities while a body is focused; the detail view
/// owns the screen then.
pub fn apply_focus_visibility(
    focused: Res<FocusedBody>,
    mut views: Query<&mut Visibility, With<SceneView>>,
) {
    if !focused.is_changed() {
        return;
    }
    let visibility = if focused.0.is_some() {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut entry in views.iter_mut() {
        *entry = visibility;
    }
}
