//! Focused-body detail view.

use bevy::prelude::*;
use chrono::SecondsFormat;

use crate::scene::bodies::SolarSystem;
use crate::scene::focus::FocusedBody;

/// Close-up disc radius in the detail view.
pub const DETAIL_RADIUS: f32 = 60.0;

/// Marker for entities that only exist in the detail view.
#[derive(Component)]
pub struct DetailView;

/// Marker for the detail view's data readout.
#[derive(Component)]
pub struct DetailText;

/// Spawns the detail view entities, hidden until a body takes focus.
pub fn spawn_detail_view(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(DETAIL_RADIUS))),
        MeshMaterial2d(materials.add(Color::srgb(1.0, 0.0, 0.0))),
        Transform::from_xyz(0.0, 0.0, 1.0),
        Visibility::Hidden,
        DetailView,
        Name::new("detail disc"),
    ));
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.85, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(48.0),
            left: Val::Px(16.0),
            ..default()
        },
        Visibility::Hidden,
        DetailView,
        DetailText,
    ));
}

/// Shows the detail view for the focused body and keeps its readout
/// current; hides everything again once focus clears.
pub fn update_detail_view(
    focused: Res<FocusedBody>,
    system: Res<SolarSystem>,
    mut views: Query<&mut Visibility, With<DetailView>>,
    mut readouts: Query<&mut Text, With<DetailText>>,
) {
    match focused.0 {
        Some(id) => {
            if focused.is_changed() {
                for mut visibility in views.iter_mut() {
                    *visibility = Visibility::Inherited;
                }
            }
            let body = system.body(id);
            let orbit = system.orbit(body.orbit);
            for mut text in readouts.iter_mut() {
                text.0 = format!(
                    "{}\n\
                     position on orbit: {:.4}\n\
                     apoapsis: {:.1}   periapsis: {:.1}   period: {:.1}\n\
                     semi-major axis: {:.1}   eccentricity: {:.3}\n\
                     mass: {:.2}   gravity: {:.2}\n\
                     last update: {}\n\
                     [esc] back to the scene",
                    body.name,
                    body.position_on_orbit,
                    orbit.apoapsis,
                    orbit.periapsis,
                    orbit.period,
                    orbit.semi_major_axis(),
                    orbit.eccentricity(),
                    body.mass,
                    body.gravity,
                    body.last_update_time.to_rfc3339_opts(SecondsFormat::Secs, true),
                );
            }
        }
        None => {
            if focused.is_changed() {
                for mut visibility in views.iter_mut() {
                    *visibility = Visibility::Hidden;
                }
            }
        }
    }
}
