//! Orbital mechanics module
//!
//! Pure orbit geometry, the position-on-orbit advance rule, and the
//! simulation clock.

use bevy::prelude::*;

pub mod geometry;
pub mod motion;
pub mod time;

pub use geometry::{Orbit, radial_distance, true_anomaly_to_position};
pub use motion::{advance_position_on_orbit, orbital_speed};
pub use time::{SimulationClock, advance_simulation_clock};

/// Plugin for the simulation clock.
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Update, advance_simulation_clock);
    }
}
