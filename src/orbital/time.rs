//! Simulation clock.

use bevy::prelude::*;
use chrono::{DateTime, Duration, Utc};

/// Wall-clock simulation time, advanced once per frame.
///
/// The update logic itself runs on ticks, not on this clock; bodies stamp
/// their update times from it and the HUD displays it.
#[derive(Resource)]
pub struct SimulationClock {
    pub current_utc: DateTime<Utc>,
    pub time_scale: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            current_utc: Utc::now(),
            time_scale: 1.0,
        }
    }
}

impl SimulationClock {
    /// Advances the clock by a frame delta scaled by `time_scale`.
    /// Negative scales are treated as paused rather than running backwards.
    pub fn tick(&mut self, delta_secs: f32) {
        let scaled = (delta_secs * self.time_scale).max(0.0);
        let nanos = (f64::from(scaled) * 1.0e9) as i64;
        if nanos != 0 {
            self.current_utc = self.current_utc + Duration::nanoseconds(nanos);
        }
    }
}

/// System driving the simulation clock from the frame timer.
pub fn advance_simulation_clock(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    clock.tick(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clock_default() {
        let clock = SimulationClock::default();
        assert_eq!(clock.time_scale, 1.0);
        assert!(clock.current_utc.timestamp() > 0);
    }

    #[test]
    fn test_tick_advances_by_scaled_delta() {
        let mut clock = SimulationClock {
            current_utc: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            time_scale: 2.0,
        };
        clock.tick(0.5);
        assert_eq!(
            clock.current_utc,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap()
        );
    }

    #[test]
    fn test_negative_scale_pauses() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut clock = SimulationClock {
            current_utc: start,
            time_scale: -1.0,
        };
        clock.tick(1.0);
        assert_eq!(clock.current_utc, start);
    }
}
