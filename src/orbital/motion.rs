//! Per-tick advance rule for a body's fractional position on its orbit.

use std::f64::consts::TAU;

use crate::orbital::geometry::{Orbit, radial_distance};

/// Heuristic orbital speed at radial distance `r` on an orbit with
/// semi-major axis `a`.
///
/// Not real vis-viva: `mass` and `gravity` are unitless tuning scalars and
/// the `/60` folds the fixed tick rate into the formula. It exists only so
/// that the squared speed below grows near periapsis and shrinks near
/// apoapsis, imitating Kepler's second law without solving the anomaly
/// equation.
pub fn orbital_speed(mass: f64, gravity: f64, r: f64, a: f64) -> f64 {
    (mass * gravity.powi(2) / 60.0 * (2.0 / r - 1.0 / a)).sqrt()
}

/// Advances a fractional position on `orbit` by one tick.
///
/// The increment is the squared heuristic speed scaled down by 100. The
/// result stays in `[0, 1)`: reaching or passing 1 wraps to exactly 0.
pub fn advance_position_on_orbit(
    position_on_orbit: f64,
    orbit: &Orbit,
    mass: f64,
    gravity: f64,
) -> f64 {
    let a = orbit.semi_major_axis();
    let e = orbit.eccentricity();
    let theta = position_on_orbit * TAU;
    let r = radial_distance(a, e, theta);
    let v = orbital_speed(mass, gravity, r, a);

    let next = position_on_orbit + v * v / 100.0;
    if next >= 1.0 { 0.0 } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_orbit() -> Orbit {
        Orbit {
            inclination: 0.0,
            apoapsis: 300.0,
            periapsis: 100.0,
            period: 1.0,
        }
    }

    #[test]
    fn test_reference_advance_delta() {
        // Reference scene sun: a = 200, e = 0.5, theta = pi/2, r = 150.
        // delta = 5.9 * 8^2 / 60 * (2/150 - 1/200) / 100.
        let next = advance_position_on_orbit(0.25, &sun_orbit(), 5.9, 8.0);
        let delta = next - 0.25;
        assert!(
            (delta - 5.244444444444444e-4).abs() < 1e-9,
            "expected the pinned reference delta, got {delta}"
        );
    }

    #[test]
    fn test_position_stays_in_unit_interval() {
        let mut position = 0.0;
        for _ in 0..10_000 {
            position = advance_position_on_orbit(position, &sun_orbit(), 5.9, 8.0);
            assert!((0.0..1.0).contains(&position), "escaped to {position}");
        }
    }

    #[test]
    fn test_monotonic_until_wrap() {
        let mut position = 0.0;
        let mut wrapped = false;
        for _ in 0..10_000 {
            let next = advance_position_on_orbit(position, &sun_orbit(), 5.9, 8.0);
            if next < position {
                assert_eq!(next, 0.0, "wrap must reset to exactly zero");
                wrapped = true;
                break;
            }
            assert!(next > position, "advance must make progress");
            position = next;
        }
        assert!(wrapped, "orbit never wrapped");
    }

    #[test]
    fn test_wrap_resets_to_zero() {
        let next = advance_position_on_orbit(0.9999, &sun_orbit(), 5.9, 8.0);
        assert_eq!(next, 0.0);
    }

    #[test]
    fn test_sweeps_faster_near_periapsis() {
        let orbit = sun_orbit();
        let at_periapsis = advance_position_on_orbit(0.0, &orbit, 5.9, 8.0);
        let at_apoapsis = advance_position_on_orbit(0.5, &orbit, 5.9, 8.0) - 0.5;
        assert!(at_periapsis > at_apoapsis);
    }
}
