//! Elliptical orbit parameters and the polar conic-section form.

use bevy::math::DVec2;

/// Geometric parameters of an elliptical orbit.
///
/// Apoapsis and periapsis are distances from the orbit focus, with
/// `apoapsis >= periapsis >= 0`. Derived quantities are recomputed on
/// demand rather than stored, so they can never drift out of sync with
/// the parameters they come from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Tilt of the orbital plane. Carried for interface parity only: the
    /// projection is planar, so inclination never affects a computed
    /// position.
    pub inclination: f64,
    /// Farthest distance from the focus.
    pub apoapsis: f64,
    /// Nearest distance from the focus.
    pub periapsis: f64,
    /// Nominal orbital period.
    pub period: f64,
}

impl Orbit {
    /// Half the longest diameter of the ellipse.
    pub fn semi_major_axis(&self) -> f64 {
        (self.apoapsis + self.periapsis) / 2.0
    }

    /// Shape parameter: 0 is a circle, approaching 1 is highly elongated.
    pub fn eccentricity(&self) -> f64 {
        let a = self.semi_major_axis();
        (a - self.periapsis) / a
    }
}

/// Radial distance from the focus at true anomaly `theta`:
/// `r = a(1 - e^2) / (1 + e cos theta)`.
///
/// Degenerate inputs (`e >= 1` with `theta` near pi) divide by a vanishing
/// or negative denominator; the resulting non-finite values propagate
/// unguarded.
pub fn radial_distance(a: f64, e: f64, theta: f64) -> f64 {
    a * (1.0 - e * e) / (1.0 + e * theta.cos())
}

/// Planar offset from the orbit focus at true anomaly `theta`.
///
/// Pure and deterministic: identical inputs always yield the identical
/// offset. `inclination` is accepted but unused (see [`Orbit`]).
pub fn true_anomaly_to_position(a: f64, e: f64, _inclination: f64, theta: f64) -> DVec2 {
    let r = radial_distance(a, e, theta);
    DVec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    const EPSILON: f64 = 1e-9;

    fn reference_orbit() -> Orbit {
        Orbit {
            inclination: 0.0,
            apoapsis: 300.0,
            periapsis: 100.0,
            period: 1.0,
        }
    }

    #[test]
    fn test_derived_parameters() {
        let orbit = reference_orbit();
        assert!((orbit.semi_major_axis() - 200.0).abs() < EPSILON);
        assert!((orbit.eccentricity() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_periapsis_distance_at_zero_anomaly() {
        // r(0) = a(1 - e)
        let r = radial_distance(200.0, 0.5, 0.0);
        assert!(
            (r - 100.0).abs() < EPSILON,
            "expected periapsis distance 100, got {r}"
        );
    }

    #[test]
    fn test_apoapsis_distance_at_half_orbit() {
        // r(pi) = a(1 + e)
        let r = radial_distance(200.0, 0.5, PI);
        assert!(
            (r - 300.0).abs() < 1e-6,
            "expected apoapsis distance 300, got {r}"
        );
    }

    #[test]
    fn test_circular_orbit_has_constant_radius() {
        for i in 0..16 {
            let theta = i as f64 / 16.0 * TAU;
            let r = radial_distance(150.0, 0.0, theta);
            assert!((r - 150.0).abs() < EPSILON, "r({theta}) = {r}");
        }
    }

    #[test]
    fn test_position_at_quarter_orbit() {
        // theta = pi/2 puts the body at r = a(1 - e^2) straight along +y.
        let pos = true_anomaly_to_position(200.0, 0.5, 0.0, PI / 2.0);
        assert!(pos.x.abs() < 1e-6);
        assert!((pos.y - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_position_is_deterministic() {
        let first = true_anomaly_to_position(120.0, 0.3, 0.2, 1.234);
        let second = true_anomaly_to_position(120.0, 0.3, 0.2, 1.234);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inclination_has_no_effect() {
        let flat = true_anomaly_to_position(120.0, 0.3, 0.0, 1.234);
        let tilted = true_anomaly_to_position(120.0, 0.3, 1.5, 1.234);
        assert_eq!(flat, tilted);
    }
}
