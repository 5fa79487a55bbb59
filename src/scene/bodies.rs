//! Scene-owned celestial body store.
//!
//! Orbits and bodies live in arenas owned by the [`SolarSystem`] resource
//! and are referenced through index handles, so parent links and shared
//! orbit records never dangle.

use anyhow::{Result, ensure};
use bevy::math::DVec2;
use bevy::prelude::*;
use chrono::{DateTime, Utc};
use std::f64::consts::TAU;

use crate::orbital::geometry::{Orbit, true_anomaly_to_position};
use crate::orbital::motion::advance_position_on_orbit;

/// Handle to an orbit record in the scene arena. Several bodies may hold
/// the same handle; the record is read-only from a body's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitId(usize);

/// Handle to a body in the scene arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(usize);

/// A celestial body: an orbit handle, per-body orbital state, and the
/// scalars feeding the speed heuristic.
pub struct CelestialBody {
    pub name: &'static str,
    /// Non-owning handle to the parent body; `None` roots the hierarchy
    /// at the world origin.
    pub parent: Option<BodyId>,
    pub orbit: OrbitId,
    /// Fraction of the orbital period elapsed, in `[0, 1)`.
    pub position_on_orbit: f64,
    pub mass: f64,
    pub gravity: f64,
    /// Stamped on every advance; nothing in the update logic reads it.
    pub last_update_time: DateTime<Utc>,
}

/// Everything needed to add a body to the scene.
pub struct BodyParams {
    pub name: &'static str,
    pub parent: Option<BodyId>,
    pub orbit: OrbitId,
    pub position_on_orbit: f64,
    pub mass: f64,
    pub gravity: f64,
}

/// The scene: arena-owned orbits and bodies.
///
/// Bodies may only be parented to bodies added before them, so the
/// hierarchy is acyclic by construction and position resolution always
/// terminates.
#[derive(Resource, Default)]
pub struct SolarSystem {
    orbits: Vec<Orbit>,
    bodies: Vec<CelestialBody>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an orbit record, validating `apoapsis >= periapsis >= 0`.
    pub fn add_orbit(&mut self, orbit: Orbit) -> Result<OrbitId> {
        ensure!(
            orbit.periapsis >= 0.0,
            "periapsis must be non-negative, got {}",
            orbit.periapsis
        );
        ensure!(
            orbit.apoapsis >= orbit.periapsis,
            "apoapsis {} is smaller than periapsis {}",
            orbit.apoapsis,
            orbit.periapsis
        );
        self.orbits.push(orbit);
        Ok(OrbitId(self.orbits.len() - 1))
    }

    /// Adds a body. The parent, if any, must already be in the scene:
    /// append-only parenting is what keeps the hierarchy a tree.
    pub fn add_body(&mut self, params: BodyParams) -> Result<BodyId> {
        if let Some(BodyId(index)) = params.parent {
            ensure!(
                index < self.bodies.len(),
                "parent handle {index} is not in the scene"
            );
        }
        let OrbitId(orbit_index) = params.orbit;
        ensure!(
            orbit_index < self.orbits.len(),
            "orbit handle {orbit_index} is not in the scene"
        );
        ensure!(
            (0.0..1.0).contains(&params.position_on_orbit),
            "position on orbit must lie in [0, 1), got {}",
            params.position_on_orbit
        );

        self.bodies.push(CelestialBody {
            name: params.name,
            parent: params.parent,
            orbit: params.orbit,
            position_on_orbit: params.position_on_orbit,
            mass: params.mass,
            gravity: params.gravity,
            last_update_time: Utc::now(),
        });
        Ok(BodyId(self.bodies.len() - 1))
    }

    pub fn body(&self, id: BodyId) -> &CelestialBody {
        &self.bodies[id.0]
    }

    pub fn orbit(&self, id: OrbitId) -> &Orbit {
        &self.orbits[id.0]
    }

    /// Iterates bodies in arena order with their handles.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (BodyId(index), body))
    }

    /// Advances every body's position on its own orbit, once per tick.
    ///
    /// Bodies are independent within a tick: each reads only its own orbit
    /// record and writes only its own position, so arena order is as good
    /// as any other.
    pub fn advance_all(&mut self, now: DateTime<Utc>) {
        for index in 0..self.bodies.len() {
            let orbit = self.orbits[self.bodies[index].orbit.0];
            let body = &mut self.bodies[index];
            body.position_on_orbit =
                advance_position_on_orbit(body.position_on_orbit, &orbit, body.mass, body.gravity);
            body.last_update_time = now;
        }
    }

    /// Absolute position composed through the parent chain.
    ///
    /// A parentless body sits at the world origin. Every other body is
    /// offset from where its *parent* currently sits on the *parent's*
    /// orbit, plus the parent's own resolved position. The coupling to the
    /// parent's state rather than the body's own is deliberate; it is how
    /// this system has always composed positions.
    pub fn resolve_position(&self, id: BodyId) -> DVec2 {
        let body = &self.bodies[id.0];
        match body.parent {
            None => DVec2::ZERO,
            Some(parent_id) => {
                let parent = &self.bodies[parent_id.0];
                let orbit = &self.orbits[parent.orbit.0];
                let theta = parent.position_on_orbit * TAU;
                let offset = true_anomaly_to_position(
                    orbit.semi_major_axis(),
                    orbit.eccentricity(),
                    orbit.inclination,
                    theta,
                );
                offset + self.resolve_position(parent_id)
            }
        }
    }

    /// Where the body is drawn: its resolved position plus its own offset
    /// on its own orbit. This is what distinguishes bodies that share an
    /// orbit record but sit at different fractions of it.
    pub fn rendered_position(&self, id: BodyId) -> DVec2 {
        let body = &self.bodies[id.0];
        let orbit = &self.orbits[body.orbit.0];
        let theta = body.position_on_orbit * TAU;
        let offset = true_anomaly_to_position(
            orbit.semi_major_axis(),
            orbit.eccentricity(),
            orbit.inclination,
            theta,
        );
        self.resolve_position(id) + offset
    }

    /// Adjusts an orbit's apoapsis and periapsis, clamping so that
    /// `apoapsis >= periapsis >= 0` keeps holding. The scene is the only
    /// write path to orbit records, which several bodies may share.
    pub fn nudge_orbit(&mut self, id: OrbitId, d_apoapsis: f64, d_periapsis: f64) {
        let orbit = &mut self.orbits[id.0];
        orbit.apoapsis = (orbit.apoapsis + d_apoapsis).max(0.0);
        orbit.periapsis = (orbit.periapsis + d_periapsis).clamp(0.0, orbit.apoapsis);
    }
}
