//! Movement domain: the physics host seam used by the locomotion core.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Operations the locomotion core performs on a simulated body.
pub trait BodyForces {
    fn velocity(&self) -> Vec3;

    fn set_velocity(&mut self, velocity: Vec3);

    /// Continuous force, applied over the current fixed step.
    fn add_force(&mut self, force: Vec3);

    /// Instantaneous change in momentum.
    fn add_impulse(&mut self, impulse: Vec3);

    fn set_gravity_enabled(&mut self, enabled: bool);
}

/// Avian-backed body. Forces and impulses are folded straight into the
/// linear velocity, so they take effect in the same physics step.
pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity: &'a mut GravityScale,
    pub mass: f32,
    pub dt: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        velocity: &'a mut LinearVelocity,
        gravity: &'a mut GravityScale,
        mass: &Mass,
        dt: f32,
    ) -> Self {
        Self {
            velocity,
            gravity,
            mass: mass.0,
            dt,
        }
    }

    fn inverse_mass(&self) -> f32 {
        if self.mass > 0.0 { 1.0 / self.mass } else { 0.0 }
    }
}

impl BodyForces for AvianBody<'_> {
    fn velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        let dv = force * self.inverse_mass() * self.dt;
        self.velocity.0 += dv;
    }

    fn add_impulse(&mut self, impulse: Vec3) {
        let dv = impulse * self.inverse_mass();
        self.velocity.0 += dv;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity.0 = if enabled { 1.0 } else { 0.0 };
    }
}
