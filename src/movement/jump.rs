//! Movement domain: jump trigger and cooldown.

use bevy::prelude::*;

use crate::movement::{BodyForces, LocomotionTuning};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpState {
    pub can_jump: bool,
    pub cooldown_remaining: f32,
    /// Set for the length of the cooldown; bypasses the slope force model.
    pub exiting_slope: bool,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            can_jump: true,
            cooldown_remaining: 0.0,
            exiting_slope: false,
        }
    }
}

impl JumpState {
    /// Jump if held, grounded and off cooldown. Returns whether a jump fired.
    pub fn try_jump(
        &mut self,
        jump_held: bool,
        grounded: bool,
        tuning: &LocomotionTuning,
        body: &mut impl BodyForces,
    ) -> bool {
        if !(jump_held && grounded && self.can_jump) {
            return false;
        }

        let velocity = body.velocity();
        body.set_velocity(Vec3::new(velocity.x, 0.0, velocity.z));
        body.add_impulse(Vec3::Y * tuning.jump_impulse);

        self.can_jump = false;
        self.exiting_slope = true;
        self.cooldown_remaining = tuning.jump_cooldown.max(0.0);
        true
    }

    pub fn tick(&mut self, dt: f32) {
        if self.can_jump {
            return;
        }

        self.cooldown_remaining = (self.cooldown_remaining - dt.max(0.0)).max(0.0);
        if self.cooldown_remaining <= 0.0 {
            self.can_jump = true;
            self.exiting_slope = false;
        }
    }
}
