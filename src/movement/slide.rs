//! Movement domain: timed slide.

use bevy::prelude::*;

use crate::movement::{BodyForces, GroundState, LocomotionInput, LocomotionTuning};

/// Vertical speed at or below which a slide on a slope is treated as downhill.
pub const DOWNHILL_VELOCITY: f32 = -0.1;

/// What the slide key did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideChange {
    Started,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideState {
    pub active: bool,
    pub timer: f32,
}

impl SlideState {
    /// Begin a slide. Requires some directional input; returns whether it started.
    pub fn start(
        &mut self,
        has_direction: bool,
        tuning: &LocomotionTuning,
        scale: &mut Vec3,
        body: &mut impl BodyForces,
    ) -> bool {
        if !has_direction {
            return false;
        }

        self.active = true;
        self.timer = tuning.max_slide_time;
        scale.y = tuning.slide_y_scale;
        body.add_impulse(Vec3::NEG_Y * tuning.slide_impulse);
        true
    }

    /// Key handling: only a fresh press starts a slide, and releasing the key
    /// ends an active one.
    pub fn handle_input(
        &mut self,
        input: &LocomotionInput,
        tuning: &LocomotionTuning,
        original_y_scale: f32,
        scale: &mut Vec3,
        body: &mut impl BodyForces,
    ) -> Option<SlideChange> {
        let mut change = None;

        if input.slide_just_pressed && self.start(input.has_direction(), tuning, scale, body) {
            change = Some(SlideChange::Started);
        }

        if input.slide_just_released && self.active {
            self.stop(original_y_scale, scale);
            change = Some(SlideChange::Released);
        }

        change
    }

    pub fn stop(&mut self, original_y_scale: f32, scale: &mut Vec3) {
        self.active = false;
        self.timer = 0.0;
        scale.y = original_y_scale;
    }

    /// One fixed step of slide force. Downhill sliding is free; everything else
    /// spends timer. Returns true once the timer has run out.
    pub fn step(
        &mut self,
        input_direction: Vec3,
        ground: &GroundState,
        tuning: &LocomotionTuning,
        dt: f32,
        body: &mut impl BodyForces,
    ) -> bool {
        if !self.active {
            return false;
        }

        let downhill = ground.on_slope && body.velocity().y <= DOWNHILL_VELOCITY;
        let direction = if downhill {
            ground.slope_move_direction(input_direction)
        } else {
            self.timer -= dt.max(0.0);
            input_direction.normalize_or_zero()
        };

        if direction != Vec3::ZERO {
            body.add_force(direction * tuning.slide_force);
        }

        self.timer <= 0.0
    }
}
