//! Movement domain: locomotion mode selection and desired-speed resolution.

use bevy::prelude::*;

use crate::movement::{
    BodyForces, LocomotionController, LocomotionInput, LocomotionMode, LocomotionTuning,
};

/// Vertical speed below which a slide on a slope counts as going downhill.
pub const DESCENDING_VELOCITY: f32 = 0.1;

/// Inputs to mode selection for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeContext {
    pub grounded: bool,
    pub on_slope: bool,
    pub vertical_velocity: f32,
    pub sliding: bool,
    pub crouch_held: bool,
    pub sprint_held: bool,
}

impl ModeContext {
    pub fn new(
        controller: &LocomotionController,
        input: &LocomotionInput,
        vertical_velocity: f32,
    ) -> Self {
        Self {
            grounded: controller.ground.grounded,
            on_slope: controller.ground.on_slope,
            vertical_velocity,
            sliding: controller.slide.active,
            crouch_held: input.crouch_held,
            sprint_held: input.sprint_held,
        }
    }
}

pub struct ModeRule {
    pub mode: LocomotionMode,
    pub applies: fn(&ModeContext) -> bool,
    /// `None` keeps the previous desired speed.
    pub desired: fn(&ModeContext, &LocomotionTuning) -> Option<f32>,
}

/// Evaluated top to bottom; the first rule that applies wins.
pub const MODE_RULES: [ModeRule; 5] = [
    ModeRule {
        mode: LocomotionMode::Sliding,
        applies: is_sliding,
        desired: slide_speed,
    },
    ModeRule {
        mode: LocomotionMode::Crouching,
        applies: is_crouching,
        desired: crouch_speed,
    },
    ModeRule {
        mode: LocomotionMode::Sprinting,
        applies: is_sprinting,
        desired: sprint_speed,
    },
    ModeRule {
        mode: LocomotionMode::Walking,
        applies: is_grounded,
        desired: walk_speed,
    },
    ModeRule {
        mode: LocomotionMode::Airborne,
        applies: always,
        desired: keep_speed,
    },
];

fn is_sliding(ctx: &ModeContext) -> bool {
    ctx.sliding
}

fn is_crouching(ctx: &ModeContext) -> bool {
    ctx.crouch_held
}

fn is_sprinting(ctx: &ModeContext) -> bool {
    ctx.grounded && ctx.sprint_held
}

fn is_grounded(ctx: &ModeContext) -> bool {
    ctx.grounded
}

fn always(_: &ModeContext) -> bool {
    true
}

fn slide_speed(ctx: &ModeContext, tuning: &LocomotionTuning) -> Option<f32> {
    if ctx.on_slope && ctx.vertical_velocity < DESCENDING_VELOCITY {
        Some(tuning.slope_slide_speed)
    } else {
        Some(tuning.sprint_speed)
    }
}

fn crouch_speed(_: &ModeContext, tuning: &LocomotionTuning) -> Option<f32> {
    Some(tuning.crouch_speed)
}

fn sprint_speed(_: &ModeContext, tuning: &LocomotionTuning) -> Option<f32> {
    Some(tuning.sprint_speed)
}

fn walk_speed(_: &ModeContext, tuning: &LocomotionTuning) -> Option<f32> {
    Some(tuning.walk_speed)
}

// Airborne keeps the last ground-derived target.
fn keep_speed(_: &ModeContext, _: &LocomotionTuning) -> Option<f32> {
    None
}

pub fn select_mode(
    ctx: &ModeContext,
    tuning: &LocomotionTuning,
) -> (LocomotionMode, Option<f32>) {
    MODE_RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.mode, (rule.desired)(ctx, tuning)))
        .unwrap_or((LocomotionMode::Airborne, None))
}

/// One frame of the state machine: pick the mode, resolve the desired speed,
/// then either start a smoothing run or snap the effective speed.
///
/// Returns the previous mode.
pub fn update_locomotion(
    controller: &mut LocomotionController,
    ctx: &ModeContext,
    tuning: &LocomotionTuning,
) -> LocomotionMode {
    let previous = controller.mode;
    let (mode, desired) = select_mode(ctx, tuning);
    controller.mode = mode;
    if let Some(desired) = desired {
        controller.speed.desired = desired;
    }

    let speed = &mut controller.speed;
    if (speed.desired - speed.last_desired).abs() > tuning.transition_threshold
        && speed.effective != 0.0
    {
        controller.smoother.start(speed.effective, speed.desired);
        debug!(
            "Smoothing speed {:.2} -> {:.2} ({:?})",
            speed.effective, speed.desired, mode
        );
    } else if !controller.smoother.is_running_toward(speed.desired) {
        controller.smoother.cancel();
        speed.effective = speed.desired;
    }

    speed.last_desired = speed.desired;
    previous
}

/// Shrink on crouch key-down, restore the spawn scale on key-up. An active
/// slide owns the height scale, so only the impulse applies while sliding.
pub fn apply_crouch_input(
    controller: &LocomotionController,
    input: &LocomotionInput,
    tuning: &LocomotionTuning,
    scale: &mut Vec3,
    body: &mut impl BodyForces,
) {
    let sliding = controller.slide.active;

    if input.crouch_just_pressed {
        body.add_impulse(Vec3::NEG_Y * tuning.crouch_impulse);
        if !sliding {
            scale.y = tuning.crouch_y_scale;
            debug!("Crouch: y_scale={}", scale.y);
        }
    }

    if input.crouch_just_released && !sliding {
        scale.y = controller.original_y_scale;
        debug!("Stand: y_scale={}", scale.y);
    }
}
