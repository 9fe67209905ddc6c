//! Movement domain: locomotion systems for timers, mode selection and physics.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AvianBody, Facing, LocomotionController, LocomotionInput, LocomotionTuning, ModeContext,
    Player, SlideChange, apply_crouch_input, integrate_step, update_locomotion,
};

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<&mut LocomotionController, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut controller in &mut query {
        let was_ready = controller.jump.can_jump;
        controller.jump.tick(dt);
        if controller.jump.can_jump && !was_ready {
            debug!("Jump ready");
        }
    }
}

pub(crate) fn apply_jump(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            &mut LocomotionController,
            &mut LinearVelocity,
            &mut GravityScale,
            &Mass,
        ),
        With<Player>,
    >,
) {
    for (mut controller, mut velocity, mut gravity, mass) in &mut query {
        let grounded = controller.ground.grounded;
        let mut body = AvianBody::new(&mut velocity, &mut gravity, mass, time.delta_secs());

        if controller
            .jump
            .try_jump(input.jump_held, grounded, &tuning, &mut body)
        {
            debug!(
                "Jump: on_slope={}, cooldown={}",
                controller.ground.on_slope, controller.jump.cooldown_remaining
            );
        }
    }
}

pub(crate) fn apply_crouch(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            &LocomotionController,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            &Mass,
        ),
        With<Player>,
    >,
) {
    if !input.crouch_just_pressed && !input.crouch_just_released {
        return;
    }

    for (controller, mut transform, mut velocity, mut gravity, mass) in &mut query {
        let mut body = AvianBody::new(&mut velocity, &mut gravity, mass, time.delta_secs());
        apply_crouch_input(
            controller,
            &input,
            &tuning,
            &mut transform.scale,
            &mut body,
        );
    }
}

pub(crate) fn handle_slide_input(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            &mut LocomotionController,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            &Mass,
        ),
        With<Player>,
    >,
) {
    if !input.slide_just_pressed && !input.slide_just_released {
        return;
    }

    for (mut controller, mut transform, mut velocity, mut gravity, mass) in &mut query {
        let mut body = AvianBody::new(&mut velocity, &mut gravity, mass, time.delta_secs());
        let original = controller.original_y_scale;

        match controller
            .slide
            .handle_input(&input, &tuning, original, &mut transform.scale, &mut body)
        {
            Some(SlideChange::Started) => {
                debug!("Slide start: timer={}", controller.slide.timer)
            }
            Some(SlideChange::Released) => debug!("Slide stop: released"),
            None => {}
        }
    }
}

pub(crate) fn update_locomotion_state(
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut LocomotionController, &LinearVelocity), With<Player>>,
) {
    for (mut controller, velocity) in &mut query {
        let ctx = ModeContext::new(&controller, &input, velocity.y);
        let previous = update_locomotion(&mut controller, &ctx, &tuning);

        if previous != controller.mode {
            debug!(
                "Mode {:?} -> {:?}: desired={:.2}, effective={:.2}",
                previous, controller.mode, controller.speed.desired, controller.speed.effective
            );
        }
    }
}

pub(crate) fn tick_speed_smoother(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<&mut LocomotionController, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut controller in &mut query {
        let slope_angle = controller
            .ground
            .on_slope
            .then_some(controller.ground.slope_angle_deg);

        if let Some(speed) = controller.smoother.tick(
            dt,
            tuning.speed_increase_multiplier,
            tuning.slope_increase_multiplier,
            slope_angle,
        ) {
            controller.speed.effective = speed;
        }
    }
}

/// Fixed-step force application: slide force first, then movement force and the speed cap.
pub(crate) fn apply_locomotion_forces(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            &Facing,
            &mut LocomotionController,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            &Mass,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (facing, mut controller, mut transform, mut velocity, mut gravity, mass) in &mut query {
        let move_direction = facing.move_direction(input.axis);
        let mut body = AvianBody::new(&mut velocity, &mut gravity, mass, dt);

        let ground = controller.ground;
        if controller
            .slide
            .step(move_direction, &ground, &tuning, dt, &mut body)
        {
            let original = controller.original_y_scale;
            controller.slide.stop(original, &mut transform.scale);
            debug!("Slide stop: timer expired");
        }

        integrate_step(&controller, move_direction, &tuning, &mut body);
    }
}
