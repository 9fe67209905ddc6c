//! Movement domain: fixed-step force application and velocity capping.

use bevy::prelude::*;

use crate::movement::{BodyForces, LocomotionController, LocomotionTuning};

/// Apply this step's movement force along `move_direction` (unnormalized
/// forward/right combination), then cap velocity to the effective speed.
pub fn integrate_step(
    controller: &LocomotionController,
    move_direction: Vec3,
    tuning: &LocomotionTuning,
    body: &mut impl BodyForces,
) {
    let speed = controller.speed.effective;
    let slope_active = controller.slope_active();

    if slope_active {
        // Sampled before this step's forces land
        let rising = body.velocity().y > 0.0;
        let direction = controller.slope_move_direction(move_direction);
        if direction != Vec3::ZERO {
            body.add_force(direction * speed * tuning.slope_force_scale);
        }
        if rising {
            body.add_force(Vec3::NEG_Y * tuning.slope_stick_force);
        }
    } else {
        let direction = move_direction.normalize_or_zero();
        if direction != Vec3::ZERO {
            let mut force = direction * speed * tuning.ground_force_scale;
            if !controller.ground.grounded {
                force *= tuning.air_multiplier;
            }
            body.add_force(force);
        }
    }

    body.set_gravity_enabled(!slope_active);
    clamp_velocity(body, speed, slope_active);
}

/// On a slope the whole velocity is capped; elsewhere only the horizontal
/// part is, so the jump arc and gravity are left alone.
pub fn clamp_velocity(body: &mut impl BodyForces, max_speed: f32, slope_active: bool) {
    let velocity = body.velocity();

    if slope_active {
        if velocity.length() > max_speed {
            body.set_velocity(velocity.normalize_or_zero() * max_speed);
        }
        return;
    }

    let flat = Vec3::new(velocity.x, 0.0, velocity.z);
    if flat.length() > max_speed {
        let limited = flat.normalize_or_zero() * max_speed;
        body.set_velocity(Vec3::new(limited.x, velocity.y, limited.z));
    }
}
