//! Movement domain: ground and slope detection systems.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundHit, GroundState, LocomotionController, LocomotionTuning, Player, feet_origin,
};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&Transform, &mut LocomotionController), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut controller) in &mut query {
        let was_grounded = controller.ground.grounded;

        // Feet move with the height scale, so recompute every frame
        let ray_origin = feet_origin(
            transform.translation,
            tuning.half_height,
            transform.scale.y,
        );

        let hit = spatial_query
            .cast_ray(
                ray_origin,
                Dir3::NEG_Y,
                tuning.probe_distance,
                true,
                &ground_filter,
            )
            .map(|hit| GroundHit {
                distance: hit.distance,
                normal: hit.normal,
            });

        controller.ground =
            GroundState::from_probe(hit, tuning.probe_distance, tuning.max_slope_angle);

        if controller.ground.grounded && !was_grounded {
            debug!(
                "Landed: on_slope={}, slope_angle={:.1}",
                controller.ground.on_slope, controller.ground.slope_angle_deg
            );
        } else if !controller.ground.grounded && was_grounded {
            debug!(
                "Left ground: effective_speed={:.2}, desired_speed={:.2}",
                controller.speed.effective, controller.speed.desired
            );
        }
    }
}

/// Ground drag only while grounded so airborne momentum is preserved.
pub(crate) fn apply_ground_drag(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&LocomotionController, &mut LinearDamping), With<Player>>,
) {
    for (controller, mut damping) in &mut query {
        damping.0 = if controller.ground.grounded {
            tuning.ground_drag
        } else {
            0.0
        };
    }
}
