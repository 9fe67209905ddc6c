//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    /// Desired speed while sliding down a slope
    pub slope_slide_speed: f32,
    /// Desired-speed jumps larger than this are smoothed instead of snapped
    pub transition_threshold: f32,
    pub speed_increase_multiplier: f32,
    pub slope_increase_multiplier: f32,
    pub ground_force_scale: f32,
    pub slope_force_scale: f32,
    /// Downward force keeping contact when cresting a slope
    pub slope_stick_force: f32,
    pub air_multiplier: f32,
    pub ground_drag: f32,
    pub jump_impulse: f32,
    pub jump_cooldown: f32,
    /// Degrees. Inclines at or above this are not slopes.
    pub max_slope_angle: f32,
    /// Half the standing body height, scaled by the body's Y scale to find the feet
    pub half_height: f32,
    pub probe_distance: f32,
    pub crouch_y_scale: f32,
    pub crouch_impulse: f32,
    pub slide_y_scale: f32,
    pub slide_impulse: f32,
    pub slide_force: f32,
    pub max_slide_time: f32,
    pub body_mass: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_speed: 7.0,
            sprint_speed: 10.0,
            crouch_speed: 3.5,
            slope_slide_speed: 30.0,
            transition_threshold: 4.0,
            speed_increase_multiplier: 1.5,
            slope_increase_multiplier: 2.5,
            ground_force_scale: 10.0,
            slope_force_scale: 20.0,
            slope_stick_force: 80.0,
            air_multiplier: 0.4,
            ground_drag: 5.0,
            jump_impulse: 12.0,
            jump_cooldown: 0.25,
            max_slope_angle: 40.0,
            half_height: 1.0,
            probe_distance: 0.3,
            crouch_y_scale: 0.5,
            crouch_impulse: 5.0,
            slide_y_scale: 0.5,
            slide_impulse: 5.0,
            slide_force: 400.0,
            max_slide_time: 0.75,
            body_mass: 1.0,
        }
    }
}

/// Per-frame input snapshot. Axes are raw values in [-1, 1].
#[derive(Resource, Debug, Default, Clone)]
pub struct LocomotionInput {
    pub axis: Vec2,
    pub jump_held: bool,
    pub sprint_held: bool,
    pub crouch_just_pressed: bool,
    pub crouch_held: bool,
    pub crouch_just_released: bool,
    pub slide_just_pressed: bool,
    pub slide_just_released: bool,
}

impl LocomotionInput {
    pub fn has_direction(&self) -> bool {
        self.axis.x != 0.0 || self.axis.y != 0.0
    }
}
