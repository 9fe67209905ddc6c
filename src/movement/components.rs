//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GroundState, JumpState, SlideState, SpeedSmoother, SpeedTarget};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces probed by the ground sensor
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Facing reference for movement input. Body rotation is locked, so forward and
/// right are derived from this yaw alone.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Facing {
    /// Radians about +Y. Zero faces -Z.
    pub yaw: f32,
}

impl Facing {
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::X
    }

    /// Combine the two input axes into an unnormalized world-space direction.
    pub fn move_direction(&self, axis: Vec2) -> Vec3 {
        self.forward() * axis.y + self.right() * axis.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionMode {
    #[default]
    Walking,
    Sprinting,
    Crouching,
    Sliding,
    Airborne,
}

/// Everything the locomotion core owns for one body.
#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    pub ground: GroundState,
    pub mode: LocomotionMode,
    pub speed: SpeedTarget,
    pub smoother: SpeedSmoother,
    pub jump: JumpState,
    pub slide: SlideState,
    /// Height scale the body was spawned with; crouch and slide always restore to this.
    pub original_y_scale: f32,
}

impl LocomotionController {
    pub fn new(original_y_scale: f32) -> Self {
        Self {
            ground: GroundState::default(),
            mode: LocomotionMode::default(),
            speed: SpeedTarget::default(),
            smoother: SpeedSmoother::default(),
            jump: JumpState::default(),
            slide: SlideState::default(),
            original_y_scale,
        }
    }

    #[allow(dead_code)]
    pub fn mode(&self) -> LocomotionMode {
        self.mode
    }

    #[allow(dead_code)]
    pub fn is_sliding(&self) -> bool {
        self.slide.active
    }

    #[allow(dead_code)]
    pub fn on_slope(&self) -> bool {
        self.ground.grounded && self.ground.on_slope
    }

    /// True when the slope force model is in charge this step: grounded on a
    /// walkable incline and not inside a jump's exit window.
    pub fn slope_active(&self) -> bool {
        self.ground.grounded && self.ground.on_slope && !self.jump.exiting_slope
    }

    pub fn slope_move_direction(&self, direction: Vec3) -> Vec3 {
        self.ground.slope_move_direction(direction)
    }
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(1.0)
    }
}
