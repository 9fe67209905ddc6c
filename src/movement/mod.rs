//! Movement domain: first-person locomotion over a dynamic rigid body.
//!
//! Per frame, ahead of the fixed-step loop: sample input, probe the ground, run
//! the jump/crouch/slide triggers, select the locomotion mode, then advance speed
//! smoothing.
//! Per fixed step (`FixedUpdate`): apply slide and movement forces and cap velocity.

mod body;
mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod integrator;
mod jump;
mod resources;
mod sensor;
mod slide;
mod smoothing;
mod state;
mod systems;

pub use body::{AvianBody, BodyForces};
pub use components::{Facing, GameLayer, Ground, LocomotionController, LocomotionMode, Player};
pub use integrator::integrate_step;
pub use jump::JumpState;
pub use resources::{LocomotionInput, LocomotionTuning};
pub use sensor::{GroundHit, GroundState, feet_origin};
pub use slide::{SlideChange, SlideState};
pub use smoothing::{SpeedSmoother, SpeedTarget};
pub use state::{ModeContext, apply_crouch_input, update_locomotion};

// Exposed queries; only the tests reach them inside this crate
#[allow(unused_imports)]
pub use integrator::clamp_velocity;
#[allow(unused_imports)]
pub use sensor::{is_slope_angle, project_on_plane, slope_angle_deg};
#[allow(unused_imports)]
pub use state::{MODE_RULES, ModeRule, select_mode};

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_crouch, apply_ground_drag, apply_jump, apply_locomotion_forces, detect_ground,
    handle_slide_input, read_input, tick_speed_smoother, update_locomotion_state, update_timers,
};

/// System sets for the per-frame locomotion pipeline. They run in
/// `RunFixedMainLoop` before the fixed-step loop, so the integrator always sees
/// this frame's ground state, mode and effective speed.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Input sampling and ground probe
    Sense,
    /// Jump, crouch and slide triggers, then mode selection
    Decide,
    /// Speed smoothing
    Smooth,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        configure_locomotion_sets(app);

        app.init_resource::<LocomotionInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                RunFixedMainLoop,
                (read_input, detect_ground, apply_ground_drag)
                    .chain()
                    .in_set(LocomotionSet::Sense),
            )
            .add_systems(
                RunFixedMainLoop,
                (
                    update_timers,
                    apply_jump,
                    apply_crouch,
                    handle_slide_input,
                    update_locomotion_state,
                )
                    .chain()
                    .in_set(LocomotionSet::Decide),
            )
            .add_systems(
                RunFixedMainLoop,
                tick_speed_smoother.in_set(LocomotionSet::Smooth),
            )
            .add_systems(FixedUpdate, apply_locomotion_forces);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_arena);
    }
}

/// Order the per-frame sets and pin them ahead of `FixedUpdate`.
pub(crate) fn configure_locomotion_sets(app: &mut App) {
    app.configure_sets(
        RunFixedMainLoop,
        (
            LocomotionSet::Sense,
            LocomotionSet::Decide,
            LocomotionSet::Smooth,
        )
            .chain()
            .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop),
    );
}
