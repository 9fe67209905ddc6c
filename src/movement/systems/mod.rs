//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{apply_ground_drag, detect_ground};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_crouch, apply_jump, apply_locomotion_forces, handle_slide_input, tick_speed_smoother,
    update_locomotion_state, update_timers,
};
