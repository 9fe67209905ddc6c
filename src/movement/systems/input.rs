//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::LocomotionInput;

const SPRINT_KEY: KeyCode = KeyCode::ShiftLeft;
const CROUCH_KEY: KeyCode = KeyCode::KeyC;
const SLIDE_KEY: KeyCode = KeyCode::ControlLeft;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<LocomotionInput>) {
    // Left/right
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward/back
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.sprint_held = keyboard.pressed(SPRINT_KEY);
    input.crouch_just_pressed = keyboard.just_pressed(CROUCH_KEY);
    input.crouch_held = keyboard.pressed(CROUCH_KEY);
    input.crouch_just_released = keyboard.just_released(CROUCH_KEY);
    input.slide_just_pressed = keyboard.just_pressed(SLIDE_KEY);
    input.slide_just_released = keyboard.just_released(SLIDE_KEY);
}
