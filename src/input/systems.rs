//! Input domain: device sampling and per-tick buffer priming.

use bevy::prelude::*;

use crate::input::{InputAction, InputBuffer, InputTuning, MovementAxes};

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const ATTACK_KEYS: [KeyCode; 1] = [KeyCode::KeyJ];

pub(crate) fn read_device_input(
    time: Res<Time>,
    tuning: Res<InputTuning>,
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut axes: ResMut<MovementAxes>,
    mut buffer: ResMut<InputBuffer>,
) {
    let now = time.elapsed_secs();

    // Digital axis from the keyboard
    let mut raw = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        raw.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        raw.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        raw.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        raw.y += 1.0;
    }

    let mut jump_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    let mut jump_released = keyboard.any_just_released(JUMP_KEYS);
    let mut attack_pressed = keyboard.any_just_pressed(ATTACK_KEYS);
    let mut attack_released = keyboard.any_just_released(ATTACK_KEYS);

    // The strongest analog stick wins over the keyboard
    for gamepad in &gamepads {
        let stick = gamepad.left_stick();
        if stick.length_squared() > raw.length_squared() {
            raw = stick;
        }

        jump_pressed |= gamepad.just_pressed(GamepadButton::South);
        jump_released |= gamepad.just_released(GamepadButton::South);
        attack_pressed |= gamepad.just_pressed(GamepadButton::West);
        attack_released |= gamepad.just_released(GamepadButton::West);
    }

    *axes = MovementAxes::from_raw(raw, &tuning);

    for (edge, action) in [
        (jump_pressed, InputAction::JumpPressed),
        (jump_released, InputAction::JumpReleased),
        (attack_pressed, InputAction::AttackPressed),
        (attack_released, InputAction::AttackReleased),
    ] {
        if edge {
            buffer.record(action, now);
            trace!("Buffered {:?} at {:.3}", action, now);
        }
    }
}

pub(crate) fn prime_input_buffer(
    time: Res<Time>,
    tuning: Res<InputTuning>,
    mut buffer: ResMut<InputBuffer>,
) {
    buffer.prime(time.elapsed_secs(), tuning.buffer_window);
}
