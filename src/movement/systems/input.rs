//! Movement domain: per-frame input sampling.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, Player, PlayerBody};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.axis = MovementInput::axis_from_keys(left, right);

    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::KeyX) || keyboard.just_pressed(KeyCode::Space);
    input.jump_just_released =
        keyboard.just_released(KeyCode::KeyX) || keyboard.just_released(KeyCode::Space);

    input.dash_just_pressed =
        keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::ShiftLeft);
    input.dash_held = keyboard.pressed(KeyCode::KeyZ) || keyboard.pressed(KeyCode::ShiftLeft);
}

/// Frame tick. Runs before the fixed loop so the physics steps of this
/// frame see the freshly latched input.
pub(crate) fn sample_player_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<
        (
            &mut MovementState,
            &Transform,
            &mut LinearVelocity,
            &GravityScale,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut state, transform, mut velocity, gravity) in &mut query {
        let mut body = PlayerBody::new(transform.translation.truncate(), velocity.0, gravity.0);
        state.sample_input(&input, dt, &mut body);

        if body.velocity != velocity.0 {
            velocity.0 = body.velocity;
        }
    }
}
