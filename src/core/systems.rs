//! Core domain: boot flow and camera systems.

use bevy::prelude::*;

use crate::core::state::GameState;
use crate::movement::{MovementState, Player};

/// World units to screen pixels.
pub(crate) const PIXELS_PER_UNIT: f32 = 48.0;
/// How quickly the camera catches up with the player, per second.
pub(crate) const CAMERA_FOLLOW_RATE: f32 = 5.0;
/// Keeps the floor in the lower part of the screen.
pub(crate) const CAMERA_Y_OFFSET: f32 = 2.5;

/// Start the run once boot has finished loading content
pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, CAMERA_Y_OFFSET, 0.0),
    ));
}

/// Track the player horizontally at all times, vertically only while
/// grounded so jumps don't bob the view.
pub(crate) fn follow_player(
    time: Res<Time>,
    player_query: Query<(&Transform, &MovementState), With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok((target, state)) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let t = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    camera.translation.x += (target.translation.x - camera.translation.x) * t;

    if state.is_grounded() {
        let goal_y = target.translation.y + CAMERA_Y_OFFSET;
        camera.translation.y += (goal_y - camera.translation.y) * t;
    }
}
