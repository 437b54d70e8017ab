//! Movement domain: fixed-step integration and facing visuals.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, Player, PlayerBody, PlayerSprite};

/// Velocity after `force` acts on the body for one step of `dt` seconds.
pub(crate) fn apply_step_force(body: &PlayerBody, dt: f32, inverse_mass: f32) -> Vec2 {
    body.velocity + body.force * dt * inverse_mass
}

pub(crate) fn integrate_player(
    time: Res<Time<Fixed>>,
    mut query: Query<
        (
            &mut MovementState,
            &Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut state, transform, mut velocity, mut gravity, mass) in &mut query {
        let mut body = PlayerBody::new(transform.translation.truncate(), velocity.0, gravity.0);
        state.integrate(&mut body);

        // The jump force acts for exactly one step
        velocity.0 = apply_step_force(&body, dt, mass.inverse());

        if body.gravity_scale != gravity.0 {
            gravity.0 = body.gravity_scale;
        }
    }
}

pub(crate) fn sync_player_facing(
    players: Query<(&MovementState, &Children), (With<Player>, Changed<MovementState>)>,
    mut sprites: Query<&mut Transform, With<PlayerSprite>>,
) {
    for (state, children) in &players {
        let rotation = state.facing_rotation();
        for child in children.iter() {
            if let Ok(mut transform) = sprites.get_mut(child) {
                if transform.rotation != rotation {
                    transform.rotation = rotation;
                }
            }
        }
    }
}
