//! Movement domain: translating physics contacts into controller callbacks.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{ContactTag, MovementState, Player, PlayerBody, PlayerRespawned};

/// Returns the collider in the pair that is not the player, if the player is involved.
pub(crate) fn other_collider(
    player: Entity,
    collider1: Entity,
    collider2: Entity,
) -> Option<Entity> {
    if collider1 == player {
        Some(collider2)
    } else if collider2 == player {
        Some(collider1)
    } else {
        None
    }
}

/// A touch against a sensor is an overlap, anything else is a solid contact.
/// Returns the message to send when the overlap sent the player back to spawn.
pub(crate) fn route_collision_start(
    state: &mut MovementState,
    tag: ContactTag,
    is_sensor: bool,
    body: &mut PlayerBody,
) -> Option<PlayerRespawned> {
    if !is_sensor {
        state.on_contact_begin(tag);
        return None;
    }

    state
        .on_overlap_begin(tag, body)
        .then_some(PlayerRespawned {
            hazard: tag,
            spawn_point: body.position,
        })
}

pub(crate) fn route_collision_end(state: &mut MovementState, tag: ContactTag, is_sensor: bool) {
    // Leaving a sensor has no effect on movement
    if !is_sensor {
        state.on_contact_end(tag);
    }
}

/// A contact persists from the step after it began, and only for solid colliders.
pub(crate) fn route_persisting_contact(
    state: &mut MovementState,
    tag: ContactTag,
    is_sensor: bool,
    began_this_step: bool,
) {
    if !is_sensor && !began_this_step {
        state.on_contact_persist(tag);
    }
}

/// Teleports the rigid body to the controller's body snapshot.
pub(crate) fn write_body_placement(
    body: &PlayerBody,
    transform: &mut Transform,
    position: &mut Position,
    velocity: &mut LinearVelocity,
) {
    velocity.0 = body.velocity;
    position.0 = body.position;
    transform.translation = body.position.extend(transform.translation.z);
}

pub(crate) fn handle_contact_events(
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    mut respawned: MessageWriter<PlayerRespawned>,
    tags: Query<(&ContactTag, Has<Sensor>)>,
    mut player_query: Query<
        (
            Entity,
            &mut MovementState,
            &mut Transform,
            &mut Position,
            &mut LinearVelocity,
            &GravityScale,
        ),
        With<Player>,
    >,
) {
    let Ok((player, mut state, mut transform, mut position, mut velocity, gravity)) =
        player_query.single_mut()
    else {
        // Consume events if no player
        for _ in collision_start.read() {}
        for _ in collision_end.read() {}
        return;
    };

    for event in collision_start.read() {
        let Some(other) = other_collider(player, event.collider1, event.collider2) else {
            continue;
        };
        let Ok((&tag, is_sensor)) = tags.get(other) else {
            continue;
        };

        let mut body = PlayerBody::new(transform.translation.truncate(), velocity.0, gravity.0);
        if let Some(message) = route_collision_start(&mut state, tag, is_sensor, &mut body) {
            write_body_placement(&body, &mut transform, &mut position, &mut velocity);
            info!("Player hit {:?}, respawning at {}", tag, message.spawn_point);
            respawned.write(message);
        }
    }

    for event in collision_end.read() {
        let Some(other) = other_collider(player, event.collider1, event.collider2) else {
            continue;
        };
        if let Ok((&tag, is_sensor)) = tags.get(other) {
            route_collision_end(&mut state, tag, is_sensor);
        }
    }
}

/// Reports every solid contact that is still touching the player this step.
pub(crate) fn track_wall_contact(
    mut collision_start: MessageReader<CollisionStart>,
    tags: Query<(&ContactTag, Has<Sensor>)>,
    mut player_query: Query<(Entity, &CollidingEntities, &mut MovementState), With<Player>>,
) {
    let started: Vec<(Entity, Entity)> = collision_start
        .read()
        .map(|event| (event.collider1, event.collider2))
        .collect();

    for (player, colliding, mut state) in &mut player_query {
        for &other in colliding.iter() {
            let Ok((&tag, is_sensor)) = tags.get(other) else {
                continue;
            };
            let began_this_step = started
                .iter()
                .any(|&(c1, c2)| other_collider(player, c1, c2) == Some(other));
            route_persisting_contact(&mut state, tag, is_sensor, began_this_step);
        }
    }
}
