//! Movement domain: messages emitted by the player controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::ContactTag;

/// Fired when a hazard sends the player back to the spawn point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerRespawned {
    pub hazard: ContactTag,
    pub spawn_point: Vec2,
}

impl Message for PlayerRespawned {}
