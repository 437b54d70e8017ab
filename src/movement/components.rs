//! Movement domain: components, contact tags and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces, including the lowest floor
    Platform,
    /// Vertical surfaces the player can press against
    Wall,
    /// Player character
    Player,
    /// Traps and enemies (sensors, never block movement)
    Hazard,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the child entity carrying the player's sprite.
/// Facing flips rotate this entity, never the physics body.
#[derive(Component, Debug)]
pub struct PlayerSprite;

/// Category of a level object, read from whatever the player touches.
///
/// The set is closed: every reaction in the controller matches on all
/// variants, so adding a category forces each contact rule to be revisited.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactTag {
    Wall,
    Platform,
    Trap,
    Enemy,
}
