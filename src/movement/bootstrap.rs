//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LevelDef;
use crate::movement::{FULL_GRAVITY_SCALE, GameLayer, MovementState, Player, PlayerSprite};

/// Collider and sprite size of the player, in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);
/// Overrides the density-derived mass so a jump adds `JUMP_FORCE * dt` to the speed.
pub const PLAYER_MASS: f32 = 1.0;

/// Spawn the player at the level's spawn point, which also becomes its
/// respawn location.
pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Res<LevelDef>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn = level.spawn_point();
    info!("Spawning player at {}", spawn);

    commands
        .spawn((
            // Identity & Movement
            (Player, MovementState::new(spawn)),
            Transform::from_translation(spawn.extend(1.0)),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                Mass(PLAYER_MASS),
                NoAutoMass,
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(FULL_GRAVITY_SCALE),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollidingEntities::default(),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Platform, GameLayer::Wall, GameLayer::Hazard],
                ),
            ),
        ))
        .with_children(|parent| {
            // Rendering
            parent.spawn((
                PlayerSprite,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(PLAYER_SIZE),
                    ..default()
                },
                Transform::default(),
            ));
        });
}

/// The controller cannot work without a rigid body, so a player missing one
/// is a startup error rather than something every system checks.
pub(crate) fn verify_player_body(
    players: Query<
        Entity,
        (
            With<Player>,
            With<RigidBody>,
            With<LinearVelocity>,
            With<GravityScale>,
            With<ComputedMass>,
        ),
    >,
) -> Result {
    let player = players.single()?;
    debug!("Player body ready: {:?}", player);
    Ok(())
}
