//! Movement domain: level geometry the controller reacts to.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{HazardKind, LevelDef};
use crate::movement::{ContactTag, GameLayer};

pub(crate) fn spawn_level(mut commands: Commands, level: Res<LevelDef>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.4, 0.5, 0.4);
    let trap_color = Color::srgb(0.8, 0.3, 0.2);
    let enemy_color = Color::srgb(0.7, 0.2, 0.6);

    let platform_layers = CollisionLayers::new(GameLayer::Platform, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);

    for platform in &level.platforms {
        let size = platform.size();
        commands.spawn((
            ContactTag::Platform,
            Sprite {
                color: platform_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(platform.center().extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            platform_layers,
        ));
    }

    for wall in &level.walls {
        let size = wall.size();
        commands.spawn((
            ContactTag::Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(wall.center().extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    }

    for hazard in &level.hazards {
        let size = hazard.size();
        let tag = hazard.kind.contact_tag();
        let color = match hazard.kind {
            HazardKind::Trap => trap_color,
            HazardKind::Enemy => enemy_color,
        };

        commands.spawn((
            tag,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(hazard.center().extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            hazard_layers,
        ));
    }

    info!(
        "Spawned level '{}' ({} platforms, {} walls, {} hazards)",
        level.name,
        level.platforms.len(),
        level.walls.len(),
        level.hazards.len()
    );
}
