//! Debug overlay for the player controller (dev-tools feature).
//!
//! F1 or backquote toggles a text panel with the live controller state,
//! which is the quickest way to see why a jump or dash was refused.

mod state;

pub use state::DebugState;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{MovementState, Player, PlayerRespawned};

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, count_respawns, update_debug_info_overlay).chain(),
        );
    }
}

/// Toggle the overlay with F1 or backtick key
fn toggle_debug_info(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug overlay: {}", debug_state.show_info);
    }
}

fn count_respawns(
    mut events: MessageReader<PlayerRespawned>,
    mut debug_state: ResMut<DebugState>,
) {
    for event in events.read() {
        debug_state.record_respawn(event.hazard);
        debug!(
            "Respawn #{} at {} after {:?}",
            debug_state.respawns, event.spawn_point, event.hazard
        );
    }
}

/// Render the controller snapshot shown in the overlay.
pub(crate) fn format_controller_info(
    state: &MovementState,
    position: Vec2,
    velocity: Vec2,
    debug_state: &DebugState,
) -> String {
    format!(
        "Pos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nGrounded: {}\nInput: {}\nWall: {}\nJumps: {}\nDash: {} ({:.2}s)\nFlipped: {}\nRespawns: {} (last: {:?})",
        position.x,
        position.y,
        velocity.x,
        velocity.y,
        state.is_grounded(),
        state.input_enabled,
        state.touching_wall_while_facing_it,
        state.jump_count,
        state.can_dash(),
        state.dash_time_remaining,
        state.facing_flipped,
        debug_state.respawns,
        debug_state.last_hazard
    )
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&MovementState, &Transform, &LinearVelocity), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((state, transform, velocity)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        **text = format_controller_info(
            state,
            transform.translation.truncate(),
            velocity.0,
            &debug_state,
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::ContactTag;

    #[test]
    fn test_respawns_are_counted() {
        let mut debug_state = DebugState::default();
        debug_state.record_respawn(ContactTag::Trap);
        debug_state.record_respawn(ContactTag::Enemy);

        assert_eq!(debug_state.respawns, 2);
        assert_eq!(debug_state.last_hazard, Some(ContactTag::Enemy));
    }

    #[test]
    fn test_controller_info_lists_state() {
        let state = MovementState::new(Vec2::new(-9.0, 1.25));
        let info = format_controller_info(
            &state,
            Vec2::new(-9.0, 1.25),
            Vec2::ZERO,
            &DebugState::default(),
        );

        assert!(info.starts_with("Pos: (-9.00, 1.25)"));
        assert!(info.contains("Grounded: true"));
        assert!(info.contains("Jumps: 0"));
        assert!(info.contains("Dash: false (0.60s)"));
        assert!(info.contains("Respawns: 0 (last: None)"));
    }
}
