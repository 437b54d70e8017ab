//! Movement domain: player controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
mod events;
mod level;
mod resources;
mod systems;


pub use bootstrap::PLAYER_MASS;
pub use components::{ContactTag, GameLayer, Player, PlayerSprite};
pub use controller::{
    BASE_SPEED, DASH_DURATION, DASH_MULTIPLIER, FULL_GRAVITY_SCALE, GROUND_LEVEL_THRESHOLD,
    JUMP_FORCE, MAX_JUMPS, MovementState, PlayerBody,
};
pub use events::PlayerRespawned;
pub use resources::MovementInput;

use bevy::app::RunFixedMainLoopSystems;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{spawn_player, verify_player_body};
use crate::movement::level::spawn_level;
use crate::movement::systems::{
    handle_contact_events, integrate_player, read_input, sample_player_input, sync_player_facing,
    track_wall_contact,
};

/// Fixed physics rate (a 0.02 s step).
pub const PHYSICS_HZ: f64 = 50.0;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .add_message::<PlayerRespawned>()
            .add_systems(
                OnEnter(GameState::Run),
                (spawn_level, spawn_player, verify_player_body).chain(),
            )
            .add_systems(
                RunFixedMainLoop,
                (read_input, sample_player_input)
                    .chain()
                    .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                FixedUpdate,
                (handle_contact_events, track_wall_contact, integrate_player)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                sync_player_facing.run_if(in_state(GameState::Run)),
            );
    }
}
