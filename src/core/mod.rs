//! Core domain: boot flow, camera and shared state.

mod state;
mod systems;

pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, transition_to_run};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, (setup_camera, transition_to_run))
            .add_systems(Update, follow_player.run_if(in_state(GameState::Run)));
    }
}
