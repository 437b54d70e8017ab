//! UI domain: in-run HUD elements.

mod hud_player;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::hud_player::{spawn_dash_hud, update_dash_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_dash_hud)
            .add_systems(Update, update_dash_hud.run_if(in_state(GameState::Run)));
    }
}
