//! Core domain: game state definitions for the boot flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loading
    #[default]
    Boot,
    /// Level and player are live
    Run,
}
