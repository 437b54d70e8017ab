//! Movement domain: system modules for the player controller.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{handle_contact_events, track_wall_contact};
pub(crate) use input::{read_input, sample_player_input};
pub(crate) use movement::{integrate_player, sync_player_facing};
