//! Debug domain: state for the controller overlay.

use bevy::prelude::*;

use crate::movement::ContactTag;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the controller overlay is visible
    pub show_info: bool,
    /// Hazard respawns since startup
    pub respawns: u32,
    pub last_hazard: Option<ContactTag>,
}

impl DebugState {
    pub fn record_respawn(&mut self, hazard: ContactTag) {
        self.respawns += 1;
        self.last_hazard = Some(hazard);
    }
}
