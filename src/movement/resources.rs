//! Movement domain: sampled input resource.

use bevy::prelude::*;

/// Raw button and axis state for the current rendered frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Horizontal axis, always one of -1, 0 or 1.
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
    pub dash_held: bool,
}

impl MovementInput {
    /// Combine left/right key state into a raw axis value.
    pub fn axis_from_keys(left: bool, right: bool) -> f32 {
        match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
