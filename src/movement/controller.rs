//! Movement domain: the player movement state machine.
//!
//! `MovementState` is driven from three places:
//! - `sample_input` once per rendered frame
//! - `integrate` once per fixed physics step
//! - the contact callbacks whenever the physics backend reports a touch
//!
//! It never talks to the engine directly. Callers hand it a `PlayerBody`
//! snapshot and write the result back to the rigid body.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::movement::{ContactTag, MovementInput};

/// Upward force applied over the physics step that performs a jump.
pub const JUMP_FORCE: f32 = 275.0;
/// Horizontal run speed in world units per second.
pub const BASE_SPEED: f32 = 3.0;
pub const DASH_MULTIPLIER: f32 = 2.0;
/// A full dash charge, in seconds.
pub const DASH_DURATION: f32 = 0.6;
/// Jumps allowed between two platform contacts.
pub const MAX_JUMPS: u8 = 1;
pub const FULL_GRAVITY_SCALE: f32 = 1.0;
/// Standing height on the lowest floor of the level. A player at or below
/// this line is treated as grounded even if the contact was missed.
pub const GROUND_LEVEL_THRESHOLD: f32 = 1.25;

/// Engine-owned body values handed to the controller for a single callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    /// Force to apply over the current physics step.
    pub force: Vec2,
}

impl PlayerBody {
    pub fn new(position: Vec2, velocity: Vec2, gravity_scale: f32) -> Self {
        Self {
            position,
            velocity,
            gravity_scale,
            force: Vec2::ZERO,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    /// Facing the negative x direction
    pub facing_flipped: bool,
    pub grounded: bool,
    /// Horizontal input reaches the body (false while airborne on a wall)
    pub input_enabled: bool,
    pub touching_wall_while_facing_it: bool,
    pub jump_count: u8,
    /// A jump impulse is due on the next physics step
    pub jump_requested: bool,
    pub dash_active: bool,
    pub dash_time_remaining: f32,
    pub spawn_point: Vec2,
    /// Last sampled horizontal axis (-1, 0 or 1)
    pub horizontal: f32,
}

impl MovementState {
    /// Fresh state for a character entering the scene at `spawn_point`.
    pub fn new(spawn_point: Vec2) -> Self {
        Self {
            facing_flipped: false,
            grounded: true,
            input_enabled: true,
            touching_wall_while_facing_it: false,
            jump_count: 0,
            jump_requested: false,
            dash_active: false,
            dash_time_remaining: DASH_DURATION,
            spawn_point,
            horizontal: 0.0,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Whether the dash speed multiplier is currently in effect.
    pub fn can_dash(&self) -> bool {
        self.dash_active
    }

    /// Rotation of the player's visual for the current facing.
    pub fn facing_rotation(&self) -> Quat {
        if self.facing_flipped {
            Quat::from_rotation_y(PI)
        } else {
            Quat::IDENTITY
        }
    }

    /// Per-frame input sampling: latches jump and dash edges and runs the
    /// dash countdown on the frame delta.
    pub fn sample_input(&mut self, input: &MovementInput, dt: f32, body: &mut PlayerBody) {
        if body.position.y <= GROUND_LEVEL_THRESHOLD {
            self.grounded = true;
        }

        if self.grounded {
            self.input_enabled = true;
            self.touching_wall_while_facing_it = false;
        }

        self.horizontal = input.axis;

        if input.jump_just_pressed && self.jump_count < MAX_JUMPS {
            self.jump_requested = true;
        }

        // Variable jump height
        if input.jump_just_released {
            body.velocity.y /= 2.0;
            self.jump_requested = false;
        }

        if input.dash_just_pressed && self.jump_count == 0 && self.input_enabled {
            if !self.dash_active {
                debug!(
                    "Dash started: grounded={}, remaining={:.2}s",
                    self.grounded, self.dash_time_remaining
                );
            }
            self.dash_active = true;
        }

        if self.dash_active {
            self.dash_time_remaining = (self.dash_time_remaining - dt).max(0.0);
        }

        if self.dash_time_remaining <= 0.0 && self.grounded {
            if self.dash_active {
                debug!("Dash depleted on ground, recharged");
            }
            self.dash_active = false;
            self.dash_time_remaining = DASH_DURATION;
        }

        // Only a grounded dash can be cut short by letting go
        if !input.dash_held && self.grounded {
            self.dash_active = false;
        }
    }

    /// Fixed-step integration: facing, horizontal velocity and jump force.
    pub fn integrate(&mut self, body: &mut PlayerBody) {
        if self.update_facing() {
            debug!(
                "Turned: flipped={}, wall_flag={}",
                self.facing_flipped, self.touching_wall_while_facing_it
            );
        }

        body.velocity.x = if self.dash_active {
            self.horizontal * BASE_SPEED * DASH_MULTIPLIER
        } else if self.input_enabled || !self.touching_wall_while_facing_it {
            self.horizontal * BASE_SPEED
        } else {
            // Pinned against the wall while airborne
            0.0
        };

        if self.jump_requested {
            body.gravity_scale = FULL_GRAVITY_SCALE;
            body.force += Vec2::Y * JUMP_FORCE;
            self.jump_count += 1;
            self.jump_requested = false;
            debug!("Jump: jump_count={}", self.jump_count);
        }
    }

    /// Turns the character around when the axis points against its facing.
    /// Returns true if an orientation change happened.
    fn update_facing(&mut self) -> bool {
        let turn = if self.facing_flipped {
            self.horizontal > 0.0
        } else {
            self.horizontal < 0.0
        };

        if !turn {
            return false;
        }

        self.facing_flipped = !self.facing_flipped;
        if !self.input_enabled {
            self.touching_wall_while_facing_it = !self.touching_wall_while_facing_it;
        }
        true
    }

    pub fn on_contact_begin(&mut self, tag: ContactTag) {
        match tag {
            ContactTag::Wall => {
                self.touching_wall_while_facing_it = true;
                self.dash_active = false;
                debug!("Wall contact: dash cancelled");
            }
            ContactTag::Platform => {
                self.jump_count = 0;
                if self.input_enabled {
                    self.grounded = true;
                }
                debug!("Landed: grounded={}", self.grounded);
            }
            ContactTag::Trap | ContactTag::Enemy => {}
        }
    }

    pub fn on_contact_persist(&mut self, tag: ContactTag) {
        match tag {
            ContactTag::Wall => {
                if !self.grounded {
                    self.input_enabled = false;
                }
            }
            ContactTag::Platform | ContactTag::Trap | ContactTag::Enemy => {}
        }
    }

    pub fn on_contact_end(&mut self, tag: ContactTag) {
        match tag {
            ContactTag::Platform => {
                self.grounded = false;
            }
            ContactTag::Wall => {
                self.input_enabled = true;
                self.touching_wall_while_facing_it = false;
            }
            ContactTag::Trap | ContactTag::Enemy => {}
        }
    }

    /// Sensor overlap. Hazards reset the body to the spawn point; returns
    /// true when that happened.
    pub fn on_overlap_begin(&mut self, tag: ContactTag, body: &mut PlayerBody) -> bool {
        match tag {
            ContactTag::Trap | ContactTag::Enemy => {
                body.velocity = Vec2::ZERO;
                self.facing_flipped = false;
                body.position = self.spawn_point;
                true
            }
            ContactTag::Wall | ContactTag::Platform => false,
        }
    }
}
