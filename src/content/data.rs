//! Data definitions for the level layout file.
//!
//! These structs mirror assets/data/level.ron. Coordinates are world units
//! with y up; every block is an axis-aligned rectangle given by its center
//! and full size.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ContactTag;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub name: String,
    /// Where the player enters the scene and respawns after a hazard
    pub spawn: [f32; 2],
    pub platforms: Vec<BlockDef>,
    pub walls: Vec<BlockDef>,
    #[serde(default)]
    pub hazards: Vec<HazardDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BlockDef {
    pub center: [f32; 2],
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HazardDef {
    pub kind: HazardKind,
    pub center: [f32; 2],
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum HazardKind {
    Trap,
    Enemy,
}

impl HazardKind {
    pub fn contact_tag(self) -> ContactTag {
        match self {
            HazardKind::Trap => ContactTag::Trap,
            HazardKind::Enemy => ContactTag::Enemy,
        }
    }
}

impl BlockDef {
    pub fn new(center: [f32; 2], size: [f32; 2]) -> Self {
        Self { center, size }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::from(self.center)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::from(self.size)
    }
}

impl HazardDef {
    pub fn center(&self) -> Vec2 {
        Vec2::from(self.center)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::from(self.size)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size() * 0.5;
        let delta = (point - self.center()).abs();
        delta.x <= half.x && delta.y <= half.y
    }
}

impl LevelDef {
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::from(self.spawn)
    }
}

impl Default for LevelDef {
    /// Built-in test level. The floor top sits at y = 0.75 so a standing
    /// player (1.0 tall) rests exactly on the ground-level threshold.
    fn default() -> Self {
        Self {
            name: "Training Grounds".to_string(),
            spawn: [-9.0, 1.25],
            platforms: vec![
                // Floor
                BlockDef::new([0.0, 0.25], [24.0, 1.0]),
                BlockDef::new([-7.0, 2.0], [3.0, 0.2]),
                BlockDef::new([6.0, 2.0], [3.0, 0.2]),
                BlockDef::new([0.0, 3.2], [2.5, 0.4]),
            ],
            walls: vec![
                BlockDef::new([-12.5, 4.0], [1.0, 8.0]),
                BlockDef::new([12.5, 4.0], [1.0, 8.0]),
                // Pillar for wall practice
                BlockDef::new([-3.0, 1.75], [0.6, 2.0]),
            ],
            hazards: vec![
                HazardDef {
                    kind: HazardKind::Trap,
                    center: [2.5, 0.95],
                    size: [1.0, 0.4],
                },
                HazardDef {
                    kind: HazardKind::Enemy,
                    center: [9.0, 1.25],
                    size: [0.8, 1.0],
                },
            ],
        }
    }
}
