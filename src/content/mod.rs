//! Content domain: level layout loading and validation.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{HazardDef, HazardKind, LevelDef};
pub use loader::{LevelLoadError, load_level, parse_level};
pub use validation::{LevelValidationError, validate_level};

use bevy::prelude::*;
use std::path::Path;

pub const LEVEL_PATH: &str = "assets/data/level.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level_content);
    }
}

/// Load the level layout, falling back to the built-in level on any error.
fn load_level_content(mut commands: Commands) {
    let level = match load_level(Path::new(LEVEL_PATH)) {
        Ok(level) => {
            let errors = validate_level(&level);
            if errors.is_empty() {
                info!(
                    "Loaded level '{}': {} platforms, {} walls, {} hazards",
                    level.name,
                    level.platforms.len(),
                    level.walls.len(),
                    level.hazards.len()
                );
                level
            } else {
                for e in &errors {
                    error!("Level validation: {}", e);
                }
                warn!("Using built-in level after {} errors", errors.len());
                LevelDef::default()
            }
        }
        Err(e) => {
            warn!("{}; using built-in level", e);
            LevelDef::default()
        }
    };

    commands.insert_resource(level);
}
