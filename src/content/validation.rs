//! Validation for level layouts.

use super::data::*;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelValidationError {
    pub source_type: &'static str,
    pub index: usize,
    pub message: String,
}

impl std::fmt::Display for LevelValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}: {}", self.source_type, self.index, self.message)
    }
}

fn check_size(
    errors: &mut Vec<LevelValidationError>,
    source_type: &'static str,
    index: usize,
    size: [f32; 2],
) {
    if !size.iter().all(|v| v.is_finite() && *v > 0.0) {
        errors.push(LevelValidationError {
            source_type,
            index,
            message: format!("size must be positive, got {:?}", size),
        });
    }
}

/// Validate a level layout.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &LevelDef) -> Vec<LevelValidationError> {
    let mut errors = Vec::new();

    if level.platforms.is_empty() {
        errors.push(LevelValidationError {
            source_type: "Level",
            index: 0,
            message: "at least one platform is required".to_string(),
        });
    }

    for (i, platform) in level.platforms.iter().enumerate() {
        check_size(&mut errors, "Platform", i, platform.size);
    }
    for (i, wall) in level.walls.iter().enumerate() {
        check_size(&mut errors, "Wall", i, wall.size);
    }

    let spawn = level.spawn_point();
    if !spawn.is_finite() {
        errors.push(LevelValidationError {
            source_type: "Level",
            index: 0,
            message: format!("spawn point {:?} is not finite", level.spawn),
        });
    }

    for (i, hazard) in level.hazards.iter().enumerate() {
        check_size(&mut errors, "Hazard", i, hazard.size);
        if hazard.contains(spawn) {
            errors.push(LevelValidationError {
                source_type: "Hazard",
                index: i,
                message: format!("{:?} covers the spawn point", hazard.kind),
            });
        }
    }

    errors
}
