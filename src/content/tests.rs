//! Content domain: tests for level parsing, loading and validation.

use bevy::prelude::Vec2;
use std::path::Path;

use super::{HazardDef, HazardKind, LEVEL_PATH, LevelDef, load_level, parse_level, validate_level};
use crate::movement::{ContactTag, GROUND_LEVEL_THRESHOLD, JUMP_FORCE, PHYSICS_HZ, PLAYER_MASS};

const SMALL_LEVEL: &str = r#"
(
    name: "Small",
    spawn: (0.0, 1.25),
    platforms: [
        (center: (0.0, 0.25), size: (10.0, 1.0)),
    ],
    walls: [],
)
"#;

#[test]
fn test_parse_level_without_hazards() {
    let level = parse_level(SMALL_LEVEL, "small.ron").unwrap();
    assert_eq!(level.name, "Small");
    assert_eq!(level.spawn_point(), Vec2::new(0.0, 1.25));
    assert_eq!(level.platforms.len(), 1);
    assert!(level.walls.is_empty());
    assert!(level.hazards.is_empty());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_level("(name: \"broken\"", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_level(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_level_loads_and_validates() {
    let level = load_level(Path::new(LEVEL_PATH)).unwrap();
    let builtin = LevelDef::default();

    assert!(validate_level(&level).is_empty());
    assert_eq!(level.name, builtin.name);
    assert_eq!(level.spawn_point(), builtin.spawn_point());
    assert_eq!(level.platforms.len(), builtin.platforms.len());
    assert_eq!(level.walls.len(), builtin.walls.len());
    assert_eq!(level.hazards.len(), builtin.hazards.len());
}

#[test]
fn test_default_level_is_valid() {
    assert!(validate_level(&LevelDef::default()).is_empty());
}

#[test]
fn test_default_floor_lines_up_with_ground_threshold() {
    let level = LevelDef::default();
    let lowest_top = level
        .platforms
        .iter()
        .map(|p| p.center[1] + p.size[1] * 0.5)
        .fold(f32::INFINITY, f32::min);

    // Half of the 1.0 tall player collider
    assert_eq!(lowest_top + 0.5, GROUND_LEVEL_THRESHOLD);
    assert_eq!(level.spawn_point().y, GROUND_LEVEL_THRESHOLD);
}

#[test]
fn test_default_ledges_are_reachable_by_jumping() {
    const GRAVITY: f32 = 9.81;
    let jump_speed = JUMP_FORCE / PHYSICS_HZ as f32 / PLAYER_MASS;
    let rise = jump_speed * jump_speed / (2.0 * GRAVITY);

    let level = LevelDef::default();
    let tops: Vec<f32> = level
        .platforms
        .iter()
        .map(|p| p.center[1] + p.size[1] * 0.5)
        .collect();
    let floor_top = tops.iter().copied().fold(f32::INFINITY, f32::min);

    let mut reached = vec![floor_top];
    loop {
        let next: Vec<f32> = tops
            .iter()
            .copied()
            .filter(|top| !reached.contains(top))
            .filter(|top| reached.iter().any(|from| *top < from + rise))
            .collect();
        if next.is_empty() {
            break;
        }
        reached.extend(next);
    }
    assert_eq!(reached.len(), tops.len());

    // A standing player fits under every raised ledge
    for p in level.platforms.iter().skip(1) {
        assert!(p.center[1] - p.size[1] * 0.5 >= GROUND_LEVEL_THRESHOLD + 0.5);
    }
}

#[test]
fn test_level_without_platforms_is_rejected() {
    let level = LevelDef {
        platforms: Vec::new(),
        ..LevelDef::default()
    };

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_type, "Level");
}

#[test]
fn test_non_positive_sizes_are_rejected() {
    let mut level = LevelDef::default();
    level.walls[1].size = [0.0, 8.0];
    level.platforms[2].size = [3.0, -0.4];

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.source_type == "Wall" && e.index == 1));
    assert!(errors.iter().any(|e| e.source_type == "Platform" && e.index == 2));
}

#[test]
fn test_hazard_over_spawn_is_rejected() {
    let mut level = LevelDef::default();
    level.hazards.push(HazardDef {
        kind: HazardKind::Enemy,
        center: level.spawn,
        size: [1.0, 1.0],
    });

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_type, "Hazard");
    assert_eq!(errors[0].index, 2);
}

#[test]
fn test_hazard_kinds_map_to_contact_tags() {
    assert_eq!(HazardKind::Trap.contact_tag(), ContactTag::Trap);
    assert_eq!(HazardKind::Enemy.contact_tag(), ContactTag::Enemy);
}
