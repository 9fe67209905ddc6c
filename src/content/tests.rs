//! Content domain: tests for tuning loading and validation.

use std::path::Path;

use super::{load_tuning, parse_tuning, validate_tuning};
use crate::movement::LocomotionTuning;

// -----------------------------------------------------------------------------
// Loading tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_tuning_parses_and_validates() {
    let contents = include_str!("../../assets/data/locomotion.ron");
    let tuning = parse_tuning(contents, "locomotion.ron").unwrap();
    assert!(validate_tuning(&tuning).is_empty());
    assert_eq!(tuning, LocomotionTuning::default());
}

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning = parse_tuning("(walk_speed: 6.0, max_slope_angle: 45.0)", "inline").unwrap();
    let defaults = LocomotionTuning::default();

    assert_eq!(tuning.walk_speed, 6.0);
    assert_eq!(tuning.max_slope_angle, 45.0);
    assert_eq!(tuning.sprint_speed, defaults.sprint_speed);
    assert_eq!(tuning.jump_cooldown, defaults.jump_cooldown);
}

#[test]
fn test_malformed_tuning_reports_file() {
    let err = parse_tuning("(walk_speed: \"fast\")", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_tuning_file_is_io_error() {
    let err = load_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&LocomotionTuning::default()).is_empty());
}

#[test]
fn test_validation_flags_bad_fields() {
    let tuning = LocomotionTuning {
        max_slope_angle: 90.0,
        crouch_y_scale: 0.0,
        walk_speed: -1.0,
        body_mass: f32::NAN,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 4);
    assert!(fields.contains(&"max_slope_angle"));
    assert!(fields.contains(&"crouch_y_scale"));
    assert!(fields.contains(&"walk_speed"));
    assert!(fields.contains(&"body_mass"));
}
