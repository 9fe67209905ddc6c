//! Validation for loaded locomotion tuning values.

use crate::movement::LocomotionTuning;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct TuningValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}' = {} must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a field against a predicate
macro_rules! check_field {
    ($errors:expr, $tuning:expr, $field:ident, $expected:expr, $ok:expr) => {
        let value = $tuning.$field;
        let ok: fn(f32) -> bool = $ok;
        if !value.is_finite() || !ok(value) {
            $errors.push(TuningValidationError {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate every tuning field.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<TuningValidationError> {
    let mut errors = Vec::new();

    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;
    let unit_scale = |v: f32| v > 0.0 && v <= 1.0;

    // Speeds
    check_field!(errors, tuning, walk_speed, ">= 0", non_negative);
    check_field!(errors, tuning, sprint_speed, ">= 0", non_negative);
    check_field!(errors, tuning, crouch_speed, ">= 0", non_negative);
    check_field!(errors, tuning, slope_slide_speed, ">= 0", non_negative);

    // Smoothing
    check_field!(errors, tuning, transition_threshold, ">= 0", non_negative);
    check_field!(errors, tuning, speed_increase_multiplier, "> 0", positive);
    check_field!(errors, tuning, slope_increase_multiplier, "> 0", positive);

    // Forces
    check_field!(errors, tuning, ground_force_scale, ">= 0", non_negative);
    check_field!(errors, tuning, slope_force_scale, ">= 0", non_negative);
    check_field!(errors, tuning, slope_stick_force, ">= 0", non_negative);
    check_field!(errors, tuning, air_multiplier, ">= 0", non_negative);
    check_field!(errors, tuning, ground_drag, ">= 0", non_negative);
    check_field!(errors, tuning, jump_impulse, ">= 0", non_negative);
    check_field!(errors, tuning, jump_cooldown, ">= 0", non_negative);
    check_field!(errors, tuning, crouch_impulse, ">= 0", non_negative);
    check_field!(errors, tuning, slide_impulse, ">= 0", non_negative);
    check_field!(errors, tuning, slide_force, ">= 0", non_negative);
    check_field!(errors, tuning, max_slide_time, ">= 0", non_negative);

    // Body and sensor
    check_field!(errors, tuning, max_slope_angle, "in (0, 90)", |v| v > 0.0 && v < 90.0);
    check_field!(errors, tuning, half_height, "> 0", positive);
    check_field!(errors, tuning, probe_distance, "> 0", positive);
    check_field!(errors, tuning, crouch_y_scale, "in (0, 1]", unit_scale);
    check_field!(errors, tuning, slide_y_scale, "in (0, 1]", unit_scale);
    check_field!(errors, tuning, body_mass, "> 0", positive);

    errors
}
