//! Content domain: data-driven locomotion tuning loaded from RON at startup.

mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use validation::{TuningValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::LocomotionTuning;

pub const TUNING_PATH: &str = "assets/data/locomotion.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .add_systems(PreStartup, load_tuning_resource);
    }
}

/// Replace the default tuning with the RON file, if it loads and validates.
fn load_tuning_resource(mut tuning: ResMut<LocomotionTuning>) {
    let loaded = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default locomotion tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            warn!("{}", error);
        }
        warn!(
            "{} invalid tuning field(s); using default locomotion tuning",
            errors.len()
        );
        return;
    }

    info!(
        "Loaded locomotion tuning from {}: walk={}, sprint={}, max_slope={}",
        TUNING_PATH, loaded.walk_speed, loaded.sprint_speed, loaded.max_slope_angle
    );
    *tuning = loaded;
}
