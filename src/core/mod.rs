//! Core domain: app-wide scaffolding shared by every other domain.

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Fixed overview of the arena. Following the player is left to a camera rig.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 12.0, 24.0).looking_at(Vec3::new(0.0, 0.0, -6.0), Vec3::Y),
    ));
}
