//! Movement domain: player bootstrap from the active tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Facing, GameLayer, LocomotionController, LocomotionTuning, Player};

const CAPSULE_RADIUS: f32 = 0.5;

/// Spawn the player body. The spawned Y scale is recorded as the height every
/// crouch and slide restores to.
pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<LocomotionTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let transform = Transform::from_xyz(0.0, 2.0, 0.0);
    let segment = (2.0 * (tuning.half_height - CAPSULE_RADIUS)).max(0.0);

    info!(
        "Spawning player: walk={}, sprint={}, mass={}, max_slope={}",
        tuning.walk_speed, tuning.sprint_speed, tuning.body_mass, tuning.max_slope_angle
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            LocomotionController::new(transform.scale.y),
            Facing::default(),
        ),
        // Rendering
        (
            Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, segment))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
            transform,
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(CAPSULE_RADIUS, segment),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            LinearDamping(0.0),
            Mass(tuning.body_mass),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Default, GameLayer::Ground]),
        ),
    ));
}
