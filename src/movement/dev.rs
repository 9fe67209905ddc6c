//! Movement domain: debug-only arena with flat ground and two ramps.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// Walkable under the default 40 degree limit.
const GENTLE_RAMP_DEG: f32 = 20.0;
/// Too steep to count as a slope.
const STEEP_RAMP_DEG: f32 = 50.0;

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let ramp_color = materials.add(Color::srgb(0.5, 0.4, 0.3));

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Default]);

    // Floor
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(80.0, 1.0, 80.0))),
        MeshMaterial3d(ground_color),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(80.0, 1.0, 80.0),
        ground_layers,
    ));

    for (x, angle) in [(-8.0, GENTLE_RAMP_DEG), (8.0, STEEP_RAMP_DEG)] {
        commands.spawn((
            Ground,
            Mesh3d(meshes.add(Cuboid::new(4.0, 0.5, 16.0))),
            MeshMaterial3d(ramp_color.clone()),
            Transform::from_xyz(x, 2.0, -14.0)
                .with_rotation(Quat::from_rotation_x(angle.to_radians())),
            RigidBody::Static,
            Collider::cuboid(4.0, 0.5, 16.0),
            ground_layers,
        ));
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
