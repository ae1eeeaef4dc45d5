//! Central body rendering and animation.

use bevy::prelude::*;

use crate::orbit::SceneClock;
use crate::scene::SceneTag;

pub const CENTRAL_RADIUS: f32 = 2.2;
const SPIN_SPEED: f32 = 0.12;
const PULSE_AMPLITUDE: f32 = 0.04;
const PULSE_FREQUENCY: f32 = 1.5;

/// Marker component for the central body entity.
#[derive(Component)]
pub struct CentralBody;

/// Spawn the decorative central body at the scene origin. It doubles as the
/// scene's main light source.
pub fn spawn_central_body(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(CENTRAL_RADIUS).mesh().ico(5).unwrap());
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.78, 0.35),
        emissive: LinearRgba::new(4.0, 2.6, 0.9, 1.0),
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        PointLight {
            intensity: 1_500_000.0,
            range: 120.0,
            color: Color::srgb(1.0, 0.9, 0.7),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Pickable::IGNORE,
        CentralBody,
        SceneTag,
        Name::new("Central Body"),
    ));
}

/// Self-rotation plus a subtle pulsing scale, both driven by the shared
/// clock.
pub fn animate_central_body(
    clock: Res<SceneClock>,
    mut bodies: Query<&mut Transform, With<CentralBody>>,
) {
    for mut transform in bodies.iter_mut() {
        transform.rotate_y(SPIN_SPEED * clock.delta);
        transform.scale = Vec3::splat(pulse_scale(clock.elapsed));
    }
}

fn pulse_scale(t: f32) -> f32 {
    1.0 + PULSE_AMPLITUDE * (t * PULSE_FREQUENCY).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_scale_stays_near_unity() {
        for i in 0..100 {
            let scale = pulse_scale(i as f32 * 0.21);
            assert!((1.0 - PULSE_AMPLITUDE..=1.0 + PULSE_AMPLITUDE).contains(&scale));
        }
    }
}
