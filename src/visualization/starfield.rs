//! Background starfield.
//!
//! Star placement is a pure function of the star index, so the field is
//! identical on every mount without storing anything.

use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::orbit::SceneClock;
use crate::scene::SceneTag;

const STAR_COUNT: u32 = 220;
const SHELL_MIN: f32 = 70.0;
const SHELL_MAX: f32 = 110.0;
const STAR_MIN_SIZE: f32 = 0.08;
const STAR_MAX_SIZE: f32 = 0.3;
/// Radians per second of scene time.
const ROTATE_SPEED: f32 = 0.004;

/// Marker component for the starfield root entity.
#[derive(Component)]
pub struct Starfield;

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(1.0).mesh().ico(1).unwrap());
    let palette = [
        Color::srgb(0.95, 0.95, 1.0),
        Color::srgb(0.75, 0.85, 1.0),
        Color::srgb(1.0, 0.92, 0.8),
    ]
    .map(|color| {
        materials.add(StandardMaterial {
            base_color: color,
            unlit: true,
            ..default()
        })
    });

    commands
        .spawn((
            Starfield,
            SceneTag,
            Transform::IDENTITY,
            Visibility::Visible,
            Name::new("Starfield"),
        ))
        .with_children(|parent| {
            for i in 0..STAR_COUNT {
                let (position, size) = star_placement(i);
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(palette[(i % 3) as usize].clone()),
                    Transform::from_translation(position).with_scale(Vec3::splat(size)),
                    Pickable::IGNORE,
                ));
            }
        });
}

pub fn rotate_starfield(
    clock: Res<SceneClock>,
    mut fields: Query<&mut Transform, With<Starfield>>,
) {
    for mut transform in fields.iter_mut() {
        transform.rotate_y(ROTATE_SPEED * clock.delta);
    }
}

/// Deterministic placement for star `i`: position on a spherical shell and
/// a point size.
pub fn star_placement(i: u32) -> (Vec3, f32) {
    let u = unit(scramble(i.wrapping_mul(3).wrapping_add(1)));
    let v = unit(scramble(i.wrapping_mul(3).wrapping_add(2)));
    let w = unit(scramble(i.wrapping_mul(3).wrapping_add(3)));

    // Uniform direction on the sphere from two uniforms.
    let z = 2.0 * u - 1.0;
    let theta = TAU * v;
    let planar = (1.0 - z * z).max(0.0).sqrt();
    let direction = Vec3::new(planar * theta.cos(), z, planar * theta.sin());

    let distance = SHELL_MIN + (SHELL_MAX - SHELL_MIN) * w;
    let size = STAR_MIN_SIZE + (STAR_MAX_SIZE - STAR_MIN_SIZE) * unit(scramble(i ^ 0x9e3779b9));
    (direction * distance, size)
}

fn scramble(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846ca68b);
    x ^= x >> 16;
    x
}

fn unit(x: u32) -> f32 {
    x as f32 / u32::MAX as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_is_deterministic() {
        for i in 0..STAR_COUNT {
            assert_eq!(star_placement(i), star_placement(i));
        }
    }

    #[test]
    fn stars_sit_on_the_shell() {
        for i in 0..STAR_COUNT {
            let (position, size) = star_placement(i);
            let distance = position.length();
            assert!(
                (SHELL_MIN - 1e-3..=SHELL_MAX + 1e-3).contains(&distance),
                "star {i} at distance {distance}"
            );
            assert!((STAR_MIN_SIZE..=STAR_MAX_SIZE).contains(&size));
        }
    }

    #[test]
    fn neighboring_stars_do_not_coincide() {
        let (a, _) = star_placement(0);
        let (b, _) = star_placement(1);
        assert!((a - b).length() > 1.0);
    }
}
