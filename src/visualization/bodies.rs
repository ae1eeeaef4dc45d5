//! Orbiting body rendering: core spheres, proficiency rings and the
//! hover/selection scale response.

use bevy::mesh::TorusMeshBuilder;
use bevy::prelude::*;

use crate::body::components::SkillEntry;
use crate::body::{Proficiency, Skill, SkillCategory, SkillId, SkillName, SkillRoster, SkillStore};
use crate::interaction::{InteractionState, wire_body_picking};
use crate::orbit::{OrbitParams, SceneClock, phase_offset, position};
use crate::scene::SceneTag;
use crate::visualization::glow::GlowShell;
use crate::visualization::texture::PendingTexture;

/// World radius of a size-1.0 body.
const BODY_BASE_RADIUS: f32 = 0.55;
/// Scale target while hovered or selected.
const ACTIVE_SCALE: f32 = 1.3;
const IDLE_SCALE: f32 = 1.0;
/// Fraction of the remaining distance covered per frame.
const SCALE_APPROACH: f32 = 0.1;
const GLOW_SCALE: f32 = 1.45;
const MAX_RINGS: usize = 5;
/// Ring radii are relative to the unit body sphere.
const RING_FIRST_RADIUS: f32 = 1.6;
const RING_SPACING: f32 = 0.4;
const RING_THICKNESS: f32 = 0.05;

/// Component storing the body's rendered base radius
#[derive(Component, Copy, Clone)]
pub struct BodyVisual {
    pub base_radius: f32,
}

/// Exponentially smoothed hover/selection scale state
#[derive(Component)]
pub struct ScaleSpring {
    pub current: f32,
}

/// Shared mesh handles for all bodies
#[derive(Resource)]
pub struct BodyAssets {
    sphere: Handle<Mesh>,
    glow_sphere: Handle<Mesh>,
    rings: Vec<Handle<Mesh>>,
}

pub fn setup_body_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let sphere = meshes.add(Sphere::new(1.0).mesh().ico(4).unwrap());
    let glow_sphere = meshes.add(Sphere::new(1.0).mesh().ico(3).unwrap());
    let rings = (0..MAX_RINGS)
        .map(|k| {
            let radius = RING_FIRST_RADIUS + RING_SPACING * k as f32;
            meshes.add(
                TorusMeshBuilder::new(radius - RING_THICKNESS, radius + RING_THICKNESS)
                    .major_resolution(48)
                    .minor_resolution(8),
            )
        })
        .collect();

    commands.insert_resource(BodyAssets {
        sphere,
        glow_sphere,
        rings,
    });
}

/// Flat base-color material used until (and unless) a surface texture
/// resolves. The visible color is exactly the configured body color.
pub fn flat_body_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 0.25,
        perceptual_roughness: 0.8,
        ..default()
    }
}

fn glow_material(emissive: LinearRgba) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::BLACK,
        emissive,
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    }
}

fn ring_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(0.6),
        emissive: color.to_linear() * 0.8,
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    }
}

/// Spawn one entity per roster body: the pickable core sphere with glow and
/// ring children, starting at its time-zero orbit position.
pub fn spawn_skill_bodies(
    roster: Option<Res<SkillRoster>>,
    assets: Res<BodyAssets>,
    asset_server: Res<AssetServer>,
    mut store: ResMut<SkillStore>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let Some(roster) = roster else {
        warn!("no skill roster supplied, scene mounts empty");
        return;
    };

    for body in crate::body::sanitize_roster(roster.bodies.clone()) {
        let color = body.base_color();
        let params = OrbitParams {
            radius: body.orbit_radius,
            angular_speed: body.angular_speed,
            vertical_offset: body.vertical_offset,
            phase: phase_offset(&body.id),
        };
        let base_radius = BODY_BASE_RADIUS * body.size;
        let glow_emissive = color.to_linear() * 1.5;

        let entity = commands
            .spawn((
                Skill,
                SkillId(body.id.clone()),
                SkillName(body.name.clone()),
                SkillCategory(body.category.clone()),
                Proficiency(body.proficiency_level()),
                params,
                BodyVisual { base_radius },
                ScaleSpring {
                    current: IDLE_SCALE,
                },
                Mesh3d(assets.sphere.clone()),
                MeshMaterial3d(materials.add(flat_body_material(color))),
                Transform::from_translation(position(&params, 0.0))
                    .with_scale(Vec3::splat(base_radius)),
                Pickable::default(),
                SceneTag,
                Name::new(body.name.clone()),
            ))
            .id();

        if let Some(path) = &body.texture {
            commands
                .entity(entity)
                .insert(PendingTexture(asset_server.load(path.clone())));
        }

        let ring_mat = materials.add(ring_material(color));
        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh3d(assets.glow_sphere.clone()),
                MeshMaterial3d(materials.add(glow_material(glow_emissive))),
                GlowShell {
                    emissive: glow_emissive,
                    phase: params.phase,
                },
                Transform::from_scale(Vec3::splat(GLOW_SCALE)),
                Pickable::IGNORE,
            ));
            for k in 0..body.ring_count().min(MAX_RINGS) {
                parent.spawn((
                    Mesh3d(assets.rings[k].clone()),
                    MeshMaterial3d(ring_mat.clone()),
                    Transform::IDENTITY,
                    Pickable::IGNORE,
                ));
            }
        });

        wire_body_picking(&mut commands, entity, &body.id);

        store.items.insert(
            body.id.clone(),
            SkillEntry {
                descriptor: body,
                entity: Some(entity),
            },
        );
    }
}

/// Recompute every body's translation from the shared clock. Runs before
/// anything that consumes positions this frame.
pub fn update_orbit_positions(
    clock: Res<SceneClock>,
    mut bodies: Query<(&OrbitParams, &mut Transform), With<Skill>>,
) {
    for (params, mut transform) in bodies.iter_mut() {
        transform.translation = position(params, clock.elapsed);
    }
}

/// Ease the rendered scale toward the hover/selection target, a fixed
/// fraction of the remaining distance per frame.
pub fn smooth_hover_scale(
    state: Res<InteractionState>,
    mut bodies: Query<(&SkillId, &BodyVisual, &mut ScaleSpring, &mut Transform), With<Skill>>,
) {
    for (id, visual, mut spring, mut transform) in bodies.iter_mut() {
        let target = if state.is_active(&id.0) {
            ACTIVE_SCALE
        } else {
            IDLE_SCALE
        };
        spring.current = approach(spring.current, target);
        transform.scale = Vec3::splat(visual.base_radius * spring.current);
    }
}

fn approach(current: f32, target: f32) -> f32 {
    current + (target - current) * SCALE_APPROACH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_material_keeps_the_base_color() {
        let color = Color::srgb(0.9, 0.3, 0.1);
        let material = flat_body_material(color);
        assert_eq!(material.base_color, color);
        assert!(material.base_color_texture.is_none());
    }

    #[test]
    fn scale_moves_a_tenth_of_the_remaining_distance() {
        let next = approach(1.0, ACTIVE_SCALE);
        assert!((next - 1.03).abs() < 1e-6);
    }

    #[test]
    fn scale_converges_without_overshoot() {
        let mut scale = 1.0;
        for _ in 0..200 {
            let previous = scale;
            scale = approach(scale, ACTIVE_SCALE);
            assert!(scale >= previous);
            assert!(scale <= ACTIVE_SCALE + 1e-6);
        }
        assert!((scale - ACTIVE_SCALE).abs() < 1e-3);
    }
}
