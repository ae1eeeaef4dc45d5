//! Detail overlay
//!
//! A second camera on its own render layer shows a high-fidelity close-up
//! of the selected body in an inset viewport. The whole overlay is one
//! entity tree: spawned when the selection changes to a new body, despawned
//! the moment the selection clears or moves on.

use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::render::view::RenderLayers;
use bevy::window::PrimaryWindow;

use crate::body::{SkillId, SkillStore};
use crate::interaction::InteractionState;
use crate::orbit::SceneClock;
use crate::scene::{EngineSet, SceneTag};
use crate::visualization::texture::PendingTexture;

pub mod particles;

pub use particles::{PARTICLE_COUNT, ring_particles};

const DETAIL_LAYER: usize = 1;
const SPHERE_RADIUS: f32 = 1.6;
const PARTICLE_SIZE: f32 = 0.05;
const RING_SPIN_SPEED: f32 = 0.4;
const BODY_SPIN_SPEED: f32 = 0.25;
/// Inset viewport size as a fraction of the window's short edge.
const VIEWPORT_FRACTION: f32 = 0.38;
const VIEWPORT_MARGIN_FRACTION: f32 = 0.02;

/// Marker component for the overlay camera.
#[derive(Component)]
pub struct DetailCamera;

/// Marker component for the close-up sphere.
#[derive(Component)]
pub struct DetailBody;

/// Marker component for the rotating particle ring.
#[derive(Component)]
pub struct DetailRing;

/// Tracks the mounted overlay and which body it shows.
#[derive(Resource, Default)]
pub struct DetailScene {
    pub root: Option<Entity>,
    pub shown: Option<String>,
}

/// Shared mesh handles for the overlay
#[derive(Resource)]
struct DetailAssets {
    sphere: Handle<Mesh>,
    particle: Handle<Mesh>,
}

/// Plugin for the detail overlay.
pub struct DetailPlugin;

impl Plugin for DetailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DetailScene>()
            .add_systems(Startup, setup_detail_assets)
            .add_systems(
                Update,
                (
                    sync_detail_overlay,
                    layout_detail_viewport,
                    spin_detail_elements,
                )
                    .in_set(EngineSet::Visuals),
            );
    }
}

fn setup_detail_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(DetailAssets {
        sphere: meshes.add(Sphere::new(1.0).mesh().ico(6).unwrap()),
        particle: meshes.add(Sphere::new(1.0).mesh().ico(1).unwrap()),
    });
}

/// Mount or unmount the overlay whenever the selection changes.
fn sync_detail_overlay(
    state: Res<InteractionState>,
    store: Res<SkillStore>,
    assets: Res<DetailAssets>,
    mut detail: ResMut<DetailScene>,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    if state.selected == detail.shown {
        return;
    }

    // Tear the previous overlay down before anything else; the root may
    // already be gone if the whole scene was unmounted.
    if let Some(root) = detail.root.take()
        && let Ok(mut entity) = commands.get_entity(root)
    {
        entity.despawn();
    }
    detail.shown = state.selected.clone();

    let Some(id) = state.selected.as_deref() else {
        return;
    };
    let Some(entry) = store.items.get(id) else {
        warn!("selected body '{id}' missing from store, no detail overlay");
        return;
    };

    let descriptor = &entry.descriptor;
    let color = descriptor.base_color();

    let sphere_mesh = assets.sphere.clone();
    let sphere_material = materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 1.2,
        perceptual_roughness: 0.35,
        metallic: 0.1,
        ..default()
    });
    let particle_mesh = assets.particle.clone();
    let particle_material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        emissive: color.to_linear() * 2.5,
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });
    let texture = descriptor
        .texture
        .as_ref()
        .map(|path| asset_server.load(path.clone()));

    let root = commands
        .spawn((
            SceneTag,
            Transform::IDENTITY,
            Visibility::Visible,
            RenderLayers::layer(DETAIL_LAYER),
            Name::new(format!("Detail: {}", descriptor.name)),
        ))
        .id();

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Camera3d::default(),
            Camera {
                order: 1,
                clear_color: ClearColorConfig::None,
                ..default()
            },
            RenderLayers::layer(DETAIL_LAYER),
            DetailCamera,
            Transform::from_xyz(0.0, 1.4, 6.5).looking_at(Vec3::ZERO, Vec3::Y),
        ));

        let mut sphere = parent.spawn((
            Mesh3d(sphere_mesh),
            MeshMaterial3d(sphere_material),
            SkillId(descriptor.id.clone()),
            DetailBody,
            RenderLayers::layer(DETAIL_LAYER),
            Transform::from_scale(Vec3::splat(SPHERE_RADIUS)),
            Pickable::IGNORE,
        ));
        if let Some(handle) = texture {
            sphere.insert(PendingTexture(handle));
        }

        parent.spawn((
            PointLight {
                intensity: 2_500_000.0,
                range: 60.0,
                shadows_enabled: false,
                ..default()
            },
            RenderLayers::layer(DETAIL_LAYER),
            Transform::from_xyz(3.0, 4.0, 3.0),
        ));

        parent
            .spawn((
                DetailRing,
                RenderLayers::layer(DETAIL_LAYER),
                Transform::IDENTITY,
                Visibility::Visible,
            ))
            .with_children(|ring| {
                for position in ring_particles(PARTICLE_COUNT) {
                    ring.spawn((
                        Mesh3d(particle_mesh.clone()),
                        MeshMaterial3d(particle_material.clone()),
                        RenderLayers::layer(DETAIL_LAYER),
                        Transform::from_translation(position)
                            .with_scale(Vec3::splat(PARTICLE_SIZE)),
                        Pickable::IGNORE,
                    ));
                }
            });
    });

    detail.root = Some(root);
}

/// Keep the overlay viewport pinned to the window's bottom-right corner.
fn layout_detail_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<&mut Camera, With<DetailCamera>>,
) {
    let Ok(window) = windows.single() else { return };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let width = window.physical_width();
    let height = window.physical_height();
    if width == 0 || height == 0 {
        return;
    }

    let size = ((width.min(height) as f32) * VIEWPORT_FRACTION) as u32;
    let margin = ((width as f32) * VIEWPORT_MARGIN_FRACTION) as u32;
    camera.viewport = Some(Viewport {
        physical_position: UVec2::new(
            width.saturating_sub(size + margin),
            height.saturating_sub(size + margin),
        ),
        physical_size: UVec2::splat(size.max(1)),
        ..default()
    });
}

/// Continuous rotation of the close-up sphere and its particle ring.
fn spin_detail_elements(
    clock: Res<SceneClock>,
    mut rings: Query<&mut Transform, (With<DetailRing>, Without<DetailBody>)>,
    mut bodies: Query<&mut Transform, (With<DetailBody>, Without<DetailRing>)>,
) {
    for mut transform in rings.iter_mut() {
        transform.rotate_y(RING_SPIN_SPEED * clock.delta);
    }
    for mut transform in bodies.iter_mut() {
        transform.rotate_y(BODY_SPIN_SPEED * clock.delta);
    }
}
