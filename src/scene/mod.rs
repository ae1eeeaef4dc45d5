//! Scene composition and lifecycle
//!
//! Owns the per-frame ordering contract (clock, then orbit positions, then
//! visuals, then label projection), scene teardown, and the render
//! capability probe the host uses to decide whether to swap in a
//! non-rendering fallback view.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::render::renderer::RenderDevice;

use crate::body::SkillStore;
use crate::interaction::InteractionState;

/// Per-frame system sets, chained in order. Body positions are written in
/// `Orbit`; everything consuming them (renderer state, labels, picking
/// geometry) runs in `Visuals` or `Project`, never before.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineSet {
    /// Pointer and lifecycle input handling.
    Input,
    /// The single write of the shared scene clock.
    Clock,
    /// Orbit position computation.
    Orbit,
    /// Body, glow, ring, central-body, starfield and camera updates.
    Visuals,
    /// Screen-space label projection.
    Project,
}

/// Marker component for every root entity the scene owns. Teardown despawns
/// all of them, children included.
#[derive(Component)]
pub struct SceneTag;

/// Whether a 3-D rendering surface is available to this process.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    #[default]
    Ready,
    Unavailable,
}

/// Message asking the engine to tear the mounted scene down.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct UnmountScene;

/// Boundary signal that no rendering surface could be provided. The host
/// decides what to show instead; the engine never hangs on it.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct RenderCapabilityFailed;

/// Plugin for scene composition, frame ordering and lifecycle.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EngineStatus>()
            .add_message::<UnmountScene>()
            .add_message::<RenderCapabilityFailed>()
            .insert_resource(GlobalAmbientLight {
                brightness: 120.0,
                ..default()
            })
            .configure_sets(
                Update,
                (
                    EngineSet::Input,
                    EngineSet::Clock,
                    EngineSet::Orbit,
                    EngineSet::Visuals,
                    EngineSet::Project,
                )
                    .chain(),
            )
            .add_systems(Startup, detect_render_capability)
            .add_systems(Update, handle_unmount.in_set(EngineSet::Input));
    }
}

/// Probe for a rendering device and signal the host if none exists.
fn detect_render_capability(
    device: Option<Res<RenderDevice>>,
    mut status: ResMut<EngineStatus>,
    mut failures: MessageWriter<RenderCapabilityFailed>,
) {
    if device.is_some() {
        *status = EngineStatus::Ready;
        return;
    }
    error!("no rendering device available, signaling capability failure");
    *status = EngineStatus::Unavailable;
    failures.write(RenderCapabilityFailed);
}

/// Despawn every scene-owned root and reset transient state. Pending asset
/// loads die with their entities; their completion is never observed.
fn handle_unmount(
    mut requests: MessageReader<UnmountScene>,
    roots: Query<Entity, With<SceneTag>>,
    mut commands: Commands,
    mut store: Option<ResMut<SkillStore>>,
    mut state: Option<ResMut<InteractionState>>,
) {
    if requests.read().next().is_none() {
        return;
    }
    let mut count = 0usize;
    for entity in roots.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    if let Some(store) = store.as_mut() {
        store.items.clear();
    }
    if let Some(state) = state.as_mut() {
        **state = InteractionState::default();
    }
    info!("scene unmounted, {count} roots despawned");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::texture::PendingTexture;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ScenePlugin);
        app
    }

    #[test]
    fn headless_probe_reports_unavailable() {
        let mut app = test_app();
        app.update();
        assert_eq!(
            *app.world().resource::<EngineStatus>(),
            EngineStatus::Unavailable
        );
    }

    #[test]
    fn unmount_despawns_scene_roots() {
        let mut app = test_app();
        app.update();

        let a = app.world_mut().spawn(SceneTag).id();
        let b = app.world_mut().spawn(SceneTag).id();
        let bystander = app.world_mut().spawn_empty().id();

        app.world_mut()
            .resource_mut::<Messages<UnmountScene>>()
            .write(UnmountScene);
        app.update();

        assert!(app.world().get_entity(a).is_err());
        assert!(app.world().get_entity(b).is_err());
        assert!(app.world().get_entity(bystander).is_ok());
    }

    #[test]
    fn unmount_with_pending_texture_load_is_safe() {
        // Teardown while an asset load is still in flight must not panic and
        // must remove the entity the completion would have touched.
        let mut app = test_app();
        app.update();

        let body = app
            .world_mut()
            .spawn((SceneTag, PendingTexture(Handle::default())))
            .id();

        app.world_mut()
            .resource_mut::<Messages<UnmountScene>>()
            .write(UnmountScene);
        app.update();

        assert!(app.world().get_entity(body).is_err());
    }
}
