//! Asynchronous surface-texture resolution.
//!
//! Bodies render with their flat base-color material until a texture load
//! resolves; a late texture is applied as a plain material swap on a later
//! frame. A failed load keeps the fallback and logs one diagnostic.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::body::SkillId;

/// Marker carrying an in-flight texture load for the entity's material.
#[derive(Component)]
pub struct PendingTexture(pub Handle<Image>);

pub fn resolve_pending_textures(
    asset_server: Res<AssetServer>,
    pending: Query<(Entity, &SkillId, &PendingTexture, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    for (entity, id, texture, material) in pending.iter() {
        match asset_server.get_load_state(texture.0.id()) {
            Some(LoadState::Loaded) => {
                if let Some(material) = materials.get_mut(&material.0) {
                    material.base_color_texture = Some(texture.0.clone());
                    material.base_color = Color::WHITE;
                }
                commands.entity(entity).remove::<PendingTexture>();
            }
            Some(LoadState::Failed(err)) => {
                warn!(
                    "texture for body '{}' failed to load, keeping flat color: {err}",
                    id.0
                );
                commands.entity(entity).remove::<PendingTexture>();
            }
            _ => {}
        }
    }
}
