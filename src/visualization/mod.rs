//! Visualization module
//!
//! Rendering systems for the orbiting bodies and their secondary visuals:
//! glow shells, proficiency rings, the central body, the starfield and the
//! screen-space labels.

use bevy::prelude::*;

pub mod bodies;
pub mod central;
pub mod glow;
pub mod labels;
pub mod starfield;
pub mod texture;

pub use bodies::{BodyVisual, ScaleSpring};
pub use central::CentralBody;
pub use starfield::Starfield;

use crate::scene::EngineSet;

/// Plugin for body, effect and label rendering.
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                (bodies::setup_body_assets, bodies::spawn_skill_bodies).chain(),
                central::spawn_central_body,
                starfield::spawn_starfield,
            ),
        )
        .add_systems(
            Update,
            bodies::update_orbit_positions.in_set(EngineSet::Orbit),
        )
        .add_systems(
            Update,
            (
                bodies::smooth_hover_scale,
                glow::pulse_glow,
                central::animate_central_body,
                starfield::rotate_starfield,
                texture::resolve_pending_textures,
            )
                .in_set(EngineSet::Visuals),
        )
        .add_systems(
            Update,
            (labels::ensure_labels, labels::project_labels)
                .chain()
                .in_set(EngineSet::Project),
        );
    }
}
