//! Orbit model
//!
//! Pure orbit math plus the shared scene clock every per-frame system
//! reads. Positions are a function of (orbit parameters, elapsed time) and
//! are never persisted.

use bevy::prelude::*;

pub mod clock;
pub mod model;

pub use clock::{SceneClock, advance_scene_clock};
pub use model::{OrbitParams, phase_offset, position};

use crate::scene::EngineSet;

/// Plugin for the orbit model and scene clock.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .add_systems(Update, advance_scene_clock.in_set(EngineSet::Clock));
    }
}
