//! Orbitview, a real-time skill-orbit visualization engine.
//!
//! A set of "skill" bodies orbits a central point. Bodies can be hovered and
//! selected with the pointer, screen-space labels track them every frame, and
//! a selection opens a high-fidelity detail close-up. Everything animates off
//! a single scene clock advanced once per frame.

pub mod body;
pub mod camera;
pub mod detail;
pub mod interaction;
pub mod orbit;
pub mod sample;
pub mod scene;
pub mod visualization;

pub mod prelude {
    pub use crate::body::{ExperienceRecord, SkillBody, SkillRoster, SkillStore};
    pub use crate::camera::{CameraConfig, CameraPlugin, SceneCamera};
    pub use crate::detail::DetailPlugin;
    pub use crate::interaction::{
        BodyDeselected, BodySelected, ExperienceSelected, InteractionPlugin, InteractionState,
    };
    pub use crate::orbit::{OrbitPlugin, SceneClock};
    pub use crate::scene::{
        EngineSet, EngineStatus, RenderCapabilityFailed, SceneTag, ScenePlugin, UnmountScene,
    };
    pub use crate::visualization::VisualizationPlugin;
}
