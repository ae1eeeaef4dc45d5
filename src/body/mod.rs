//! Skill body data model
//!
//! Descriptors arriving from the host, the ECS components they become, and
//! the store that maps ids back to full records for selection payloads.

pub mod components;
pub mod descriptor;

pub use components::{Proficiency, Skill, SkillCategory, SkillId, SkillName, SkillStore};
pub use descriptor::{
    ExperienceRecord, SkillBody, SkillRoster, roster_from_json, sanitize_roster,
};
