//! Skill body components for the Bevy ECS system

use bevy::prelude::*;
use std::collections::HashMap;

use crate::body::descriptor::SkillBody;

/// Component marker for orbiting skill body entities
#[derive(Component)]
pub struct Skill;

/// Component storing the stable string id for a body entity
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct SkillId(pub String);

/// Component storing the body's display name
#[derive(Component)]
pub struct SkillName(pub String);

/// Component storing the body's category label
#[derive(Component)]
pub struct SkillCategory(pub String);

/// Component storing the proficiency level, clamped to 0..=100.
/// Drives secondary visuals only, never orbit math.
#[derive(Component, Copy, Clone, Debug)]
pub struct Proficiency(pub u8);

/// Resource mapping body ids to their full records and spawned entities
#[derive(Resource, Default)]
pub struct SkillStore {
    pub items: HashMap<String, SkillEntry>,
}

/// Individual body entry with its descriptor and entity handle
pub struct SkillEntry {
    pub descriptor: SkillBody,
    pub entity: Option<Entity>,
}
