//! Host-facing body descriptors and validation.
//!
//! Malformed values are clamped to safe defaults at this boundary rather
//! than allowed to crash the render loop later.

use anyhow::Context;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_ORBIT_RADIUS: f32 = 6.0;
pub const DEFAULT_ANGULAR_SPEED: f32 = 0.3;
const MIN_SIZE: f32 = 0.2;
const MAX_SIZE: f32 = 4.0;
const MAX_VERTICAL_OFFSET: f32 = 12.0;

/// One orbiting body as supplied by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBody {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub orbit_radius: f32,
    pub angular_speed: f32,
    #[serde(default)]
    pub vertical_offset: f32,
    #[serde(default = "default_size")]
    pub size: f32,
    /// Base color as linear RGB components in 0..=1.
    pub color: [f32; 3],
    pub proficiency: i32,
    /// Optional surface texture asset path. `None` is a first-class case:
    /// the body renders with its flat base-color material.
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
}

fn default_size() -> f32 {
    1.0
}

/// A work-history record attached to a body, passed through unchanged to the
/// detail payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Resource holding the caller-supplied body list the scene mounts from.
#[derive(Resource, Default, Clone)]
pub struct SkillRoster {
    pub bodies: Vec<SkillBody>,
}

impl SkillBody {
    /// Clamp out-of-range orbit and display parameters to safe defaults.
    pub fn sanitized(mut self) -> Self {
        if !self.orbit_radius.is_finite() || self.orbit_radius <= 0.0 {
            warn!(
                "body '{}': invalid orbit radius {}, using {}",
                self.id, self.orbit_radius, DEFAULT_ORBIT_RADIUS
            );
            self.orbit_radius = DEFAULT_ORBIT_RADIUS;
        }
        if !self.angular_speed.is_finite() {
            warn!(
                "body '{}': invalid angular speed, using {}",
                self.id, DEFAULT_ANGULAR_SPEED
            );
            self.angular_speed = DEFAULT_ANGULAR_SPEED;
        }
        if !self.vertical_offset.is_finite() {
            self.vertical_offset = 0.0;
        }
        self.vertical_offset = self
            .vertical_offset
            .clamp(-MAX_VERTICAL_OFFSET, MAX_VERTICAL_OFFSET);
        if !self.size.is_finite() {
            self.size = default_size();
        }
        self.size = self.size.clamp(MIN_SIZE, MAX_SIZE);
        self.proficiency = self.proficiency.clamp(0, 100);
        for c in &mut self.color {
            if !c.is_finite() {
                *c = 0.5;
            }
            *c = c.clamp(0.0, 1.0);
        }
        self
    }

    /// Proficiency clamped into the u8 range the components carry.
    pub fn proficiency_level(&self) -> u8 {
        self.proficiency.clamp(0, 100) as u8
    }

    /// Number of concentric proficiency rings to render.
    pub fn ring_count(&self) -> usize {
        (self.proficiency_level() / 20) as usize
    }

    pub fn base_color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }
}

/// Sanitize every body and drop duplicate ids, keeping the first occurrence.
pub fn sanitize_roster(bodies: Vec<SkillBody>) -> Vec<SkillBody> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(bodies.len());
    for body in bodies {
        if !seen.insert(body.id.clone()) {
            warn!("duplicate body id '{}' dropped", body.id);
            continue;
        }
        out.push(body.sanitized());
    }
    out
}

/// Parse a JSON body list and sanitize it.
pub fn roster_from_json(json: &str) -> anyhow::Result<Vec<SkillBody>> {
    let bodies: Vec<SkillBody> =
        serde_json::from_str(json).context("parsing skill body roster")?;
    Ok(sanitize_roster(bodies))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: &str) -> SkillBody {
        SkillBody {
            id: id.to_string(),
            name: id.to_string(),
            category: "Engineering".to_string(),
            orbit_radius: 6.0,
            angular_speed: 0.5,
            vertical_offset: 0.0,
            size: 1.0,
            color: [0.2, 0.6, 0.9],
            proficiency: 80,
            texture: None,
            description: String::new(),
            technologies: vec![],
            experience: vec![],
        }
    }

    #[test]
    fn sanitize_clamps_bad_orbit_radius() {
        let mut b = body("rust");
        b.orbit_radius = -3.0;
        let b = b.sanitized();
        assert_eq!(b.orbit_radius, DEFAULT_ORBIT_RADIUS);

        let mut b = body("rust");
        b.orbit_radius = f32::NAN;
        assert_eq!(b.sanitized().orbit_radius, DEFAULT_ORBIT_RADIUS);
    }

    #[test]
    fn sanitize_clamps_proficiency_into_range() {
        let mut b = body("rust");
        b.proficiency = 150;
        assert_eq!(b.sanitized().proficiency, 100);

        let mut b = body("rust");
        b.proficiency = -5;
        assert_eq!(b.sanitized().proficiency, 0);
    }

    #[test]
    fn ring_count_is_floored() {
        let mut b = body("rust");
        for (level, rings) in [(0, 0), (19, 0), (20, 1), (59, 2), (99, 4), (100, 5)] {
            b.proficiency = level;
            assert_eq!(b.ring_count(), rings, "level {level}");
        }
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let roster = sanitize_roster(vec![body("rust"), body("go"), body("rust")]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, "rust");
        assert_eq!(roster[1].id, "go");
    }

    #[test]
    fn roster_parses_from_json() {
        let json = r#"[{
            "id": "frontend",
            "name": "Frontend",
            "category": "Web",
            "orbit_radius": 6.0,
            "angular_speed": 0.5,
            "size": 1.2,
            "color": [0.9, 0.5, 0.2],
            "proficiency": 85,
            "technologies": ["ts", "css"],
            "experience": [{
                "title": "Engineer",
                "organization": "Acme",
                "period": "2020-2023"
            }]
        }]"#;
        let roster = roster_from_json(json).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "frontend");
        assert_eq!(roster[0].experience.len(), 1);
        assert_eq!(roster[0].technologies, vec!["ts", "css"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(roster_from_json("not json").is_err());
    }
}
