//! Embedded sample roster for the demo binary and tests.

use crate::body::{SkillBody, roster_from_json};

pub const SAMPLE_ROSTER_JSON: &str = r#"[
  {
    "id": "frontend",
    "name": "Frontend",
    "category": "Web",
    "orbit_radius": 6.0,
    "angular_speed": 0.5,
    "vertical_offset": 0.6,
    "size": 1.2,
    "color": [0.35, 0.65, 0.95],
    "proficiency": 90,
    "description": "Component-driven interfaces and design systems.",
    "technologies": ["TypeScript", "CSS", "WebGL"],
    "experience": [
      {
        "title": "Senior Engineer",
        "organization": "Acme Web",
        "period": "2021 - 2024",
        "description": "Led the interactive visualization team.",
        "tags": ["WebGL", "three"]
      }
    ]
  },
  {
    "id": "backend",
    "name": "Backend",
    "category": "Services",
    "orbit_radius": 8.5,
    "angular_speed": 0.35,
    "vertical_offset": -0.8,
    "size": 1.0,
    "color": [0.45, 0.9, 0.55],
    "proficiency": 80,
    "description": "APIs, queues and storage engines.",
    "technologies": ["Rust", "Postgres", "Redis"]
  },
  {
    "id": "devops",
    "name": "DevOps",
    "category": "Infrastructure",
    "orbit_radius": 11.0,
    "angular_speed": 0.22,
    "vertical_offset": 1.4,
    "size": 0.85,
    "color": [0.95, 0.6, 0.3],
    "proficiency": 65,
    "description": "Build pipelines and fleet automation.",
    "technologies": ["Kubernetes", "Terraform"]
  },
  {
    "id": "embedded",
    "name": "Embedded",
    "category": "Systems",
    "orbit_radius": 13.5,
    "angular_speed": 0.16,
    "vertical_offset": -1.6,
    "size": 0.75,
    "color": [0.8, 0.45, 0.9],
    "proficiency": 45,
    "description": "Firmware and realtime control loops.",
    "technologies": ["C", "RTOS"]
  }
]"#;

/// Parse the embedded roster. Validity of the embedded JSON is covered by
/// the tests below.
pub fn sample_roster() -> Vec<SkillBody> {
    roster_from_json(SAMPLE_ROSTER_JSON).expect("embedded sample roster is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster_parses() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 4);
        assert!(roster.iter().all(|b| b.orbit_radius > 0.0));
    }

    #[test]
    fn sample_ids_are_unique() {
        let roster = sample_roster();
        let mut ids: Vec<_> = roster.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roster.len());
    }
}
