//! Screen-space labels glued to moving bodies.
//!
//! Every frame each label is re-anchored above its body's current world
//! position, so labels never detach from a moving body. Emphasis uses the
//! same hover-or-selected test as the body renderer.

use bevy::prelude::*;

use crate::body::{Proficiency, Skill, SkillCategory, SkillId, SkillName};
use crate::camera::SceneCamera;
use crate::interaction::InteractionState;
use crate::scene::SceneTag;

/// Gap between the top of the rendered sphere and the label anchor.
const LABEL_MARGIN: f32 = 0.4;
/// Rough horizontal centering offset for the text node.
const LABEL_HALF_WIDTH: f32 = 42.0;
const FONT_SIZE: f32 = 13.0;
const FONT_SIZE_ACTIVE: f32 = 16.0;

/// Component tying a label node to its body entity
#[derive(Component)]
pub struct SkillLabel {
    pub body: Entity,
}

/// Marker placed on a body once its label exists
#[derive(Component)]
pub struct Labelled(pub Entity);

/// Spawn label nodes for bodies that do not have one yet.
pub fn ensure_labels(
    bodies: Query<(Entity, &SkillName), (With<Skill>, Without<Labelled>)>,
    mut commands: Commands,
) {
    for (body, name) in bodies.iter() {
        let label = commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(-1000.0),
                    top: Val::Px(-1000.0),
                    ..default()
                },
                Text::new(name.0.clone()),
                TextFont {
                    font_size: FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgba(0.92, 0.95, 1.0, 0.9)),
                Visibility::Hidden,
                SkillLabel { body },
                SceneTag,
            ))
            .id();
        commands.entity(body).insert(Labelled(label));
    }
}

/// Re-anchor every label to its body's current world position.
pub fn project_labels(
    state: Res<InteractionState>,
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    bodies: Query<(&Transform, &SkillId, &SkillName, &SkillCategory, &Proficiency)>,
    mut labels: Query<(
        &SkillLabel,
        &mut Node,
        &mut Text,
        &mut TextFont,
        &mut Visibility,
    )>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut text, mut font, mut visibility) in labels.iter_mut() {
        let Ok((transform, id, name, category, proficiency)) = bodies.get(label.body) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let anchor = label_anchor(transform.translation, transform.scale.y);
        let Ok(screen) = camera.world_to_viewport(camera_transform, anchor) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        node.left = Val::Px(screen.x - LABEL_HALF_WIDTH);
        node.top = Val::Px(screen.y);
        *visibility = Visibility::Visible;

        let active = state.is_active(&id.0);
        let desired = label_text(&name.0, &category.0, proficiency.0, active);
        if text.0 != desired {
            text.0 = desired;
        }
        font.font_size = if active { FONT_SIZE_ACTIVE } else { FONT_SIZE };
    }
}

/// World-space anchor directly above the body: its position lifted by the
/// rendered radius plus a fixed margin. X and Z match the body exactly.
pub fn label_anchor(position: Vec3, rendered_radius: f32) -> Vec3 {
    position + Vec3::Y * (rendered_radius + LABEL_MARGIN)
}

fn label_text(name: &str, category: &str, proficiency: u8, active: bool) -> String {
    if active {
        format!("{name}\n{category} · {proficiency}%")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_shares_the_body_x_and_z() {
        let position = Vec3::new(4.2, 1.5, -3.3);
        let anchor = label_anchor(position, 0.7);
        assert_eq!(anchor.x, position.x);
        assert_eq!(anchor.z, position.z);
        assert!((anchor.y - (1.5 + 0.7 + LABEL_MARGIN)).abs() < 1e-6);
    }

    #[test]
    fn emphasis_adds_the_metadata_line() {
        assert_eq!(label_text("Rust", "Systems", 90, false), "Rust");
        assert_eq!(label_text("Rust", "Systems", 90, true), "Rust\nSystems · 90%");
    }
}
