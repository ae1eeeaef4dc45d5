//! Pointer interaction resolver
//!
//! Hover and selection are independent state machines: a body can stay
//! selected after the pointer leaves it. At most one body is hovered and at
//! most one is selected at any time; switching either is atomic.

use bevy::picking::events::{Click, Move, Out, Over, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::body::{ExperienceRecord, SkillBody, SkillStore};
use crate::camera::CameraConfig;
use crate::scene::EngineSet;

/// Transient pointer state owned by the scene.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct InteractionState {
    pub hovered: Option<String>,
    pub selected: Option<String>,
    /// World-space position under the pointer, updated on every pointer
    /// move that hits body geometry.
    pub pointer_world: Option<Vec3>,
}

impl InteractionState {
    /// True when the body drives emphasized visuals. The renderer and the
    /// label projector both read this, so they can never disagree.
    pub fn is_active(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id) || self.selected.as_deref() == Some(id)
    }

    /// Hovering a body displaces any previously hovered body.
    pub fn begin_hover(&mut self, id: &str) {
        self.hovered = Some(id.to_owned());
    }

    /// Clears hover only if `id` is still the hovered body.
    pub fn end_hover(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Select a body, replacing any previous selection. Returns false when
    /// the body was already selected (no duplicate selection events).
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected.as_deref() == Some(id) {
            return false;
        }
        self.selected = Some(id.to_owned());
        true
    }

    /// Clear the selection, returning the previously selected id.
    pub fn clear_selection(&mut self) -> Option<String> {
        self.selected.take()
    }
}

/// Cursor position at the last primary-button press, for telling a click
/// from a camera drag.
#[derive(Resource, Debug, Default)]
pub struct DragTracker {
    pub pressed_at: Option<Vec2>,
}

/// Message raised when a body is selected, carrying its full record.
#[derive(Message, Debug, Clone)]
pub struct BodySelected {
    pub body: SkillBody,
}

/// Message raised when the selection is cleared.
#[derive(Message, Debug, Clone)]
pub struct BodyDeselected {
    pub id: String,
}

/// Message raised when the host activates an experience entry on its detail
/// surface. Defined here so both sides share the payload type.
#[derive(Message, Debug, Clone)]
pub struct ExperienceSelected {
    pub experience: ExperienceRecord,
}

/// Plugin for pointer interaction state and selection messages.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionState>()
            .init_resource::<DragTracker>()
            .add_message::<BodySelected>()
            .add_message::<BodyDeselected>()
            .add_message::<ExperienceSelected>()
            .add_systems(
                Update,
                (record_pointer_press, update_pointer_world, deselect_on_escape)
                    .in_set(EngineSet::Input),
            );
    }
}

/// Attach hover and click observers to a body's hit-geometry entity.
pub fn wire_body_picking(commands: &mut Commands, entity: Entity, id: &str) {
    let over_id = id.to_owned();
    let out_id = id.to_owned();
    let click_id = id.to_owned();

    commands
        .entity(entity)
        .observe(
            move |mut ev: On<Pointer<Over>>, mut state: ResMut<InteractionState>| {
                state.begin_hover(&over_id);
                ev.propagate(false);
            },
        )
        .observe(
            move |mut ev: On<Pointer<Out>>, mut state: ResMut<InteractionState>| {
                state.end_hover(&out_id);
                ev.propagate(false);
            },
        )
        .observe(
            move |mut ev: On<Pointer<Click>>,
                  mut state: ResMut<InteractionState>,
                  store: Res<SkillStore>,
                  tracker: Res<DragTracker>,
                  config: Res<CameraConfig>,
                  windows: Query<&Window, With<PrimaryWindow>>,
                  mut selections: MessageWriter<BodySelected>| {
                if ev.button != PointerButton::Primary {
                    return;
                }
                // A press/release pair that wandered is camera manipulation,
                // not a selection.
                if let (Some(pressed), Ok(window)) = (tracker.pressed_at, windows.single())
                    && let Some(cursor) = window.cursor_position()
                    && cursor.distance(pressed) > config.click_drag_threshold_px
                {
                    return;
                }
                ev.propagate(false);
                if state.select(&click_id)
                    && let Some(entry) = store.items.get(&click_id)
                {
                    selections.write(BodySelected {
                        body: entry.descriptor.clone(),
                    });
                }
            },
        );
}

/// Remember where the primary button went down this interaction.
fn record_pointer_press(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<DragTracker>,
) {
    let Some(buttons) = buttons else { return };
    if buttons.just_pressed(MouseButton::Left)
        && let Ok(window) = windows.single()
    {
        tracker.pressed_at = window.cursor_position();
    }
}

/// Track the world-space point under the pointer from picking hits.
fn update_pointer_world(
    mut moves: MessageReader<Pointer<Move>>,
    mut state: ResMut<InteractionState>,
) {
    for ev in moves.read() {
        if let Some(position) = ev.hit.position {
            state.pointer_world = Some(position);
        }
    }
}

/// Escape clears the selection and tells the host.
fn deselect_on_escape(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut state: ResMut<InteractionState>,
    mut deselections: MessageWriter<BodyDeselected>,
) {
    let Some(keys) = keys else { return };
    if keys.just_pressed(KeyCode::Escape)
        && let Some(id) = state.clear_selection()
    {
        deselections.write(BodyDeselected { id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_is_exclusive() {
        let mut state = InteractionState::default();
        state.begin_hover("a");
        state.begin_hover("b");
        assert_eq!(state.hovered.as_deref(), Some("b"));
    }

    #[test]
    fn stale_hover_exit_does_not_clear_new_hover() {
        let mut state = InteractionState::default();
        state.begin_hover("b");
        state.end_hover("a");
        assert_eq!(state.hovered.as_deref(), Some("b"));
        state.end_hover("b");
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn selection_is_exclusive_and_replaces() {
        let mut state = InteractionState::default();
        assert!(state.select("x"));
        assert!(state.select("y"));
        assert_eq!(state.selected.as_deref(), Some("y"));
    }

    #[test]
    fn reselecting_the_same_body_is_a_no_op() {
        let mut state = InteractionState::default();
        assert!(state.select("x"));
        assert!(!state.select("x"));
        assert_eq!(state.selected.as_deref(), Some("x"));
    }

    #[test]
    fn selection_survives_hover_leaving() {
        let mut state = InteractionState::default();
        state.begin_hover("x");
        state.select("x");
        state.end_hover("x");
        assert_eq!(state.selected.as_deref(), Some("x"));
        assert!(state.is_active("x"));
    }

    #[test]
    fn sequential_selects_emit_one_change_each() {
        // Selecting X then Y produces exactly two selection changes and the
        // second one is Y; X is never reported again afterward.
        let mut state = InteractionState::default();
        let mut emitted: Vec<&str> = Vec::new();
        for id in ["x", "y"] {
            if state.select(id) {
                emitted.push(id);
            }
        }
        assert_eq!(emitted, vec!["x", "y"]);
        assert_eq!(state.selected.as_deref(), Some("y"));
    }

    #[test]
    fn clear_selection_returns_previous_id() {
        let mut state = InteractionState::default();
        state.select("x");
        assert_eq!(state.clear_selection().as_deref(), Some("x"));
        assert_eq!(state.clear_selection(), None);
    }
}
