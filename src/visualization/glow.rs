//! Glow shell pulsing.

use bevy::prelude::ChildOf;
use bevy::prelude::*;

use crate::body::SkillId;
use crate::interaction::InteractionState;
use crate::orbit::SceneClock;

/// Pulse frequency in radians per second; the full cycle is about pi
/// seconds long.
const PULSE_FREQUENCY: f32 = 2.0;
/// Emissive boost while the parent body is hovered or selected.
const ACTIVE_BOOST: f32 = 1.6;

/// Translucent additive shell around a body's core sphere
#[derive(Component)]
pub struct GlowShell {
    /// Emissive color at pulse factor 1.0.
    pub emissive: LinearRgba,
    pub phase: f32,
}

/// Sinusoidal glow intensity, independent of hover state, overlaid
/// multiplicatively with the hover/selection boost.
pub fn pulse_glow(
    clock: Res<SceneClock>,
    state: Res<InteractionState>,
    parents: Query<&SkillId>,
    shells: Query<(&GlowShell, &ChildOf, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (shell, child_of, material) in shells.iter() {
        let boost = parents
            .get(child_of.parent())
            .is_ok_and(|id| state.is_active(&id.0))
            .then_some(ACTIVE_BOOST)
            .unwrap_or(1.0);

        if let Some(material) = materials.get_mut(&material.0) {
            material.emissive =
                shell.emissive * (pulse_factor(clock.elapsed, shell.phase) * boost);
        }
    }
}

fn pulse_factor(t: f32, phase: f32) -> f32 {
    0.75 + 0.25 * (t * PULSE_FREQUENCY + phase).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn pulse_stays_within_bounds() {
        for i in 0..100 {
            let factor = pulse_factor(i as f32 * 0.13, 0.4);
            assert!((0.5..=1.0).contains(&factor));
        }
    }

    #[test]
    fn pulse_period_is_about_pi_seconds() {
        let a = pulse_factor(1.2, 0.0);
        let b = pulse_factor(1.2 + PI, 0.0);
        assert!((a - b).abs() < 1e-4);
    }
}
