//! The shared scene clock.

use bevy::prelude::*;

/// Elapsed scene time in seconds, written exactly once per frame.
///
/// Every other per-frame system treats this as read-only; `speed` scales the
/// flow of scene time without touching the host's frame timer.
#[derive(Resource, Debug)]
pub struct SceneClock {
    pub elapsed: f32,
    pub delta: f32,
    pub speed: f32,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            speed: 1.0,
        }
    }
}

impl SceneClock {
    /// Advance by one frame's worth of real time.
    pub fn tick(&mut self, frame_delta: f32) {
        let scaled = (frame_delta * self.speed).max(0.0);
        self.delta = scaled;
        self.elapsed += scaled;
    }
}

/// System to advance the scene clock from the frame timer.
pub fn advance_scene_clock(time: Res<Time>, mut clock: ResMut<SceneClock>) {
    let dt = time.delta_secs();
    clock.tick(dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_defaults_to_zero_at_unit_speed() {
        let clock = SceneClock::default();
        assert_eq!(clock.elapsed, 0.0);
        assert_eq!(clock.speed, 1.0);
    }

    #[test]
    fn tick_accumulates_scaled_time() {
        let mut clock = SceneClock::default();
        clock.speed = 2.0;
        clock.tick(0.5);
        assert!((clock.elapsed - 1.0).abs() < 1e-6);
        assert!((clock.delta - 1.0).abs() < 1e-6);
        clock.tick(0.25);
        assert!((clock.elapsed - 1.5).abs() < 1e-6);
    }

    #[test]
    fn negative_speed_never_rewinds() {
        let mut clock = SceneClock::default();
        clock.tick(1.0);
        clock.speed = -3.0;
        clock.tick(1.0);
        assert!((clock.elapsed - 1.0).abs() < 1e-6);
        assert_eq!(clock.delta, 0.0);
    }
}
