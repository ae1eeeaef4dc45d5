//! Closed-form orbit positions.

use bevy::prelude::*;
use std::f32::consts::TAU;

/// Per-body orbit parameters. Orbits are planar circles: the angle advances
/// linearly with scene time and the vertical offset is fixed.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    /// Distance from the scene center.
    pub radius: f32,
    /// Radians per second of scene time.
    pub angular_speed: f32,
    /// Fixed height of the orbit plane.
    pub vertical_offset: f32,
    /// Constant angular bias so bodies sharing orbit parameters are not
    /// co-located. Derived from the body id, stable across reloads.
    pub phase: f32,
}

/// Position of a body at scene time `t`. Pure: same inputs, same output.
pub fn position(params: &OrbitParams, t: f32) -> Vec3 {
    let angle = t * params.angular_speed + params.phase;
    Vec3::new(
        angle.cos() * params.radius,
        params.vertical_offset,
        angle.sin() * params.radius,
    )
}

/// Deterministic phase offset for a body id, FNV-1a scaled into [0, tau).
pub fn phase_offset(id: &str) -> f32 {
    let mut hash: u32 = 2166136261;
    for b in id.as_bytes() {
        hash ^= *b as u32;
        hash = hash.wrapping_mul(16777619);
    }
    (hash as f32 / u32::MAX as f32) * TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn params(radius: f32, angular_speed: f32, phase: f32) -> OrbitParams {
        OrbitParams {
            radius,
            angular_speed,
            vertical_offset: 1.5,
            phase,
        }
    }

    #[test]
    fn position_is_deterministic() {
        let p = params(6.0, 0.5, 0.7);
        let a = position(&p, 12.34);
        let b = position(&p, 12.34);
        assert_eq!(a, b);
    }

    #[test]
    fn position_returns_after_one_full_period() {
        let p = params(4.0, 0.8, 1.1);
        let period = TAU / p.angular_speed;
        let a = position(&p, 3.0);
        let b = position(&p, 3.0 + period);
        assert!((a - b).length() < 1e-3, "drift over one period: {a:?} vs {b:?}");
    }

    #[test]
    fn half_period_flips_x() {
        // radius 6, angular speed 0.5: period is 4*pi, so the half-period
        // point lands at t = 2*pi with the X axis negated and Z back at zero.
        let p = params(6.0, 0.5, 0.0);

        let start = position(&p, 0.0);
        assert!((start.x - 6.0).abs() < 1e-4);
        assert!(start.z.abs() < 1e-4);
        assert!((start.y - 1.5).abs() < 1e-6);

        let half = position(&p, 2.0 * PI);
        assert!((half.x + 6.0).abs() < 1e-4);
        assert!(half.z.abs() < 1e-3);
    }

    #[test]
    fn vertical_offset_is_constant() {
        let p = params(5.0, 1.3, 2.0);
        for i in 0..10 {
            let pos = position(&p, i as f32 * 0.37);
            assert_eq!(pos.y, 1.5);
        }
    }

    #[test]
    fn phase_offset_is_stable_and_bounded() {
        let a = phase_offset("frontend");
        let b = phase_offset("frontend");
        assert_eq!(a, b);
        assert!((0.0..TAU).contains(&a));
    }

    #[test]
    fn phase_offset_separates_distinct_ids() {
        let a = phase_offset("frontend");
        let b = phase_offset("backend");
        assert_ne!(a, b);
    }
}
