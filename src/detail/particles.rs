//! Particle ring geometry for the detail overlay.

use bevy::prelude::*;
use std::f32::consts::TAU;

pub const PARTICLE_COUNT: u32 = 100;
pub const RING_RADIUS: f32 = 2.6;
/// Per-particle vertical jitter bound.
pub const MAX_JITTER: f32 = 0.18;

/// Positions for the ring particles: evenly spaced on a circle with a
/// deterministic vertical jitter per particle.
pub fn ring_particles(count: u32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count.max(1) as f32 * TAU;
            Vec3::new(
                angle.cos() * RING_RADIUS,
                jitter(i),
                angle.sin() * RING_RADIUS,
            )
        })
        .collect()
}

fn jitter(i: u32) -> f32 {
    let mut hash: u32 = 2166136261;
    for b in i.to_le_bytes() {
        hash ^= b as u32;
        hash = hash.wrapping_mul(16777619);
    }
    (hash as f32 / u32::MAX as f32 * 2.0 - 1.0) * MAX_JITTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_has_the_requested_particle_count() {
        assert_eq!(ring_particles(PARTICLE_COUNT).len(), PARTICLE_COUNT as usize);
    }

    #[test]
    fn particles_sit_on_the_ring_radius() {
        for (i, p) in ring_particles(PARTICLE_COUNT).iter().enumerate() {
            let planar = (p.x * p.x + p.z * p.z).sqrt();
            assert!((planar - RING_RADIUS).abs() < 1e-4, "particle {i}");
        }
    }

    #[test]
    fn jitter_stays_bounded() {
        for p in ring_particles(PARTICLE_COUNT) {
            assert!(p.y.abs() <= MAX_JITTER + 1e-6);
        }
    }

    #[test]
    fn ring_is_deterministic() {
        assert_eq!(ring_particles(PARTICLE_COUNT), ring_particles(PARTICLE_COUNT));
    }
}
