//! Rope particle storage and Verlet integration.
//!
//! The chain owns the ordered particle sequence: index 0 is the pinned
//! anchor, the last index is the free endpoint the user can grab. Sequence
//! length is fixed for the lifetime of the chain.

use crate::types::{Particle, Vec3};

/// Timestep factor folded into the per-step gravity displacement. Visually
/// tuned, not derived from a physical dt.
const GRAVITY_STEP_SCALE: f32 = 0.1;

/// Ordered rope particles, anchor first.
#[derive(Clone, Debug)]
pub struct ParticleChain {
    particles: Vec<Particle>,
}

impl ParticleChain {
    /// Lays the particles out along a straight vertical line hanging from
    /// `anchor`, spaced by `rest_length`. Only the anchor is pinned.
    #[must_use]
    pub fn new(anchor: Vec3, segments: usize, rest_length: f32) -> Self {
        let particles = (0..=segments)
            .map(|i| {
                let pos = Vec3::new(anchor.x, anchor.y - i as f32 * rest_length, anchor.z);
                Particle::new(pos, i == 0)
            })
            .collect();
        Self { particles }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Index of the free endpoint (the card).
    #[must_use]
    pub fn free_index(&self) -> usize {
        self.particles.len() - 1
    }

    #[must_use]
    pub fn free_endpoint(&self) -> Vec3 {
        self.particles[self.free_index()].pos
    }

    pub(crate) fn set_free_endpoint(&mut self, pos: Vec3) {
        let i = self.free_index();
        self.particles[i].pos = pos;
    }

    /// Advances every free particle one step.
    ///
    /// Velocity is inferred from the previous position, damped, applied, and
    /// gravity is added as a position delta. Pinned particles never move.
    /// When `dragged` names a particle, that particle is skipped up front:
    /// its position is owned by the drag controller for this tick, and
    /// integrating it would inject spurious velocity.
    pub fn integrate(&mut self, gravity: f32, damping: f32, dragged: Option<usize>) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            if p.pinned {
                continue;
            }
            if dragged == Some(i) {
                continue;
            }

            let vel = (p.pos - p.prev_pos) * damping;
            p.prev_pos = p.pos;
            p.pos += vel;
            p.pos.y -= gravity * GRAVITY_STEP_SCALE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_hangs_straight_down_from_anchor() {
        let anchor = Vec3::new(2.0, 10.0, -1.0);
        let chain = ParticleChain::new(anchor, 4, 0.5);
        assert_eq!(chain.len(), 5);
        assert!(chain.particles()[0].pinned);
        for (i, p) in chain.particles().iter().enumerate() {
            assert!((p.pos.x - anchor.x).abs() < 1e-6);
            assert!((p.pos.y - (anchor.y - i as f32 * 0.5)).abs() < 1e-6);
            assert!((p.pos.z - anchor.z).abs() < 1e-6);
            if i > 0 {
                assert!(!p.pinned);
            }
        }
    }

    #[test]
    fn integration_skips_pinned_and_dragged() {
        let mut chain = ParticleChain::new(Vec3::new(0.0, 5.0, 0.0), 2, 1.0);
        let anchor_before = chain.particles()[0].pos;
        let free_before = chain.free_endpoint();
        let dragged = Some(chain.free_index());

        chain.integrate(0.5, 0.9, dragged);

        assert_eq!(chain.particles()[0].pos, anchor_before);
        assert_eq!(chain.free_endpoint(), free_before);
        // The middle particle did fall.
        assert!(chain.particles()[1].pos.y < 4.0);
    }

    #[test]
    fn gravity_accumulates_into_implicit_velocity() {
        let mut chain = ParticleChain::new(Vec3::new(0.0, 0.0, 0.0), 1, 1.0);
        let start = chain.free_endpoint().y;
        chain.integrate(0.5, 0.9, None);
        let after_one = chain.free_endpoint().y;
        chain.integrate(0.5, 0.9, None);
        let after_two = chain.free_endpoint().y;
        // Second step falls farther than the first: carried velocity plus gravity.
        assert!((start - after_one) < (after_one - after_two));
    }
}
