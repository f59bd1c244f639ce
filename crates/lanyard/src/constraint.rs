//! Distance-constraint relaxation.
//!
//! After integration the rope is re-tightened by Gauss-Seidel passes: each
//! constraint correction sees the positions already corrected earlier in the
//! same pass, which converges much faster than a parallel update for a
//! serial chain.

use crate::types::{Constraint, Particle};

/// Floor on inter-particle distance before dividing. Coincident particles
/// produce a zero correction instead of a NaN.
const DIST_EPSILON: f32 = 1e-6;

/// Ordered distance constraints linking adjacent chain particles.
#[derive(Clone, Debug)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// One constraint per adjacent pair: `particle_count - 1` constraints,
    /// each with the same `rest_length`.
    #[must_use]
    pub fn adjacent_pairs(particle_count: usize, rest_length: f32) -> Self {
        let constraints = (1..particle_count)
            .map(|i| Constraint {
                a: i - 1,
                b: i,
                rest_length,
            })
            .collect();
        Self { constraints }
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Runs `iterations` sequential relaxation passes over all constraints.
    ///
    /// Each correction is split evenly between the two endpoints (equal
    /// inverse mass). Pinned particles are never moved. When `dragged` names
    /// a particle, that particle is left untouched as well: while the user
    /// holds the card it acts as a second anchor, the chain pulls toward it
    /// and never the reverse.
    pub fn relax(&self, particles: &mut [Particle], iterations: usize, dragged: Option<usize>) {
        for _ in 0..iterations {
            for c in &self.constraints {
                let delta = particles[c.b].pos - particles[c.a].pos;
                let dist = delta.length().max(DIST_EPSILON);
                let correction = (c.rest_length - dist) / dist;
                let offset = delta * (correction * 0.5);

                if !particles[c.a].pinned && dragged != Some(c.a) {
                    particles[c.a].pos -= offset;
                }
                if !particles[c.b].pinned && dragged != Some(c.b) {
                    particles[c.b].pos += offset;
                }
            }
        }
    }

    /// Largest `|dist - rest_length|` across the set. Diagnostic.
    #[must_use]
    pub fn max_error(&self, particles: &[Particle]) -> f32 {
        self.constraints
            .iter()
            .map(|c| {
                let dist = particles[c.a].pos.distance(particles[c.b].pos);
                (dist - c.rest_length).abs()
            })
            .fold(0.0, f32::max)
    }
}
