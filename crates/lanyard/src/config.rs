//! Simulation parameters, fixed at construction.

use crate::error::ConfigError;
use crate::types::Vec3;

/// Recognized options for a lanyard simulation.
///
/// The defaults are the tuned values the interactive control ships with; all
/// of them are plain numbers in simulation space, not physical units.
#[derive(Copy, Clone, Debug)]
pub struct LanyardConfig {
    /// Number of rope segments. The chain holds `segments + 1` particles.
    pub segments: usize,
    /// Total rest length of the rope.
    pub rope_length: f32,
    /// Downward pull applied each step, scaled by the integrator.
    pub gravity: f32,
    /// Velocity retained per step, inside `(0, 1)`.
    pub damping: f32,
    /// Gauss-Seidel passes over the constraint set per tick.
    pub relaxation_iterations: usize,
    /// Hard cap on the free endpoint's distance from the anchor while dragged.
    pub max_drag_distance: f32,
    /// Release displacement below the anchor plane that fires the gesture.
    pub pull_threshold: f32,
    /// World-space position of the pinned top particle.
    pub anchor: Vec3,
}

impl Default for LanyardConfig {
    fn default() -> Self {
        Self {
            segments: 30,
            rope_length: 15.0,
            gravity: 0.5,
            damping: 0.9,
            relaxation_iterations: 5,
            max_drag_distance: 40.0,
            pull_threshold: 1.0,
            anchor: Vec3::new(-12.0, 15.0, 0.0),
        }
    }
}

impl LanyardConfig {
    /// Rest length of a single segment; uniform across the chain.
    #[must_use]
    pub fn rest_length(&self) -> f32 {
        self.rope_length / self.segments as f32
    }

    /// Rejects malformed parameters before any chain is built.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] variant naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments == 0 {
            return Err(ConfigError::InvalidSegments(self.segments));
        }
        if !(self.rope_length.is_finite() && self.rope_length > 0.0) {
            return Err(ConfigError::InvalidRopeLength(self.rope_length));
        }
        if self.relaxation_iterations == 0 {
            return Err(ConfigError::InvalidIterations(self.relaxation_iterations));
        }
        if !(self.max_drag_distance.is_finite() && self.max_drag_distance > 0.0) {
            return Err(ConfigError::InvalidMaxDragDistance(self.max_drag_distance));
        }
        if !(self.pull_threshold.is_finite() && self.pull_threshold > 0.0) {
            return Err(ConfigError::InvalidPullThreshold(self.pull_threshold));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}
