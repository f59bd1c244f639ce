use thiserror::Error;

/// Construction-time configuration rejection.
///
/// Nothing in steady-state operation can fail; every variant here is raised
/// by [`crate::LanyardSim::new`] before the first tick.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("segments must be at least 1, got {0}")]
    InvalidSegments(usize),
    #[error("rope length must be positive and finite, got {0}")]
    InvalidRopeLength(f32),
    #[error("relaxation iterations must be at least 1, got {0}")]
    InvalidIterations(usize),
    #[error("max drag distance must be positive and finite, got {0}")]
    InvalidMaxDragDistance(f32),
    #[error("pull threshold must be positive and finite, got {0}")]
    InvalidPullThreshold(f32),
    #[error("damping must lie inside (0, 1), got {0}")]
    InvalidDamping(f32),
}
