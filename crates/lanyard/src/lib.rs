#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # Lanyard Physics Core
//!
//! A hanging-rope simulation with a draggable weighted card at the free end,
//! used as an interactive call-to-action control.
//!
//! The rope is a Verlet-integrated particle chain: no explicit velocities,
//! distance constraints relaxed with a fixed number of Gauss-Seidel passes
//! per frame. The user can grab the card, drag it within a clamped radius
//! around the anchor, and release it; pulling it far enough down fires a
//! one-shot callback (navigation, haptics — whatever the host wires in).
//!
//! ## Key Components
//!
//! -   **Chain:** [`ParticleChain`] owns the ordered mass points and the
//!     integration pass; the anchor is pinned, the card never is.
//! -   **Constraints:** [`ConstraintSet`] re-tightens adjacent particle
//!     pairs toward a uniform rest length after every integration.
//! -   **Drag:** [`DragController`] clamps externally unprojected pointer
//!     targets and overrides the card position while a drag is active.
//! -   **Trigger:** [`GestureTrigger`] latches once the card is released
//!     below the pull threshold.
//! -   **Orchestration:** [`LanyardSim`] is the per-frame entry point the
//!     host ticks once per animation frame.
//!
//! The crate renders nothing. The host unprojects pointer coordinates, hit
//! tests the card, calls the drag lifecycle methods, and rebuilds its
//! geometry from [`LanyardSim::positions`] each frame ([`Vec3`] is
//! `bytemuck::Pod`, so the slice casts straight to vertex bytes).
//!
//! ## Usage
//!
//! ```rust
//! use lanyard::{LanyardConfig, LanyardSim, Vec3};
//!
//! let mut sim = LanyardSim::new(LanyardConfig::default(), || {
//!     // navigate, vibrate, ...
//! })?;
//!
//! // once per animation frame:
//! sim.tick();
//! let _points: &[Vec3] = sim.positions();
//!
//! // pointer lifecycle, driven by the host:
//! sim.begin_drag();
//! sim.update_drag(Vec3::new(-4.0, 2.0, 0.0));
//! sim.end_drag();
//! # Ok::<(), lanyard::ConfigError>(())
//! ```

pub mod chain;
pub mod config;
pub mod constraint;
pub mod drag;
pub mod error;
pub mod simulation;
pub mod trigger;
pub mod types;

pub use chain::ParticleChain;
pub use config::LanyardConfig;
pub use constraint::ConstraintSet;
pub use drag::{DragController, DragState};
pub use error::ConfigError;
pub use simulation::LanyardSim;
pub use trigger::{GestureTrigger, TriggerState};
pub use types::{Constraint, Particle, Vec3};
