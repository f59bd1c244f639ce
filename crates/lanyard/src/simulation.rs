//! Per-frame orchestration and the public update/query surface.
//!
//! The host owns the frame loop and calls [`LanyardSim::tick`] once per
//! animation frame; pointer callbacks arrive between ticks. Within one tick
//! the order is fixed: integrate, then relax, then the host reads positions.

use crate::chain::ParticleChain;
use crate::config::LanyardConfig;
use crate::constraint::ConstraintSet;
use crate::drag::DragController;
use crate::error::ConfigError;
use crate::trigger::GestureTrigger;
use crate::types::{Particle, Vec3};

/// The hanging-rope simulation with a draggable card at the free end.
#[derive(Debug)]
pub struct LanyardSim {
    config: LanyardConfig,
    chain: ParticleChain,
    constraints: ConstraintSet,
    drag: DragController,
    trigger: GestureTrigger,
    /// Snapshot of particle positions, refreshed after every mutation so the
    /// renderer reads a plain slice without per-frame allocation.
    positions: Vec<Vec3>,
}

impl LanyardSim {
    /// Builds the chain from a validated configuration.
    ///
    /// `on_threshold_crossed` is invoked at most once for the life of this
    /// instance, synchronously from [`end_drag`](Self::end_drag), when a
    /// release leaves the card below the pull threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when any option is out of range; no chain is
    /// built in that case.
    pub fn new(
        config: LanyardConfig,
        on_threshold_crossed: impl FnMut() + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let rest_length = config.rest_length();
        let chain = ParticleChain::new(config.anchor, config.segments, rest_length);
        let constraints = ConstraintSet::adjacent_pairs(chain.len(), rest_length);
        let positions = chain.particles().iter().map(|p| p.pos).collect();

        tracing::debug!(
            "lanyard chain initialized: {} segments, rest length {:.3}",
            config.segments,
            rest_length
        );

        Ok(Self {
            config,
            chain,
            constraints,
            drag: DragController::new(config.anchor, config.max_drag_distance),
            trigger: GestureTrigger::new(config.pull_threshold, Box::new(on_threshold_crossed)),
            positions,
        })
    }

    /// Advances the simulation by one frame: Verlet integration over all
    /// free particles, then the configured number of relaxation passes.
    pub fn tick(&mut self) {
        let dragged = self.dragged_index();
        self.chain
            .integrate(self.config.gravity, self.config.damping, dragged);
        self.constraints.relax(
            self.chain.particles_mut(),
            self.config.relaxation_iterations,
            dragged,
        );
        self.refresh_positions();
    }

    /// Current particle positions, ordered anchor to free endpoint.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.chain.particles()
    }

    /// Position of the card particle.
    #[must_use]
    pub fn free_endpoint(&self) -> Vec3 {
        self.chain.free_endpoint()
    }

    /// Hanging orientation of the card, derived from the last rope segment:
    /// `(tilt_x, tilt_z)` in radians, forward/back and sideways.
    #[must_use]
    pub fn card_tilt(&self) -> (f32, f32) {
        let particles = self.chain.particles();
        let end = particles[particles.len() - 1].pos;
        let prev = particles[particles.len() - 2].pos;
        let dir = (end - prev).normalized();
        let tilt_x = dir.z.atan2(dir.y);
        let tilt_z = -dir.x.atan2(dir.y);
        (tilt_x, tilt_z)
    }

    /// Pointer-down landed on the card (hit test done by the caller).
    pub fn begin_drag(&mut self) {
        self.drag.begin();
    }

    /// Feeds one pointer target, already unprojected into simulation space.
    ///
    /// Clamps the target to the drag radius and writes it straight into the
    /// card particle, bypassing integration for this tick. A no-op while no
    /// drag is active, so out-of-order pointer events are tolerated.
    pub fn update_drag(&mut self, target: Vec3) {
        if !self.drag.is_active() {
            return;
        }
        let clamped = self.drag.clamp_target(target);
        self.chain.set_free_endpoint(clamped);
        self.refresh_positions();
    }

    /// Pointer-up. Evaluates the release gesture on the active -> inactive
    /// transition only; a second call is a no-op. The rope then resumes
    /// swinging under gravity from wherever the card was left.
    pub fn end_drag(&mut self) {
        if self.drag.end() {
            self.trigger.check_on_release(self.chain.free_endpoint());
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Whether the one-shot release gesture has already fired.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Largest absolute distance error across the constraint set. Diagnostic.
    #[must_use]
    pub fn max_constraint_error(&self) -> f32 {
        self.constraints.max_error(self.chain.particles())
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn config(&self) -> &LanyardConfig {
        &self.config
    }

    fn dragged_index(&self) -> Option<usize> {
        self.drag.is_active().then(|| self.chain.free_index())
    }

    fn refresh_positions(&mut self) {
        for (slot, p) in self.positions.iter_mut().zip(self.chain.particles()) {
            *slot = p.pos;
        }
    }
}
