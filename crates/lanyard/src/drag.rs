//! Pointer-driven drag of the free endpoint.
//!
//! Hit testing and unprojection are the rendering collaborator's problem;
//! this controller only receives targets already expressed in simulation
//! space and clamps them to a radius around the anchor.

use crate::types::Vec3;

/// Mutable drag bookkeeping, touched only by the pointer lifecycle.
#[derive(Copy, Clone, Debug)]
pub struct DragState {
    pub active: bool,
    pub anchor: Vec3,
    pub max_distance: f32,
}

/// Translates pointer targets into a clamped position for the free endpoint.
#[derive(Copy, Clone, Debug)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub const fn new(anchor: Vec3, max_distance: f32) -> Self {
        Self {
            state: DragState {
                active: false,
                anchor,
                max_distance,
            },
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Pointer-down landed on the card.
    pub fn begin(&mut self) {
        if !self.state.active {
            tracing::debug!("drag started");
        }
        self.state.active = true;
    }

    /// Pointer-up. Returns `true` only on the active -> inactive transition,
    /// so a duplicated up event cannot re-evaluate the release gesture.
    pub fn end(&mut self) -> bool {
        let was_active = self.state.active;
        self.state.active = false;
        if was_active {
            tracing::debug!("drag released");
        }
        was_active
    }

    /// Clamps `target` to at most `max_distance` from the anchor, preserving
    /// direction. A hard cap, not a spring.
    #[must_use]
    pub fn clamp_target(&self, target: Vec3) -> Vec3 {
        let offset = target - self.state.anchor;
        let dist = offset.length();
        if dist > self.state.max_distance {
            self.state.anchor + offset * (self.state.max_distance / dist)
        } else {
            target
        }
    }
}
