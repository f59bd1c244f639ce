//! One-shot release gesture.

use crate::types::Vec3;

/// Latch state for the release gesture. Once `fired` is set it stays set for
/// the life of the simulation instance.
#[derive(Copy, Clone, Debug)]
pub struct TriggerState {
    pub fired: bool,
    pub threshold_y: f32,
}

/// Watches the free endpoint on release and fires the registered callback at
/// most once.
pub struct GestureTrigger {
    state: TriggerState,
    callback: Box<dyn FnMut()>,
}

impl GestureTrigger {
    pub fn new(threshold_y: f32, callback: Box<dyn FnMut()>) -> Self {
        Self {
            state: TriggerState {
                fired: false,
                threshold_y,
            },
            callback,
        }
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.state.fired
    }

    #[must_use]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Evaluates the gesture for one release transition.
    ///
    /// Fires synchronously when the endpoint was pulled below the threshold
    /// plane. Idempotent: later qualifying releases are ignored.
    pub fn check_on_release(&mut self, endpoint: Vec3) {
        if self.state.fired {
            return;
        }
        if endpoint.y < -self.state.threshold_y {
            self.state.fired = true;
            tracing::info!(
                "pull threshold crossed at y={:.3}, firing release callback",
                endpoint.y
            );
            (self.callback)();
        }
    }
}

impl std::fmt::Debug for GestureTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureTrigger")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_trigger(threshold: f32) -> (GestureTrigger, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let trigger = GestureTrigger::new(
            threshold,
            Box::new(move || seen.set(seen.get() + 1)),
        );
        (trigger, count)
    }

    #[test]
    fn fires_once_below_threshold() {
        let (mut trigger, count) = counting_trigger(1.0);
        trigger.check_on_release(Vec3::new(0.0, -1.5, 0.0));
        assert_eq!(count.get(), 1);
        assert!(trigger.has_fired());
        trigger.check_on_release(Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn shallow_release_leaves_latch_clear() {
        let (mut trigger, count) = counting_trigger(1.0);
        trigger.check_on_release(Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(count.get(), 0);
        assert!(!trigger.has_fired());
        // A later deep release still fires.
        trigger.check_on_release(Vec3::new(0.0, -1.1, 0.0));
        assert_eq!(count.get(), 1);
    }
}
