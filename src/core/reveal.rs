//! One-shot reveal controller for scroll-triggered section animations
//!
//! Each animated section owns one [`RevealController`]. The controller asks the
//! host for a viewport observation, waits for the first intersecting
//! notification, flips to [`RevealPhase::Visible`] and releases the
//! observation. It never subscribes again.
//!
//! The controller knows nothing about the DOM: the observation itself is an
//! [`ObservationHandle`] produced by whatever closure is passed to
//! [`RevealController::attach`]. In the browser that closure wraps an
//! `IntersectionObserver`; in tests it is a counter.

use thiserror::Error;

/// Visible fraction used when a section does not pick its own threshold
pub const DEFAULT_THRESHOLD: f64 = 0.12;

/// Fraction of an element's area that must be on screen to count as intersecting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Create a threshold, clamping into `0.0..=1.0`.
    ///
    /// Non-finite input falls back to [`DEFAULT_THRESHOLD`].
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(DEFAULT_THRESHOLD)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Lifecycle of a reveal controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Created, no observation registered yet
    #[default]
    Unobserved,
    /// Observation registered, waiting for the first intersection
    Observing,
    /// Fired once; terminal
    Visible,
}

/// Why an observation could not be registered
#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("viewport intersection is not supported on this platform")]
    Unsupported,

    #[error("failed to observe element: {0}")]
    Host(String),
}

/// A live viewport observation that can be cancelled
pub trait ObservationHandle {
    /// Stop delivering notifications. Called at most once per handle.
    fn disconnect(&mut self);
}

/// State machine driving a single section's reveal
#[derive(Debug)]
pub struct RevealController<H: ObservationHandle> {
    threshold: Threshold,
    phase: RevealPhase,
    handle: Option<H>,
}

impl<H: ObservationHandle> RevealController<H> {
    pub fn new(threshold: impl Into<Threshold>) -> Self {
        Self {
            threshold: threshold.into(),
            phase: RevealPhase::Unobserved,
            handle: None,
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    /// Whether an observation handle is currently held
    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.handle.is_some()
    }

    /// Register the observation.
    ///
    /// `observe` is only invoked from [`RevealPhase::Unobserved`]. If it fails
    /// the section is treated as visible straight away, so a missing
    /// intersection primitive never hides content. Returns the visibility
    /// after attaching.
    pub fn attach<F>(&mut self, observe: F) -> bool
    where
        F: FnOnce(Threshold) -> Result<H, ObserveError>,
    {
        if self.phase != RevealPhase::Unobserved {
            return self.is_visible();
        }

        match observe(self.threshold) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.phase = RevealPhase::Observing;
            }
            Err(e) => {
                leptos::logging::warn!("Reveal observation unavailable, showing section: {}", e);
                self.phase = RevealPhase::Visible;
            }
        }

        self.is_visible()
    }

    /// Feed one notification from the observation.
    ///
    /// Returns `true` only for the call that performs the
    /// `observing -> visible` transition. Notifications before `attach`,
    /// after teardown, or after firing are ignored.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> bool {
        if self.phase != RevealPhase::Observing || !is_intersecting {
            return false;
        }

        self.release();
        self.phase = RevealPhase::Visible;
        true
    }

    /// Cancel a pending observation, e.g. when the section unmounts.
    ///
    /// A controller torn down before firing goes back to `Unobserved` and
    /// keeps `visible == false`; a fired controller stays `Visible`.
    pub fn teardown(&mut self) {
        if self.phase == RevealPhase::Observing {
            self.release();
            self.phase = RevealPhase::Unobserved;
        }
    }

    fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
        }
    }
}

impl<H: ObservationHandle> Drop for RevealController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Handle that records how often it was disconnected
    struct CountingHandle {
        disconnects: Rc<Cell<u32>>,
    }

    impl ObservationHandle for CountingHandle {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    fn attached(threshold: f64) -> (RevealController<CountingHandle>, Rc<Cell<u32>>) {
        let disconnects = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(threshold);
        let counter = disconnects.clone();
        controller.attach(move |_| {
            Ok(CountingHandle {
                disconnects: counter,
            })
        });
        (controller, disconnects)
    }

    #[test]
    fn test_threshold_clamps_and_defaults() {
        assert_eq!(Threshold::new(0.5).value(), 0.5);
        assert_eq!(Threshold::new(-1.0).value(), 0.0);
        assert_eq!(Threshold::new(4.0).value(), 1.0);
        assert_eq!(Threshold::new(f64::NAN).value(), DEFAULT_THRESHOLD);
        assert_eq!(Threshold::default().value(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_new_controller_is_unobserved() {
        let controller: RevealController<CountingHandle> = RevealController::new(0.1);
        assert_eq!(controller.phase(), RevealPhase::Unobserved);
        assert!(!controller.is_visible());
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_attach_passes_threshold_and_starts_observing() {
        let mut seen = None;
        let mut controller = RevealController::new(0.08);
        let visible = controller.attach(|threshold| {
            seen = Some(threshold.value());
            Ok(CountingHandle {
                disconnects: Rc::new(Cell::new(0)),
            })
        });

        assert!(!visible);
        assert_eq!(seen, Some(0.08));
        assert_eq!(controller.phase(), RevealPhase::Observing);
        assert!(controller.is_observing());
    }

    #[test]
    fn test_first_intersection_fires_and_releases() {
        let (mut controller, disconnects) = attached(0.12);

        assert!(controller.on_intersection(true));
        assert!(controller.is_visible());
        assert!(!controller.is_observing());
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_visible_is_terminal_under_repeated_notifications() {
        let (mut controller, disconnects) = attached(0.12);
        controller.on_intersection(true);

        for intersecting in [false, true, false, true, true] {
            assert!(!controller.on_intersection(intersecting));
            assert!(controller.is_visible());
        }
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_non_intersecting_notifications_do_not_fire() {
        let (mut controller, disconnects) = attached(0.12);

        for _ in 0..10 {
            assert!(!controller.on_intersection(false));
        }
        assert!(!controller.is_visible());
        assert!(controller.is_observing());
        assert_eq!(disconnects.get(), 0);
    }

    #[test]
    fn test_never_intersecting_element_can_be_torn_down() {
        let (mut controller, disconnects) = attached(0.12);
        controller.on_intersection(false);

        controller.teardown();
        assert!(!controller.is_visible());
        assert!(!controller.is_observing());
        assert_eq!(disconnects.get(), 1);

        // Stale notification after teardown must not touch the section
        assert!(!controller.on_intersection(true));
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_teardown_after_fire_is_noop() {
        let (mut controller, disconnects) = attached(0.12);
        controller.on_intersection(true);
        controller.teardown();

        assert!(controller.is_visible());
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_drop_disconnects_pending_observation() {
        let (controller, disconnects) = attached(0.12);
        drop(controller);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_attach_is_not_repeated_after_fire() {
        let (mut controller, _) = attached(0.12);
        controller.on_intersection(true);

        let mut called = false;
        let visible = controller.attach(|_| {
            called = true;
            Err(ObserveError::Unsupported)
        });

        assert!(!called);
        assert!(visible);
    }

    #[test]
    fn test_missing_primitive_fails_soft_to_visible() {
        let mut controller: RevealController<CountingHandle> = RevealController::new(0.1);
        let visible = controller.attach(|_| Err(ObserveError::Unsupported));

        assert!(visible);
        assert_eq!(controller.phase(), RevealPhase::Visible);
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_host_error_fails_soft_to_visible() {
        let mut controller: RevealController<CountingHandle> = RevealController::new(0.1);
        let visible = controller.attach(|_| Err(ObserveError::Host("SyntaxError".to_string())));
        assert!(visible);
    }

    #[test]
    fn test_instances_are_independent() {
        let (mut first, first_disconnects) = attached(0.12);
        let (mut second, second_disconnects) = attached(0.05);

        assert!(second.on_intersection(true));
        assert!(!first.is_visible());
        assert!(first.is_observing());

        assert!(first.on_intersection(true));
        assert_eq!(first_disconnects.get(), 1);
        assert_eq!(second_disconnects.get(), 1);
    }
}
