//! Eased count-up for headline metrics
//!
//! A [`CountUp`] starts once (when its section is revealed) and then maps
//! frame timestamps to an integer between zero and the target using an
//! ease-out cubic curve.

/// Default animation length
pub const DEFAULT_DURATION_MS: f64 = 1600.0;

/// Ease-out cubic on `0.0..=1.0`; input outside the range is clamped
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    1.0 - (1.0 - p).powi(3)
}

/// Value shown `elapsed_ms` into an animation towards `target`
pub fn value_at(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let eased = ease_out_cubic(elapsed_ms / duration_ms);
    (eased * f64::from(target)).round() as u32
}

/// One-shot counter driven by frame timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
    current: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
            current: 0,
        }
    }

    pub fn value(&self) -> u32 {
        self.current
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start at `now_ms`. Returns `false` if the counter already started.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    /// Advance to `now_ms` and return the value to display.
    ///
    /// Before [`CountUp::start`] the value stays at zero.
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        if let Some(started) = self.started_at {
            self.current = value_at(self.target, now_ms - started, self.duration_ms);
        }
        self.current
    }

    /// Whether the counter has reached its target
    pub fn is_finished(&self) -> bool {
        self.has_started() && self.current == self.target
    }
}

impl Default for CountUp {
    fn default() -> Self {
        Self::new(0, DEFAULT_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        assert_eq!(ease_out_cubic(f64::NAN), 0.0);
    }

    #[test]
    fn test_ease_front_loads_progress() {
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_value_at_bounds() {
        assert_eq!(value_at(70, 0.0, 1600.0), 0);
        assert_eq!(value_at(70, 1600.0, 1600.0), 70);
        assert_eq!(value_at(70, 5000.0, 1600.0), 70);
        assert_eq!(value_at(70, 10.0, 0.0), 70);
    }

    #[test]
    fn test_value_is_monotonic() {
        let mut last = 0;
        for frame in 0..=100 {
            let value = value_at(70, f64::from(frame) * 16.0, 1600.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 70);
    }

    #[test]
    fn test_counter_waits_for_trigger() {
        let mut counter = CountUp::new(70, DEFAULT_DURATION_MS);
        assert_eq!(counter.tick(5000.0), 0);
        assert!(!counter.has_started());
        assert!(!counter.is_finished());
    }

    #[test]
    fn test_counter_runs_from_start_time() {
        let mut counter = CountUp::new(70, 1600.0);
        assert!(counter.start(1000.0));

        assert_eq!(counter.tick(1000.0), 0);
        let midway = counter.tick(1800.0);
        assert!(midway > 35 && midway < 70);
        assert_eq!(counter.tick(2600.0), 70);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_counter_starts_once() {
        let mut counter = CountUp::new(70, 1600.0);
        assert!(counter.start(0.0));
        assert!(!counter.start(800.0));
        assert_eq!(counter.tick(1600.0), 70);
    }
}
