//! Reveal gesture detector
//!
//! Counts rapid taps outside the control zones. Each qualifying tap extends a
//! rolling deadline; a tap arriving after the deadline starts the count over.
//! Reaching the configured threshold fires once and resets. Deadline
//! arithmetic instead of a real timer keeps the detector synchronous and
//! directly testable.

use tokio::time::Instant;
use std::time::Duration;
use tracing::debug;

/// Debounced tap-count detector for the UI-reveal gesture
pub struct RevealDetector {
    required_taps: u32,
    window: Duration,
    taps: u32,
    deadline: Option<Instant>,
}

impl RevealDetector {
    pub fn new(required_taps: u32, window: Duration) -> Self {
        Self {
            required_taps,
            window,
            taps: 0,
            deadline: None,
        }
    }

    /// Register a qualifying tap; returns true when the gesture completes
    pub fn on_tap(&mut self, now: Instant) -> bool {
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.taps = 0;
            }
        }

        self.taps += 1;
        self.deadline = Some(now + self.window);

        if self.taps >= self.required_taps {
            debug!("reveal gesture completed ({} taps)", self.taps);
            self.taps = 0;
            self.deadline = None;
            return true;
        }
        false
    }

    #[cfg(test)]
    fn tap_count(&self) -> u32 {
        self.taps
    }
}
