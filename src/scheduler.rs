//! Two-stage recompute scheduling
//!
//! Geometry-change notifications are debounced so a burst of resize events
//! collapses into a single layout pass, and the pass itself runs one frame
//! later so it observes settled geometry. The delay stage is a pure deadline
//! gate ([`DebounceGate`], timestamp arithmetic only); the frame stage is the
//! [`FrameClock`] trait so tests can substitute a clock that does not sleep.

use async_trait::async_trait;
use tokio::time::Instant;
use std::time::Duration;

/// Cancellable-by-extension delay stage of the resize debounce
///
/// Every `note` pushes the deadline out by the full delay; only once events
/// stop arriving does the deadline come due. Holds no timer itself: the
/// owner sleeps until [`DebounceGate::deadline`] and then calls
/// [`DebounceGate::fire`].
#[derive(Debug)]
pub struct DebounceGate {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record an event at `now`, arming or extending the deadline
    pub fn note(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Arm the gate for an explicit deadline (used for the startup pass)
    pub fn arm_until(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    /// Deadline to sleep until, if armed
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// If the deadline has come due at `now`, disarm and report it
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// The "next frame" stage: one queued animation-frame callback
#[async_trait]
pub trait FrameClock: Send + Sync {
    /// Complete on the next frame boundary
    async fn next_frame(&self);
}

/// Frame clock backed by the tokio timer (~60fps frame interval)
pub struct TokioFrameClock {
    frame_interval: Duration,
}

impl TokioFrameClock {
    pub fn new() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl Default for TokioFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameClock for TokioFrameClock {
    async fn next_frame(&self) {
        tokio::time::sleep(self.frame_interval).await;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Counting no-op frame clock for controller tests

    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Default)]
    pub struct CountingFrameClock {
        frames: AtomicU64,
    }

    impl CountingFrameClock {
        pub fn frames(&self) -> u64 {
            self.frames.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FrameClock for CountingFrameClock {
        async fn next_frame(&self) {
            self.frames.fetch_add(1, Ordering::SeqCst);
        }
    }
}
