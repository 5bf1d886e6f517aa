//! Key-event synthesizer seam
//!
//! The overlay never talks to the host's event system directly. Everything it
//! wants the controlled application to see goes through [`KeyEventSink`]: the
//! host adapter implements it by dispatching a document-scope keyboard event
//! carrying both the key identifier and the legacy numeric code, so listeners
//! cannot tell synthesized input from a physical key.

use parking_lot::Mutex;
use tracing::debug;

use crate::keys::{KeySpec, KeyTransition};

/// Sink for synthesized key transitions
///
/// `emit` must not fail: a host whose event dispatch is unsupported is a
/// fatal configuration error on the host side, not something the overlay can
/// recover from mid-gesture. Implementations are expected to swallow and log
/// their own dispatch problems.
pub trait KeyEventSink: Send + Sync {
    /// Dispatch one key transition to the controlled application
    fn emit(&self, transition: KeyTransition, key: &KeySpec);
}

/// ConsoleSink logs every synthesized transition
///
/// This is useful for:
/// - Testing gesture translation without a real host
/// - Debugging which transitions a touch sequence produces
/// - Development without a rendering environment
pub struct ConsoleSink {
    name: String,
    /// Emission counter for debugging
    emit_count: Mutex<u64>,
}

impl ConsoleSink {
    /// Create a new ConsoleSink with a given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emit_count: Mutex::new(0),
        }
    }

    /// Number of transitions emitted so far
    pub fn emit_count(&self) -> u64 {
        *self.emit_count.lock()
    }
}

impl KeyEventSink for ConsoleSink {
    fn emit(&self, transition: KeyTransition, key: &KeySpec) {
        let mut count = self.emit_count.lock();
        *count += 1;
        let n = *count;
        drop(count);

        debug!(
            "🎹 [{}] #{}: {} key='{}' code={}",
            self.name,
            n,
            transition.event_name(),
            key.key,
            key.code
        );
    }
}
