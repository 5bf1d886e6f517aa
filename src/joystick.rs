//! Joystick widget collaborator seam
//!
//! The rendering widget itself is a supplied library on the host side; this
//! module only pins down the contract the overlay depends on: a factory that
//! binds a widget to a zone, a handle that can be destroyed, and a stream of
//! normalized vector samples stamped with the generation of the widget that
//! produced them.

use anyhow::Result;
use tokio::sync::mpsc;

use crate::geometry::ZoneRect;

/// Event reported by a live joystick widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoystickEvent {
    /// Pointer moved: normalized vector, both components in [-1, 1],
    /// y growing upward
    Move { x: f32, y: f32 },
    /// Pointer lifted: implicitly the zero vector
    End,
}

/// Widget placement mode
///
/// Only static placement is used: the widget stays anchored at the position
/// given at creation rather than following the first touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoystickMode {
    Static,
}

/// Creation parameters handed to the widget library
#[derive(Debug, Clone, PartialEq)]
pub struct JoystickOptions {
    /// Zone the widget is bound to
    pub zone: ZoneRect,
    pub mode: JoystickMode,
    /// Anchor position relative to the zone origin
    pub position: (f32, f32),
    /// Widget diameter in pixels
    pub size: f32,
    pub color: String,
    /// Widget-internal movement threshold (distinct from the tracker
    /// dead-zone applied to reported vectors)
    pub threshold: f32,
}

/// A joystick event tagged with the generation of the widget that sent it
///
/// The lifecycle manager bumps the generation on every rebuild; the
/// controller drops events whose generation is stale, so a destroyed widget
/// can never mutate tracker state after its replacement exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampedJoystickEvent {
    pub generation: u64,
    pub event: JoystickEvent,
}

/// Sender widgets use to report their events
pub type JoystickEventSender = mpsc::UnboundedSender<StampedJoystickEvent>;

/// Handle to a live widget instance
///
/// Exclusively owned by the lifecycle manager; at most one exists at a time.
pub trait JoystickWidget: Send {
    /// Tear the widget down; it must stop reporting events
    fn destroy(&mut self);
}

/// Creates widget instances bound to a zone
pub trait JoystickFactory: Send + Sync {
    /// Create a widget; it reports events through `events`, each stamped
    /// with `generation`.
    fn create(
        &self,
        options: JoystickOptions,
        generation: u64,
        events: JoystickEventSender,
    ) -> Result<Box<dyn JoystickWidget>>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fake widget and factory shared by the crate's test modules

    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    pub struct FakeWidget {
        live: Arc<AtomicUsize>,
        destroyed: bool,
    }

    impl JoystickWidget for FakeWidget {
        fn destroy(&mut self) {
            if !self.destroyed {
                self.destroyed = true;
                self.live.fetch_sub(1, Ordering::SeqCst);
            }
        }
    }

    /// Factory recording every creation and tracking live widget count
    #[derive(Default)]
    pub struct FakeFactory {
        live: Arc<AtomicUsize>,
        created: Mutex<Vec<JoystickOptions>>,
        /// Sender and generation of the most recently created widget, so
        /// tests can inject events as if the widget reported them
        last_wiring: Mutex<Option<(u64, JoystickEventSender)>>,
        /// When true, `create` fails (simulates the widget library refusing)
        pub fail_next: Mutex<bool>,
    }

    impl FakeFactory {
        pub fn live_count(&self) -> usize {
            self.live.load(Ordering::SeqCst)
        }

        pub fn created(&self) -> Vec<JoystickOptions> {
            self.created.lock().clone()
        }

        pub fn create_count(&self) -> usize {
            self.created.lock().len()
        }

        pub fn last_wiring(&self) -> Option<(u64, JoystickEventSender)> {
            self.last_wiring.lock().clone()
        }

        /// Send an event as the widget of the given generation
        pub fn send_as(&self, generation: u64, event: JoystickEvent) {
            let wiring = self.last_wiring.lock();
            let (_, sender) = wiring.as_ref().expect("no widget created yet");
            sender
                .send(StampedJoystickEvent { generation, event })
                .expect("controller channel closed");
        }
    }

    impl JoystickFactory for FakeFactory {
        fn create(
            &self,
            options: JoystickOptions,
            generation: u64,
            events: JoystickEventSender,
        ) -> Result<Box<dyn JoystickWidget>> {
            let mut fail = self.fail_next.lock();
            if *fail {
                *fail = false;
                anyhow::bail!("widget library refused creation");
            }
            drop(fail);
            self.created.lock().push(options);
            *self.last_wiring.lock() = Some((generation, events));
            self.live.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(FakeWidget {
                live: self.live.clone(),
                destroyed: false,
            }))
        }
    }
}
