//! Overlay controller - owns all overlay state and processes events
//!
//! One task consumes every inbound event SEQUENTIALLY over a single channel:
//! touch events, geometry notifications, and joystick vector samples. This
//! gives the whole overlay the ordering discipline the lifecycle invariants
//! need without any locking: the tracker and the widget handle are only ever
//! touched from inside the event loop.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use crate::buttons::ButtonBinder;
use crate::config::{OverlayConfig, WidgetTuning};
use crate::host::ZoneHost;
use crate::joystick::{JoystickEvent, JoystickFactory, StampedJoystickEvent};
use crate::layout::LayoutManager;
use crate::lifecycle::JoystickLifecycle;
use crate::reveal::RevealDetector;
use crate::scheduler::{DebounceGate, FrameClock};
use crate::sink::KeyEventSink;
use crate::tracker::DirectionTracker;

/// What a touch landed on, as classified by the host adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchTarget {
    /// A bound button element
    Button(String),
    /// Inside the joystick zone; the widget handles its own pointer
    JoystickZone,
    /// Anywhere else on the page
    Outside,
}

/// Inbound events from the host environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    TouchStart { target: TouchTarget },
    TouchEnd { target: TouchTarget },
    /// The page body or viewport changed size
    GeometryChanged,
    Shutdown,
}

/// Invoked when the reveal tap gesture completes
pub type RevealCallback = Arc<dyn Fn() + Send + Sync>;

/// Handle to a running overlay controller
///
/// Cheap to clone; the host adapter pushes its events through this.
#[derive(Clone)]
pub struct OverlayHandle {
    tx: mpsc::UnboundedSender<OverlayEvent>,
}

impl OverlayHandle {
    pub fn touch_start(&self, target: TouchTarget) {
        self.send(OverlayEvent::TouchStart { target });
    }

    pub fn touch_end(&self, target: TouchTarget) {
        self.send(OverlayEvent::TouchEnd { target });
    }

    pub fn geometry_changed(&self) {
        self.send(OverlayEvent::GeometryChanged);
    }

    /// Tear the overlay down, force-releasing any held keys
    pub fn shutdown(&self) {
        self.send(OverlayEvent::Shutdown);
    }

    fn send(&self, event: OverlayEvent) {
        if self.tx.send(event).is_err() {
            warn!("overlay controller is gone, dropping event");
        }
    }
}

/// The touch-control overlay engine
pub struct OverlayController;

impl OverlayController {
    /// Spawn the overlay event loop and return a handle to feed it
    ///
    /// The first layout pass runs after the configured settle delay; until
    /// then only button and reveal events are serviced.
    pub fn attach(
        config: OverlayConfig,
        host: Arc<dyn ZoneHost>,
        sink: Arc<dyn KeyEventSink>,
        factory: Arc<dyn JoystickFactory>,
        frame_clock: Arc<dyn FrameClock>,
        on_reveal: RevealCallback,
    ) -> OverlayHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        let (joy_tx, joy_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_event_loop(
            config,
            host,
            sink,
            factory,
            frame_clock,
            on_reveal,
            rx,
            joy_rx,
            joy_tx,
        ));

        OverlayHandle { tx }
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_event_loop(
    config: OverlayConfig,
    host: Arc<dyn ZoneHost>,
    sink: Arc<dyn KeyEventSink>,
    factory: Arc<dyn JoystickFactory>,
    frame_clock: Arc<dyn FrameClock>,
    on_reveal: RevealCallback,
    mut rx: mpsc::UnboundedReceiver<OverlayEvent>,
    mut joy_rx: mpsc::UnboundedReceiver<StampedJoystickEvent>,
    joy_tx: mpsc::UnboundedSender<StampedJoystickEvent>,
) {
    let mut tracker = DirectionTracker::new(config.deadzone, sink.clone());
    let mut lifecycle =
        JoystickLifecycle::new(factory, joy_tx, WidgetTuning::from_config(&config));
    let layout = LayoutManager::new(&config);
    let buttons = ButtonBinder::bind(&config.buttons, host.clone(), sink);
    let mut reveal = RevealDetector::new(
        config.reveal_taps,
        Duration::from_millis(config.reveal_window_ms),
    );
    let mut gate = DebounceGate::new(Duration::from_millis(config.resize_debounce_ms));

    // Unconditional first layout pass once the page has settled
    gate.arm_until(Instant::now() + Duration::from_millis(config.startup_settle_ms));

    debug!("overlay controller started");

    loop {
        let deadline = gate.deadline();
        tokio::select! {
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(OverlayEvent::TouchStart { target }) => match target {
                        TouchTarget::Button(id) => buttons.press(&id),
                        TouchTarget::JoystickZone => {}
                        TouchTarget::Outside => {
                            if reveal.on_tap(Instant::now()) {
                                info!("🔓 reveal gesture detected");
                                (on_reveal)();
                            }
                        }
                    },
                    Some(OverlayEvent::TouchEnd { target }) => {
                        if let TouchTarget::Button(id) = target {
                            buttons.release(&id);
                        }
                    }
                    Some(OverlayEvent::GeometryChanged) => {
                        trace!("geometry changed, debouncing recompute");
                        gate.note(Instant::now());
                    }
                    Some(OverlayEvent::Shutdown) | None => break,
                }
            }

            Some(stamped) = joy_rx.recv() => {
                if stamped.generation != lifecycle.generation() {
                    trace!(
                        "dropping stale joystick event (gen {} != {})",
                        stamped.generation,
                        lifecycle.generation()
                    );
                } else {
                    match stamped.event {
                        JoystickEvent::Move { x, y } => tracker.apply_vector(x, y),
                        JoystickEvent::End => tracker.apply_release(),
                    }
                }
            }

            // Debounce deadline elapsed: wait one frame, then recompute once
            _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                if deadline.is_some() =>
            {
                gate.fire(Instant::now());
                frame_clock.next_frame().await;
                layout.recompute(host.as_ref(), &mut lifecycle, &mut tracker);
            }
        }
    }

    // Teardown mirrors a rebuild: destroy first, then forced releases, so no
    // key stays logically held after the overlay is gone.
    lifecycle.dispose(&mut tracker);
    debug!("overlay controller stopped");
}
