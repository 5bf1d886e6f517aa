//! Joystick widget lifecycle
//!
//! Owns the single live widget handle and rebuilds it whenever the hosting
//! zone's geometry changes. Rebuild ordering is strict: destroy the old
//! widget, then force-release held directions, then bump the event
//! generation, and only then create the replacement. Together with generation
//! stamping this guarantees no input from a destroyed widget ever reaches the
//! tracker, and that there is never more than one live widget.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::WidgetTuning;
use crate::geometry::ZoneRect;
use crate::joystick::{
    JoystickEventSender, JoystickFactory, JoystickMode, JoystickOptions, JoystickWidget,
};
use crate::tracker::DirectionTracker;

/// Owns at most one live joystick widget
pub struct JoystickLifecycle {
    factory: Arc<dyn JoystickFactory>,
    events: JoystickEventSender,
    tuning: WidgetTuning,
    widget: Option<Box<dyn JoystickWidget>>,
    generation: u64,
}

impl JoystickLifecycle {
    pub fn new(
        factory: Arc<dyn JoystickFactory>,
        events: JoystickEventSender,
        tuning: WidgetTuning,
    ) -> Self {
        Self {
            factory,
            events,
            tuning,
            widget: None,
            generation: 0,
        }
    }

    /// Destroy any existing widget and create a fresh one for `zone`
    ///
    /// A degenerate zone leaves no widget installed; this is a normal
    /// degraded state during initial layout and is retried on the next
    /// recompute. Safe to call repeatedly: exactly zero or one widget is
    /// live afterwards.
    pub fn rebuild(&mut self, zone: ZoneRect, tracker: &mut DirectionTracker) {
        if let Some(mut widget) = self.widget.take() {
            // Destroy before reset so the old widget is already silent when
            // the forced releases go out.
            widget.destroy();
            tracker.reset();
            debug!("destroyed previous joystick widget");
        }
        self.generation += 1;

        if zone.is_degenerate() {
            warn!(
                "⚠️  joystick zone has zero size ({}x{}), skipping widget creation",
                zone.width, zone.height
            );
            return;
        }

        let size = (self.tuning.scale * zone.width.min(zone.height)).max(self.tuning.min_size);
        let options = JoystickOptions {
            zone,
            mode: JoystickMode::Static,
            position: zone.local_center(),
            size,
            color: self.tuning.color.clone(),
            threshold: self.tuning.threshold,
        };

        match self
            .factory
            .create(options, self.generation, self.events.clone())
        {
            Ok(widget) => {
                self.widget = Some(widget);
                debug!(
                    "created joystick widget gen={} size={:.0} in {}x{} zone",
                    self.generation, size, zone.width, zone.height
                );
            }
            Err(e) => {
                warn!("⚠️  joystick widget creation failed: {}. Continuing without joystick.", e);
            }
        }
    }

    /// Tear down the widget (if any) and force-release held directions
    pub fn dispose(&mut self, tracker: &mut DirectionTracker) {
        if let Some(mut widget) = self.widget.take() {
            widget.destroy();
            tracker.reset();
            debug!("joystick widget disposed");
        }
        self.generation += 1;
    }

    /// Generation of the currently live widget; events stamped with an older
    /// generation are stale
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joystick::testing::FakeFactory;
    use crate::sink::testing::RecordingSink;
    use crate::sink::KeyEventSink;
    use tokio::sync::mpsc;

    fn make_lifecycle() -> (
        JoystickLifecycle,
        DirectionTracker,
        Arc<FakeFactory>,
        Arc<RecordingSink>,
    ) {
        let factory = Arc::new(FakeFactory::default());
        let sink = Arc::new(RecordingSink::default());
        let tracker = DirectionTracker::new(0.3, sink.clone() as Arc<dyn KeyEventSink>);
        let (tx, _rx) = mpsc::unbounded_channel();
        let lifecycle = JoystickLifecycle::new(
            factory.clone() as Arc<dyn JoystickFactory>,
            tx,
            WidgetTuning::default(),
        );
        (lifecycle, tracker, factory, sink)
    }

    #[test]
    fn test_degenerate_zone_installs_nothing() {
        let (mut lifecycle, mut tracker, factory, sink) = make_lifecycle();

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 0.0, 300.0), &mut tracker);

        assert!(!lifecycle.has_widget());
        assert_eq!(factory.create_count(), 0);
        // Tracker untouched: no widget existed, so no reset either
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_consecutive_rebuilds_leave_one_widget() {
        let (mut lifecycle, mut tracker, factory, _sink) = make_lifecycle();

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 300.0, 400.0), &mut tracker);
        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 500.0, 200.0), &mut tracker);

        assert!(lifecycle.has_widget());
        assert_eq!(factory.create_count(), 2);
        assert_eq!(factory.live_count(), 1);
    }

    #[test]
    fn test_rebuild_releases_held_directions() {
        let (mut lifecycle, mut tracker, _factory, sink) = make_lifecycle();

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 300.0, 300.0), &mut tracker);
        tracker.apply_vector(0.5, 0.5); // up + right held
        sink.clear();

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 400.0, 400.0), &mut tracker);

        // Both held directions released exactly once by the reset
        assert_eq!(sink.len(), 2);
        assert!(!tracker.any_pressed());
    }

    #[test]
    fn test_widget_size_clamped_to_minimum() {
        let (mut lifecycle, mut tracker, factory, _sink) = make_lifecycle();

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 120.0, 120.0), &mut tracker);

        // 0.6 * 120 = 72, below the 100px floor
        let created = factory.created();
        assert_eq!(created[0].size, 100.0);

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 400.0, 600.0), &mut tracker);
        let created = factory.created();
        assert!((created[1].size - 240.0).abs() < 0.01); // 0.6 * min(400, 600)
    }

    #[test]
    fn test_widget_centered_in_zone() {
        let (mut lifecycle, mut tracker, factory, _sink) = make_lifecycle();

        lifecycle.rebuild(ZoneRect::new(50.0, 80.0, 300.0, 400.0), &mut tracker);

        let created = factory.created();
        assert_eq!(created[0].position, (150.0, 200.0));
        assert_eq!(created[0].mode, JoystickMode::Static);
    }

    #[test]
    fn test_generation_bumps_on_every_rebuild() {
        let (mut lifecycle, mut tracker, _factory, _sink) = make_lifecycle();
        assert_eq!(lifecycle.generation(), 0);

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 300.0, 300.0), &mut tracker);
        assert_eq!(lifecycle.generation(), 1);

        // Even a degraded rebuild invalidates the old widget's events
        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 0.0, 0.0), &mut tracker);
        assert_eq!(lifecycle.generation(), 2);
        assert!(!lifecycle.has_widget());
    }

    #[test]
    fn test_factory_failure_degrades_without_widget() {
        let (mut lifecycle, mut tracker, factory, _sink) = make_lifecycle();
        *factory.fail_next.lock() = true;

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 300.0, 300.0), &mut tracker);

        assert!(!lifecycle.has_widget());
        assert_eq!(factory.live_count(), 0);
    }

    #[test]
    fn test_dispose_destroys_and_releases() {
        let (mut lifecycle, mut tracker, factory, sink) = make_lifecycle();

        lifecycle.rebuild(ZoneRect::new(0.0, 0.0, 300.0, 300.0), &mut tracker);
        tracker.apply_vector(0.0, 0.9);
        sink.clear();

        lifecycle.dispose(&mut tracker);

        assert!(!lifecycle.has_widget());
        assert_eq!(factory.live_count(), 0);
        assert_eq!(sink.len(), 1); // ArrowUp released
    }
}
