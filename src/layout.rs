//! Layout manager - zone placement and mode switching
//!
//! Classifies the viewport into the wide ("tablet") or narrow ("phone")
//! layout, computes where the joystick and button zones go, pushes the
//! placement to the host surface, and then triggers a joystick rebuild from
//! the re-measured zone geometry.

use tracing::debug;

use crate::config::OverlayConfig;
use crate::geometry::{LayoutMode, Viewport, ZoneBackground, ZonePlacement, ZoneRect};
use crate::host::ZoneHost;
use crate::lifecycle::JoystickLifecycle;
use crate::tracker::DirectionTracker;

/// Computes zone placement from the current viewport
pub struct LayoutManager {
    wide_cutoff: f32,
    /// Fraction of viewport width each side strip takes in wide mode
    wide_zone_width_frac: f32,
    /// Fraction of viewport height the bottom strip takes in narrow mode
    narrow_zone_height_frac: f32,
}

impl LayoutManager {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            wide_cutoff: config.wide_aspect_cutoff,
            wide_zone_width_frac: config.wide_zone_width_frac,
            narrow_zone_height_frac: config.narrow_zone_height_frac,
        }
    }

    /// Compute both zone rectangles for the given viewport
    pub fn placement(&self, viewport: Viewport) -> ZonePlacement {
        let mode = LayoutMode::classify(viewport, self.wide_cutoff);
        match mode {
            LayoutMode::Wide => {
                // Full-height strips on the left and right edges
                let side_width = viewport.width * self.wide_zone_width_frac;
                ZonePlacement {
                    mode,
                    joystick: ZoneRect::new(0.0, 0.0, side_width, viewport.height),
                    buttons: ZoneRect::new(
                        viewport.width - side_width,
                        0.0,
                        side_width,
                        viewport.height,
                    ),
                    background: ZoneBackground::Transparent,
                }
            }
            LayoutMode::Narrow => {
                // Bottom strip split in half, joystick on the left
                let zone_height = viewport.height * self.narrow_zone_height_frac;
                let half_width = viewport.width / 2.0;
                let top = viewport.height - zone_height;
                ZonePlacement {
                    mode,
                    joystick: ZoneRect::new(0.0, top, half_width, zone_height),
                    buttons: ZoneRect::new(half_width, top, half_width, zone_height),
                    background: ZoneBackground::Translucent,
                }
            }
        }
    }

    /// One full layout pass: measure, place, re-measure, rebuild
    pub fn recompute(
        &self,
        host: &dyn ZoneHost,
        lifecycle: &mut JoystickLifecycle,
        tracker: &mut DirectionTracker,
    ) {
        let viewport = host.viewport();
        let placement = self.placement(viewport);
        debug!(
            "layout recompute: {}x{} -> {:?}",
            viewport.width, viewport.height, placement.mode
        );
        host.apply_placement(&placement);

        // Re-measure after the style change; the applied style, not the
        // computed rect, determines the actual pixel size.
        match host.measure_joystick_zone() {
            Some(zone) => lifecycle.rebuild(zone, tracker),
            None => debug!("joystick zone element missing, skipping joystick rebuild"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::FakeHost;
    use crate::joystick::testing::FakeFactory;
    use crate::joystick::JoystickFactory;
    use crate::sink::testing::RecordingSink;
    use crate::sink::KeyEventSink;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn make_layout() -> LayoutManager {
        LayoutManager::new(&OverlayConfig::default())
    }

    #[test]
    fn test_wide_placement_side_strips() {
        let layout = make_layout();
        let placement = layout.placement(Viewport::new(2000.0, 1000.0));

        assert_eq!(placement.mode, LayoutMode::Wide);
        assert_eq!(placement.background, ZoneBackground::Transparent);
        assert_eq!(placement.joystick, ZoneRect::new(0.0, 0.0, 500.0, 1000.0));
        assert_eq!(
            placement.buttons,
            ZoneRect::new(1500.0, 0.0, 500.0, 1000.0)
        );
    }

    fn assert_rect_close(actual: ZoneRect, expected: ZoneRect) {
        assert!(
            (actual.x - expected.x).abs() < 0.01
                && (actual.y - expected.y).abs() < 0.01
                && (actual.width - expected.width).abs() < 0.01
                && (actual.height - expected.height).abs() < 0.01,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_narrow_placement_bottom_halves() {
        let layout = make_layout();
        let placement = layout.placement(Viewport::new(1000.0, 2000.0));

        assert_eq!(placement.mode, LayoutMode::Narrow);
        assert_eq!(placement.background, ZoneBackground::Translucent);
        assert_rect_close(placement.joystick, ZoneRect::new(0.0, 1400.0, 500.0, 600.0));
        assert_rect_close(placement.buttons, ZoneRect::new(500.0, 1400.0, 500.0, 600.0));
    }

    #[test]
    fn test_recompute_rebuilds_from_measured_zone() {
        let layout = make_layout();
        let host = FakeHost::new(Viewport::new(2000.0, 1000.0), &[]);
        let factory = Arc::new(FakeFactory::default());
        let sink = Arc::new(RecordingSink::default());
        let mut tracker = DirectionTracker::new(0.3, sink as Arc<dyn KeyEventSink>);
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut lifecycle = JoystickLifecycle::new(
            factory.clone() as Arc<dyn JoystickFactory>,
            tx,
            crate::config::WidgetTuning::default(),
        );

        layout.recompute(&host, &mut lifecycle, &mut tracker);

        assert_eq!(host.placement_count(), 1);
        assert_eq!(factory.create_count(), 1);
        assert_eq!(
            factory.created()[0].zone,
            ZoneRect::new(0.0, 0.0, 500.0, 1000.0)
        );
    }

    #[test]
    fn test_recompute_with_missing_zone_skips_rebuild() {
        let layout = make_layout();
        let host = FakeHost::new(Viewport::new(2000.0, 1000.0), &[]);
        *host.joystick_zone_present.lock() = false;
        let factory = Arc::new(FakeFactory::default());
        let sink = Arc::new(RecordingSink::default());
        let mut tracker = DirectionTracker::new(0.3, sink as Arc<dyn KeyEventSink>);
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut lifecycle = JoystickLifecycle::new(
            factory.clone() as Arc<dyn JoystickFactory>,
            tx,
            crate::config::WidgetTuning::default(),
        );

        layout.recompute(&host, &mut lifecycle, &mut tracker);

        // Placement still applied, but no widget created
        assert_eq!(host.placement_count(), 1);
        assert_eq!(factory.create_count(), 0);
        assert!(!lifecycle.has_widget());
    }
}
