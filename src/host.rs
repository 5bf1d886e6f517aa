//! Host surface seam
//!
//! Everything the overlay needs from the rendering environment: viewport
//! measurement, applying a computed zone placement, re-measuring the joystick
//! zone after styles have taken effect, and flipping button visuals. Hosts
//! where an element is missing report that through `Option`/`bool` returns
//! and the dependent feature silently no-ops instead of failing the overlay.

use crate::geometry::{Viewport, ZoneRect, ZonePlacement};

/// The rendering surface the overlay is mounted on
pub trait ZoneHost: Send + Sync {
    /// Current viewport dimensions
    fn viewport(&self) -> Viewport;

    /// Apply the computed placement to both zone elements
    fn apply_placement(&self, placement: &ZonePlacement);

    /// Measure the joystick zone as actually laid out
    ///
    /// Called after `apply_placement`, never before: the freshly applied
    /// style is what determines the real pixel size. `None` means the zone
    /// element is absent from the surface.
    fn measure_joystick_zone(&self) -> Option<ZoneRect>;

    /// Whether a button element with this id exists on the surface
    fn button_exists(&self, id: &str) -> bool;

    /// Show the given image on a button element
    fn set_button_image(&self, id: &str, image: &str);

    /// Toggle the pressed visual state of a button element
    fn set_button_pressed(&self, id: &str, pressed: bool);
}
