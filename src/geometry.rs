//! Zone and viewport geometry types

/// Pixel rectangle of a touch zone within the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ZoneRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-area zone cannot host a widget
    ///
    /// Expected during initial layout before the page geometry settles, so
    /// callers treat it as a degraded state rather than an error.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Center point relative to the zone's own origin
    pub fn local_center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Current viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Two-valued layout classification derived from the aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Tablet-like: control strips down the left and right edges
    Wide,
    /// Phone-like: both zones along the bottom edge
    Narrow,
}

impl LayoutMode {
    /// Classify a viewport: `Wide` iff aspect ratio is strictly above the
    /// cutoff, so a ratio of exactly the cutoff stays `Narrow`.
    pub fn classify(viewport: Viewport, wide_cutoff: f32) -> Self {
        if viewport.aspect_ratio() > wide_cutoff {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }
}

/// Background treatment for the touch zones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneBackground {
    /// Wide layout: zones sit over unused screen margins
    Transparent,
    /// Narrow layout: zones overlap content, so hint at their presence
    Translucent,
}

/// Computed placement of both touch zones for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZonePlacement {
    pub mode: LayoutMode,
    pub joystick: ZoneRect,
    pub buttons: ZoneRect,
    pub background: ZoneBackground,
}
