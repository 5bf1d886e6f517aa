//! Configuration management for TouchKey GW
//!
//! Handles loading and validating YAML overlay configuration. Every field
//! has a default matching the stock overlay, so an empty file (or no file at
//! all) yields a working configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::keys::KeySpec;

/// Root overlay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OverlayConfig {
    /// Dead-zone threshold applied to joystick vectors before a direction
    /// registers
    #[serde(default = "default_deadzone")]
    pub deadzone: f32,

    /// Movement threshold handed to the widget library at creation
    #[serde(default = "default_widget_threshold")]
    pub widget_threshold: f32,

    /// Minimum widget diameter in pixels
    #[serde(default = "default_widget_min_size")]
    pub widget_min_size: f32,

    /// Widget diameter as a fraction of the smaller zone dimension
    #[serde(default = "default_widget_scale")]
    pub widget_scale: f32,

    #[serde(default = "default_widget_color")]
    pub widget_color: String,

    /// Aspect ratio above which the wide ("tablet") layout applies
    #[serde(default = "default_wide_aspect_cutoff")]
    pub wide_aspect_cutoff: f32,

    /// Width of each side strip in wide mode, as a viewport-width fraction
    #[serde(default = "default_wide_zone_width_frac")]
    pub wide_zone_width_frac: f32,

    /// Height of the bottom strip in narrow mode, as a viewport-height
    /// fraction
    #[serde(default = "default_narrow_zone_height_frac")]
    pub narrow_zone_height_frac: f32,

    /// Resize debounce window in milliseconds
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    /// Delay before the first layout pass, letting page layout settle
    #[serde(default = "default_startup_settle_ms")]
    pub startup_settle_ms: u64,

    /// Taps required to trigger the UI-reveal callback
    #[serde(default = "default_reveal_taps")]
    pub reveal_taps: u32,

    /// Rolling window for the reveal tap counter, in milliseconds
    #[serde(default = "default_reveal_window_ms")]
    pub reveal_window_ms: u64,

    /// Static button-to-key bindings
    #[serde(default = "ButtonBinding::defaults")]
    pub buttons: Vec<ButtonBinding>,
}

/// One static touch button bound to a fixed key
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ButtonBinding {
    /// Element id of the touch zone
    pub id: String,
    /// Key to synthesize; its `key`/`code` fields sit flat in the YAML entry
    #[serde(flatten)]
    pub key: KeySpec,
    pub pressed_image: String,
    pub released_image: String,
}

impl ButtonBinding {
    /// Stock z/x/c action buttons
    pub fn defaults() -> Vec<ButtonBinding> {
        vec![
            ButtonBinding {
                id: "button-z".to_string(),
                key: KeySpec::new("z", 90),
                pressed_image: "/spr/z_pressed.svg".to_string(),
                released_image: "/spr/z.svg".to_string(),
            },
            ButtonBinding {
                id: "button-x".to_string(),
                key: KeySpec::new("x", 88),
                pressed_image: "/spr/x_pressed.svg".to_string(),
                released_image: "/spr/x.svg".to_string(),
            },
            ButtonBinding {
                id: "button-c".to_string(),
                key: KeySpec::new("c", 67),
                pressed_image: "/spr/c_pressed.svg".to_string(),
                released_image: "/spr/c.svg".to_string(),
            },
        ]
    }
}

fn default_deadzone() -> f32 {
    0.3
}
fn default_widget_threshold() -> f32 {
    0.2
}
fn default_widget_min_size() -> f32 {
    100.0
}
fn default_widget_scale() -> f32 {
    0.6
}
fn default_widget_color() -> String {
    "white".to_string()
}
fn default_wide_aspect_cutoff() -> f32 {
    1.3
}
fn default_wide_zone_width_frac() -> f32 {
    0.25
}
fn default_narrow_zone_height_frac() -> f32 {
    0.3
}
fn default_resize_debounce_ms() -> u64 {
    100
}
fn default_startup_settle_ms() -> u64 {
    500
}
fn default_reveal_taps() -> u32 {
    5
}
fn default_reveal_window_ms() -> u64 {
    400
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            deadzone: default_deadzone(),
            widget_threshold: default_widget_threshold(),
            widget_min_size: default_widget_min_size(),
            widget_scale: default_widget_scale(),
            widget_color: default_widget_color(),
            wide_aspect_cutoff: default_wide_aspect_cutoff(),
            wide_zone_width_frac: default_wide_zone_width_frac(),
            narrow_zone_height_frac: default_narrow_zone_height_frac(),
            resize_debounce_ms: default_resize_debounce_ms(),
            startup_settle_ms: default_startup_settle_ms(),
            reveal_taps: default_reveal_taps(),
            reveal_window_ms: default_reveal_window_ms(),
            buttons: ButtonBinding::defaults(),
        }
    }
}

/// Configuration validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("deadzone must be in (0, 1), got {0}")]
    DeadzoneOutOfRange(f32),
    #[error("widget_scale must be in (0, 1], got {0}")]
    WidgetScaleOutOfRange(f32),
    #[error("wide_zone_width_frac must be in (0, 0.5], got {0}")]
    WideZoneFracOutOfRange(f32),
    #[error("narrow_zone_height_frac must be in (0, 1], got {0}")]
    NarrowZoneFracOutOfRange(f32),
    #[error("reveal_taps must be at least 1")]
    ZeroRevealTaps,
    #[error("button '{0}' has an empty key")]
    EmptyButtonKey(String),
}

impl OverlayConfig {
    /// Load configuration from a YAML file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: OverlayConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.deadzone > 0.0 && self.deadzone < 1.0) {
            return Err(ConfigError::DeadzoneOutOfRange(self.deadzone));
        }
        if !(self.widget_scale > 0.0 && self.widget_scale <= 1.0) {
            return Err(ConfigError::WidgetScaleOutOfRange(self.widget_scale));
        }
        if !(self.wide_zone_width_frac > 0.0 && self.wide_zone_width_frac <= 0.5) {
            return Err(ConfigError::WideZoneFracOutOfRange(
                self.wide_zone_width_frac,
            ));
        }
        if !(self.narrow_zone_height_frac > 0.0 && self.narrow_zone_height_frac <= 1.0) {
            return Err(ConfigError::NarrowZoneFracOutOfRange(
                self.narrow_zone_height_frac,
            ));
        }
        if self.reveal_taps == 0 {
            return Err(ConfigError::ZeroRevealTaps);
        }
        for button in &self.buttons {
            if button.key.key.is_empty() {
                return Err(ConfigError::EmptyButtonKey(button.id.clone()));
            }
        }
        Ok(())
    }
}

/// Widget creation knobs handed to the lifecycle manager
#[derive(Debug, Clone)]
pub struct WidgetTuning {
    pub min_size: f32,
    pub scale: f32,
    pub color: String,
    pub threshold: f32,
}

impl WidgetTuning {
    pub fn from_config(config: &OverlayConfig) -> Self {
        Self {
            min_size: config.widget_min_size,
            scale: config.widget_scale,
            color: config.widget_color.clone(),
            threshold: config.widget_threshold,
        }
    }
}

impl Default for WidgetTuning {
    fn default() -> Self {
        Self::from_config(&OverlayConfig::default())
    }
}
