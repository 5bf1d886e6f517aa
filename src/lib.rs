//! TouchKey GW - touch-control overlay gateway
//!
//! Lets a touch-only device drive an application designed for keyboard input
//! by synthesizing key press/release transitions from touch gestures: a
//! virtual joystick mapped onto the four arrow keys with anti-chatter
//! hysteresis, plus static action buttons and a tap-to-reveal debug gesture.
//!
//! The crate never touches a rendering environment directly. The host adapter
//! supplies the seams:
//!
//! - [`host::ZoneHost`] - viewport measurement and zone styling
//! - [`joystick::JoystickFactory`] - the joystick widget library
//! - [`sink::KeyEventSink`] - document-scope keyboard event dispatch
//! - [`scheduler::FrameClock`] - animation-frame scheduling
//!
//! Everything runs on one sequential event loop spawned by
//! [`overlay::OverlayController::attach`]; the returned
//! [`overlay::OverlayHandle`] is what the host pushes touch and geometry
//! events through.

pub mod buttons;
pub mod config;
pub mod device;
pub mod geometry;
pub mod host;
pub mod joystick;
pub mod keys;
pub mod layout;
pub mod lifecycle;
pub mod overlay;
pub mod reveal;
pub mod scheduler;
pub mod sink;
pub mod tracker;

pub use config::{ButtonBinding, OverlayConfig};
pub use device::DeviceProbe;
pub use geometry::{LayoutMode, Viewport, ZoneRect};
pub use keys::{Direction, KeySpec, KeyTransition};
pub use overlay::{OverlayController, OverlayHandle, TouchTarget};
pub use sink::{ConsoleSink, KeyEventSink};
