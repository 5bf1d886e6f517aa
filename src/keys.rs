//! Logical key descriptors and the direction-to-arrow-key mapping

use serde::{Deserialize, Serialize};

/// A press or release edge on a logical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTransition {
    Press,
    Release,
}

impl KeyTransition {
    /// Event name the host should dispatch for this transition
    pub fn event_name(self) -> &'static str {
        match self {
            KeyTransition::Press => "keydown",
            KeyTransition::Release => "keyup",
        }
    }
}

/// A logical key: modern identifier plus the legacy numeric code
///
/// Both fields are carried on every synthesized event so consumers reading
/// either the `key` string or the deprecated `keyCode` number behave the same
/// as with real keyboard input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeySpec {
    pub key: String,
    pub code: u32,
}

impl KeySpec {
    pub fn new(key: impl Into<String>, code: u32) -> Self {
        Self {
            key: key.into(),
            code,
        }
    }
}

/// One of the four cardinal joystick directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Direction name ("up", "down", "left", "right")
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Arrow key identifier bound to this direction
    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }

    /// Legacy numeric code for the bound arrow key
    pub fn code(self) -> u32 {
        match self {
            Direction::Up => 38,
            Direction::Down => 40,
            Direction::Left => 37,
            Direction::Right => 39,
        }
    }

    /// Full key descriptor for this direction
    pub fn key_spec(self) -> KeySpec {
        KeySpec::new(self.key(), self.code())
    }
}
