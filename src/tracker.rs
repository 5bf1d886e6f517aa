//! Directional state tracker - analog vector to key transitions
//!
//! Holds the pressed/released state of the four joystick directions and
//! converts each incoming vector sample into the minimal set of key
//! transitions: a press when a direction newly crosses the dead-zone, a
//! release when it drops back out, and nothing at all when the candidate
//! state matches what is already held. The tracker is the single source of
//! truth for "which keys are currently down because of the joystick".

use std::sync::Arc;
use tracing::{debug, trace};

use crate::keys::{Direction, KeyTransition};
use crate::sink::KeyEventSink;

/// Pressed flags for the four directions, indexed by [`Direction`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionStates {
    flags: [bool; 4],
}

impl DirectionStates {
    pub fn get(&self, dir: Direction) -> bool {
        self.flags[index(dir)]
    }

    pub fn set(&mut self, dir: Direction, pressed: bool) {
        self.flags[index(dir)] = pressed;
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|&f| f)
    }
}

fn index(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Compute the candidate direction set for a vector sample
///
/// Strict inequalities: a component sitting exactly on the dead-zone boundary
/// registers nothing, so noise oscillating around the threshold cannot flap.
///
/// The vertical axis is inverted relative to screen coordinates: the joystick
/// widget reports y growing upward, so positive y maps to `Up`. This is the
/// established control mapping and must be preserved as-is.
pub fn candidate_states(x: f32, y: f32, deadzone: f32) -> DirectionStates {
    let mut candidate = DirectionStates::default();
    candidate.set(Direction::Down, y < -deadzone);
    candidate.set(Direction::Up, y > deadzone);
    candidate.set(Direction::Left, x < -deadzone);
    candidate.set(Direction::Right, x > deadzone);
    candidate
}

/// Tracks held directions and emits only state-changing transitions
pub struct DirectionTracker {
    states: DirectionStates,
    deadzone: f32,
    sink: Arc<dyn KeyEventSink>,
}

impl DirectionTracker {
    /// Create a tracker with the given dead-zone threshold
    pub fn new(deadzone: f32, sink: Arc<dyn KeyEventSink>) -> Self {
        Self {
            states: DirectionStates::default(),
            deadzone,
            sink,
        }
    }

    /// Apply one vector sample from the joystick widget
    ///
    /// Emits at most one press and one release per direction, and nothing
    /// when the candidate state equals the stored state.
    pub fn apply_vector(&mut self, x: f32, y: f32) {
        let candidate = candidate_states(x, y, self.deadzone);
        if candidate == self.states {
            trace!("vector ({:.3}, {:.3}): no transitions", x, y);
            return;
        }

        for dir in Direction::ALL {
            let current = self.states.get(dir);
            let wanted = candidate.get(dir);
            if current == wanted {
                continue;
            }
            let transition = if wanted {
                KeyTransition::Press
            } else {
                KeyTransition::Release
            };
            debug!("{} {}", transition.event_name(), dir.name());
            self.sink.emit(transition, &dir.key_spec());
            self.states.set(dir, wanted);
        }
    }

    /// Apply a widget release (stick returned to center)
    pub fn apply_release(&mut self) {
        self.apply_vector(0.0, 0.0);
    }

    /// Force-release every held direction and clear stored state
    ///
    /// Required whenever the widget feeding this tracker is destroyed:
    /// without it a direction could stay logically pressed with nothing left
    /// alive to ever release it.
    pub fn reset(&mut self) {
        for dir in Direction::ALL {
            if self.states.get(dir) {
                debug!("reset: releasing {}", dir.name());
                self.sink.emit(KeyTransition::Release, &dir.key_spec());
                self.states.set(dir, false);
            }
        }
    }

    /// Whether the given direction is currently held
    pub fn is_pressed(&self, dir: Direction) -> bool {
        self.states.get(dir)
    }

    /// Whether any direction is currently held
    pub fn any_pressed(&self) -> bool {
        self.states.any()
    }
}
