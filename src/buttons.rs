//! Discrete button binder
//!
//! Wires static touch zones to fixed keys: touch-start presses, touch-end
//! releases, with the visual swap handled through the host surface. There is
//! no state machine here; physical touch-start/touch-end pairs are already
//! discrete, so each event maps 1:1 onto a key transition.

use std::sync::Arc;
use tracing::debug;

use crate::config::ButtonBinding;
use crate::host::ZoneHost;
use crate::keys::{KeySpec, KeyTransition};
use crate::sink::KeyEventSink;

struct BoundButton {
    id: String,
    key: KeySpec,
    pressed_image: String,
    released_image: String,
}

/// Static button-to-key wiring
pub struct ButtonBinder {
    host: Arc<dyn ZoneHost>,
    sink: Arc<dyn KeyEventSink>,
    bound: Vec<BoundButton>,
}

impl ButtonBinder {
    /// Bind every configured button whose element exists on the surface
    ///
    /// Absent elements are skipped; the rest of the overlay keeps working.
    pub fn bind(
        bindings: &[ButtonBinding],
        host: Arc<dyn ZoneHost>,
        sink: Arc<dyn KeyEventSink>,
    ) -> Self {
        let mut bound = Vec::new();
        for binding in bindings {
            if !host.button_exists(&binding.id) {
                debug!("button element '{}' not found, skipping", binding.id);
                continue;
            }
            host.set_button_image(&binding.id, &binding.released_image);
            bound.push(BoundButton {
                id: binding.id.clone(),
                key: binding.key.clone(),
                pressed_image: binding.pressed_image.clone(),
                released_image: binding.released_image.clone(),
            });
        }
        debug!("bound {} of {} configured buttons", bound.len(), bindings.len());
        Self { host, sink, bound }
    }

    /// Whether this binder handles the given element id
    pub fn owns(&self, id: &str) -> bool {
        self.bound.iter().any(|b| b.id == id)
    }

    /// Touch-start on a bound button
    pub fn press(&self, id: &str) {
        if let Some(button) = self.bound.iter().find(|b| b.id == id) {
            self.host.set_button_pressed(&button.id, true);
            self.host.set_button_image(&button.id, &button.pressed_image);
            self.sink.emit(KeyTransition::Press, &button.key);
        }
    }

    /// Touch-end on a bound button
    pub fn release(&self, id: &str) {
        if let Some(button) = self.bound.iter().find(|b| b.id == id) {
            self.host.set_button_pressed(&button.id, false);
            self.host.set_button_image(&button.id, &button.released_image);
            self.sink.emit(KeyTransition::Release, &button.key);
        }
    }
}
