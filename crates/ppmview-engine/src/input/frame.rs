use std::collections::HashSet;

use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, focus); `InputFrame`
/// provides the transitions that happened during the current frame. The
/// runtime clears it after each `on_frame` call.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame (auto-repeat excluded).
    pub keys_pressed: HashSet<Key>,

    /// Keys that went up this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
