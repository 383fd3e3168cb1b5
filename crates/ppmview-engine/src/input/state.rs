use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current input state for the window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and writes transition
    /// deltas to `frame`.
    ///
    /// OS auto-repeat produces `Pressed` events while the key is already in
    /// `keys_down`; the insert transition check filters those out of
    /// `frame.keys_pressed`, so discrete per-press actions fire once.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear the "down" set to avoid stuck
                    // keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => {
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(key) {
                            frame.keys_pressed.insert(key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(&key) {
                            frame.keys_released.insert(key);
                        }
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            code: 0,
            repeat: false,
        }
    }

    fn repeat(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            code: 0,
            repeat: true,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Released,
            code: 0,
            repeat: false,
        }
    }

    #[test]
    fn press_records_transition_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::Q));
        assert!(state.key_down(Key::Q));
        assert!(frame.pressed(Key::Q));

        // Auto-repeat while held must not re-fire the transition.
        frame.clear();
        state.apply_event(&mut frame, repeat(Key::Q));
        assert!(state.key_down(Key::Q));
        assert!(!frame.pressed(Key::Q));
    }

    #[test]
    fn release_then_press_fires_again() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::E));
        frame.clear();

        state.apply_event(&mut frame, release(Key::E));
        assert!(frame.keys_released.contains(&Key::E));
        frame.clear();

        state.apply_event(&mut frame, press(Key::E));
        assert!(frame.pressed(Key::E));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.key_down(Key::W));
        assert!(!state.focused);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, release(Key::A));
        assert!(frame.keys_released.is_empty());
    }
}
