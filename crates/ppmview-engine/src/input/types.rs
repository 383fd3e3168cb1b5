/// Keyboard key identifier.
///
/// Covers the keys the viewer binds (letters, arrows, `-`/`=`, Escape) plus
/// common control keys. Unmapped platform keys land in `Key::Unknown` with a
/// stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// The `-`/`_` key (scale down).
    Minus,
    /// The `=`/`+` key (scale up).
    Equal,

    // Modifiers as keys
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Platform-agnostic input event as delivered by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Focused(bool),
    Key {
        key: Key,
        state: KeyState,
        /// Raw platform keycode, for diagnostics.
        code: u32,
        /// True for OS auto-repeat events while the key is held.
        repeat: bool,
    },
}
