//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates platform events into `InputEvent`s. The viewer is
//! keyboard-driven, so only keyboard and focus events are modeled.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
