//! ppmview engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the viewer binary: the
//! winit event loop, the wgpu device/surface, input state, and the textured
//! quad renderer.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod transform;
pub mod window;
