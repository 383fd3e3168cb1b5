//! GPU rendering subsystem.
//!
//! One renderer: `ImageRenderer`, which owns the uploaded image texture and
//! draws it as a single transformed quad. The vertex shader applies the MVP
//! matrix to quad corners given in NDC; there is no projection, so the quad
//! stretches with the window exactly as the classic fixed-pipeline version
//! of this viewer did.

mod ctx;
mod image;

pub use ctx::{ClearColor, RenderCtx, RenderTarget};
pub use image::ImageRenderer;
