//! Decoder for the PPM image format.
//!
//! Supports the two classic variants with 8-bit samples:
//! - `P3` — ASCII decimal triplets
//! - `P6` — raw binary triplets
//!
//! Deliberately unsupported: multi-byte (16-bit) samples, PGM/PBM, encoding.

mod error;
mod image;
mod reader;

pub use error::PpmError;
pub use image::{PpmFormat, PpmImage, Rgb};
