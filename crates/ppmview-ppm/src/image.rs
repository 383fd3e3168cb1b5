use crate::error::PpmError;
use crate::reader::Reader;

/// One 8-bit red/green/blue sample triplet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// PPM variant, as declared by the magic number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PpmFormat {
    /// ASCII decimal triplets.
    P3,
    /// Raw binary triplets.
    P6,
}

/// A decoded PPM image.
///
/// `pixels` is row-major, top row first, `width * height` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmImage {
    /// Variant the stream was encoded in.
    pub format: PpmFormat,
    pub width: u32,
    pub height: u32,
    /// Declared maximum sample value, `1..=255`.
    pub max_value: u16,
    pub pixels: Vec<Rgb>,
}

impl PpmImage {
    /// Decodes a P3 or P6 byte stream.
    pub fn decode(bytes: &[u8]) -> Result<Self, PpmError> {
        Reader::new(bytes).decode()
    }

    /// Expands the pixel buffer to tightly packed RGBA with opaque alpha.
    ///
    /// Output length is `4 * width * height`, suitable for an
    /// `Rgba8Unorm`-family texture upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b, 0xff]);
        }
        out
    }
}
