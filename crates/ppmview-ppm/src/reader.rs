use crate::error::PpmError;
use crate::image::{PpmFormat, PpmImage, Rgb};

/// Cursor over a PPM byte stream.
///
/// Header parsing is shared between the variants; the body reader is chosen
/// by the magic number. Comments (`#` to end of line) are treated as
/// whitespace anywhere in the header.
pub(crate) struct Reader<'b> {
    bytes: &'b [u8],
    pos: usize,
}

impl<'b> Reader<'b> {
    pub(crate) fn new(bytes: &'b [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn decode(mut self) -> Result<PpmImage, PpmError> {
        let format = self.read_magic()?;

        let width = self.read_ascii_number("width")?;
        let height = self.read_ascii_number("height")?;
        if width == 0 || height == 0 {
            return Err(self.err(format!("zero image dimensions ({width}x{height})")));
        }

        let max_value = self.read_ascii_number("max value")?;
        if max_value >= 256 {
            return Err(self.err(format!(
                "multi-byte samples not supported (max value {max_value})"
            )));
        }
        if max_value == 0 {
            return Err(self.err("max value must be at least 1"));
        }

        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| self.err("image dimensions overflow"))?;

        let pixels = match format {
            PpmFormat::P3 => self.read_p3_body(count, max_value)?,
            PpmFormat::P6 => self.read_p6_body(count)?,
        };

        Ok(PpmImage {
            format,
            width,
            height,
            max_value: max_value as u16,
            pixels,
        })
    }

    fn err(&self, msg: impl Into<String>) -> PpmError {
        PpmError::new(msg, self.pos)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn read_magic(&mut self) -> Result<PpmFormat, PpmError> {
        match (self.advance(), self.advance()) {
            (Some(b'P'), Some(b'3')) => Ok(PpmFormat::P3),
            (Some(b'P'), Some(b'6')) => Ok(PpmFormat::P6),
            (Some(b'P'), Some(other)) => Err(self.err(format!(
                "unsupported PPM variant P{}, expected P3 or P6",
                other as char
            ))),
            _ => Err(self.err("not a PPM stream (missing P3/P6 magic)")),
        }
    }

    /// Skips whitespace and `#` comments (which run to end of line).
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
                self.advance();
            }
            if self.peek() == Some(b'#') {
                while !matches!(self.peek(), None | Some(b'\n')) {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    /// Reads one unsigned ASCII decimal token.
    fn read_ascii_number(&mut self, what: &str) -> Result<u32, PpmError> {
        self.skip_whitespace_and_comments();

        match self.peek() {
            None => return Err(self.err(format!("unexpected end of input reading {what}"))),
            Some(b) if !b.is_ascii_digit() => {
                return Err(self.err(format!(
                    "expected {what}, found {:?}",
                    b as char
                )));
            }
            Some(_) => {}
        }

        let mut value: u32 = 0;
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            self.advance();
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as u32))
                .ok_or_else(|| self.err(format!("{what} out of range")))?;
        }
        Ok(value)
    }

    fn read_p3_body(&mut self, count: usize, max_value: u32) -> Result<Vec<Rgb>, PpmError> {
        // A pixel needs several body bytes, so a hostile header claiming more
        // pixels than the input could hold must not drive the preallocation.
        let remaining = self.bytes.len() - self.pos;
        let mut pixels = Vec::with_capacity(count.min(remaining));
        for _ in 0..count {
            let r = self.read_sample(max_value)?;
            let g = self.read_sample(max_value)?;
            let b = self.read_sample(max_value)?;
            pixels.push(Rgb { r, g, b });
        }
        Ok(pixels)
    }

    fn read_sample(&mut self, max_value: u32) -> Result<u8, PpmError> {
        let v = self.read_ascii_number("sample")?;
        if v > max_value {
            return Err(self.err(format!("sample {v} exceeds max value {max_value}")));
        }
        Ok(v as u8)
    }

    fn read_p6_body(&mut self, count: usize) -> Result<Vec<Rgb>, PpmError> {
        // Exactly one whitespace byte separates the max value from the
        // binary payload; a comment here would be part of the pixel data.
        match self.advance() {
            Some(b) if b.is_ascii_whitespace() => {}
            Some(_) => return Err(self.err("expected whitespace before P6 pixel data")),
            None => return Err(self.err("unexpected end of input before P6 pixel data")),
        }

        let needed = count * 3;
        let body = &self.bytes[self.pos..];
        if body.len() < needed {
            return Err(PpmError::new(
                format!(
                    "truncated P6 pixel data: need {needed} bytes, have {}",
                    body.len()
                ),
                self.bytes.len(),
            ));
        }

        let pixels = body[..needed]
            .chunks_exact(3)
            .map(|c| Rgb { r: c[0], g: c[1], b: c[2] })
            .collect();

        // Trailing bytes after the payload are ignored; some writers pad.
        self.pos += needed;
        Ok(pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PpmImage;

    fn px(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    // ── header ────────────────────────────────────────────────────────────

    #[test]
    fn p3_minimal() {
        let img = PpmImage::decode(b"P3\n1 1\n255\n10 20 30\n").unwrap();
        assert_eq!(img.format, PpmFormat::P3);
        assert_eq!(img.width, 1);
        assert_eq!(img.height, 1);
        assert_eq!(img.max_value, 255);
        assert_eq!(img.pixels, vec![px(10, 20, 30)]);
    }

    #[test]
    fn comment_after_magic() {
        let img = PpmImage::decode(b"P3\n# made by hand\n2 1\n255\n0 0 0 1 2 3\n").unwrap();
        assert_eq!(img.width, 2);
        assert_eq!(img.pixels[1], px(1, 2, 3));
    }

    #[test]
    fn comments_between_header_tokens() {
        let input = b"P3 # variant\n1 # width\n1 # height\n255 # depth\n9 8 7";
        let img = PpmImage::decode(input).unwrap();
        assert_eq!(img.pixels, vec![px(9, 8, 7)]);
    }

    #[test]
    fn crlf_whitespace() {
        let img = PpmImage::decode(b"P3\r\n1 1\r\n255\r\n1 2 3\r\n").unwrap();
        assert_eq!(img.pixels, vec![px(1, 2, 3)]);
    }

    #[test]
    fn rejects_bad_magic() {
        let err = PpmImage::decode(b"P5\n1 1\n255\n\x00").unwrap_err();
        assert!(err.message.contains("P5"), "{}", err);
    }

    #[test]
    fn rejects_non_ppm() {
        assert!(PpmImage::decode(b"GIF89a").is_err());
        assert!(PpmImage::decode(b"").is_err());
    }

    #[test]
    fn rejects_multibyte_samples() {
        let err = PpmImage::decode(b"P3\n1 1\n65535\n0 0 0\n").unwrap_err();
        assert!(err.message.contains("multi-byte"), "{}", err);
    }

    #[test]
    fn rejects_zero_max_value() {
        assert!(PpmImage::decode(b"P3\n1 1\n0\n0 0 0\n").is_err());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(PpmImage::decode(b"P3\n0 1\n255\n").is_err());
        assert!(PpmImage::decode(b"P6\n1 0\n255\n").is_err());
    }

    // ── P3 body ───────────────────────────────────────────────────────────

    #[test]
    fn p3_multiple_pixels_irregular_whitespace() {
        let input = b"P3\n2 2\n255\n255   0 0\n0 255 0\n\n0 0 255\n128 128 128";
        let img = PpmImage::decode(input).unwrap();
        assert_eq!(
            img.pixels,
            vec![
                px(255, 0, 0),
                px(0, 255, 0),
                px(0, 0, 255),
                px(128, 128, 128)
            ]
        );
    }

    #[test]
    fn p3_sample_above_max_value() {
        let err = PpmImage::decode(b"P3\n1 1\n100\n0 0 101\n").unwrap_err();
        assert!(err.message.contains("exceeds"), "{}", err);
    }

    #[test]
    fn p3_huge_header_with_tiny_body() {
        // The declared pixel count must not be allocated up front; a short
        // body fails with a decode error instead of exhausting memory.
        let err = PpmImage::decode(b"P3\n999999999 999999999\n255\n0").unwrap_err();
        assert!(err.message.contains("end of input"), "{}", err);
    }

    #[test]
    fn p3_truncated_body() {
        let err = PpmImage::decode(b"P3\n2 1\n255\n1 2 3\n").unwrap_err();
        assert!(err.message.contains("end of input"), "{}", err);
    }

    #[test]
    fn p3_scaled_max_value() {
        // Samples are stored as-is; max_value records the scale.
        let img = PpmImage::decode(b"P3\n1 1\n15\n15 0 7\n").unwrap();
        assert_eq!(img.max_value, 15);
        assert_eq!(img.pixels, vec![px(15, 0, 7)]);
    }

    // ── P6 body ───────────────────────────────────────────────────────────

    #[test]
    fn p6_minimal() {
        let img = PpmImage::decode(b"P6\n2 1\n255\n\x01\x02\x03\xff\xfe\xfd").unwrap();
        assert_eq!(img.format, PpmFormat::P6);
        assert_eq!(img.pixels, vec![px(1, 2, 3), px(255, 254, 253)]);
    }

    #[test]
    fn p6_payload_bytes_are_not_comments() {
        // 0x23 == b'#': inside the payload it is pixel data, not a comment.
        let img = PpmImage::decode(b"P6\n1 1\n255\n###").unwrap();
        assert_eq!(img.pixels, vec![px(0x23, 0x23, 0x23)]);
    }

    #[test]
    fn p6_truncated_body() {
        let err = PpmImage::decode(b"P6\n2 2\n255\n\x00\x00\x00").unwrap_err();
        assert!(err.message.contains("truncated"), "{}", err);
    }

    #[test]
    fn p6_trailing_bytes_ignored() {
        let img = PpmImage::decode(b"P6\n1 1\n255\n\x0a\x0b\x0c\n\n").unwrap();
        assert_eq!(img.pixels, vec![px(10, 11, 12)]);
    }

    // ── rgba expansion ────────────────────────────────────────────────────

    #[test]
    fn to_rgba8_appends_opaque_alpha() {
        let img = PpmImage::decode(b"P3\n2 1\n255\n1 2 3 4 5 6\n").unwrap();
        assert_eq!(img.to_rgba8(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn error_reports_byte_offset() {
        let err = PpmImage::decode(b"P3\n1 1\nxyz\n").unwrap_err();
        assert_eq!(err.offset, 7);
        assert_eq!(
            err.to_string(),
            "ppm decode error at byte 7: expected max value, found 'x'"
        );
    }
}
