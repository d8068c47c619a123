//! Texture image decoding
//!
//! Textures must be 8-bit, RGB, non-interlaced PNG files. The header is
//! checked before decoding so the error names exactly what is wrong with
//! the file rather than silently converting it.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{image_decode_error, GardenError, GardenErrorContext, GardenResult};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const PNG_COLOR_RGB: u8 = 2;

/// Raw row-major RGB pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 3` bytes, top row first
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    /// RGB triple at column `x`, row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        Some([self.bytes[i], self.bytes[i + 1], self.bytes[i + 2]])
    }
}

/// Fields of the PNG IHDR chunk that decide whether a file is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub interlaced: bool,
}

impl PngHeader {
    /// Read the header from the start of a PNG stream
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 29 || bytes[..8] != PNG_SIGNATURE || &bytes[12..16] != b"IHDR" {
            return None;
        }
        let be_u32 = |at: usize| u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        Some(Self {
            width: be_u32(16),
            height: be_u32(20),
            bit_depth: bytes[24],
            color_type: bytes[25],
            interlaced: bytes[28] != 0,
        })
    }

    pub fn color_name(&self) -> &'static str {
        match self.color_type {
            0 => "Gray",
            2 => "RGB",
            3 => "Palette",
            4 => "Gray Alpha",
            6 => "RGBA",
            _ => "Unknown",
        }
    }

    pub fn is_supported(&self) -> bool {
        self.bit_depth == 8 && self.color_type == PNG_COLOR_RGB && !self.interlaced
    }

    fn check_supported(&self, path: &Path) -> GardenResult<()> {
        if self.is_supported() {
            return Ok(());
        }
        Err(GardenError::UnsupportedImageFormat {
            path: path.to_path_buf(),
            bit_depth: self.bit_depth,
            color: self.color_name(),
            interlaced: self.interlaced,
        })
    }
}

/// Decode an 8-bit RGB non-interlaced PNG file
pub fn decode(path: impl AsRef<Path>) -> GardenResult<DecodedImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).io_context(path)?;

    let header = PngHeader::parse(&bytes).ok_or_else(|| image_decode_error(path, "not a PNG file"))?;
    header.check_supported(path)?;

    let rgb = match image::load_from_memory_with_format(&bytes, ImageFormat::Png) {
        Ok(DynamicImage::ImageRgb8(buffer)) => buffer,
        Ok(other) => {
            return Err(image_decode_error(
                path,
                format!("decoder produced {:?} pixels", other.color()),
            ))
        }
        Err(e) => return Err(image_decode_error(path, e)),
    };

    let (width, height) = rgb.dimensions();
    log::debug!("Decoded {} ({}x{})", path.display(), width, height);
    Ok(DecodedImage {
        width,
        height,
        bytes: rgb.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn header_bytes(bit_depth: u8, color_type: u8, interlace: u8) -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&96u32.to_be_bytes());
        bytes.extend_from_slice(&64u32.to_be_bytes());
        bytes.extend_from_slice(&[bit_depth, color_type, 0, 0, interlace]);
        bytes
    }

    #[test]
    fn decodes_rgb_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wood.png");
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));
        img.put_pixel(2, 1, Rgb([200, 100, 50]));
        img.save(&path).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.bytes.len(), 3 * 2 * 3);
        assert_eq!(decoded.pixel(0, 0), Some([10, 20, 30]));
        assert_eq!(decoded.pixel(2, 1), Some([200, 100, 50]));
        assert_eq!(decoded.pixel(3, 0), None);
    }

    #[test]
    fn rejects_rgba_png_with_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soil.png");
        RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4])).save(&path).unwrap();

        match decode(&path).unwrap_err() {
            GardenError::UnsupportedImageFormat {
                path: p,
                bit_depth,
                color,
                interlaced,
            } => {
                assert_eq!(p, path);
                assert_eq!(bit_depth, 8);
                assert_eq!(color, "RGBA");
                assert!(!interlaced);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = decode("/nonexistent/wood.png").unwrap_err();
        assert!(matches!(err, GardenError::Io { .. }));
        assert!(err.to_string().contains("wood.png"));
    }

    #[test]
    fn non_png_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(matches!(decode(&path).unwrap_err(), GardenError::ImageDecode { .. }));
    }

    #[test]
    fn header_flags_each_deviation() {
        let ok = PngHeader::parse(&header_bytes(8, 2, 0)).unwrap();
        assert!(ok.is_supported());
        assert_eq!((ok.width, ok.height), (96, 64));

        let interlaced = PngHeader::parse(&header_bytes(8, 2, 1)).unwrap();
        assert!(interlaced.interlaced);
        assert!(!interlaced.is_supported());

        let deep = PngHeader::parse(&header_bytes(16, 2, 0)).unwrap();
        assert!(!deep.is_supported());

        let palette = PngHeader::parse(&header_bytes(8, 3, 0)).unwrap();
        assert_eq!(palette.color_name(), "Palette");
        assert!(!palette.is_supported());
    }

    #[test]
    fn header_rejects_truncated_stream() {
        assert!(PngHeader::parse(&PNG_SIGNATURE).is_none());
    }
}
