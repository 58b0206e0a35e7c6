//! PNG output for canvases.
//!
//! Opaque canvases are written as RGB8, canvases with alpha as RGBA8. The
//! encoder settings are fixed so identical pixels give identical bytes.

use std::fs;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use crate::error::{AssetError, Result};

use super::Canvas;

impl Canvas {
    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let (buffer, colour_type) = if self.has_alpha {
            (self.image.as_raw().clone(), ExtendedColorType::Rgba8)
        } else {
            let rgb = DynamicImage::ImageRgba8(self.image.clone()).into_rgb8();
            (rgb.into_raw(), ExtendedColorType::Rgb8)
        };

        let mut bytes = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut bytes,
            CompressionType::Default,
            FilterType::Adaptive,
        );
        encoder
            .write_image(&buffer, self.width(), self.height(), colour_type)
            .map_err(|e| AssetError::Build {
                message: format!("Failed to encode PNG: {}", e),
                help: None,
            })?;

        Ok(bytes)
    }

    /// Encode the canvas and write it to `path`, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png()?;

        fs::write(path, bytes).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_save_png_opaque() {
        let mut canvas = Canvas::filled(2, 2, false, Colour::BLACK);
        canvas.put(1, 0, Colour::WHITE);

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        canvas.save_png(&path).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        let img = img.to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_save_png_with_transparency() {
        let mut canvas = Canvas::new(2, 1, true);
        canvas.put(1, 0, Colour::new(255, 0, 0, 128));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        canvas.save_png(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_save_png_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("again.png");

        Canvas::filled(1, 1, false, Colour::BLACK).save_png(&path).unwrap();
        Canvas::filled(1, 1, false, Colour::WHITE).save_png(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mut canvas = Canvas::filled(16, 16, false, Colour::rgb(10, 20, 30));
        canvas.put(3, 7, Colour::WHITE);
        assert_eq!(canvas.encode_png().unwrap(), canvas.encode_png().unwrap());
    }

    #[test]
    fn test_save_png_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");

        let err = Canvas::new(1, 1, false).save_png(&path).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
