//! In-memory pixel canvas.
//!
//! A `Canvas` wraps an `RgbaImage`. Drawing primitives live in `draw`,
//! whole-canvas effects (gradients, glows, compositing, blur) in `effects`,
//! and PNG output in `png`.

mod draw;
mod effects;
mod png;

pub use effects::{composite_over, gaussian_blur, RadialFalloff};

use image::{Rgba, RgbaImage};
use imageproc::drawing::Canvas as DrawTarget;

use crate::types::Colour;

/// A rectangular pixel grid with an optional alpha channel.
///
/// Pixels always carry RGBA internally; `has_alpha` decides whether the
/// alpha channel survives encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbaImage,
    has_alpha: bool,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32, has_alpha: bool) -> Self {
        Self::filled(width, height, has_alpha, Colour::TRANSPARENT)
    }

    /// Create a canvas with every pixel set to `colour`.
    pub fn filled(width: u32, height: u32, has_alpha: bool, colour: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, colour.into()),
            has_alpha,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|&p| p.into())
    }

    /// Iterate over every pixel, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.image.pixels().map(|&p| p.into())
    }

    /// Drop the alpha channel: every pixel becomes opaque.
    pub fn into_opaque(mut self) -> Self {
        for p in self.image.pixels_mut() {
            p.0[3] = 255;
        }
        self.has_alpha = false;
        self
    }

    /// Overwrite a pixel. Out-of-bounds writes are ignored.
    #[cfg(test)]
    pub(crate) fn put(&mut self, x: u32, y: u32, colour: Colour) {
        if let Some(p) = self.image.get_pixel_mut_checked(x, y) {
            *p = colour.into();
        }
    }

    /// A draw target that blends onto this canvas.
    fn blending(&mut self) -> SourceOver<'_> {
        SourceOver(&mut self.image)
    }
}

/// `imageproc` draw target that blends every drawn pixel source-over.
///
/// `imageproc` fills visit each pixel once for rects and single segments;
/// shapes built from overlapping strokes go through a coverage mask first.
struct SourceOver<'a>(&'a mut RgbaImage);

impl DrawTarget for SourceOver<'_> {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.0.get_pixel(x, y)
    }

    fn draw_pixel(&mut self, x: u32, y: u32, colour: Rgba<u8>) {
        let dst = self.0.get_pixel_mut(x, y);
        *dst = blend((*dst).into(), colour.into()).into();
    }
}

/// Source-over blend of `src` onto `dst`.
///
/// With an opaque destination this is `src * a + dst * (1 - a)` per channel,
/// rounded, where `a` is the source alpha.
pub fn blend(dst: Colour, src: Colour) -> Colour {
    if src.is_opaque() {
        return src;
    }
    if src.is_transparent() {
        return dst;
    }

    let sa = src.alpha_f32();
    if dst.is_opaque() {
        let channel = |s: u8, d: u8| (s as f32 * sa + d as f32 * (1.0 - sa)).round() as u8;
        return Colour::rgb(channel(src.r, dst.r), channel(src.g, dst.g), channel(src.b, dst.b));
    }

    let da = dst.alpha_f32();
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };

    Colour::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let canvas = Canvas::new(3, 2, true);
        assert_eq!(canvas.size(), (3, 2));
        assert!(canvas.pixels().all(|p| p.is_transparent()));
        assert_eq!(canvas.pixels().count(), 6);
    }

    #[test]
    fn test_put_and_get() {
        let mut canvas = Canvas::new(2, 2, false);
        canvas.put(1, 0, Colour::WHITE);
        canvas.put(5, 5, Colour::WHITE);
        assert_eq!(canvas.get(1, 0), Some(Colour::WHITE));
        assert_eq!(canvas.get(0, 1), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(2, 0), None);
    }

    #[test]
    fn test_source_over_target_blends() {
        let mut canvas = Canvas::filled(2, 1, false, Colour::rgb(100, 100, 100));
        canvas
            .blending()
            .draw_pixel(0, 0, Colour::new(200, 0, 100, 51).into());
        assert_eq!(canvas.get(0, 0), Some(Colour::rgb(120, 80, 100)));
        assert_eq!(canvas.get(1, 0), Some(Colour::rgb(100, 100, 100)));
    }

    #[test]
    fn test_blend_opaque_source_overwrites() {
        assert_eq!(blend(Colour::WHITE, Colour::rgb(1, 2, 3)), Colour::rgb(1, 2, 3));
    }

    #[test]
    fn test_blend_transparent_source_is_noop() {
        let dst = Colour::rgb(9, 8, 7);
        assert_eq!(blend(dst, Colour::new(255, 255, 255, 0)), dst);
    }

    #[test]
    fn test_blend_over_opaque() {
        // a = 51/255 = 0.2: 200 * 0.2 + 100 * 0.8 = 120
        let out = blend(Colour::rgb(100, 100, 100), Colour::new(200, 0, 100, 51));
        assert_eq!(out, Colour::rgb(120, 80, 100));
    }

    #[test]
    fn test_blend_over_transparent_keeps_source() {
        let out = blend(Colour::TRANSPARENT, Colour::new(200, 10, 30, 40));
        assert_eq!(out, Colour::new(200, 10, 30, 40));
    }

    #[test]
    fn test_into_opaque() {
        let mut canvas = Canvas::new(1, 1, true);
        canvas.put(0, 0, Colour::new(5, 6, 7, 8));
        let canvas = canvas.into_opaque();
        assert!(!canvas.has_alpha());
        assert_eq!(canvas.get(0, 0), Some(Colour::rgb(5, 6, 7)));
    }
}
