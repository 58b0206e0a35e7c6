//! Whole-canvas effects: gradients, radial glows, compositing and blur.

use imageproc::drawing::draw_filled_rect_mut;
use imageproc::filter::gaussian_blur_f32;
use imageproc::rect::Rect as PixelRect;

use crate::types::{Colour, Rect};

use super::{blend, Canvas};

/// A soft circular glow built from concentric translucent discs.
///
/// Discs are drawn from `max_radius` down to (but excluding) `min_radius`,
/// `step` pixels apart. Each disc has alpha
/// `peak_alpha * (1 - (r - min_radius) / (max_radius - min_radius))` and is
/// blended over what is already there, so the centre accumulates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialFalloff {
    pub cx: i32,
    pub cy: i32,
    pub max_radius: i32,
    pub min_radius: i32,
    pub step: i32,
    pub colour: Colour,
    pub peak_alpha: u8,
}

impl Canvas {
    /// Fill `rect` with a top-to-bottom linear gradient.
    ///
    /// Row `r` of `h` rows gets `top + (bottom - top) * r / (h - 1)`, rounded
    /// per channel (alpha included). Rows are overwritten, not blended.
    pub fn vertical_gradient(&mut self, rect: Rect, top: Colour, bottom: Colour) {
        let Some(visible) = rect.clip(self.width(), self.height()) else {
            return;
        };
        let h = rect.height();
        for y in visible.y0..=visible.y1 {
            let row = (y - rect.y0) as u32;
            let t = if h > 1 {
                row as f32 / (h - 1) as f32
            } else {
                0.0
            };
            let alpha = (top.a as f32 + (bottom.a as f32 - top.a as f32) * t).round() as u8;
            let colour = top.lerp(bottom, t).with_alpha(alpha);
            let band = PixelRect::at(visible.x0, y).of_size(visible.width(), 1);
            draw_filled_rect_mut(&mut self.image, band, colour.into());
        }
    }

    /// Blend a radial glow onto the canvas.
    pub fn radial_falloff(&mut self, glow: &RadialFalloff) {
        let span = (glow.max_radius - glow.min_radius) as f32;
        if span <= 0.0 {
            return;
        }
        let step = glow.step.max(1);

        let mut r = glow.max_radius;
        while r > glow.min_radius {
            let t = (r - glow.min_radius) as f32 / span;
            let alpha = (glow.peak_alpha as f32 * (1.0 - t)).round() as u8;
            if alpha > 0 {
                self.fill_circle(glow.cx, glow.cy, r, glow.colour.with_alpha(alpha));
            }
            r -= step;
        }
    }
}

/// Alpha-composite `overlay` over `base`, returning a new canvas.
///
/// Neither input is modified. The result has the size and alpha mode of
/// `base`; overlay pixels outside it are ignored.
pub fn composite_over(base: &Canvas, overlay: &Canvas) -> Canvas {
    let mut out = base.clone();
    let w = base.width().min(overlay.width());
    let h = base.height().min(overlay.height());

    for y in 0..h {
        for x in 0..w {
            let src = *overlay.image.get_pixel(x, y);
            let dst = out.image.get_pixel_mut(x, y);
            *dst = blend((*dst).into(), src.into()).into();
        }
    }

    out
}

/// Gaussian blur with `sigma = radius`, returning a new canvas.
///
/// Channels are filtered independently and edges are clamped. A radius of
/// zero or less returns a copy. Canvases without alpha stay opaque.
pub fn gaussian_blur(canvas: &Canvas, radius: f32) -> Canvas {
    if radius <= 0.0 || canvas.width() == 0 || canvas.height() == 0 {
        return canvas.clone();
    }

    let blurred = Canvas {
        image: gaussian_blur_f32(&canvas.image, radius),
        has_alpha: canvas.has_alpha,
    };
    if canvas.has_alpha {
        blurred
    } else {
        blurred.into_opaque()
    }
}
