//! Motifs shared by several generators: starfields, lit buildings, the moon,
//! the night cityscape and the portrait vignette.

use crate::canvas::{Canvas, RadialFalloff};
use crate::random::RandomStream;
use crate::types::{Colour, Rect};

/// Seed for starfields.
pub const STAR_SEED: u64 = 42;

/// Seed for the cityscape skyline.
pub const SKYLINE_SEED: u64 = 123;

pub const SKIN: Colour = Colour::rgb(245, 222, 179);
pub const BILL: Colour = Colour::rgb(244, 164, 96);

/// Scatter small stars over the top half of a `width` x `height` area.
pub fn draw_stars(
    canvas: &mut Canvas,
    width: i32,
    height: i32,
    count: usize,
    rng: &mut RandomStream,
) {
    for _ in 0..count {
        let x = rng.next_int(0, width);
        let y = rng.next_int(0, height / 2);
        let b = rng.next_u8(150, 255);
        let s = *rng.choice(&[1, 1, 1, 2]).unwrap_or(&1);
        let blue = b.saturating_add((255 - b).min(30));
        canvas.fill_ellipse(Rect::new(x, y, x + s, y + s), Colour::rgb(b, b, blue));
    }
}

/// A building block with a grid of randomly lit windows.
#[allow(clippy::too_many_arguments)]
pub fn draw_building(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    colour: Colour,
    window: Colour,
    rng: &mut RandomStream,
) {
    canvas.fill_rect(Rect::new(x, y, x + w, y + h), colour);

    for wy in (y + 8..y + h - 8).step_by(14) {
        for wx in (x + 5..x + w - 5).step_by(10) {
            if rng.chance(0.7) {
                canvas.fill_rect(Rect::new(wx, wy, wx + 5, wy + 7), window);
            }
        }
    }
}

/// Moon with two craters.
pub fn draw_moon(canvas: &mut Canvas, cx: i32, cy: i32, r: i32) {
    canvas.fill_circle(cx, cy, r, Colour::rgb(240, 235, 200));

    let (a, b) = (r / 3, r / 4);
    canvas.fill_ellipse(
        Rect::new(cx - a, cy - b, cx - a + b, cy),
        Colour::rgb(220, 215, 185),
    );
    let (c, d) = (r / 5, r / 6);
    canvas.fill_ellipse(
        Rect::new(cx + c, cy + d, cx + c + c, cy + d + c),
        Colour::rgb(225, 220, 190),
    );
}

/// Parameters for a night skyline.
#[derive(Debug, Clone)]
pub struct Cityscape<'a> {
    pub sky_top: Colour,
    pub sky_bottom: Colour,
    pub building_colours: &'a [Colour],
    pub window: Colour,
    pub stars: bool,
    pub moon: bool,
}

/// Paint a gradient sky, stars, moon, a dark far row and a lit near row of
/// buildings. The result is opaque.
pub fn cityscape(width: u32, height: u32, scene: &Cityscape) -> Canvas {
    let (w, h) = (width as i32, height as i32);
    let mut canvas = Canvas::new(width, height, false);
    canvas.vertical_gradient(Rect::new(0, 0, w - 1, h - 1), scene.sky_top, scene.sky_bottom);

    if scene.stars {
        draw_stars(&mut canvas, w, h, 80, &mut RandomStream::seeded(STAR_SEED));
    }
    if scene.moon {
        draw_moon(&mut canvas, w * 3 / 4, h / 6, 35);
    }

    let mut rng = RandomStream::seeded(SKYLINE_SEED);
    let first = scene.building_colours.first().copied().unwrap_or(Colour::BLACK);
    let far = first.darken(0.6);

    for x in (0..w).step_by(60) {
        let bh = rng.next_int(80, 200);
        canvas.fill_rect(Rect::new(x, h - bh, x + 55, h), far);
    }

    for x in (0..w).step_by(70) {
        let bh = rng.next_int(100, 280);
        let colour = rng.choice(scene.building_colours).copied().unwrap_or(first);
        draw_building(&mut canvas, x, h - bh, 60, bh, colour, scene.window, &mut rng);
    }

    canvas
}

/// Square portrait backdrop: a gradient from `base` to 40% darker and an
/// accent-coloured glow in the middle.
pub fn portrait_vignette(size: u32, base: Colour, accent: Colour) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size, size, true);
    canvas.vertical_gradient(Rect::new(0, 0, s - 1, s - 1), base, base.darken(0.4));
    canvas.radial_falloff(&RadialFalloff {
        cx: s / 2,
        cy: s / 2,
        max_radius: s / 2,
        min_radius: 10,
        step: 3,
        colour: accent,
        peak_alpha: 30,
    });
    canvas
}
