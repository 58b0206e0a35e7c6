//! 1024x576 level backgrounds.

use crate::canvas::{composite_over, gaussian_blur, Canvas, RadialFalloff};
use crate::random::RandomStream;
use crate::types::{Colour, Point, Rect};

use super::scenery::{cityscape, Cityscape};

pub const WIDTH: u32 = 1024;
pub const HEIGHT: u32 = 576;

const W: i32 = WIDTH as i32;
const H: i32 = HEIGHT as i32;

const FUNHOUSE_SEED: u64 = 77;
const GREENHOUSE_SEED: u64 = 55;
const DAM_SEED: u64 = 33;
const FORTRESS_SEED: u64 = 66;

/// Full-width band whose alpha rises linearly from 0 at `from_y` to
/// `peak_alpha` at the bottom edge.
fn rising_glow(from_y: i32, colour: Colour, peak_alpha: u8) -> Canvas {
    let mut glow = Canvas::new(WIDTH, HEIGHT, true);
    glow.vertical_gradient(
        Rect::new(0, from_y, W - 1, H - 1),
        colour.with_alpha(0),
        colour.with_alpha(peak_alpha),
    );
    glow
}

/// Title screen: moonlit skyline, purple glow from below, softened.
pub fn title_bg() -> Canvas {
    let canvas = cityscape(
        WIDTH,
        HEIGHT,
        &Cityscape {
            sky_top: Colour::rgb(12, 8, 40),
            sky_bottom: Colour::rgb(30, 15, 60),
            building_colours: &[
                Colour::rgb(25, 20, 50),
                Colour::rgb(30, 25, 60),
                Colour::rgb(20, 15, 45),
            ],
            window: Colour::new(255, 220, 100, 180),
            stars: true,
            moon: true,
        },
    );

    let glow = rising_glow(450, Colour::rgb(123, 47, 247), 60);
    let canvas = composite_over(&canvas, &glow).into_opaque();
    gaussian_blur(&canvas, 1.0)
}

/// Rooftop chase: skyline with ledges in the foreground.
pub fn bg_rooftops() -> Canvas {
    let mut canvas = cityscape(
        WIDTH,
        HEIGHT,
        &Cityscape {
            sky_top: Colour::rgb(10, 10, 42),
            sky_bottom: Colour::rgb(25, 20, 55),
            building_colours: &[
                Colour::rgb(35, 30, 65),
                Colour::rgb(40, 35, 75),
                Colour::rgb(28, 22, 52),
            ],
            window: Colour::new(255, 220, 80, 150),
            stars: true,
            moon: true,
        },
    );

    // Each ledge is seeded by its own x so moving one never shifts another.
    for x in (0..W).step_by(150) {
        let mut rng = RandomStream::seeded(x as u64);
        let ry = 350 + rng.next_int(0, 120);
        let rw = rng.next_int(80, 140);
        canvas.fill_rect(Rect::new(x, ry, x + rw, ry + 15), Colour::rgb(55, 55, 90));
        canvas.fill_rect(Rect::new(x, ry, x + rw, ry + 3), Colour::rgb(80, 80, 130));
    }

    canvas
}

/// Funhouse: slanted circus stripes under a dark tint, balloons, checkered
/// floor.
pub fn bg_funhouse() -> Canvas {
    const STRIPES: [Colour; 6] = [
        Colour::rgb(180, 40, 100),
        Colour::rgb(200, 80, 40),
        Colour::rgb(180, 160, 40),
        Colour::rgb(40, 160, 80),
        Colour::rgb(40, 80, 180),
        Colour::rgb(120, 40, 180),
    ];
    const STRIPE_W: i32 = 80;

    let mut canvas = Canvas::new(WIDTH, HEIGHT, false);
    for (n, i) in (0..W + 200).step_by(STRIPE_W as usize).enumerate() {
        let stripe = [
            Point::new(i - 100, 0),
            Point::new(i + STRIPE_W - 100, 0),
            Point::new(i + STRIPE_W - 200, H),
            Point::new(i - 200, H),
        ];
        canvas.fill_polygon(&stripe, STRIPES[n % STRIPES.len()]);
    }

    let tint = Canvas::filled(WIDTH, HEIGHT, true, Colour::new(40, 10, 45, 140));
    let mut canvas = composite_over(&canvas, &tint);

    let mut rng = RandomStream::seeded(FUNHOUSE_SEED);
    for _ in 0..15 {
        let bx = rng.next_int(50, 974);
        let by = rng.next_int(30, 250);
        let colour = Colour::rgb(
            rng.next_u8(180, 255),
            rng.next_u8(50, 200),
            rng.next_u8(100, 255),
        );
        canvas.fill_ellipse(Rect::new(bx - 12, by - 15, bx + 12, by + 15), colour);
        let sway = rng.next_int(-5, 5);
        canvas.draw_line(
            Point::new(bx, by + 15),
            Point::new(bx + sway, by + 50),
            Colour::rgb(200, 200, 200),
            1,
        );
    }

    for x in (0..W).step_by(40) {
        for y in (480..H).step_by(40) {
            let colour = if (x / 40 + y / 40) % 2 == 0 {
                Colour::rgb(60, 30, 60)
            } else {
                Colour::rgb(40, 20, 40)
            };
            canvas.fill_rect(Rect::new(x, y, x + 40, y + 40), colour);
        }
    }

    canvas
}

/// Bushroot's greenhouse: glass roof, light shafts, vines and ground plants.
pub fn bg_greenhouse() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, false);
    canvas.vertical_gradient(
        Rect::new(0, 0, W - 1, H - 1),
        Colour::rgb(15, 50, 15),
        Colour::rgb(10, 35, 10),
    );

    let truss = Colour::rgb(60, 100, 60);
    for x in (0..W).step_by(120) {
        canvas.draw_line(Point::new(x, 0), Point::new(x + 60, 100), truss, 3);
        canvas.draw_line(Point::new(x + 120, 0), Point::new(x + 60, 100), truss, 3);
    }
    for y in (0..120).step_by(30) {
        canvas.draw_line(Point::new(0, y), Point::new(W, y), Colour::rgb(50, 90, 50), 2);
    }

    for i in 0..5 {
        let bx = 100 + i * 200;
        let mut beam = Canvas::new(WIDTH, HEIGHT, true);
        beam.fill_polygon(
            &[
                Point::new(bx, 0),
                Point::new(bx + 30, 0),
                Point::new(bx + 60, H),
                Point::new(bx - 30, H),
            ],
            Colour::new(100, 200, 100, 25),
        );
        canvas = composite_over(&canvas, &beam);
    }

    let mut rng = RandomStream::seeded(GREENHOUSE_SEED);
    for x in (0..W).step_by(50) {
        let vine_h = rng.next_int(80, 300);
        let drift = rng.next_int(-20, 20);
        let width = rng.next_int(2, 4) as u32;
        canvas.draw_line(
            Point::new(x, 0),
            Point::new(x + drift, vine_h),
            Colour::rgb(30, 80, 30),
            width,
        );
        for ly in (20..vine_h).step_by(25) {
            let lx = x + rng.next_int(-15, 15);
            let green = 100 + rng.next_u8(0, 50);
            canvas.fill_ellipse(
                Rect::new(lx - 8, ly - 4, lx + 8, ly + 4),
                Colour::rgb(40, green, 30),
            );
        }
    }

    for x in (0..W).step_by(30) {
        let ph = rng.next_int(20, 80);
        let green = 80 + rng.next_u8(0, 40);
        canvas.fill_polygon(
            &[Point::new(x, H), Point::new(x + 8, H - ph), Point::new(x + 16, H)],
            Colour::rgb(30, green, 25),
        );
    }

    canvas
}

/// Liquidator's dam: riveted wall, pipes, water with ripples.
pub fn bg_dam() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, false);
    canvas.vertical_gradient(
        Rect::new(0, 0, W - 1, H - 1),
        Colour::rgb(10, 25, 55),
        Colour::rgb(15, 35, 75),
    );

    canvas.fill_rect(Rect::new(0, 200, W, H), Colour::rgb(50, 60, 80));
    for x in (0..W).step_by(80) {
        canvas.fill_rect(Rect::new(x + 2, 202, x + 78, H - 2), Colour::rgb(55, 65, 85));
        canvas.draw_line(Point::new(x, 200), Point::new(x, H), Colour::rgb(40, 50, 70), 3);
    }
    for y in (200..H).step_by(60) {
        canvas.draw_line(Point::new(0, y), Point::new(W, y), Colour::rgb(45, 55, 75), 2);
    }
    for x in (20..W).step_by(80) {
        for y in (220..H).step_by(60) {
            canvas.fill_circle(x, y, 3, Colour::rgb(65, 75, 95));
        }
    }

    canvas.vertical_gradient(
        Rect::new(0, 480, W - 1, H - 1),
        Colour::rgb(30, 80, 160),
        Colour::rgb(20, 50, 120),
    );

    let mut rng = RandomStream::seeded(DAM_SEED);
    for _ in 0..40 {
        let rx = rng.next_int(0, W);
        let ry = rng.next_int(485, 570);
        let rw = rng.next_int(15, 40);
        canvas.draw_arc(
            Rect::new(rx, ry, rx + rw, ry + 6),
            0.0,
            180.0,
            Colour::rgb(80, 150, 220),
            1,
        );
    }

    for py in [250, 350, 450] {
        canvas.fill_rect(Rect::new(0, py, W, py + 12), Colour::rgb(70, 80, 100));
        canvas.fill_rect(Rect::new(0, py, W, py + 3), Colour::rgb(90, 100, 120));
    }

    canvas
}

/// Negaduck's fortress: stone walls, torches with firelight, chains, a red
/// glow rising from the floor.
pub fn bg_fortress() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, false);
    canvas.vertical_gradient(
        Rect::new(0, 0, W - 1, H - 1),
        Colour::rgb(25, 8, 8),
        Colour::rgb(50, 18, 18),
    );

    let mut rng = RandomStream::seeded(FORTRESS_SEED);
    for y in (0..H).step_by(35) {
        let offset = if (y / 35) % 2 == 1 { 20 } else { 0 };
        for x in (-20 + offset..W).step_by(65) {
            let c = rng.next_u8(35, 55);
            let brick = Rect::new(x, y, x + 60, y + 30);
            canvas.fill_rect(brick, Colour::rgb(c + 10, c - 5, c - 5));
            canvas.outline_rect(brick, Colour::rgb(c - 10, c - 15, c - 15), 1);
        }
    }

    for tx in [150, 400, 650, 900] {
        canvas.fill_rect(Rect::new(tx - 3, 180, tx + 3, 230), Colour::rgb(80, 60, 30));
        canvas.fill_rect(Rect::new(tx - 8, 175, tx + 8, 185), Colour::rgb(90, 70, 35));

        // Flame: outer red layers first, hottest yellow core last.
        for fr in (5..=25).rev().step_by(2) {
            let heat = 1.0 - fr as f32 / 25.0;
            let colour = Colour::rgb(255, 60, 0).lerp(Colour::rgb(255, 200, 50), heat);
            canvas.fill_ellipse(Rect::new(tx - fr / 2, 150 - fr, tx + fr / 2, 155), colour);
        }

        let mut glow = Canvas::new(WIDTH, HEIGHT, true);
        glow.radial_falloff(&RadialFalloff {
            cx: tx,
            cy: 155,
            max_radius: 80,
            min_radius: 5,
            step: 5,
            colour: Colour::rgb(255, 100, 20),
            peak_alpha: 20,
        });
        canvas = composite_over(&canvas, &glow);
    }

    for cx in [250, 550, 800] {
        for cy in (0..400).step_by(15) {
            canvas.outline_ellipse(
                Rect::new(cx - 3, cy, cx + 3, cy + 12),
                Colour::rgb(100, 100, 110),
                2,
            );
        }
    }

    let glow = rising_glow(500, Colour::rgb(255, 30, 0), 50);
    composite_over(&canvas, &glow).into_opaque()
}
