//! 800x450 end-of-game screens.

use std::f32::consts::TAU;

use crate::canvas::{composite_over, Canvas, RadialFalloff};
use crate::random::RandomStream;
use crate::types::{Colour, Point, Rect};

use super::scenery::draw_building;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 450;

const W: i32 = WIDTH as i32;
const H: i32 = HEIGHT as i32;

const GAME_OVER_SEED: u64 = 99;
const VICTORY_SEED: u64 = 88;

const FIREWORK_COLOURS: [Colour; 6] = [
    Colour::rgb(255, 50, 50),
    Colour::rgb(50, 255, 50),
    Colour::rgb(50, 50, 255),
    Colour::rgb(255, 255, 50),
    Colour::rgb(255, 50, 255),
    Colour::rgb(50, 255, 255),
];

fn night_sky(top: Colour, bottom: Colour) -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, false);
    canvas.vertical_gradient(Rect::new(0, 0, W - 1, H - 1), top, bottom);
    canvas
}

/// Rain over a dark skyline with the hero kneeling in silhouette, tinted
/// purple.
pub fn game_over() -> Canvas {
    let mut canvas = night_sky(Colour::rgb(20, 5, 10), Colour::rgb(40, 10, 20));
    let mut rng = RandomStream::seeded(GAME_OVER_SEED);

    let rain = Colour::rgb(60, 60, 80);
    for _ in 0..200 {
        let x = rng.next_int(0, W);
        let y = rng.next_int(0, H);
        let len = rng.next_int(5, 15);
        canvas.draw_line(Point::new(x, y), Point::new(x - 2, y + len), rain, 1);
    }

    for x in (0..W).step_by(50) {
        let bh = rng.next_int(60, 180);
        canvas.fill_rect(Rect::new(x, H - bh, x + 45, H), Colour::rgb(15, 5, 10));
    }

    // Kneeling hero: head, torso, one knee down and one leg planted
    let (cx, cy) = (400, 320);
    let shadow = Colour::rgb(10, 3, 5);
    canvas.fill_ellipse(Rect::new(cx - 20, cy - 50, cx + 20, cy - 15), shadow);
    canvas.fill_rect(Rect::new(cx - 25, cy - 20, cx + 25, cy + 30), shadow);
    canvas.fill_rect(Rect::new(cx - 30, cy + 25, cx - 10, cy + 55), shadow);
    canvas.fill_rect(Rect::new(cx + 5, cy + 15, cx + 35, cy + 55), shadow);

    let tint = Canvas::filled(WIDTH, HEIGHT, true, Colour::new(80, 20, 40, 40));
    composite_over(&canvas, &tint)
}

/// Lit skyline under eight fireworks and a golden glow.
pub fn victory() -> Canvas {
    let mut canvas = night_sky(Colour::rgb(10, 10, 40), Colour::rgb(20, 15, 50));
    let mut rng = RandomStream::seeded(VICTORY_SEED);

    let window = Colour::new(255, 220, 80, 120);
    for x in (0..W).step_by(55) {
        let bh = rng.next_int(80, 200);
        let c = rng.next_u8(20, 40);
        let body = Colour::rgb(c, c, c + 15);
        draw_building(&mut canvas, x, H - bh, 50, bh, body, window, &mut rng);
    }

    let spark = Colour::rgb(255, 255, 200);
    for i in 0..8 {
        let fx = rng.next_int(50, 750);
        let fy = rng.next_int(30, 200);
        let colour = FIREWORK_COLOURS[i % FIREWORK_COLOURS.len()];
        for ray in 0..20 {
            let theta = ray as f32 * TAU / 20.0;
            let r = rng.next_int(15, 50) as f32;
            let ex = fx + (r * theta.cos()) as i32;
            let ey = fy + (r * theta.sin()) as i32;
            canvas.draw_line(Point::new(fx, fy), Point::new(ex, ey), colour, 2);
            canvas.fill_circle(ex, ey, 2, spark);
        }
    }

    let mut glow = Canvas::new(WIDTH, HEIGHT, true);
    glow.radial_falloff(&RadialFalloff {
        cx: 400,
        cy: 200,
        max_radius: 200,
        min_radius: 10,
        step: 5,
        colour: Colour::rgb(255, 200, 50),
        peak_alpha: 15,
    });
    composite_over(&canvas, &glow)
}
