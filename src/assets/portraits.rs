//! 256x256 portraits: Darkwing and the five villains.
//!
//! Each portrait is a vignette backdrop plus a character built from
//! primitive shapes around a centre point `(cx, cy)`.

use crate::canvas::Canvas;
use crate::random::RandomStream;
use crate::types::{Colour, Point, Rect};

use super::scenery::{portrait_vignette, BILL, SKIN};

pub const SIZE: u32 = 256;

const BUSHROOT_SEED: u64 = 7;
const LIQUIDATOR_SEED: u64 = 8;

/// Draws a character centred on (cx, cy).
trait CharacterFn: Fn(&mut Canvas, i32, i32) {}
impl<F: Fn(&mut Canvas, i32, i32)> CharacterFn for F {}

/// Vignette in `base`/`accent` with `draw` applied at the villain anchor
/// (horizontal centre, 55% down).
fn villain_portrait(base: Colour, accent: Colour, draw: impl CharacterFn) -> Canvas {
    let mut canvas = portrait_vignette(SIZE, base, accent);
    let cx = SIZE as i32 / 2;
    let cy = (SIZE as f32 * 0.55) as i32;
    draw(&mut canvas, cx, cy);
    canvas
}

fn eyes(canvas: &mut Canvas, cx: i32, cy: i32, whites: [i32; 4], pupils: [i32; 4], pupil: Colour) {
    let [l, t, r, b] = whites;
    canvas.fill_ellipse(Rect::new(cx - r, cy + t, cx - l, cy + b), Colour::WHITE);
    canvas.fill_ellipse(Rect::new(cx + l, cy + t, cx + r, cy + b), Colour::WHITE);
    let [l, t, r, b] = pupils;
    canvas.fill_ellipse(Rect::new(cx - r, cy + t, cx - l, cy + b), pupil);
    canvas.fill_ellipse(Rect::new(cx + l, cy + t, cx + r, cy + b), pupil);
}

pub fn darkwing() -> Canvas {
    let purple = Colour::rgb(123, 47, 247);
    let mut canvas = portrait_vignette(SIZE, Colour::rgb(50, 20, 80), purple);
    let (cx, cy) = (128, 140);

    // Cape
    canvas.fill_polygon(
        &[
            Point::new(cx - 50, cy - 20),
            Point::new(cx - 80, cy + 90),
            Point::new(cx + 80, cy + 90),
            Point::new(cx + 50, cy - 20),
        ],
        Colour::rgb(100, 30, 160),
    );
    canvas.fill_rounded_rect(Rect::new(cx - 30, cy - 10, cx + 30, cy + 60), 8, purple);
    canvas.fill_ellipse(Rect::new(cx - 35, cy - 70, cx + 35, cy - 10), SKIN);

    // Hat brim, crown and mask
    canvas.fill_ellipse(Rect::new(cx - 45, cy - 58, cx + 45, cy - 38), purple);
    canvas.fill_rounded_rect(Rect::new(cx - 18, cy - 85, cx + 18, cy - 50), 5, purple);
    canvas.fill_rect(Rect::new(cx - 38, cy - 52, cx + 38, cy - 38), purple);

    canvas.fill_ellipse(Rect::new(cx - 18, cy - 52, cx - 6, cy - 38), Colour::WHITE);
    canvas.fill_ellipse(Rect::new(cx + 6, cy - 52, cx + 18, cy - 38), Colour::WHITE);
    canvas.fill_ellipse(Rect::new(cx - 14, cy - 48, cx - 8, cy - 40), Colour::BLACK);
    canvas.fill_ellipse(Rect::new(cx + 10, cy - 48, cx + 16, cy - 40), Colour::BLACK);

    canvas.fill_ellipse(Rect::new(cx - 20, cy - 35, cx + 25, cy - 20), BILL);

    // Gas gun
    canvas.fill_rect(Rect::new(cx + 30, cy + 5, cx + 65, cy + 15), Colour::rgb(140, 140, 140));
    canvas.fill_rect(Rect::new(cx + 60, cy, cx + 70, cy + 20), Colour::rgb(170, 170, 170));

    // Smirk
    canvas.draw_arc(
        Rect::new(cx - 8, cy - 30, cx + 15, cy - 22),
        0.0,
        180.0,
        Colour::rgb(200, 130, 70),
        2,
    );

    canvas
}

pub fn megavolt() -> Canvas {
    villain_portrait(Colour::rgb(60, 50, 10), Colour::rgb(255, 238, 68), draw_megavolt)
}

pub fn quackerjack() -> Canvas {
    villain_portrait(Colour::rgb(60, 15, 40), Colour::rgb(255, 68, 170), draw_quackerjack)
}

pub fn bushroot() -> Canvas {
    villain_portrait(Colour::rgb(15, 50, 15), Colour::rgb(68, 187, 68), draw_bushroot)
}

pub fn liquidator() -> Canvas {
    villain_portrait(Colour::rgb(10, 30, 60), Colour::rgb(68, 170, 255), draw_liquidator)
}

pub fn negaduck() -> Canvas {
    villain_portrait(Colour::rgb(50, 10, 10), Colour::rgb(255, 34, 68), draw_negaduck)
}

fn draw_megavolt(canvas: &mut Canvas, cx: i32, cy: i32) {
    let battery = Colour::rgb(130, 130, 140);
    canvas.fill_rounded_rect(
        Rect::new(cx - 30, cy - 10, cx + 30, cy + 55),
        6,
        Colour::rgb(255, 220, 0),
    );
    canvas.fill_rect(Rect::new(cx - 35, cy - 5, cx - 25, cy + 40), battery);
    canvas.fill_rect(Rect::new(cx + 25, cy - 5, cx + 35, cy + 40), battery);
    canvas.fill_ellipse(Rect::new(cx - 30, cy - 65, cx + 30, cy - 10), SKIN);

    // Goggles
    let lens = Colour::rgb(255, 50, 50);
    canvas.fill_ellipse(Rect::new(cx - 25, cy - 55, cx - 5, cy - 35), lens);
    canvas.fill_ellipse(Rect::new(cx + 5, cy - 55, cx + 25, cy - 35), lens);
    canvas.fill_rect(Rect::new(cx - 5, cy - 50, cx + 5, cy - 40), Colour::rgb(100, 100, 110));

    // Lightning bolts, mirrored
    let bolt = Colour::rgb(255, 255, 0);
    for side in [-1, 1] {
        let zigzag = [
            Point::new(cx + side * 45, cy - 80),
            Point::new(cx + side * 30, cy - 55),
            Point::new(cx + side * 38, cy - 55),
            Point::new(cx + side * 20, cy - 30),
        ];
        canvas.draw_polyline(&zigzag, bolt, 3);
    }

    let legs = Colour::rgb(220, 190, 0);
    canvas.fill_rect(Rect::new(cx - 18, cy + 50, cx - 8, cy + 75), legs);
    canvas.fill_rect(Rect::new(cx + 8, cy + 50, cx + 18, cy + 75), legs);
}

fn draw_quackerjack(canvas: &mut Canvas, cx: i32, cy: i32) {
    let pink = Colour::rgb(255, 68, 170);
    let orange = Colour::rgb(255, 170, 0);
    let bell = Colour::rgb(255, 238, 0);

    canvas.fill_rounded_rect(Rect::new(cx - 28, cy - 10, cx + 28, cy + 50), 6, pink);
    for by in (cy..cy + 45).step_by(15) {
        canvas.fill_ellipse(Rect::new(cx - 4, by, cx + 4, by + 8), orange);
    }
    canvas.fill_ellipse(Rect::new(cx - 28, cy - 65, cx + 28, cy - 12), SKIN);

    // Jester hat
    canvas.fill_polygon(
        &[
            Point::new(cx - 30, cy - 55),
            Point::new(cx - 50, cy - 100),
            Point::new(cx - 10, cy - 60),
        ],
        pink,
    );
    canvas.fill_polygon(
        &[
            Point::new(cx + 30, cy - 55),
            Point::new(cx + 50, cy - 100),
            Point::new(cx + 10, cy - 60),
        ],
        orange,
    );
    canvas.fill_ellipse(Rect::new(cx - 55, cy - 108, cx - 43, cy - 93), bell);
    canvas.fill_ellipse(Rect::new(cx + 43, cy - 108, cx + 55, cy - 93), bell);

    eyes(canvas, cx, cy, [4, -50, 18, -32], [6, -44, 14, -36], Colour::BLACK);

    canvas.draw_arc(
        Rect::new(cx - 15, cy - 30, cx + 18, cy - 15),
        0.0,
        180.0,
        Colour::rgb(200, 100, 50),
        3,
    );
    canvas.fill_ellipse(Rect::new(cx - 15, cy - 30, cx + 20, cy - 18), BILL);
}

fn draw_bushroot(canvas: &mut Canvas, cx: i32, cy: i32) {
    canvas.fill_polygon(
        &[
            Point::new(cx - 25, cy + 60),
            Point::new(cx + 25, cy + 60),
            Point::new(cx + 20, cy - 15),
            Point::new(cx + 10, cy - 40),
            Point::new(cx, cy - 45),
            Point::new(cx - 10, cy - 40),
            Point::new(cx - 20, cy - 15),
        ],
        Colour::rgb(50, 135, 50),
    );

    // Leaf crown fanned over the head
    for angle in [-60.0f32, -30.0, 0.0, 30.0, 60.0] {
        let theta = (angle - 90.0).to_radians();
        let lx = cx + (30.0 * theta.cos()) as i32;
        let ly = cy - 50 + (20.0 * theta.sin()) as i32;
        canvas.fill_ellipse(Rect::new(lx - 15, ly - 8, lx + 15, ly + 8), Colour::rgb(68, 170, 68));
    }

    canvas.fill_ellipse(Rect::new(cx - 22, cy - 50, cx + 22, cy - 10), Colour::rgb(60, 150, 60));

    let iris = Colour::rgb(255, 60, 60);
    let pupil = Colour::rgb(180, 0, 0);
    canvas.fill_ellipse(Rect::new(cx - 14, cy - 40, cx - 4, cy - 28), iris);
    canvas.fill_ellipse(Rect::new(cx + 4, cy - 40, cx + 14, cy - 28), iris);
    canvas.fill_ellipse(Rect::new(cx - 11, cy - 36, cx - 7, cy - 30), pupil);
    canvas.fill_ellipse(Rect::new(cx + 7, cy - 36, cx + 11, cy - 30), pupil);

    let mut rng = RandomStream::seeded(BUSHROOT_SEED);
    for rx in (-25..=25).step_by(10) {
        let spread = rng.next_int(-8, 8);
        canvas.draw_line(
            Point::new(cx + rx, cy + 60),
            Point::new(cx + rx + spread, cy + 80),
            Colour::rgb(80, 60, 30),
            3,
        );
    }
}

fn draw_liquidator(canvas: &mut Canvas, cx: i32, cy: i32) {
    // Wavy water body: down the left edge, back up the right.
    let mut body: Vec<Point> = (0..50)
        .map(|i| {
            let x = cx - 25 + (5.0 * (i as f32 * 0.3).sin()) as i32;
            Point::new(x, cy - 10 + i)
        })
        .collect();
    body.extend((1..=50).rev().map(|i| {
        let x = cx + 25 + (5.0 * (i as f32 * 0.3 + 1.0).sin()) as i32;
        Point::new(x, cy - 10 + i)
    }));
    canvas.fill_polygon(&body, Colour::rgb(68, 170, 255));

    canvas.fill_ellipse(Rect::new(cx - 25, cy - 60, cx + 25, cy - 12), Colour::rgb(80, 180, 255));
    eyes(canvas, cx, cy, [5, -48, 15, -32], [8, -43, 13, -35], Colour::rgb(0, 50, 100));

    // Sinister smile
    canvas.draw_arc(
        Rect::new(cx - 15, cy - 28, cx + 15, cy - 15),
        0.0,
        180.0,
        Colour::rgb(0, 80, 150),
        2,
    );

    let mut rng = RandomStream::seeded(LIQUIDATOR_SEED);
    for dx in [-20, -5, 15, 25] {
        let dy = rng.next_int(40, 70);
        canvas.fill_ellipse(
            Rect::new(cx + dx - 2, cy + dy, cx + dx + 2, cy + dy + 8),
            Colour::rgb(100, 190, 255),
        );
    }
}

fn draw_negaduck(canvas: &mut Canvas, cx: i32, cy: i32) {
    let red = Colour::rgb(200, 30, 30);
    let steel = Colour::rgb(200, 200, 200);

    canvas.fill_polygon(
        &[
            Point::new(cx - 45, cy - 15),
            Point::new(cx - 55, cy + 80),
            Point::new(cx + 55, cy + 80),
            Point::new(cx + 45, cy - 15),
        ],
        Colour::rgb(140, 0, 0),
    );
    canvas.fill_rounded_rect(Rect::new(cx - 28, cy - 8, cx + 28, cy + 50), 6, red);
    canvas.fill_rect(Rect::new(cx - 28, cy - 8, cx + 28, cy + 5), Colour::rgb(255, 200, 0));
    canvas.fill_ellipse(Rect::new(cx - 30, cy - 65, cx + 30, cy - 10), SKIN);

    // Hat and mask
    canvas.fill_ellipse(Rect::new(cx - 40, cy - 55, cx + 40, cy - 35), red);
    canvas.fill_rounded_rect(Rect::new(cx - 15, cy - 82, cx + 15, cy - 48), 4, red);
    canvas.fill_rect(Rect::new(cx - 33, cy - 50, cx + 33, cy - 38), red);

    eyes(canvas, cx, cy, [6, -50, 18, -38], [10, -47, 16, -40], Colour::rgb(255, 0, 0));

    // Scowl
    let brow = Colour::rgb(100, 20, 20);
    canvas.draw_line(Point::new(cx - 20, cy - 55), Point::new(cx - 5, cy - 50), brow, 3);
    canvas.draw_line(Point::new(cx + 20, cy - 55), Point::new(cx + 5, cy - 50), brow, 3);

    canvas.fill_ellipse(Rect::new(cx - 18, cy - 35, cx + 22, cy - 20), BILL);
    canvas.draw_line(
        Point::new(cx - 10, cy - 22),
        Point::new(cx + 12, cy - 22),
        Colour::rgb(180, 100, 50),
        2,
    );

    // Chainsaw
    canvas.fill_rect(Rect::new(cx + 30, cy + 5, cx + 70, cy + 15), Colour::rgb(140, 140, 140));
    canvas.fill_polygon(
        &[
            Point::new(cx + 65, cy),
            Point::new(cx + 85, cy + 10),
            Point::new(cx + 65, cy + 20),
        ],
        steel,
    );
    for tx in (cx + 32..cx + 68).step_by(6) {
        canvas.fill_polygon(
            &[Point::new(tx, cy + 2), Point::new(tx + 3, cy - 3), Point::new(tx + 6, cy + 2)],
            steel,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [fn() -> Canvas; 6] = [
        darkwing,
        megavolt,
        quackerjack,
        bushroot,
        liquidator,
        negaduck,
    ];

    #[test]
    fn test_portraits_are_square_and_opaque() {
        for generate in ALL {
            let canvas = generate();
            assert_eq!(canvas.size(), (SIZE, SIZE));
            assert!(canvas.has_alpha());
            assert!(canvas.pixels().all(|p| p.is_opaque()));
        }
    }

    #[test]
    fn test_random_details_are_reproducible() {
        assert_eq!(bushroot(), bushroot());
        assert_eq!(liquidator(), liquidator());
    }

    #[test]
    fn test_darkwing_face() {
        let canvas = darkwing();
        // Bill sits below the mask
        assert_eq!(canvas.get(130, 112), Some(BILL));
        // Eye whites inside the mask
        assert_eq!(canvas.get(112, 95), Some(Colour::WHITE));
    }

    #[test]
    fn test_villain_anchor() {
        let marker = Colour::rgb(1, 2, 3);
        let canvas = villain_portrait(Colour::BLACK, Colour::WHITE, |c, cx, cy| {
            c.fill_rect(Rect::new(cx, cy, cx, cy), marker);
        });
        assert_eq!(canvas.get(128, 140), Some(marker));
        assert_ne!(canvas.get(128, 128), Some(marker));
    }

    #[test]
    fn test_megavolt_goggles() {
        let canvas = megavolt();
        assert_eq!(canvas.get(113, 95), Some(Colour::rgb(255, 50, 50)));
        assert_eq!(canvas.get(128, 140 - 45), Some(Colour::rgb(100, 100, 110)));
    }
}
