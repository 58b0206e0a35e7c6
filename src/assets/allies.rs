//! 128x128 ally portraits. Every ally is drawn around a fixed centre
//! `(64, 72)` on the shared vignette backdrop.

use std::f32::consts::FRAC_PI_4;

use crate::canvas::Canvas;
use crate::types::{Colour, Point, Rect};

use super::scenery::{portrait_vignette, BILL, SKIN};

pub const SIZE: u32 = 128;

const CX: i32 = 64;
const CY: i32 = 72;

pub fn launchpad() -> Canvas {
    let (cx, cy) = (CX, CY);
    let mut canvas = portrait_vignette(SIZE, Colour::rgb(60, 30, 15), Colour::rgb(255, 100, 50));

    canvas.fill_rounded_rect(
        Rect::new(cx - 22, cy - 5, cx + 22, cy + 35),
        5,
        Colour::rgb(140, 90, 40),
    );
    canvas.fill_ellipse(Rect::new(cx - 25, cy - 50, cx + 25, cy - 5), SKIN);

    // Pilot cap with goggles pushed up
    let cap = Colour::rgb(120, 75, 30);
    canvas.fill_ellipse(Rect::new(cx - 22, cy - 48, cx + 22, cy - 28), cap);
    canvas.fill_rect(Rect::new(cx - 18, cy - 48, cx + 18, cy - 38), cap);
    let glass = Colour::rgb(180, 200, 220);
    canvas.fill_ellipse(Rect::new(cx - 12, cy - 42, cx - 2, cy - 32), glass);
    canvas.fill_ellipse(Rect::new(cx + 2, cy - 42, cx + 12, cy - 32), glass);

    canvas.fill_ellipse(Rect::new(cx - 15, cy - 32, cx - 5, cy - 20), Colour::WHITE);
    canvas.fill_ellipse(Rect::new(cx + 5, cy - 32, cx + 15, cy - 20), Colour::WHITE);
    canvas.fill_ellipse(Rect::new(cx - 12, cy - 28, cx - 7, cy - 22), Colour::BLACK);
    canvas.fill_ellipse(Rect::new(cx + 8, cy - 28, cx + 13, cy - 22), Colour::BLACK);

    canvas.fill_ellipse(Rect::new(cx - 15, cy - 20, cx + 18, cy - 6), BILL);
    canvas.draw_arc(
        Rect::new(cx - 10, cy - 14, cx + 12, cy - 4),
        0.0,
        180.0,
        Colour::rgb(200, 130, 70),
        2,
    );

    canvas
}

pub fn gosalyn() -> Canvas {
    let (cx, cy) = (CX, CY);
    let hair = Colour::rgb(220, 50, 30);
    let mut canvas = portrait_vignette(SIZE, Colour::rgb(50, 20, 60), Colour::rgb(200, 50, 150));

    canvas.fill_rounded_rect(
        Rect::new(cx - 18, cy - 5, cx + 18, cy + 30),
        4,
        Colour::rgb(140, 50, 160),
    );
    canvas.fill_ellipse(Rect::new(cx - 22, cy - 48, cx + 22, cy - 8), SKIN);

    canvas.fill_ellipse(Rect::new(cx - 25, cy - 55, cx + 25, cy - 20), hair);
    canvas.fill_ellipse(Rect::new(cx - 28, cy - 45, cx - 10, cy - 25), hair);
    canvas.fill_ellipse(Rect::new(cx + 10, cy - 45, cx + 28, cy - 25), hair);
    canvas.fill_polygon(
        &[
            Point::new(cx + 15, cy - 40),
            Point::new(cx + 35, cy - 55),
            Point::new(cx + 30, cy - 35),
        ],
        hair,
    );

    let green = Colour::rgb(0, 150, 0);
    canvas.fill_ellipse(Rect::new(cx - 14, cy - 35, cx - 4, cy - 22), Colour::WHITE);
    canvas.fill_ellipse(Rect::new(cx + 4, cy - 35, cx + 14, cy - 22), Colour::WHITE);
    canvas.fill_ellipse(Rect::new(cx - 11, cy - 31, cx - 6, cy - 25), green);
    canvas.fill_ellipse(Rect::new(cx + 7, cy - 31, cx + 12, cy - 25), green);

    canvas.fill_ellipse(Rect::new(cx - 10, cy - 22, cx + 12, cy - 12), BILL);
    canvas.draw_arc(
        Rect::new(cx - 6, cy - 16, cx + 8, cy - 10),
        0.0,
        180.0,
        Colour::rgb(200, 130, 70),
        2,
    );

    canvas
}

pub fn morgana() -> Canvas {
    let (cx, cy) = (CX, CY);
    let hair = Colour::rgb(30, 0, 50);
    let mut canvas = portrait_vignette(SIZE, Colour::rgb(40, 15, 50), Colour::rgb(180, 60, 255));

    // Dress
    canvas.fill_polygon(
        &[
            Point::new(cx - 25, cy),
            Point::new(cx - 35, cy + 45),
            Point::new(cx + 35, cy + 45),
            Point::new(cx + 25, cy),
        ],
        Colour::rgb(60, 20, 80),
    );
    canvas.fill_rounded_rect(
        Rect::new(cx - 18, cy - 8, cx + 18, cy + 20),
        4,
        Colour::rgb(80, 30, 100),
    );
    canvas.fill_ellipse(Rect::new(cx - 20, cy - 48, cx + 20, cy - 10), Colour::rgb(240, 218, 175));

    canvas.fill_ellipse(Rect::new(cx - 24, cy - 55, cx + 24, cy - 25), hair);
    for side in [-1, 1] {
        canvas.fill_polygon(
            &[
                Point::new(cx + side * 24, cy - 35),
                Point::new(cx + side * 30, cy + 10),
                Point::new(cx + side * 18, cy - 20),
            ],
            hair,
        );
    }

    let iris = Colour::rgb(200, 150, 255);
    let pupil = Colour::rgb(100, 0, 180);
    canvas.fill_ellipse(Rect::new(cx - 14, cy - 38, cx - 4, cy - 26), iris);
    canvas.fill_ellipse(Rect::new(cx + 4, cy - 38, cx + 14, cy - 26), iris);
    canvas.fill_ellipse(Rect::new(cx - 10, cy - 34, cx - 7, cy - 29), pupil);
    canvas.fill_ellipse(Rect::new(cx + 7, cy - 34, cx + 10, cy - 29), pupil);

    // Aura: eight motes on an ellipse around the head
    for i in 0..8 {
        let theta = i as f32 * FRAC_PI_4;
        let ax = cx + (30.0 * theta.cos()) as i32;
        let ay = cy - 20 + (25.0 * theta.sin()) as i32;
        canvas.fill_circle(ax, ay, 2, Colour::rgb(180, 100, 255));
    }

    canvas
}

pub fn gizmoduck() -> Canvas {
    let (cx, cy) = (CX, CY);
    let mut canvas = portrait_vignette(SIZE, Colour::rgb(30, 40, 60), Colour::rgb(100, 150, 220));

    canvas.fill_rounded_rect(
        Rect::new(cx - 25, cy - 10, cx + 25, cy + 30),
        10,
        Colour::rgb(180, 190, 200),
    );
    canvas.fill_rounded_rect(
        Rect::new(cx - 22, cy - 7, cx + 22, cy + 27),
        8,
        Colour::rgb(200, 210, 220),
    );

    // Wheel
    canvas.fill_ellipse(Rect::new(cx - 15, cy + 25, cx + 15, cy + 48), Colour::rgb(100, 110, 120));
    canvas.fill_ellipse(Rect::new(cx - 12, cy + 28, cx + 12, cy + 45), Colour::rgb(140, 150, 160));

    canvas.fill_ellipse(Rect::new(cx - 20, cy - 45, cx + 20, cy - 8), Colour::rgb(190, 200, 210));
    canvas.fill_rounded_rect(
        Rect::new(cx - 16, cy - 35, cx + 16, cy - 18),
        4,
        Colour::rgb(60, 60, 70),
    );
    let lens = Colour::rgb(100, 200, 255);
    canvas.fill_ellipse(Rect::new(cx - 12, cy - 32, cx - 4, cy - 22), lens);
    canvas.fill_ellipse(Rect::new(cx + 4, cy - 32, cx + 12, cy - 22), lens);

    let cannon = Colour::rgb(160, 170, 180);
    canvas.fill_rounded_rect(Rect::new(cx - 38, cy - 5, cx - 22, cy + 15), 3, cannon);
    canvas.fill_rounded_rect(Rect::new(cx + 22, cy - 5, cx + 38, cy + 15), 3, cannon);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allies_are_small_opaque_squares() {
        let all: [fn() -> Canvas; 4] = [launchpad, gosalyn, morgana, gizmoduck];
        for generate in all {
            let canvas = generate();
            assert_eq!(canvas.size(), (SIZE, SIZE));
            assert!(canvas.has_alpha());
            assert!(canvas.pixels().all(|p| p.is_opaque()));
        }
    }

    #[test]
    fn test_gosalyn_has_green_eyes() {
        let canvas = gosalyn();
        assert_eq!(canvas.get(55, 44), Some(Colour::rgb(0, 150, 0)));
        assert_eq!(canvas.get(73, 44), Some(Colour::rgb(0, 150, 0)));
    }

    #[test]
    fn test_morgana_aura_motes() {
        let canvas = morgana();
        let mote = Colour::rgb(180, 100, 255);
        // theta = 0 and theta = pi
        assert_eq!(canvas.get(94, 52), Some(mote));
        assert_eq!(canvas.get(34, 52), Some(mote));
    }

    #[test]
    fn test_gizmoduck_visor() {
        let canvas = gizmoduck();
        assert_eq!(canvas.get(64, 45), Some(Colour::rgb(60, 60, 70)));
        assert_eq!(canvas.get(56, 45), Some(Colour::rgb(100, 200, 255)));
    }
}
