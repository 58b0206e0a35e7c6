//! Rasterising draw calls.
//!
//! Geometry uses pixel indices: `Rect` corners are inclusive and a point
//! `(x, y)` names the pixel at that position. Everything is clipped to the
//! canvas and each call blends a given pixel at most once.
//!
//! Rects and lines are rasterised by `imageproc`. Shapes that `imageproc`
//! builds from overlapping strokes (ellipses, polygons, thick lines,
//! polylines) are first collected into a coverage mask and then blended in
//! one pass.

use image::{GrayImage, Luma};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut,
    draw_hollow_ellipse_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut,
    Canvas as DrawTarget,
};
use imageproc::point::Point as Vertex;
use imageproc::rect::Rect as PixelRect;

use crate::types::{Colour, Point, Rect};

use super::Canvas;

const ON: Luma<u8> = Luma([255]);
const OFF: Luma<u8> = Luma([0]);

impl Canvas {
    /// Fill a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let Some(r) = rect.clip(self.width(), self.height()) else {
            return;
        };
        draw_filled_rect_mut(&mut self.blending(), pixel_rect(r), colour.into());
    }

    /// Draw a rectangle outline `width` pixels thick, growing inwards.
    pub fn outline_rect(&mut self, rect: Rect, colour: Colour, width: u32) {
        let Some(mut cov) = Coverage::new(self, rect) else {
            return;
        };
        if width <= 1 {
            let (x, y) = cov.local(rect.x0, rect.y0);
            let local = PixelRect::at(x, y).of_size(rect.width(), rect.height());
            draw_hollow_rect_mut(&mut cov.mask, local, ON);
        } else {
            let w = width as i32;
            cov.rect(rect, ON);
            if rect.x0 + w <= rect.x1 - w && rect.y0 + w <= rect.y1 - w {
                cov.rect(Rect::new(rect.x0 + w, rect.y0 + w, rect.x1 - w, rect.y1 - w), OFF);
            }
        }
        self.apply(&cov, colour);
    }

    /// Fill a rectangle with rounded corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, colour: Colour) {
        let max_radius = rect.width().min(rect.height()).saturating_sub(1) / 2;
        let r = radius.min(max_radius) as i32;
        if r == 0 {
            self.fill_rect(rect, colour);
            return;
        }
        let Some(mut cov) = Coverage::new(self, rect) else {
            return;
        };

        cov.rect(Rect::new(rect.x0 + r, rect.y0, rect.x1 - r, rect.y1), ON);
        cov.rect(Rect::new(rect.x0, rect.y0 + r, rect.x1, rect.y1 - r), ON);
        for (cx, cy) in [
            (rect.x0 + r, rect.y0 + r),
            (rect.x1 - r, rect.y0 + r),
            (rect.x0 + r, rect.y1 - r),
            (rect.x1 - r, rect.y1 - r),
        ] {
            cov.circle(cx, cy, r, ON);
        }
        self.apply(&cov, colour);
    }

    /// Fill the ellipse inscribed in `rect`.
    pub fn fill_ellipse(&mut self, rect: Rect, colour: Colour) {
        let Some(mut cov) = Coverage::new(self, rect) else {
            return;
        };
        cov.ellipse(rect, ON);
        self.apply(&cov, colour);
    }

    /// Fill a circle. A zero radius is a single pixel; a negative radius
    /// draws nothing.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, colour: Colour) {
        if radius < 0 {
            return;
        }
        let bounds = Rect::new(cx - radius, cy - radius, cx + radius, cy + radius);
        let Some(mut cov) = Coverage::new(self, bounds) else {
            return;
        };
        cov.circle(cx, cy, radius, ON);
        self.apply(&cov, colour);
    }

    /// Draw the outline of the ellipse inscribed in `rect`, `width` pixels
    /// thick, growing inwards.
    pub fn outline_ellipse(&mut self, rect: Rect, colour: Colour, width: u32) {
        let Some(mut cov) = Coverage::new(self, rect) else {
            return;
        };
        cov.ring(rect, width);
        self.apply(&cov, colour);
    }

    /// Draw part of an ellipse outline.
    ///
    /// Angles are in degrees, 0 at three o'clock, increasing clockwise on
    /// screen. `0..180` is the lower half.
    pub fn draw_arc(&mut self, rect: Rect, start: f32, end: f32, colour: Colour, width: u32) {
        let Some(mut cov) = Coverage::new(self, rect) else {
            return;
        };
        cov.ring(rect, width);

        let (cx, cy, rx, ry) = axes(rect);
        let sweep = end - start;
        let start = start.rem_euclid(360.0);
        cov.retain(|x, y| {
            if sweep >= 360.0 {
                return true;
            }
            let nx = (x - cx) as f32 / rx.max(1) as f32;
            let ny = (y - cy) as f32 / ry.max(1) as f32;
            let angle = ny.atan2(nx).to_degrees().rem_euclid(360.0);
            (angle - start).rem_euclid(360.0) <= sweep
        });
        self.apply(&cov, colour);
    }

    /// Fill a polygon. Fewer than three distinct vertices draw nothing.
    pub fn fill_polygon(&mut self, points: &[Point], colour: Colour) {
        let Some(bounds) = Rect::around(points) else {
            return;
        };
        let Some(mut cov) = Coverage::new(self, bounds) else {
            return;
        };
        cov.polygon(points);
        self.apply(&cov, colour);
    }

    /// Draw a straight line `width` pixels thick. Both endpoints are drawn.
    pub fn draw_line(&mut self, from: Point, to: Point, colour: Colour, width: u32) {
        self.draw_polyline(&[from, to], colour, width);
    }

    /// Draw connected line segments through `points`. Joints are blended
    /// once, like any other pixel of the stroke.
    pub fn draw_polyline(&mut self, points: &[Point], colour: Colour, width: u32) {
        let Some(bounds) = Rect::around(points) else {
            return;
        };
        let Some(mut cov) = Coverage::new(self, bounds.expand(width as i32 / 2 + 1)) else {
            return;
        };
        for pair in points.windows(2) {
            cov.stroke(pair[0], pair[1], width);
        }
        self.apply(&cov, colour);
    }

    /// Blend `colour` over every pixel the mask covers.
    fn apply(&mut self, cov: &Coverage, colour: Colour) {
        let (ox, oy) = (cov.origin.x0 as u32, cov.origin.y0 as u32);
        let colour = colour.into();
        let mut target = self.blending();
        for (x, y, p) in cov.mask.enumerate_pixels() {
            if p[0] > 0 {
                target.draw_pixel(ox + x, oy + y, colour);
            }
        }
    }
}

fn pixel_rect(r: Rect) -> PixelRect {
    PixelRect::at(r.x0, r.y0).of_size(r.width(), r.height())
}

/// Integer centre and radii of the ellipse inscribed in `rect`.
fn axes(rect: Rect) -> (i32, i32, i32, i32) {
    (
        (rect.x0 + rect.x1).div_euclid(2),
        (rect.y0 + rect.y1).div_euclid(2),
        (rect.x1 - rect.x0) / 2,
        (rect.y1 - rect.y0) / 2,
    )
}

/// The pixels one draw call touches, over the visible part of its bounds.
struct Coverage {
    origin: Rect,
    mask: GrayImage,
}

impl Coverage {
    /// `None` when `bounds` is entirely off the canvas.
    fn new(canvas: &Canvas, bounds: Rect) -> Option<Self> {
        let origin = bounds.clip(canvas.width(), canvas.height())?;
        Some(Self {
            origin,
            mask: GrayImage::new(origin.width(), origin.height()),
        })
    }

    fn local(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.origin.x0, y - self.origin.y0)
    }

    fn rect(&mut self, rect: Rect, value: Luma<u8>) {
        let (x, y) = self.local(rect.x0, rect.y0);
        let local = PixelRect::at(x, y).of_size(rect.width(), rect.height());
        draw_filled_rect_mut(&mut self.mask, local, value);
    }

    fn ellipse(&mut self, rect: Rect, value: Luma<u8>) {
        let (cx, cy, rx, ry) = axes(rect);
        if ry == 0 {
            // imageproc collapses a flat ellipse to its centre pixel
            self.rect(Rect::new(cx - rx, cy, cx + rx, cy), value);
            return;
        }
        let centre = self.local(cx, cy);
        draw_filled_ellipse_mut(&mut self.mask, centre, rx, ry, value);
    }

    fn circle(&mut self, cx: i32, cy: i32, r: i32, value: Luma<u8>) {
        let centre = self.local(cx, cy);
        draw_filled_circle_mut(&mut self.mask, centre, r, value);
    }

    /// Ellipse outline `width` pixels thick, growing inwards.
    fn ring(&mut self, rect: Rect, width: u32) {
        let (cx, cy, rx, ry) = axes(rect);
        let centre = self.local(cx, cy);
        if width <= 1 {
            draw_hollow_ellipse_mut(&mut self.mask, centre, rx, ry, ON);
            return;
        }
        let w = width as i32;
        draw_filled_ellipse_mut(&mut self.mask, centre, rx, ry, ON);
        if rx >= w && ry >= w {
            draw_filled_ellipse_mut(&mut self.mask, centre, rx - w, ry - w, OFF);
        }
    }

    fn polygon(&mut self, points: &[Point]) {
        let mut vertices: Vec<Vertex<i32>> = Vec::with_capacity(points.len());
        for p in points {
            let (x, y) = self.local(p.x, p.y);
            let v = Vertex::new(x, y);
            if vertices.last() != Some(&v) {
                vertices.push(v);
            }
        }
        // The polygon closes itself; a repeated first vertex is not allowed.
        while vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() >= 3 {
            draw_polygon_mut(&mut self.mask, &vertices, ON);
        }
    }

    fn segment(&mut self, from: Point, to: Point) {
        let (x0, y0) = self.local(from.x, from.y);
        let (x1, y1) = self.local(to.x, to.y);
        draw_line_segment_mut(
            &mut self.mask,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            ON,
        );
    }

    /// A segment `width` pixels across: the centre line plus a quad offset
    /// half the width to each side.
    fn stroke(&mut self, from: Point, to: Point, width: u32) {
        self.segment(from, to);
        if width <= 1 {
            return;
        }

        let half = (width - 1) as f32 / 2.0;
        let (dx, dy) = ((to.x - from.x) as f32, (to.y - from.y) as f32);
        let len = dx.hypot(dy);
        if len == 0.0 {
            let h = half.round() as i32;
            self.rect(Rect::new(from.x - h, from.y - h, from.x + h, from.y + h), ON);
            return;
        }

        let (nx, ny) = (-dy / len * half, dx / len * half);
        let corner = |p: Point, side: f32| {
            Point::new(
                (p.x as f32 + nx * side).round() as i32,
                (p.y as f32 + ny * side).round() as i32,
            )
        };
        self.polygon(&[
            corner(from, 1.0),
            corner(to, 1.0),
            corner(to, -1.0),
            corner(from, -1.0),
        ]);
    }

    /// Clear covered pixels for which `keep(x, y)` (canvas coordinates) is
    /// false.
    fn retain(&mut self, keep: impl Fn(i32, i32) -> bool) {
        let (ox, oy) = (self.origin.x0, self.origin.y0);
        for (x, y, p) in self.mask.enumerate_pixels_mut() {
            if p[0] > 0 && !keep(ox + x as i32, oy + y as i32) {
                *p = OFF;
            }
        }
    }
}
