//! Transient shape primitives consumed by the canvas draw calls.

/// An integer point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A bounding box with inclusive corners.
///
/// `Rect::new(0, 0, 3, 3)` covers a 4x4 block of pixels. Corners given in the
/// wrong order are swapped, so a rect is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Smallest rect holding every point. `None` for no points.
    pub fn around(points: &[Point]) -> Option<Rect> {
        let first = points.first()?;
        let start = Rect::new(first.x, first.y, first.x, first.y);
        Some(points.iter().fold(start, |r, p| Rect {
            x0: r.x0.min(p.x),
            y0: r.y0.min(p.y),
            x1: r.x1.max(p.x),
            y1: r.y1.max(p.y),
        }))
    }

    /// Grow by `by` pixels on every side.
    pub fn expand(self, by: i32) -> Rect {
        Rect::new(self.x0 - by, self.y0 - by, self.x1 + by, self.y1 + by)
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1) as u32
    }

    /// Intersect with `0..width` x `0..height`. `None` when nothing is visible.
    pub fn clip(&self, width: u32, height: u32) -> Option<Rect> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(width as i32 - 1);
        let y1 = self.y1.min(height as i32 - 1);

        (x0 <= x1 && y0 <= y1).then_some(Rect { x0, y0, x1, y1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_normalises_corners() {
        let r = Rect::new(10, 20, 0, 5);
        assert_eq!(r, Rect::new(0, 5, 10, 20));
        assert_eq!(r.width(), 11);
        assert_eq!(r.height(), 16);
    }

    #[test]
    fn test_around() {
        let points = [Point::new(3, 9), Point::new(-2, 4), Point::new(7, 5)];
        assert_eq!(Rect::around(&points), Some(Rect::new(-2, 4, 7, 9)));
        assert_eq!(Rect::around(&[]), None);
    }

    #[test]
    fn test_expand() {
        assert_eq!(Rect::new(2, 2, 4, 4).expand(2), Rect::new(0, 0, 6, 6));
    }

    #[test]
    fn test_clip() {
        let r = Rect::new(-5, -5, 5, 5);
        assert_eq!(r.clip(4, 10), Some(Rect::new(0, 0, 3, 5)));
        assert_eq!(Rect::new(20, 20, 30, 30).clip(10, 10), None);
        assert_eq!(Rect::new(-10, 0, -1, 3).clip(10, 10), None);
    }
}
