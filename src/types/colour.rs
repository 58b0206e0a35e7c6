//! Colour type and interpolation.

use image::Rgba;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Linearly interpolate RGB from `self` (t = 0) to `other` (t = 1).
    ///
    /// Channels are rounded to the nearest integer. `t` is clamped to
    /// `[0, 1]` and alpha is taken from `self`.
    pub fn lerp(self, other: Colour, t: f32) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;

        Colour::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b), self.a)
    }

    /// Move towards black by `amount` (0 = unchanged, 1 = black).
    pub fn darken(self, amount: f32) -> Colour {
        self.lerp(Colour::BLACK, amount)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_f32(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Colour::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Colour::rgb(10, 20, 30);
        let b = Colour::rgb(110, 220, 30);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint_rounds() {
        let a = Colour::rgb(0, 0, 0);
        let b = Colour::rgb(255, 101, 3);
        // 127.5 -> 128, 50.5 -> 51, 1.5 -> 2
        assert_eq!(a.lerp(b, 0.5), Colour::rgb(128, 51, 2));
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Colour::rgb(10, 10, 10);
        let b = Colour::rgb(20, 20, 20);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn test_lerp_keeps_first_alpha() {
        let a = Colour::new(0, 0, 0, 40);
        let b = Colour::rgb(100, 100, 100);
        assert_eq!(a.lerp(b, 0.5).a, 40);
    }

    #[test]
    fn test_darken() {
        assert_eq!(Colour::rgb(50, 20, 80).darken(0.4), Colour::rgb(30, 12, 48));
        assert_eq!(Colour::rgb(50, 20, 80).darken(1.0), Colour::BLACK);
    }

    #[test]
    fn test_rgba_conversion() {
        let c = Colour::new(1, 2, 3, 4);
        let px: Rgba<u8> = c.into();
        assert_eq!(px.0, [1, 2, 3, 4]);
        assert_eq!(Colour::from(px), c);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK, Colour::rgb(0, 0, 0));
        assert_eq!(Colour::WHITE, Colour::rgb(255, 255, 255));
        assert!(Colour::TRANSPARENT.is_transparent());
        assert!(Colour::BLACK.is_opaque());
        assert_eq!(Colour::WHITE.with_alpha(10).a, 10);
    }
}
