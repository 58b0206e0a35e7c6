//! Core domain types.
//!
//! - `Colour` - RGBA colour values and interpolation
//! - `Point`, `Rect` - geometry handed to the canvas draw calls

mod colour;
mod geometry;

pub use colour::Colour;
pub use geometry::{Point, Rect};
