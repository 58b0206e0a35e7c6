//! duck-assets - Procedural art generator for the Darkwing Duck game
//!
//! Draws the level backgrounds, character portraits and end screens from
//! geometric primitives on an in-memory canvas and writes them as PNGs.
//! Every random layout comes from a fixed seed, so output is identical on
//! every run.

pub mod assets;
pub mod canvas;
pub mod cli;
pub mod error;
pub mod output;
pub mod random;
pub mod types;

pub use assets::{generate_all, AssetKind, AssetSpec, GenerationReport, CATALOG};
pub use canvas::{composite_over, gaussian_blur, Canvas, RadialFalloff};
pub use error::{AssetError, Result};
pub use random::RandomStream;
pub use types::{Colour, Point, Rect};
