//! Palette generation module
//!
//! Derives complementary, analogous, triadic and monochromatic palettes
//! from a base color.

pub mod generator;
pub mod kind;

pub use generator::PaletteGenerator;
pub use kind::{PaletteKind, PaletteRequest};
