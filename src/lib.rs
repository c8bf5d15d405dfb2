//! # Ladle Colors
//!
//! A Rust crate for converting colors between hex, RGB, HSL and HSV and
//! deriving palettes from a base color.
//!
//! This library provides:
//! - Conversion from any one representation to a fully populated [`Color`]
//! - Complementary, analogous, triadic and monochromatic palettes
//! - Random colors with pleasing saturation and value
//! - An optional JSON-over-HTTP transport ([`server`])
//!
//! ## Example
//!
//! ```rust
//! use ladle_colors::{ColorConverter, PaletteGenerator, PaletteKind};
//!
//! let base = ColorConverter::new().from_hex("#3498DB")?;
//! assert_eq!(base.rgb().r, 52);
//!
//! let palette = PaletteGenerator::new().generate(&base, PaletteKind::Triadic, 3)?;
//! assert_eq!(palette.len(), 3);
//! # Ok::<(), ladle_colors::ColorError>(())
//! ```

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod random;
pub mod server;

pub use color::{Color, ColorConverter, ColorInput, Hsl, HslValue, Hsv, HsvValue, Rgb, RgbValue};
pub use config::ServerConfig;
pub use error::{ColorError, Result};
pub use crate::palette::{PaletteGenerator, PaletteKind, PaletteRequest};
pub use random::{RandomColorGenerator, RandomSource};

/// Convert a tagged color input into all four representations
///
/// # Errors
///
/// Returns [`ColorError::Format`] if the input is malformed or out of range
pub fn convert(input: &ColorInput) -> Result<Color> {
    ColorConverter::new().convert(input)
}

/// Generate `count` colors related to `base`
///
/// # Errors
///
/// Returns [`ColorError::Validation`] if `count` is 0
pub fn generate_palette(base: &Color, kind: PaletteKind, count: usize) -> Result<Vec<Color>> {
    PaletteGenerator::new().generate(base, kind, count)
}

/// Generate one random color from the thread-local RNG
pub fn random_color() -> Color {
    RandomColorGenerator::new().generate()
}
