//! Domain limits and generation constants
//!
//! This module contains compile-time constants for the color model
//! and the palette/random generators.

/// Numeric domains of the four color representations
pub mod domain {
    /// Exclusive upper bound of hue in degrees; 360 is rejected, not wrapped
    pub const HUE_LIMIT: i32 = 360;

    /// Inclusive upper bound for saturation, lightness and value
    pub const PERCENT_MAX: i32 = 100;

    /// Inclusive upper bound for an 8-bit RGB channel
    pub const CHANNEL_MAX: i32 = 255;

    /// Number of hex digits in a canonical color (without the `#`)
    pub const HEX_DIGITS: usize = 6;

    /// Largest channel drift of RGB -> integer HSV -> RGB over all 8-bit colors
    pub const HSV_CHANNEL_SLACK: u8 = 3;

    /// Largest channel drift of RGB -> integer HSL -> RGB over all 8-bit colors
    pub const HSL_CHANNEL_SLACK: u8 = 5;
}

/// Palette spacing rules (degrees / percent)
pub mod spacing {
    /// Total hue sweep of a complementary palette
    pub const COMPLEMENTARY_SWEEP: f64 = 180.0;

    /// Width of the analogous hue band around the base hue
    pub const ANALOGOUS_BAND: f64 = 60.0;

    /// Hue step between triadic entries
    pub const TRIADIC_STEP: i32 = 120;

    /// Darkest value of a monochromatic ramp
    pub const MONOCHROMATIC_MIN_VALUE: f64 = 20.0;

    /// Value span of a monochromatic ramp (20% to 100%)
    pub const MONOCHROMATIC_SPAN: f64 = 80.0;
}

/// Bounds for randomly generated colors
///
/// Saturation and value stay at 50 or above so random colors are
/// neither muddy nor washed out.
pub mod random {
    use std::ops::RangeInclusive;

    pub const HUE: RangeInclusive<u16> = 0..=359;
    pub const SATURATION: RangeInclusive<u16> = 50..=100;
    pub const VALUE: RangeInclusive<u16> = 50..=100;
}
