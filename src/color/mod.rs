//! Color model and conversion module
//!
//! This module defines the four-representation [`Color`] record and the
//! converter that builds it from any single source representation.

pub mod conversion;
pub mod model;

pub use conversion::ColorConverter;
pub use model::{Color, ColorInput, Hsl, HslValue, Hsv, HsvValue, Rgb, RgbValue};
