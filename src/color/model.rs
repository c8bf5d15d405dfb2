//! Color data model
//!
//! [`Color`] carries four simultaneous representations of one point in
//! color space. The component types ([`Rgb`], [`Hsl`], [`Hsv`]) hold
//! validated integers; the `*Value` types are the unvalidated payloads
//! accepted from callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::conversion::{self, ColorConverter};
use crate::constants::domain::{HSL_CHANNEL_SLACK, HSV_CHANNEL_SLACK};
use crate::{ColorError, Result};

/// 8-bit RGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in [0, 360), saturation and lightness in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Hue in [0, 360), saturation and value in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

/// Unvalidated RGB payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbValue {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// Unvalidated HSL payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslValue {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

/// Unvalidated HSV payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvValue {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

impl From<Rgb> for RgbValue {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: rgb.r.into(),
            g: rgb.g.into(),
            b: rgb.b.into(),
        }
    }
}

impl From<Hsl> for HslValue {
    fn from(hsl: Hsl) -> Self {
        Self {
            h: hsl.h.into(),
            s: hsl.s.into(),
            l: hsl.l.into(),
        }
    }
}

impl From<Hsv> for HsvValue {
    fn from(hsv: Hsv) -> Self {
        Self {
            h: hsv.h.into(),
            s: hsv.s.into(),
            v: hsv.v.into(),
        }
    }
}

/// A color to convert, tagged by its source representation.
///
/// On the wire this is `{"type": "rgb", "value": {"r": 1, "g": 2, "b": 3}}`;
/// hex takes a plain string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ColorInput {
    Hex(String),
    Rgb(RgbValue),
    Hsl(HslValue),
    Hsv(HsvValue),
}

/// One color in all four representations.
///
/// A `Color` is only produced by [`ColorConverter`](crate::ColorConverter)
/// (or by deserializing a consistent record), so its fields always denote
/// the same color up to integer rounding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRecord")]
pub struct Color {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    hsv: Hsv,
}

impl Color {
    pub(crate) fn from_parts(rgb: Rgb, hsl: Hsl, hsv: Hsv) -> Self {
        Self {
            hex: conversion::rgb_to_hex(rgb),
            rgb,
            hsl,
            hsv,
        }
    }

    /// Lowercase `#rrggbb`
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Wire shape of a [`Color`] before validation
#[derive(Debug, Deserialize)]
struct ColorRecord {
    hex: String,
    rgb: RgbValue,
    hsl: HslValue,
    hsv: HsvValue,
}

impl TryFrom<ColorRecord> for Color {
    type Error = ColorError;

    /// Hex is the lossless source of truth: rgb must match it exactly,
    /// hsl and hsv must map back onto it within integer rounding slack.
    fn try_from(record: ColorRecord) -> Result<Self> {
        let rgb = conversion::parse_hex(&record.hex)?;
        let given = conversion::checked_rgb(record.rgb)?;
        if given != rgb {
            return Err(ColorError::format(
                "color",
                format!("{given} does not match hex {}", record.hex),
            ));
        }

        let converter = ColorConverter::new();
        let hsl = conversion::checked_hsl(record.hsl)?;
        if channel_distance(converter.hsl_to_rgb(hsl), rgb) > HSL_CHANNEL_SLACK {
            return Err(ColorError::format(
                "color",
                format!("{hsl} does not match hex {}", record.hex),
            ));
        }
        let hsv = conversion::checked_hsv(record.hsv)?;
        if channel_distance(converter.hsv_to_rgb(hsv), rgb) > HSV_CHANNEL_SLACK {
            return Err(ColorError::format(
                "color",
                format!("{hsv} does not match hex {}", record.hex),
            ));
        }

        Ok(Self::from_parts(rgb, hsl, hsv))
    }
}

/// Largest per-channel difference between two colors
fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}
