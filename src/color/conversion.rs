//! Color space conversion utilities
//!
//! Provides conversions between the four supported representations:
//! - Hex string to/from RGB (lossless)
//! - RGB to HSV and HSL (max/min/delta construction)
//! - HSV and HSL to RGB (60° sector construction)
//!
//! All math runs on [0, 1]-normalized `f64` and is rounded half away
//! from zero when converted back to integers.

use tracing::trace;

use crate::color::model::{Color, ColorInput, Hsl, HslValue, Hsv, HsvValue, Rgb, RgbValue};
use crate::constants::domain::{CHANNEL_MAX, HEX_DIGITS, HUE_LIMIT, PERCENT_MAX};
use crate::{ColorError, Result};

/// Converts any single representation into a fully populated [`Color`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new color converter
    pub const fn new() -> Self {
        Self
    }

    /// Convert a tagged input into a [`Color`]
    pub fn convert(&self, input: &ColorInput) -> Result<Color> {
        match input {
            ColorInput::Hex(hex) => self.from_hex(hex),
            ColorInput::Rgb(v) => self.from_rgb(v.r, v.g, v.b),
            ColorInput::Hsl(v) => self.from_hsl(v.h, v.s, v.l),
            ColorInput::Hsv(v) => self.from_hsv(v.h, v.s, v.v),
        }
    }

    /// Parse hexadecimal color string
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#3498db" or "3498DB")
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Format`] unless the string is exactly six
    /// hex digits after an optional leading `#`
    pub fn from_hex(&self, hex: &str) -> Result<Color> {
        let rgb = parse_hex(hex)?;
        trace!(hex, %rgb, "converted from hex");
        Ok(self.from_valid_rgb(rgb))
    }

    /// Build a color from RGB channels
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Format`] if any channel is outside [0, 255]
    pub fn from_rgb(&self, r: i32, g: i32, b: i32) -> Result<Color> {
        let rgb = checked_rgb(RgbValue { r, g, b })?;
        trace!(%rgb, "converted from rgb");
        Ok(self.from_valid_rgb(rgb))
    }

    /// Build a color from HSL
    ///
    /// The given HSL is kept as-is; RGB is derived from it, and hex and
    /// HSV are derived from that RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Format`] if `h` is outside [0, 360) or `s`/`l`
    /// outside [0, 100]
    pub fn from_hsl(&self, h: i32, s: i32, l: i32) -> Result<Color> {
        let hsl = checked_hsl(HslValue { h, s, l })?;
        let rgb = self.hsl_to_rgb(hsl);
        trace!(%hsl, %rgb, "converted from hsl");
        Ok(Color::from_parts(rgb, hsl, self.rgb_to_hsv(rgb)))
    }

    /// Build a color from HSV
    ///
    /// The given HSV is kept as-is; RGB is derived from it, and hex and
    /// HSL are derived from that RGB.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Format`] if `h` is outside [0, 360) or `s`/`v`
    /// outside [0, 100]
    pub fn from_hsv(&self, h: i32, s: i32, v: i32) -> Result<Color> {
        let hsv = checked_hsv(HsvValue { h, s, v })?;
        Ok(self.from_valid_hsv(hsv))
    }

    pub(crate) fn from_valid_hsv(&self, hsv: Hsv) -> Color {
        let rgb = self.hsv_to_rgb(hsv);
        trace!(%hsv, %rgb, "converted from hsv");
        Color::from_parts(rgb, self.rgb_to_hsl(rgb), hsv)
    }

    fn from_valid_rgb(&self, rgb: Rgb) -> Color {
        Color::from_parts(rgb, self.rgb_to_hsl(rgb), self.rgb_to_hsv(rgb))
    }

    /// Convert RGB to HSV
    ///
    /// Achromatic input (all channels equal) yields hue 0 and saturation 0.
    pub fn rgb_to_hsv(&self, rgb: Rgb) -> Hsv {
        let [r, g, b] = normalized(rgb);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };
        Hsv {
            h: round_hue(hue_degrees(r, g, b, max, delta)),
            s: round_percent(s),
            v: round_percent(max),
        }
    }

    /// Convert RGB to HSL
    ///
    /// Achromatic input (all channels equal) yields hue 0 and saturation 0.
    pub fn rgb_to_hsl(&self, rgb: Rgb) -> Hsl {
        let [r, g, b] = normalized(rgb);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        Hsl {
            h: round_hue(hue_degrees(r, g, b, max, delta)),
            s: round_percent(s),
            l: round_percent(l),
        }
    }

    /// Convert HSV to RGB
    ///
    /// chroma = v·s, offset = v − chroma
    pub fn hsv_to_rgb(&self, hsv: Hsv) -> Rgb {
        let s = f64::from(hsv.s) / 100.0;
        let v = f64::from(hsv.v) / 100.0;
        let chroma = v * s;
        let (r, g, b) = sector_triple(f64::from(hsv.h), chroma);
        offset_rgb(r, g, b, v - chroma)
    }

    /// Convert HSL to RGB
    ///
    /// chroma = (1 − |2l − 1|)·s, offset = l − chroma/2
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Rgb {
        let s = f64::from(hsl.s) / 100.0;
        let l = f64::from(hsl.l) / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let (r, g, b) = sector_triple(f64::from(hsl.h), chroma);
        offset_rgb(r, g, b, l - chroma / 2.0)
    }

    /// Convert RGB to a lowercase hex string (e.g., "#ff0000")
    pub fn rgb_to_hex(&self, rgb: Rgb) -> String {
        rgb_to_hex(rgb)
    }
}

pub(crate) fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub(crate) fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != HEX_DIGITS {
        return Err(ColorError::format(
            "hex",
            format!("expected {HEX_DIGITS} hex digits, got {:?}", hex),
        ));
    }
    // from_str_radix would accept a leading '+', so check digits first
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::format(
            "hex",
            format!("{hex:?} contains non-hexadecimal characters"),
        ));
    }

    let channel = |range: std::ops::Range<usize>| {
        let pair = &digits[range];
        u8::from_str_radix(pair, 16)
            .map_err(|e| ColorError::format("hex", format!("invalid channel {pair:?}: {e}")))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

pub(crate) fn checked_rgb(value: RgbValue) -> Result<Rgb> {
    Ok(Rgb {
        r: checked_channel("red", value.r)?,
        g: checked_channel("green", value.g)?,
        b: checked_channel("blue", value.b)?,
    })
}

pub(crate) fn checked_hsl(value: HslValue) -> Result<Hsl> {
    Ok(Hsl {
        h: checked_hue("hsl", value.h)?,
        s: checked_percent("hsl", "saturation", value.s)?,
        l: checked_percent("hsl", "lightness", value.l)?,
    })
}

pub(crate) fn checked_hsv(value: HsvValue) -> Result<Hsv> {
    Ok(Hsv {
        h: checked_hue("hsv", value.h)?,
        s: checked_percent("hsv", "saturation", value.s)?,
        v: checked_percent("hsv", "value", value.v)?,
    })
}

fn checked_channel(name: &str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        ColorError::format(
            "rgb",
            format!("{name} channel {value} is outside [0, {CHANNEL_MAX}]"),
        )
    })
}

fn checked_hue(representation: &'static str, value: i32) -> Result<u16> {
    if !(0..HUE_LIMIT).contains(&value) {
        return Err(ColorError::format(
            representation,
            format!("hue {value} is outside [0, {HUE_LIMIT})"),
        ));
    }
    Ok(value as u16)
}

fn checked_percent(representation: &'static str, name: &str, value: i32) -> Result<u8> {
    if !(0..=PERCENT_MAX).contains(&value) {
        return Err(ColorError::format(
            representation,
            format!("{name} {value} is outside [0, {PERCENT_MAX}]"),
        ));
    }
    Ok(value as u8)
}

fn normalized(rgb: Rgb) -> [f64; 3] {
    [rgb.r, rgb.g, rgb.b].map(|c| f64::from(c) / 255.0)
}

/// Hue in degrees from the channel holding the maximum; 0 when achromatic.
fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };
    h.rem_euclid(360.0)
}

/// Pre-offset (r, g, b) for the 60° sector containing `hue`.
fn sector_triple(hue: f64, chroma: f64) -> (f64, f64, f64) {
    let h = hue / 60.0;
    let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());
    match h as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    }
}

fn offset_rgb(r: f64, g: f64, b: f64, m: f64) -> Rgb {
    Rgb {
        r: to_channel(r + m),
        g: to_channel(g + m),
        b: to_channel(b + m),
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn round_percent(unit: f64) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Round to whole degrees; 359.5 and above wraps to 0
fn round_hue(degrees: f64) -> u16 {
    (degrees.round() as i32).rem_euclid(HUE_LIMIT) as u16
}
