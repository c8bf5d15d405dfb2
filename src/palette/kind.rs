//! Palette kinds and the palette request record

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Color;

/// Hue/value spacing rule used to derive a palette
///
/// Unrecognized names never fail: they fall back to [`PaletteKind::Analogous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PaletteKind {
    /// Hues swept from the base across 180°
    Complementary,
    /// Hues spread within a 60° band around the base
    #[default]
    Analogous,
    /// Hues 120° apart, repeating after three entries
    Triadic,
    /// Base hue and saturation with value ramped from 20% to 100%
    Monochromatic,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 4] = [
        PaletteKind::Complementary,
        PaletteKind::Analogous,
        PaletteKind::Triadic,
        PaletteKind::Monochromatic,
    ];

    /// Parse a kind name, case-insensitively
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "complementary" => Self::Complementary,
            "analogous" => Self::Analogous,
            "triadic" => Self::Triadic,
            "monochromatic" | "monochrome" => Self::Monochromatic,
            other => {
                debug!(kind = other, "unknown palette kind, using analogous");
                Self::Analogous
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Monochromatic => "monochromatic",
        }
    }
}

impl FromStr for PaletteKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for PaletteKind {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to generate one palette.
///
/// Wire form: `{"baseColor": {...}, "type": "triadic", "count": 3}`.
/// `count` is required and signed so that zero and negative counts surface
/// as validation errors from the generator instead of decode errors. An
/// omitted `type` behaves like an unrecognized one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRequest {
    pub base_color: Color,
    #[serde(rename = "type", default)]
    pub kind: PaletteKind,
    pub count: i64,
}
