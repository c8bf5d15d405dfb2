//! Palette generation from a base color
//!
//! Every entry keeps the base color's saturation and value and varies
//! only hue, except monochromatic palettes, which keep hue and
//! saturation and ramp the value.

use tracing::debug;

use crate::color::{Color, ColorConverter, Hsv};
use crate::constants::domain::HUE_LIMIT;
use crate::constants::spacing::{
    ANALOGOUS_BAND, COMPLEMENTARY_SWEEP, MONOCHROMATIC_MIN_VALUE, MONOCHROMATIC_SPAN,
    TRIADIC_STEP,
};
use crate::palette::{PaletteKind, PaletteRequest};
use crate::{ColorError, Result};

/// Stateless palette generator
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteGenerator {
    converter: ColorConverter,
}

impl PaletteGenerator {
    pub fn new() -> Self {
        Self::with_converter(ColorConverter::new())
    }

    pub fn with_converter(converter: ColorConverter) -> Self {
        Self { converter }
    }

    /// Generate a palette described by a decoded request
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if `count` is below 1
    pub fn generate_request(&self, request: &PaletteRequest) -> Result<Vec<Color>> {
        let count = usize::try_from(request.count).map_err(|_| {
            ColorError::validation("count", request.count, "must be at least 1")
        })?;
        self.generate(&request.base_color, request.kind, count)
    }

    /// Generate `count` colors related to `base`
    ///
    /// A single-entry palette is the base color itself, for every kind.
    ///
    /// # Arguments
    ///
    /// * `base` - Fully converted base color; its HSV drives generation
    /// * `kind` - Spacing rule
    /// * `count` - Number of colors to return
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Validation`] if `count` is 0
    pub fn generate(&self, base: &Color, kind: PaletteKind, count: usize) -> Result<Vec<Color>> {
        if count == 0 {
            return Err(ColorError::validation("count", count, "must be at least 1"));
        }
        if count == 1 {
            return Ok(vec![base.clone()]);
        }

        let hsv = base.hsv();
        let palette: Vec<Color> = (0..count)
            .map(|i| self.converter.from_valid_hsv(entry(kind, hsv, i, count)))
            .collect();

        debug!(%kind, count, base = %base, "generated palette");
        Ok(palette)
    }
}

/// HSV of entry `i`; `count` is at least 2 here.
fn entry(kind: PaletteKind, base: Hsv, i: usize, count: usize) -> Hsv {
    match kind {
        PaletteKind::Complementary => {
            let offset = COMPLEMENTARY_SWEEP * i as f64 / (count - 1) as f64;
            Hsv {
                h: shift_hue(base.h, offset),
                ..base
            }
        }
        PaletteKind::Analogous => {
            let offset = ANALOGOUS_BAND * (i as f64 - (count / 2) as f64) / count as f64;
            Hsv {
                h: shift_hue(base.h, offset),
                ..base
            }
        }
        PaletteKind::Triadic => {
            // Only three distinct hues exist; larger palettes cycle them.
            let step = TRIADIC_STEP * (i % 3) as i32;
            Hsv {
                h: (i32::from(base.h) + step).rem_euclid(HUE_LIMIT) as u16,
                ..base
            }
        }
        PaletteKind::Monochromatic => {
            let value =
                MONOCHROMATIC_MIN_VALUE + MONOCHROMATIC_SPAN * i as f64 / (count - 1) as f64;
            Hsv {
                v: value.round() as u8,
                ..base
            }
        }
    }
}

fn shift_hue(hue: u16, offset: f64) -> u16 {
    ((f64::from(hue) + offset).round() as i32).rem_euclid(HUE_LIMIT) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(h: i32, s: i32, v: i32) -> Color {
        ColorConverter::new().from_hsv(h, s, v).unwrap()
    }

    fn hues(palette: &[Color]) -> Vec<u16> {
        palette.iter().map(|c| c.hsv().h).collect()
    }

    #[test]
    fn test_complementary_red_pair() {
        let palette = PaletteGenerator::new()
            .generate(&base(0, 100, 100), PaletteKind::Complementary, 2)
            .unwrap();

        assert_eq!(hues(&palette), vec![0, 180]);
        assert_eq!(palette[0].hex(), "#ff0000");
        assert_eq!(palette[1].hex(), "#00ffff");
    }

    #[test]
    fn test_complementary_sweep_wraps() {
        let palette = PaletteGenerator::new()
            .generate(&base(300, 80, 90), PaletteKind::Complementary, 3)
            .unwrap();

        assert_eq!(hues(&palette), vec![300, 30, 120]);
        assert!(palette.iter().all(|c| c.hsv().s == 80 && c.hsv().v == 90));
    }

    #[test]
    fn test_analogous_spread() {
        let generator = PaletteGenerator::new();

        let three = generator
            .generate(&base(100, 60, 70), PaletteKind::Analogous, 3)
            .unwrap();
        assert_eq!(hues(&three), vec![80, 100, 120]);

        let four = generator
            .generate(&base(0, 60, 70), PaletteKind::Analogous, 4)
            .unwrap();
        assert_eq!(hues(&four), vec![330, 345, 0, 15]);
    }

    #[test]
    fn test_triadic_cycles_three_hues() {
        let palette = PaletteGenerator::new()
            .generate(&base(10, 90, 90), PaletteKind::Triadic, 6)
            .unwrap();

        assert_eq!(hues(&palette), vec![10, 130, 250, 10, 130, 250]);
        assert_eq!(palette[0], palette[3]);
    }

    #[test]
    fn test_monochromatic_value_ramp() {
        let palette = PaletteGenerator::new()
            .generate(&base(200, 65, 50), PaletteKind::Monochromatic, 5)
            .unwrap();

        let values: Vec<u8> = palette.iter().map(|c| c.hsv().v).collect();
        assert_eq!(values, vec![20, 40, 60, 80, 100]);
        assert!(palette.iter().all(|c| c.hsv().h == 200 && c.hsv().s == 65));
    }

    #[test]
    fn test_single_entry_is_base_color() {
        let generator = PaletteGenerator::new();
        let color = base(42, 70, 60);

        for kind in PaletteKind::ALL {
            let palette = generator.generate(&color, kind, 1).unwrap();
            assert_eq!(palette, vec![color.clone()], "{kind}");
        }
    }

    #[test]
    fn test_zero_count_is_validation_error() {
        let err = PaletteGenerator::new()
            .generate(&base(0, 100, 100), PaletteKind::Triadic, 0)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_request_negative_count_is_validation_error() {
        let request = PaletteRequest {
            base_color: base(0, 100, 100),
            kind: PaletteKind::Complementary,
            count: -3,
        };
        let err = PaletteGenerator::new().generate_request(&request).unwrap_err();
        assert_eq!(
            err,
            ColorError::validation("count", -3, "must be at least 1")
        );
    }

    #[test]
    fn test_palette_length_matches_count() {
        let generator = PaletteGenerator::new();
        let color = base(77, 55, 66);

        for kind in PaletteKind::ALL {
            for count in 1..=24 {
                let palette = generator.generate(&color, kind, count).unwrap();
                assert_eq!(palette.len(), count, "{kind} x {count}");
                assert!(palette.iter().all(|c| c.hsv().h < 360));
            }
        }
    }

    #[test]
    fn test_achromatic_base_keeps_gray() {
        let gray = ColorConverter::new().from_hex("#808080").unwrap();
        let palette = PaletteGenerator::new()
            .generate(&gray, PaletteKind::Complementary, 4)
            .unwrap();

        assert!(palette.iter().all(|c| c.hex() == "#808080"));
    }
}
