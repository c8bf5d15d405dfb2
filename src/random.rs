//! Random "pleasing" color generation
//!
//! Hue is drawn uniformly from the whole wheel while saturation and value
//! stay in the upper half of their range.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::color::{Color, ColorConverter, Hsv};
use crate::constants::random::{HUE, SATURATION, VALUE};

/// Source of uniformly distributed integers.
///
/// Implemented for every [`rand::Rng`]; tests can substitute a
/// deterministic source.
pub trait RandomSource {
    /// Draw a value from `range` (inclusive on both ends)
    fn pick(&mut self, range: RangeInclusive<u16>) -> u16;
}

impl<R: rand::Rng> RandomSource for R {
    fn pick(&mut self, range: RangeInclusive<u16>) -> u16 {
        self.random_range(range)
    }
}

/// Generates single random colors
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomColorGenerator {
    converter: ColorConverter,
}

impl RandomColorGenerator {
    pub fn new() -> Self {
        Self::with_converter(ColorConverter::new())
    }

    pub fn with_converter(converter: ColorConverter) -> Self {
        Self { converter }
    }

    /// Generate a color from the calling thread's RNG
    pub fn generate(&self) -> Color {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a color from an explicit random source
    pub fn generate_with<S: RandomSource + ?Sized>(&self, source: &mut S) -> Color {
        let hsv = Hsv {
            h: draw(source, HUE),
            s: draw(source, SATURATION) as u8,
            v: draw(source, VALUE) as u8,
        };
        trace!(%hsv, "drew random color");
        self.converter.from_valid_hsv(hsv)
    }
}

/// Misbehaving sources are clamped so the result is always a valid color.
fn draw<S: RandomSource + ?Sized>(source: &mut S, range: RangeInclusive<u16>) -> u16 {
    let (low, high) = (*range.start(), *range.end());
    source.pick(range).clamp(low, high)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Replays a fixed sequence of draws
    struct ScriptedSource(VecDeque<u16>);

    impl ScriptedSource {
        fn new(values: &[u16]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl RandomSource for ScriptedSource {
        fn pick(&mut self, range: RangeInclusive<u16>) -> u16 {
            self.0.pop_front().unwrap_or(*range.start())
        }
    }

    #[test]
    fn test_scripted_source_drives_hsv() {
        let mut source = ScriptedSource::new(&[120, 100, 100]);
        let color = RandomColorGenerator::new().generate_with(&mut source);

        assert_eq!(color.hsv(), Hsv { h: 120, s: 100, v: 100 });
        assert_eq!(color.hex(), "#00ff00");
    }

    #[test]
    fn test_out_of_range_draws_are_clamped() {
        let mut source = ScriptedSource::new(&[720, 10, 400]);
        let color = RandomColorGenerator::new().generate_with(&mut source);

        assert_eq!(color.hsv(), Hsv { h: 359, s: 50, v: 100 });
    }

    #[test]
    fn test_seeded_rng_stays_in_bounds() {
        let generator = RandomColorGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2000 {
            let hsv = generator.generate_with(&mut rng).hsv();
            assert!(hsv.h < 360);
            assert!((50..=100).contains(&hsv.s));
            assert!((50..=100).contains(&hsv.v));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let generator = RandomColorGenerator::new();
        let a = generator.generate_with(&mut StdRng::seed_from_u64(99));
        let b = generator.generate_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_concurrent_generation() {
        let generator = RandomColorGenerator::new();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || (0..100).map(|_| generator.generate()).collect::<Vec<_>>()))
                .collect();

            for handle in handles {
                let colors = handle.join().unwrap();
                assert_eq!(colors.len(), 100);
                assert!(colors.iter().all(|c| c.hsv().s >= 50 && c.hsv().v >= 50));
            }
        });
    }
}
