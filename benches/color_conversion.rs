use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ladle_colors::{ColorConverter, PaletteGenerator, PaletteKind, RandomColorGenerator};

fn benchmark_conversion(c: &mut Criterion) {
    let converter = ColorConverter::new();

    c.bench_function("from_hex", |b| {
        b.iter(|| converter.from_hex(black_box("#3498db")))
    });
    c.bench_function("from_hsl", |b| {
        b.iter(|| converter.from_hsl(black_box(204), black_box(70), black_box(53)))
    });
}

fn benchmark_palettes(c: &mut Criterion) {
    let generator = PaletteGenerator::new();
    let base = match ColorConverter::new().from_hex("#e74c3c") {
        Ok(color) => color,
        Err(e) => panic!("benchmark base color: {e}"),
    };

    for kind in PaletteKind::ALL {
        c.bench_function(&format!("palette_{kind}_16"), |b| {
            b.iter(|| generator.generate(black_box(&base), kind, black_box(16)))
        });
    }
}

fn benchmark_random(c: &mut Criterion) {
    let generator = RandomColorGenerator::new();
    c.bench_function("random_color", |b| b.iter(|| generator.generate()));
}

criterion_group!(benches, benchmark_conversion, benchmark_palettes, benchmark_random);
criterion_main!(benches);
