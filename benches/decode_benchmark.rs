// ============================================================================
// Packed Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Digit Extraction - Isolates the 96-bit limb division
// 2. Full Decode - Words to String through the public entry point
// 3. Notation Comparison - Plain vs scientific rendering
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use packed_decimal::prelude::*;
use std::hint::black_box;

// Mantissas of increasing digit count, up to the 29-digit maximum
const CASES: [(&str, (u32, u32, u32)); 4] = [
    ("1_digit", (7, 0, 0)),
    ("10_digits", (u32::MAX, 0, 0)),
    ("20_digits", (u32::MAX, u32::MAX, 0)),
    ("29_digits", (u32::MAX, u32::MAX, u32::MAX)),
];

fn benchmark_digit_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_extraction");

    for (name, (low, mid, high)) in CASES.iter() {
        let mantissa = Mantissa96::new(*low, *mid, *high);
        group.bench_with_input(BenchmarkId::new("digits", name), &mantissa, |b, m| {
            b.iter(|| black_box(m.digits()));
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, (low, mid, high)) in CASES.iter() {
        group.bench_with_input(
            BenchmarkId::new("scale_28", name),
            &(*low, *mid, *high),
            |b, &(low, mid, high)| {
                b.iter(|| black_box(decode(low, mid, high, 0x801C_0000)));
            },
        );
    }

    // Out-of-range scale renders 255 fraction digits
    group.bench_function("scale_255", |b| {
        b.iter(|| black_box(decode(u32::MAX, u32::MAX, u32::MAX, 0x00FF_0000)));
    });

    group.finish();
}

fn benchmark_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");
    let packed = PackedDecimal::new(u32::MAX, u32::MAX, u32::MAX, 0x001C_0000);

    for style in [RenderStyle::Plain, RenderStyle::Scientific] {
        let renderer = create_from_config(DecodeConfig::new().with_render_style(style));
        group.bench_function(renderer.name().to_string(), |b| {
            b.iter(|| black_box(renderer.render(&packed)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_digit_extraction,
    benchmark_decode,
    benchmark_notation,
);
criterion_main!(benches);
