//! Benchmarks for single-color conversions
//!
//! Run with: cargo bench --bench conversions

use chroma_color::{hsv_to_rgb, rgb_to_hsv, rgb_to_ycbcr, ycbcr_to_rgb};
use chroma_core::Rgb;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_colors() -> Vec<Rgb> {
    (0..1000u32)
        .map(|i| Rgb::new((i % 256) as u8, ((i * 2) % 256) as u8, ((i * 3) % 256) as u8))
        .collect()
}

fn bench_ycbcr(c: &mut Criterion) {
    let mut group = c.benchmark_group("YCbCr");
    let colors = sample_colors();

    group.bench_function("rgb_to_ycbcr", |b| {
        b.iter(|| {
            for &rgb in &colors {
                black_box(rgb_to_ycbcr(black_box(rgb)));
            }
        });
    });

    let converted: Vec<_> = colors.iter().map(|&rgb| rgb_to_ycbcr(rgb)).collect();
    group.bench_function("ycbcr_to_rgb", |b| {
        b.iter(|| {
            for ycc in &converted {
                black_box(ycbcr_to_rgb(black_box(ycc.y), ycc.cb, ycc.cr));
            }
        });
    });

    group.finish();
}

fn bench_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("HSV");
    let colors = sample_colors();

    group.bench_function("rgb_to_hsv", |b| {
        b.iter(|| {
            for &rgb in &colors {
                black_box(rgb_to_hsv(black_box(rgb)));
            }
        });
    });

    let converted: Vec<_> = colors.iter().map(|&rgb| rgb_to_hsv(rgb)).collect();
    group.bench_function("hsv_to_rgb", |b| {
        b.iter(|| {
            for hsv in &converted {
                black_box(hsv_to_rgb(black_box(hsv.h), hsv.s, hsv.v));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ycbcr, bench_hsv);
criterion_main!(benches);
