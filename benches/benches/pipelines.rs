//! Benchmarks for the full-image pipelines
//!
//! Run with: cargo bench --bench pipelines

use chroma_core::{Adjustments, Channel, ColorModel, PixelBuffer};
use chroma_pipeline::{Pipeline, PipelineOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_gradient(size: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            data.push(((x * 255) / size) as u8);
            data.push(((y * 255) / size) as u8);
            data.push((((x + y) * 255) / (2 * size)) as u8);
            data.push(255);
        }
    }
    PixelBuffer::from_raw(size, size, data).expect("gradient dimensions are valid")
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("Process");
    let adjustments = Adjustments::new()
        .with_factor(Channel::Y, 70.0)
        .with_factor(Channel::S, 50.0);

    for size in [256u32, 1024] {
        let image = create_gradient(size);
        for (label, options) in [
            ("sequential", PipelineOptions::sequential()),
            ("parallel", PipelineOptions::default()),
        ] {
            let pipeline = Pipeline::new(options);
            for model in [ColorModel::Ycbcr, ColorModel::Hsv] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{}_{}", model, label), size),
                    &image,
                    |b, image| {
                        b.iter(|| pipeline.process(black_box(image), model, &adjustments));
                    },
                );
            }
        }
    }

    group.finish();
}

fn bench_isolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Isolate");

    for size in [256u32, 1024] {
        let image = create_gradient(size);
        for (label, options) in [
            ("sequential", PipelineOptions::sequential()),
            ("parallel", PipelineOptions::default()),
        ] {
            let pipeline = Pipeline::new(options);
            group.bench_with_input(BenchmarkId::new(label, size), &image, |b, image| {
                b.iter(|| pipeline.isolate(black_box(image)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_process, bench_isolate);
criterion_main!(benches);
