/**
 * Performance benchmarks for fractal-noise
 *
 * Run with:
 *   cargo bench
 *
 * View HTML reports in:
 *   target/criterion/report/index.html
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fractal_noise::{
    FractalNoiseConfig, FractalNoiseGenerator, OctaveNoise, OctaveNoiseConfig,
};

/// Benchmark texture generation for different sizes
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [64, 128, 256].iter() {
        let config = FractalNoiseConfig {
            size: *size,
            octaves: 20,
            seed: 42,
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::new("size", size), size, |b, _| {
            b.iter(|| {
                let generator = FractalNoiseGenerator::new(config.clone()).unwrap();
                black_box(generator.generate().unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark how octave count scales per-texture cost
fn bench_octave_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("octaves");

    for octaves in [1, 4, 8, 20].iter() {
        let config = FractalNoiseConfig {
            size: 64,
            octaves: *octaves,
            seed: 42,
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::new("octaves", octaves), octaves, |b, _| {
            b.iter(|| {
                let generator = FractalNoiseGenerator::new(config.clone()).unwrap();
                black_box(generator.generate().unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark single-coordinate sampling cost
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for octaves in [1, 6, 20].iter() {
        let config = OctaveNoiseConfig {
            octaves: *octaves,
            seed: 42,
            ..Default::default()
        };
        let sampler = OctaveNoise::new(&config).unwrap();

        group.bench_with_input(BenchmarkId::new("sample", octaves), octaves, |b, _| {
            b.iter(|| black_box(sampler.sample(black_box(0.37), black_box(0.61))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_octave_counts, bench_sampling);
criterion_main!(benches);
