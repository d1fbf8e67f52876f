use criterion::{criterion_group, criterion_main, Criterion};
use coordgen::{
    config::{AxisBounds, GenerationConfig, GenerationMode},
    export::{write_delimited, Delimiter},
    point_distributions::{generate, Grid, PointDistribution, Random},
};
use std::hint::black_box;

fn bounds() -> Vec<AxisBounds> {
    vec![
        AxisBounds { min: 0.0, max: 100.0 },
        AxisBounds { min: 0.0, max: 100.0 },
        AxisBounds { min: -20.0, max: 0.0 },
    ]
}

fn criterion_grid(c: &mut Criterion) {
    let grid = Grid::new(bounds(), 1.0, 100_000).unwrap();
    c.bench_function("grid 100k", |b| b.iter(|| black_box(grid.generate())));
    let huge = Grid::new(bounds(), 1.0e-6, 1_000).unwrap();
    c.bench_function("grid prefix of huge grid", |b| {
        b.iter(|| black_box(huge.generate()))
    });
}

fn criterion_random(c: &mut Criterion) {
    let random = Random::new(bounds(), 100_000).unwrap();
    c.bench_function("random 100k", |b| b.iter(|| black_box(random.generate())));
}

fn criterion_export(c: &mut Criterion) {
    let config = GenerationConfig::new(bounds(), 10_000, 1.0, GenerationMode::Random).unwrap();
    let points = generate(&config, None).unwrap();
    c.bench_function("csv export 10k", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            write_delimited(&points, &mut buffer, Delimiter::Comma).unwrap();
            black_box(buffer)
        })
    });
}

criterion_group!(benches, criterion_grid, criterion_random, criterion_export);
criterion_main!(benches);
