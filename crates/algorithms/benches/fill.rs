//! Benchmarks for nearest-neighbor fill

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geodstat_algorithms::interpolation::{nearest_neighbor_fill, FillParams, FillWeighting};
use geodstat_core::Grid;

fn create_gappy_field(size: usize) -> Grid<f64> {
    let mut field = Grid::new(size, size);
    for row in 0..size {
        for col in 0..size {
            let value = if (row * 7 + col * 3) % 11 == 0 {
                f64::NAN
            } else {
                (row as f64 * 0.05).sin() + (col as f64 * 0.03).cos()
            };
            field.set(row, col, value).unwrap();
        }
    }
    field
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor_fill");

    for size in [256, 512, 1024].iter() {
        let field = create_gappy_field(*size);

        for weighting in [FillWeighting::Uniform, FillWeighting::Distance] {
            let params = FillParams { radius: 3, weighting };
            group.bench_with_input(
                BenchmarkId::new(format!("{weighting:?}"), size),
                size,
                |b, _| b.iter(|| nearest_neighbor_fill(black_box(&field), params).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fill);
criterion_main!(benches);
