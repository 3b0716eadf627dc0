//! Benchmarks for the flat kernel: multiplication and inversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matriz::kernel;

/// Diagonally dominant n x n buffer, guaranteed invertible.
fn well_conditioned(n: usize) -> Vec<f64> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            m[i * n + j] = if i == j {
                n as f64 + 1.0
            } else {
                1.0 / (1.0 + (i + j) as f64)
            };
        }
    }
    m
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for size in [8usize, 16, 32, 64].iter() {
        let n = *size;
        let a = well_conditioned(n);
        let b = well_conditioned(n);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bch, _| {
            bch.iter(|| kernel::matmul(n, n, n, n, black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");

    for size in [8usize, 16, 32, 64].iter() {
        let n = *size;
        let m = well_conditioned(n);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bch, _| {
            bch.iter(|| kernel::invert(n, black_box(&m)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_invert);
criterion_main!(benches);
