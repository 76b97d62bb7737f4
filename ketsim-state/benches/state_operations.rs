//! Benchmarks for state construction and inspection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ketsim_state::QuantumState;

fn bench_uniform_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_construction");

    for nbits in [10, 15, 20].iter() {
        let size = 1u64 << nbits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::from_parameter(nbits), nbits, |b, &nbits| {
            b.iter(|| QuantumState::uniform(black_box(nbits)).unwrap())
        });
    }

    group.finish();
}

fn bench_norm(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm");

    for nbits in [10, 15, 20].iter() {
        let size = 1u64 << nbits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::from_parameter(nbits), nbits, |b, &nbits| {
            let state = QuantumState::uniform(nbits).unwrap();
            b.iter(|| black_box(&state).norm())
        });
    }

    group.finish();
}

fn bench_probabilities(c: &mut Criterion) {
    let mut group = c.benchmark_group("probabilities");

    for nbits in [10, 15, 20].iter() {
        let size = 1u64 << nbits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::from_parameter(nbits), nbits, |b, &nbits| {
            let state = QuantumState::uniform(nbits).unwrap();
            b.iter(|| black_box(&state).probabilities())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_uniform_construction,
    bench_norm,
    bench_probabilities
);
criterion_main!(benches);
