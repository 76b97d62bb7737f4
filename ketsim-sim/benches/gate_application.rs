//! Benchmarks for the gate application and sampling hot paths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ketsim_core::{Gate, Qubit};
use ketsim_sim::{apply, sample};
use ketsim_state::QuantumState;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_hadamard_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_application");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1usize << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let mut state = QuantumState::new(num_qubits).unwrap();
                let gate = Gate::hadamard(Qubit::new(1));

                b.iter(|| {
                    apply(black_box(&gate), black_box(&mut state)).unwrap();
                })
            },
        );
    }

    group.finish();
}

fn bench_controlled_not_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled_not_application");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1usize << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let mut state = QuantumState::uniform(num_qubits).unwrap();
                let gate = Gate::cnot(Qubit::new(1), Qubit::new(num_qubits));

                b.iter(|| {
                    apply(black_box(&gate), black_box(&mut state)).unwrap();
                })
            },
        );
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1usize << num_qubits;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let state = QuantumState::uniform(num_qubits).unwrap();
                let mut rng = StdRng::seed_from_u64(1234);

                b.iter(|| {
                    let counts = sample(black_box(&state), 100, &mut rng);
                    black_box(counts);
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hadamard_application,
    bench_controlled_not_application,
    bench_sampling,
);
criterion_main!(benches);
