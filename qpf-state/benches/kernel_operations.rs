//! Benchmarks for gate kernels and counting register sampling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qpf_state::{kernels, measurement, StateVector};

// Simple linear congruential generator; fast enough to stay out of the
// sampling numbers.
struct BenchRng {
    state: u64,
}

impl BenchRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        ((self.state / 65536) % 32768) as f64 / 32768.0
    }
}

fn uniform_state(num_qubits: usize) -> StateVector {
    let mut state = StateVector::new(num_qubits).unwrap();
    for q in 0..num_qubits {
        kernels::apply_hadamard(&mut state, q).unwrap();
    }
    state
}

fn bench_hadamard_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_kernel");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1u64 << num_qubits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let mut state = StateVector::new(num_qubits).unwrap();

                b.iter(|| {
                    kernels::apply_hadamard(black_box(&mut state), 0).unwrap();
                })
            },
        );
    }

    group.finish();
}

fn bench_controlled_mod_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled_mod_mul");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1u64 << num_qubits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let counting_width = 4;
                let work_width = num_qubits - counting_width;
                // 2^w - 1 is odd, so factor 2 is always invertible
                let modulus = (1u128 << work_width) - 1;
                let mut state = uniform_state(num_qubits);

                b.iter(|| {
                    kernels::apply_controlled_mod_mul(
                        black_box(&mut state),
                        0,
                        counting_width,
                        2,
                        modulus,
                    )
                    .unwrap();
                })
            },
        );
    }

    group.finish();
}

fn bench_diffusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("diffusion");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1u64 << num_qubits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let mut state = uniform_state(num_qubits);

                b.iter(|| {
                    kernels::apply_diffusion(black_box(&mut state), num_qubits / 2).unwrap();
                })
            },
        );
    }

    group.finish();
}

fn bench_counting_probabilities(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_probabilities");

    for num_qubits in [10, 15, 20].iter() {
        let size = 1u64 << num_qubits;
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let state = uniform_state(num_qubits);

                b.iter(|| {
                    let probs =
                        measurement::counting_probabilities(black_box(&state), num_qubits / 2)
                            .unwrap();
                    black_box(probs);
                })
            },
        );
    }

    group.finish();
}

fn bench_sample_counting_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_counting_register");

    for num_qubits in [10, 15, 20].iter() {
        group.throughput(Throughput::Elements(1024));

        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            num_qubits,
            |b, &num_qubits| {
                let state = uniform_state(num_qubits);
                let mut rng = BenchRng::new(42);

                b.iter(|| {
                    let result = measurement::sample_counting_register(
                        black_box(&state),
                        num_qubits / 2,
                        1024,
                        &mut || rng.next(),
                    )
                    .unwrap();
                    black_box(result);
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hadamard_kernel,
    bench_controlled_mod_mul,
    bench_diffusion,
    bench_counting_probabilities,
    bench_sample_counting_register,
);
criterion_main!(benches);
