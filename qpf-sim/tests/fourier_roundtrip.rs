//! Composition properties of the Fourier stages
//!
//! The forward network (no terminal swaps) and the inverse network (with
//! swaps) compose to the bit-reversal permutation of the counting
//! register, never to arbitrary mixing. Distributions that are symmetric
//! under bit reversal, the uniform one in particular, survive the round
//! trip unchanged.

use approx::assert_relative_eq;
use qpf_core::gates::fourier_stage;
use qpf_core::{CircuitBuilder, FourierDirection, GateOp};
use qpf_sim::{apply_operation, Backend, SimulatorConfig, StatevectorBackend};
use qpf_state::{counting_probabilities, kernels, sample_counting_register, StateVector};

fn apply_all(state: &mut StateVector, ops: &[GateOp], counting_width: usize) {
    for op in ops {
        apply_operation(state, op, counting_width).unwrap();
    }
}

fn uniform_counting_state(width: usize) -> StateVector {
    let mut state = StateVector::new(width).unwrap();
    for q in 0..width {
        kernels::apply_hadamard(&mut state, q).unwrap();
    }
    state
}

fn bit_reverse(value: usize, width: usize) -> usize {
    let mut reversed = 0;
    for bit in 0..width {
        if value & (1 << bit) != 0 {
            reversed |= 1 << (width - 1 - bit);
        }
    }
    reversed
}

#[test]
fn forward_then_inverse_preserves_uniform_exactly() {
    for width in 1..=4 {
        let mut state = uniform_counting_state(width);
        apply_all(
            &mut state,
            &fourier_stage(width, FourierDirection::Forward),
            width,
        );
        apply_all(
            &mut state,
            &fourier_stage(width, FourierDirection::Inverse),
            width,
        );

        let expected = 1.0 / (1 << width) as f64;
        for p in counting_probabilities(&state, width).unwrap() {
            assert_relative_eq!(p, expected, epsilon = 1e-10);
        }
    }
}

#[test]
fn inverse_then_forward_preserves_uniform_exactly() {
    for width in 1..=4 {
        let mut state = uniform_counting_state(width);
        apply_all(
            &mut state,
            &fourier_stage(width, FourierDirection::Inverse),
            width,
        );
        apply_all(
            &mut state,
            &fourier_stage(width, FourierDirection::Forward),
            width,
        );

        let expected = 1.0 / (1 << width) as f64;
        for p in counting_probabilities(&state, width).unwrap() {
            assert_relative_eq!(p, expected, epsilon = 1e-10);
        }
    }
}

#[test]
fn roundtrip_permutes_basis_states_by_bit_reversal() {
    for width in 1..=4 {
        for value in 0..(1usize << width) {
            let mut state = StateVector::new(width).unwrap();
            for bit in 0..width {
                if value & (1 << bit) != 0 {
                    kernels::apply_pauli_x(&mut state, bit).unwrap();
                }
            }

            apply_all(
                &mut state,
                &fourier_stage(width, FourierDirection::Forward),
                width,
            );
            apply_all(
                &mut state,
                &fourier_stage(width, FourierDirection::Inverse),
                width,
            );

            let probs = counting_probabilities(&state, width).unwrap();
            let target = bit_reverse(value, width);
            assert_relative_eq!(probs[target], 1.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn roundtrip_survives_sampling() {
    let width = 3;
    let mut state = uniform_counting_state(width);
    apply_all(
        &mut state,
        &fourier_stage(width, FourierDirection::Forward),
        width,
    );
    apply_all(
        &mut state,
        &fourier_stage(width, FourierDirection::Inverse),
        width,
    );

    let mut lcg = 2024u64;
    let mut rng = move || {
        lcg = lcg.wrapping_mul(1103515245).wrapping_add(12345);
        ((lcg / 65536) % 32768) as f64 / 32768.0
    };
    let result = sample_counting_register(&state, width, 4096, &mut rng).unwrap();

    for value in 0..(1u64 << width) {
        let freq = result.get_probability(value);
        assert!(
            (freq - 0.125).abs() < 0.05,
            "outcome {} frequency {} strays from uniform",
            value,
            freq
        );
    }
}

#[test]
fn fourier_on_uniform_register_returns_to_zero() {
    // With base 1 the oracle is the identity, so each direction of the
    // Fourier stage must send the uniform counting register to |0...0>
    for direction in [FourierDirection::Forward, FourierDirection::Inverse] {
        let spec = CircuitBuilder::new(1, 2)
            .with_counting_width(3)
            .with_fourier_direction(direction)
            .build()
            .unwrap();
        let backend = StatevectorBackend::new(SimulatorConfig::fast().with_seed(5));
        let distribution = backend.run(&spec, 128).unwrap();
        assert_eq!(distribution.counts().get("000"), Some(&128));
    }
}
