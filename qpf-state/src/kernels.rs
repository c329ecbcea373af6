//! Gate kernels over dense state vectors
//!
//! Each kernel validates its qubit arguments against the state width and
//! then applies the operation in place. Single-qubit gates use the paired
//! amplitude update: basis states are grouped into pairs that differ only
//! in the target bit, and the 2x2 matrix acts on each pair.

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Threshold for parallel execution (number of qubits)
const PARALLEL_THRESHOLD: usize = 16;

fn check_qubit(state: &StateVector, qubit: usize) -> Result<()> {
    if qubit >= state.num_qubits() {
        return Err(StateError::InvalidQubitIndex {
            index: qubit,
            num_qubits: state.num_qubits(),
        });
    }
    Ok(())
}

fn check_counting_width(state: &StateVector, counting_width: usize) -> Result<()> {
    if counting_width > state.num_qubits() {
        return Err(StateError::RegisterTooWide {
            counting_width,
            num_qubits: state.num_qubits(),
        });
    }
    Ok(())
}

/// Apply an arbitrary single-qubit gate
///
/// # Errors
/// Returns [`StateError::InvalidQubitIndex`] if `qubit` is out of range.
pub fn apply_single_qubit(
    state: &mut StateVector,
    matrix: &[[Complex64; 2]; 2],
    qubit: usize,
) -> Result<()> {
    check_qubit(state, qubit)?;

    let qubit_mask = 1usize << qubit;
    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    let amplitudes = state.amplitudes_mut();
    for i in 0..amplitudes.len() {
        // Skip the "high" half of each pair
        if i & qubit_mask != 0 {
            continue;
        }
        let j = i | qubit_mask;
        let amp0 = amplitudes[i];
        let amp1 = amplitudes[j];
        amplitudes[i] = m00 * amp0 + m01 * amp1;
        amplitudes[j] = m10 * amp0 + m11 * amp1;
    }
    Ok(())
}

/// Apply a Hadamard gate to one qubit
pub fn apply_hadamard(state: &mut StateVector, qubit: usize) -> Result<()> {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    let matrix = [[h, h], [h, -h]];
    apply_single_qubit(state, &matrix, qubit)
}

/// Apply a Pauli-X gate to one qubit
pub fn apply_pauli_x(state: &mut StateVector, qubit: usize) -> Result<()> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    let matrix = [[zero, one], [one, zero]];
    apply_single_qubit(state, &matrix, qubit)
}

/// Apply a controlled phase rotation
///
/// Multiplies by `e^{i*angle}` every amplitude whose control and target
/// bits are both set.
///
/// # Errors
/// Returns an error if either qubit is out of range or the two qubits
/// coincide.
pub fn apply_controlled_phase(
    state: &mut StateVector,
    control: usize,
    target: usize,
    angle: f64,
) -> Result<()> {
    check_qubit(state, control)?;
    check_qubit(state, target)?;
    if control == target {
        return Err(StateError::DuplicateQubit { qubit: control });
    }

    let phase = Complex64::new(angle.cos(), angle.sin());
    let mask = (1usize << control) | (1usize << target);

    let amplitudes = state.amplitudes_mut();
    for i in 0..amplitudes.len() {
        if i & mask == mask {
            amplitudes[i] *= phase;
        }
    }
    Ok(())
}

/// Swap two qubits
///
/// # Errors
/// Returns an error if either qubit is out of range or the two qubits
/// coincide.
pub fn apply_swap(state: &mut StateVector, a: usize, b: usize) -> Result<()> {
    check_qubit(state, a)?;
    check_qubit(state, b)?;
    if a == b {
        return Err(StateError::DuplicateQubit { qubit: a });
    }

    let mask_a = 1usize << a;
    let mask_b = 1usize << b;

    let amplitudes = state.amplitudes_mut();
    for i in 0..amplitudes.len() {
        // Visit each swapped pair once, from the (a=1, b=0) side
        if i & mask_a != 0 && i & mask_b == 0 {
            let j = (i & !mask_a) | mask_b;
            amplitudes.swap(i, j);
        }
    }
    Ok(())
}

/// Apply a controlled modular multiplication to the work register
///
/// The state is split into a counting register on qubits
/// `0..counting_width` and a work register on the remaining qubits. When
/// the control bit is set, every work value `w < modulus` is sent to
/// `w * factor mod modulus`; work values at or above the modulus and all
/// amplitudes with a clear control bit pass through unchanged.
///
/// The map is a permutation of the basis states, so the kernel is unitary
/// exactly when `factor` is invertible modulo `modulus`.
///
/// # Errors
/// Returns an error if the register split does not fit the state, if the
/// control is not a counting qubit, if the modulus does not fit the work
/// register, or if `gcd(factor, modulus) != 1`.
pub fn apply_controlled_mod_mul(
    state: &mut StateVector,
    control: usize,
    counting_width: usize,
    factor: u128,
    modulus: u128,
) -> Result<()> {
    check_counting_width(state, counting_width)?;
    if control >= counting_width {
        return Err(StateError::InvalidQubitIndex {
            index: control,
            num_qubits: counting_width,
        });
    }
    if modulus == 0 {
        return Err(StateError::NonInvertibleFactor { factor, modulus });
    }
    let work_width = state.num_qubits() - counting_width;
    if modulus > 1u128 << work_width {
        return Err(StateError::ModulusTooWide {
            modulus,
            work_width,
        });
    }
    let reduced = factor % modulus;
    if gcd(reduced, modulus) != 1 {
        return Err(StateError::NonInvertibleFactor { factor, modulus });
    }

    let counting_mask = (1usize << counting_width) - 1;
    let control_mask = 1usize << control;

    // Multiplication by an invertible factor permutes the work values, so
    // scattering from a snapshot touches every slot exactly once.
    let old = state.amplitudes().to_vec();
    let amplitudes = state.amplitudes_mut();
    for (i, amp) in old.iter().enumerate() {
        let work = (i >> counting_width) as u128;
        if i & control_mask == 0 || work >= modulus {
            amplitudes[i] = *amp;
            continue;
        }
        let mapped = (work * reduced % modulus) as usize;
        amplitudes[(mapped << counting_width) | (i & counting_mask)] = *amp;
    }
    Ok(())
}

/// Flip the sign of every amplitude whose counting value is marked
///
/// The predicate sees only the counting register; the work bits are
/// ignored, so every work slice is flipped consistently.
pub fn apply_phase_flip(
    state: &mut StateVector,
    counting_width: usize,
    marked: &dyn Fn(u64) -> bool,
) -> Result<()> {
    check_counting_width(state, counting_width)?;

    let counting_mask = (1u64 << counting_width) - 1;
    let amplitudes = state.amplitudes_mut();
    for (i, amp) in amplitudes.iter_mut().enumerate() {
        if marked(i as u64 & counting_mask) {
            *amp = -*amp;
        }
    }
    Ok(())
}

/// Reflect the counting register about its mean amplitude
///
/// Each contiguous block of `2^counting_width` amplitudes shares one work
/// value; within a block every amplitude `a` becomes `2*mean - a`. The
/// reflection is unitary, so the state norm is preserved.
pub fn apply_diffusion(state: &mut StateVector, counting_width: usize) -> Result<()> {
    check_counting_width(state, counting_width)?;

    let block = 1usize << counting_width;
    let num_qubits = state.num_qubits();
    let amplitudes = state.amplitudes_mut();

    if num_qubits >= PARALLEL_THRESHOLD && rayon::current_num_threads() > 1 {
        use rayon::prelude::*;
        amplitudes
            .par_chunks_mut(block)
            .for_each(reflect_about_mean);
    } else {
        for chunk in amplitudes.chunks_mut(block) {
            reflect_about_mean(chunk);
        }
    }
    Ok(())
}

fn reflect_about_mean(chunk: &mut [Complex64]) {
    let mut mean = Complex64::new(0.0, 0.0);
    for amp in chunk.iter() {
        mean += *amp;
    }
    mean /= chunk.len() as f64;
    let twice_mean = mean * 2.0;
    for amp in chunk.iter_mut() {
        *amp = twice_mean - *amp;
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
