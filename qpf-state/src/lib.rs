//! Dense state vector simulation kernels
//!
//! This crate provides the numeric core of the period-finding pipeline: a
//! dense amplitude vector, in-place gate kernels, and counting register
//! sampling. States are split into a counting register on the low qubits
//! and a work register on the high qubits; measurement marginalizes the
//! work register and samples only counting values.
//!
//! # Kernels
//!
//! - Single-qubit gates (Hadamard, Pauli-X, arbitrary 2x2)
//! - Controlled phase rotations and qubit swaps
//! - Controlled modular multiplication of the work register
//! - Phase flip and mean reflection over the counting register
//!
//! # Example
//!
//! ```
//! use qpf_state::{kernels, measurement, StateVector};
//!
//! let mut state = StateVector::new(3).unwrap();
//! for q in 0..2 {
//!     kernels::apply_hadamard(&mut state, q).unwrap();
//! }
//!
//! let probs = measurement::counting_probabilities(&state, 2).unwrap();
//! assert!((probs[0] - 0.25).abs() < 1e-12);
//! ```

pub mod error;
pub mod kernels;
pub mod measurement;
pub mod state_vector;

pub use error::{Result, StateError};
pub use measurement::{counting_probabilities, sample_counting_register, SamplingResult};
pub use state_vector::{StateVector, MAX_QUBITS};
