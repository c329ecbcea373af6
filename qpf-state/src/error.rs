//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit register")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// State too large for dense storage
    #[error("State of {num_qubits} qubits exceeds the {max}-qubit storage limit")]
    WidthTooLarge { num_qubits: usize, max: usize },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Duplicate qubit in a two-qubit operation
    #[error("Duplicate qubit {qubit} in two-qubit operation")]
    DuplicateQubit { qubit: usize },

    /// Counting register wider than the state
    #[error("Counting register of {counting_width} qubits does not fit a {num_qubits}-qubit state")]
    RegisterTooWide {
        counting_width: usize,
        num_qubits: usize,
    },

    /// Modulus too wide for the work register
    #[error("Modulus {modulus} does not fit the {work_width}-qubit work register")]
    ModulusTooWide { modulus: u128, work_width: usize },

    /// A modular multiplication that is not a permutation
    #[error("Multiplication factor {factor} shares a divisor with modulus {modulus}")]
    NonInvertibleFactor { factor: u128, modulus: u128 },

    /// Sampling from nothing
    #[error("Cannot sample from an empty probability distribution")]
    EmptyDistribution,
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
