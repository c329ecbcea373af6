//! Dense state vector storage

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Hard cap on dense storage; 2^30 amplitudes is 16 GiB of complex doubles.
pub const MAX_QUBITS: usize = 30;

/// Dense quantum state vector
///
/// Holds the `2^num_qubits` complex amplitudes of a register in the
/// computational basis, least-significant qubit first.
///
/// # Example
/// ```
/// use qpf_state::StateVector;
///
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// assert_eq!(state.probability(0), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to `|0...0>`
    ///
    /// # Errors
    /// Returns [`StateError::WidthTooLarge`] above [`MAX_QUBITS`] qubits.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::WidthTooLarge {
                num_qubits,
                max: MAX_QUBITS,
            });
        }
        let dimension = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// # Errors
    /// Returns an error if the slice length is not `2^num_qubits` or the
    /// width exceeds the storage limit.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;
        if amplitudes.len() != state.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension(),
                actual: amplitudes.len(),
            });
        }
        state.amplitudes.copy_from_slice(amplitudes);
        Ok(state)
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (`2^num_qubits`)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get a mutable reference to the state amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check if the state is normalized (|norm - 1| < epsilon)
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Probability of measuring basis state `index`
    #[inline]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Probabilities of all basis states
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Reset the state to `|0...0>`
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }
}
