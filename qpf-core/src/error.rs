//! Error types for circuit template construction

use thiserror::Error;

/// Errors raised while building or validating a circuit template
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Counting register must hold at least one qubit
    #[error("Counting width must be at least 1, got {0}")]
    InvalidWidth(usize),

    /// Modulus too small to define a group
    #[error("Modulus must be greater than 1, got {0}")]
    InvalidModulus(u128),

    /// Base outside the valid range for the configured modulus
    #[error("Base {base} is outside the valid range [1, {modulus})")]
    BaseOutOfRange { base: u128, modulus: u128 },

    /// The oracle permutation is only reversible for coprime bases
    #[error("Base {base} is not coprime to modulus {modulus}")]
    BaseNotCoprime { base: u128, modulus: u128 },

    /// A stage declares a register width other than the spec's
    #[error("Stage '{stage}' declares width {stage_width}, but the counting register has width {counting_width}")]
    StageWidthMismatch {
        stage: &'static str,
        stage_width: usize,
        counting_width: usize,
    },
}

impl ConfigError {
    /// Create a base-out-of-range error
    pub fn base_out_of_range(base: u128, modulus: u128) -> Self {
        Self::BaseOutOfRange { base, modulus }
    }

    /// Create a base-not-coprime error
    pub fn base_not_coprime(base: u128, modulus: u128) -> Self {
        Self::BaseNotCoprime { base, modulus }
    }

    /// Create a stage-width-mismatch error
    pub fn stage_width_mismatch(
        stage: &'static str,
        stage_width: usize,
        counting_width: usize,
    ) -> Self {
        Self::StageWidthMismatch {
            stage,
            stage_width,
            counting_width,
        }
    }
}
