//! Error types for extraction and orchestration

use qpf_core::ConfigError;
use qpf_sim::SimulationError;
use thiserror::Error;

/// Errors from reading a measurement distribution back into numbers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No outcomes to read
    #[error("Measurement distribution is empty")]
    EmptyDistribution,

    /// A distribution key failed to parse as a binary numeral
    #[error("Malformed outcome key {key:?}")]
    MalformedKey { key: String },

    /// Counting fraction too wide for exact integer arithmetic
    #[error("Counting width {width} with modulus {modulus} overflows the exact rational range")]
    WidthOverflow { width: usize, modulus: u128 },
}

/// Errors that can abort a solve run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Range scan requested without a verification target
    #[error("Range scan requires a verification target")]
    MissingVerificationTarget,

    /// Degenerate candidate range
    #[error("Range scan start {start:#x} exceeds end {end:#x}")]
    EmptyRange { start: u128, end: u128 },

    /// Template construction failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Backend execution failed
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Post-processing failed
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, SolveError>;
