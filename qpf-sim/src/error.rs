//! Error types for circuit simulation

use qpf_core::ConfigError;
use qpf_state::StateError;
use thiserror::Error;

/// Errors that can occur while executing a circuit template
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Zero measurement shots requested
    #[error("Cannot sample a distribution from zero shots")]
    ZeroShots,

    /// Circuit wider than the configured ceiling
    #[error("Circuit of {requested} qubits exceeds the configured ceiling of {max}")]
    WidthExceeded { requested: usize, max: usize },

    /// Invalid simulator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error from state vector operations
    #[error(transparent)]
    State(#[from] StateError),

    /// Error from circuit template validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
