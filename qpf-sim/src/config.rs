//! Simulator configuration

use qpf_state::MAX_QUBITS;

/// Configuration for the state vector backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Number of measurement shots for sampling
    ///
    /// Default: 1024
    pub shots: usize,

    /// Random number generator seed for reproducibility
    ///
    /// If None, draws a seed from OS entropy. Set to Some(seed) for
    /// deterministic distributions.
    ///
    /// Default: None (random)
    pub seed: Option<u64>,

    /// Maximum total qubits (counting + work) the backend will accept
    ///
    /// Dense simulation cost doubles per qubit; this ceiling rejects
    /// templates before any amplitude is allocated. Cannot exceed the
    /// storage cap of 30 qubits.
    ///
    /// Default: 26
    pub max_qubits: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            max_qubits: 26,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration optimized for quick iteration
    ///
    /// - Fewer shots
    /// - Tighter qubit ceiling
    pub fn fast() -> Self {
        Self {
            shots: 256,
            max_qubits: 20,
            ..Default::default()
        }
    }

    /// Create a configuration for well-resolved distributions
    ///
    /// - More measurement shots
    pub fn accurate() -> Self {
        Self {
            shots: 8192,
            ..Default::default()
        }
    }

    /// Create a configuration for wide exploratory runs
    ///
    /// - Qubit ceiling raised to the storage cap
    pub fn exploratory() -> Self {
        Self {
            shots: 2048,
            max_qubits: MAX_QUBITS,
            ..Default::default()
        }
    }

    /// Set the number of measurement shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the random seed for deterministic sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the qubit ceiling
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.shots == 0 {
            return Err("shots must be > 0".to_string());
        }

        if self.max_qubits == 0 {
            return Err("max_qubits must be > 0".to_string());
        }

        if self.max_qubits > MAX_QUBITS {
            return Err(format!(
                "max_qubits must be at most {}, got {}",
                MAX_QUBITS, self.max_qubits
            ));
        }

        Ok(())
    }
}
