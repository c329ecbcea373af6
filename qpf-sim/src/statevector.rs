//! Dense state vector backend

use crate::backend::Backend;
use crate::config::SimulatorConfig;
use crate::distribution::MeasurementDistribution;
use crate::error::{Result, SimulationError};
use qpf_core::{gates, CircuitSpec, GateOp};
use qpf_state::{kernels, measurement, StateVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Backend that evolves the template on a dense state vector
///
/// Lowers each stage to primitive operations, applies them in order to a
/// `StateVector` holding the counting and work registers, and samples the
/// counting register for the requested number of shots.
///
/// # Example
///
/// ```
/// use qpf_core::CircuitBuilder;
/// use qpf_sim::{Backend, SimulatorConfig, StatevectorBackend};
///
/// let spec = CircuitBuilder::new(5, 23).build().unwrap();
/// let backend = StatevectorBackend::new(SimulatorConfig::default().with_seed(7));
/// let distribution = backend.run(&spec, 1024).unwrap();
/// assert_eq!(distribution.shots(), 1024);
/// ```
#[derive(Debug, Clone)]
pub struct StatevectorBackend {
    config: SimulatorConfig,
}

impl StatevectorBackend {
    /// Create a backend with the given configuration
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Get the backend configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Evolve the template and return the final state, pre-measurement
    ///
    /// Useful for exact amplitude checks; `run` is the sampling entry
    /// point.
    pub fn final_state(&self, spec: &CircuitSpec) -> Result<StateVector> {
        self.check_spec(spec)?;
        self.evolve(spec)
    }

    fn check_spec(&self, spec: &CircuitSpec) -> Result<()> {
        self.config
            .validate()
            .map_err(SimulationError::InvalidConfiguration)?;
        spec.validate()?;

        let requested = spec.total_qubits();
        if requested > self.config.max_qubits {
            return Err(SimulationError::WidthExceeded {
                requested,
                max: self.config.max_qubits,
            });
        }
        Ok(())
    }

    fn evolve(&self, spec: &CircuitSpec) -> Result<StateVector> {
        let mut state = StateVector::new(spec.total_qubits())?;
        let counting_width = spec.counting_width();

        for stage in spec.stages() {
            let ops = gates::lower_stage(stage);
            for op in &ops {
                apply_operation(&mut state, op, counting_width)?;
            }
            debug!(stage = stage.name(), ops = ops.len(), "applied stage");
        }
        Ok(state)
    }
}

impl Default for StatevectorBackend {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl Backend for StatevectorBackend {
    fn name(&self) -> &str {
        "statevector"
    }

    fn run(&self, spec: &CircuitSpec, shots: usize) -> Result<MeasurementDistribution> {
        if shots == 0 {
            return Err(SimulationError::ZeroShots);
        }
        self.check_spec(spec)?;

        debug!(
            backend = self.name(),
            base = %spec.base(),
            modulus = %spec.modulus(),
            counting_width = spec.counting_width(),
            work_width = spec.work_width(),
            shots,
            "executing circuit template"
        );

        let state = self.evolve(spec)?;
        let counting_width = spec.counting_width();

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut draw = || rng.gen::<f64>();
        let sampled =
            measurement::sample_counting_register(&state, counting_width, shots, &mut draw)?;

        debug!(
            distinct_outcomes = sampled.counts.len(),
            "sampled counting register"
        );

        Ok(MeasurementDistribution::from_counts(
            sampled.to_bitstring_counts(counting_width),
            counting_width,
            shots,
        ))
    }

    fn description(&self) -> String {
        format!(
            "dense state vector simulation, up to {} qubits",
            self.config.max_qubits
        )
    }
}

/// Apply one primitive operation to a state split at `counting_width`
///
/// The register split matters only for the operations that address whole
/// registers; qubit-addressed gates ignore it.
pub fn apply_operation(
    state: &mut StateVector,
    op: &GateOp,
    counting_width: usize,
) -> Result<()> {
    match op {
        GateOp::Hadamard { target } => kernels::apply_hadamard(state, target.index())?,
        GateOp::PauliX { target } => kernels::apply_pauli_x(state, target.index())?,
        GateOp::ControlledPhase {
            control,
            target,
            angle,
        } => kernels::apply_controlled_phase(state, control.index(), target.index(), *angle)?,
        GateOp::Swap { a, b } => kernels::apply_swap(state, a.index(), b.index())?,
        GateOp::ControlledModMul {
            control,
            factor,
            modulus,
        } => kernels::apply_controlled_mod_mul(
            state,
            control.index(),
            counting_width,
            *factor,
            *modulus,
        )?,
        GateOp::PhaseFlip { predicate } => {
            kernels::apply_phase_flip(state, counting_width, &|v| predicate.matches(v as u128))?
        }
        GateOp::Diffuse => kernels::apply_diffusion(state, counting_width)?,
    }
    Ok(())
}
