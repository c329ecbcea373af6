//! End-to-end solve orchestration
//!
//! One `solve` call walks build, simulate, extract, verify strictly in
//! sequence. Nothing is retried inside a run; callers wanting another
//! attempt call `solve` again, typically with a new seed or more shots.

use crate::error::{Result, SolveError};
use crate::postprocess;
use crate::verify::{VerificationTarget, Verifier};
use qpf_core::{CircuitBuilder, CircuitSpec, FourierDirection, MarkPredicate};
use qpf_sim::{Backend, StatevectorBackend};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// How measurement outcomes are turned into an answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveMode {
    /// Continued-fraction reduction of the dominant peak
    PeriodEstimate,
    /// Verify every observed outcome inside `[start, end]`, ascending
    RangeScan { start: u128, end: u128 },
}

/// Terminal outcome of one solve run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveResult {
    /// A recovered key (range scan) or period estimate (period mode)
    Found(u128),
    /// Every observed in-range candidate was checked and rejected
    NotFound,
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveResult::Found(key) => write!(f, "found {:#x} ({})", key, key),
            SolveResult::NotFound => f.write_str("not found"),
        }
    }
}

/// Composes template construction, simulation, extraction, and
/// verification into one `solve` operation
///
/// Each invocation is self-contained: the run owns its spec and its
/// distribution, and no state survives between runs, so independent runs
/// over disjoint ranges or seeds can proceed in parallel from the caller's
/// side.
///
/// # Example
/// ```
/// use qpf_solver::{SolveMode, SolverPipeline};
/// use qpf_sim::SimulatorConfig;
///
/// let result = SolverPipeline::new(5, 23)
///     .with_mode(SolveMode::PeriodEstimate)
///     .with_backend_config(SimulatorConfig::fast().with_seed(7))
///     .solve()
///     .unwrap();
/// println!("{}", result);
/// ```
pub struct SolverPipeline {
    base: u128,
    modulus: u128,
    counting_width: Option<usize>,
    direction: FourierDirection,
    amplify: Option<MarkPredicate>,
    mode: SolveMode,
    target: Option<VerificationTarget>,
    shots: usize,
    backend: Box<dyn Backend>,
}

impl SolverPipeline {
    /// Start a pipeline for the given group parameters
    ///
    /// Defaults: derived counting width, forward Fourier stage, no
    /// amplification, period-estimation mode, 1024 shots, the in-tree
    /// state vector backend.
    pub fn new(base: u128, modulus: u128) -> Self {
        Self {
            base,
            modulus,
            counting_width: None,
            direction: FourierDirection::Forward,
            amplify: None,
            mode: SolveMode::PeriodEstimate,
            target: None,
            shots: 1024,
            backend: Box::<StatevectorBackend>::default(),
        }
    }

    /// Fix the counting width instead of deriving it from the modulus
    pub fn with_counting_width(mut self, width: usize) -> Self {
        self.counting_width = Some(width);
        self
    }

    /// Select the Fourier-stage direction
    pub fn with_fourier_direction(mut self, direction: FourierDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Append the amplification stage with a marking predicate
    pub fn with_amplification(mut self, predicate: MarkPredicate) -> Self {
        self.amplify = Some(predicate);
        self
    }

    /// Select the extraction mode
    pub fn with_mode(mut self, mode: SolveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the verification target (required for range scans)
    pub fn with_target(mut self, target: VerificationTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the number of measurement shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Swap in a different backend implementation
    pub fn with_backend(mut self, backend: Box<dyn Backend>) -> Self {
        self.backend = backend;
        self
    }

    /// Use the state vector backend with the given configuration
    pub fn with_backend_config(mut self, config: qpf_sim::SimulatorConfig) -> Self {
        self.backend = Box::new(StatevectorBackend::new(config));
        self
    }

    /// Run the pipeline once: build, simulate, extract, verify
    ///
    /// Returns `Found` with the recovered key or period estimate, or
    /// `NotFound` when a range scan exhausts its candidates.
    ///
    /// # Errors
    /// Mode-configuration problems (missing target, empty range, width too
    /// wide for exact extraction) and build failures surface before any
    /// simulation work; simulation and extraction failures halt the run.
    pub fn solve(&self) -> Result<SolveResult> {
        self.check_mode()?;

        let spec = self.build_spec()?;
        if matches!(self.mode, SolveMode::PeriodEstimate) {
            postprocess::check_width(spec.counting_width(), self.modulus)?;
        }
        info!(
            base = %self.base,
            modulus = %self.modulus,
            counting_width = spec.counting_width(),
            stages = spec.num_stages(),
            "built circuit template"
        );

        let distribution = self.backend.run(&spec, self.shots)?;
        info!(
            backend = self.backend.name(),
            shots = self.shots,
            distinct_outcomes = distribution.len(),
            "simulated"
        );

        match self.mode {
            SolveMode::PeriodEstimate => {
                let period = postprocess::estimate_period(&distribution, self.modulus)?;
                info!(period = %period, "extracted period estimate");
                Ok(SolveResult::Found(period))
            }
            SolveMode::RangeScan { start, end } => {
                let candidates = postprocess::range_candidates(&distribution, start, end)?;
                info!(candidates = candidates.len(), "extracted in-range candidates");

                // check_mode guarantees the target is present
                let target = self.target.clone().ok_or(SolveError::MissingVerificationTarget)?;
                let verifier = Verifier::new(self.base, self.modulus, target);
                for candidate in candidates {
                    if verifier.verify(candidate) {
                        info!(key = %format_args!("{:#x}", candidate), "candidate accepted");
                        return Ok(SolveResult::Found(candidate));
                    }
                    debug!(candidate = %format_args!("{:#x}", candidate), "candidate rejected");
                }
                info!("candidate sequence exhausted");
                Ok(SolveResult::NotFound)
            }
        }
    }

    fn check_mode(&self) -> Result<()> {
        if let SolveMode::RangeScan { start, end } = self.mode {
            if self.target.is_none() {
                return Err(SolveError::MissingVerificationTarget);
            }
            if start > end {
                return Err(SolveError::EmptyRange { start, end });
            }
        }
        Ok(())
    }

    fn build_spec(&self) -> Result<CircuitSpec> {
        let mut builder = CircuitBuilder::new(self.base, self.modulus)
            .with_fourier_direction(self.direction);
        if let Some(width) = self.counting_width {
            builder = builder.with_counting_width(width);
        }
        if let Some(predicate) = &self.amplify {
            builder = builder.with_amplification(predicate.clone());
        }
        Ok(builder.build()?)
    }
}

impl fmt::Debug for SolverPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverPipeline")
            .field("base", &self.base)
            .field("modulus", &self.modulus)
            .field("counting_width", &self.counting_width)
            .field("mode", &self.mode)
            .field("shots", &self.shots)
            .field("backend", &self.backend.name())
            .finish()
    }
}
