//! Classical post-processing and orchestration for period-finding runs
//!
//! This crate turns sampled measurement distributions into answers:
//! - [`postprocess`]: period estimation by continued fractions, and
//!   range-filtered candidate extraction
//! - [`Verifier`]: exact candidate verification against a public value or
//!   a hash160 digest
//! - [`SolverPipeline`]: the end-to-end build, simulate, extract, verify
//!   sequence with a [`SolveResult`] terminal outcome
//!
//! # Example
//! ```
//! use qpf_sim::SimulatorConfig;
//! use qpf_solver::{SolveMode, SolveResult, SolverPipeline};
//!
//! let result = SolverPipeline::new(5, 23)
//!     .with_mode(SolveMode::PeriodEstimate)
//!     .with_backend_config(SimulatorConfig::fast().with_seed(42))
//!     .solve()
//!     .unwrap();
//! assert!(matches!(result, SolveResult::Found(r) if r <= 23));
//! ```

pub mod cf;
pub mod error;
pub mod pipeline;
pub mod postprocess;
pub mod verify;

pub use error::{ExtractionError, Result, SolveError};
pub use pipeline::{SolveMode, SolveResult, SolverPipeline};
pub use verify::{hash160, VerificationTarget, Verifier};
