//! Circuit templates for period-finding key recovery
//!
//! This crate provides the classical description of the quantum circuit:
//! - [`CircuitBuilder`]: parameterized template construction
//! - [`CircuitSpec`]: immutable stage list plus group parameters
//! - [`gates`]: lowering of stages to primitive simulator operations
//!
//! # Example
//! ```
//! use qpf_core::{gates, CircuitBuilder};
//!
//! let spec = CircuitBuilder::new(5, 23).build().unwrap();
//! let ops = gates::lower(&spec);
//! assert!(!ops.is_empty());
//! ```

pub mod arith;
pub mod builder;
pub mod error;
pub mod gates;
pub mod qubit;
pub mod spec;
pub mod stage;

// Re-exports for convenience
pub use builder::CircuitBuilder;
pub use error::ConfigError;
pub use gates::GateOp;
pub use qubit::QubitId;
pub use spec::CircuitSpec;
pub use stage::{FourierDirection, MarkPredicate, Stage};

/// Type alias for results in template construction
pub type Result<T> = std::result::Result<T, ConfigError>;
