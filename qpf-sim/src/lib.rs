//! Simulation backends for period-finding circuit templates
//!
//! This crate executes [`qpf_core::CircuitSpec`] templates and returns
//! measurement distributions over the counting register. The [`Backend`]
//! trait is the seam: the in-tree [`StatevectorBackend`] evolves a dense
//! state vector, and any conforming implementation can stand in for it.
//!
//! # Example
//!
//! ```
//! use qpf_core::CircuitBuilder;
//! use qpf_sim::{Backend, SimulatorConfig, StatevectorBackend};
//!
//! let spec = CircuitBuilder::new(5, 23).build().unwrap();
//! let backend = StatevectorBackend::new(SimulatorConfig::fast().with_seed(42));
//! let distribution = backend.run(&spec, 256).unwrap();
//!
//! let (peak, count) = distribution.most_frequent().unwrap();
//! println!("peak outcome {} seen {} times", peak, count);
//! ```

pub mod backend;
pub mod config;
pub mod distribution;
pub mod error;
pub mod statevector;

pub use backend::Backend;
pub use config::SimulatorConfig;
pub use distribution::MeasurementDistribution;
pub use error::{Result, SimulationError};
pub use statevector::{apply_operation, StatevectorBackend};
