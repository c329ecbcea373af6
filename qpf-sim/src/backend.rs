//! Backend abstraction for circuit template execution

use crate::distribution::MeasurementDistribution;
use crate::error::Result;
use qpf_core::CircuitSpec;

/// A simulator or device adapter that can execute circuit templates
///
/// Implementations take a validated [`CircuitSpec`], run it for the given
/// number of shots, and return the sampled counting-register distribution.
/// A backend holds no per-run state; `run` may be called repeatedly and
/// from multiple threads.
pub trait Backend: Send + Sync {
    /// Short stable identifier, used in logs
    fn name(&self) -> &str;

    /// Execute the template and sample the counting register
    ///
    /// # Errors
    /// Fails on zero shots, on templates wider than the backend accepts,
    /// and on malformed stage wiring.
    fn run(&self, spec: &CircuitSpec, shots: usize) -> Result<MeasurementDistribution>;

    /// Human-readable description of the backend
    fn description(&self) -> String {
        self.name().to_string()
    }
}
