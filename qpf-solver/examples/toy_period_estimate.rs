//! Toy period estimation: recover the order of 5 modulo 23
//!
//! The counting width is derived from the modulus (5 qubits), the circuit
//! is simulated for 1024 shots, and the dominant peak is reduced by
//! continued fractions. The true order of 5 mod 23 is 22; the estimate is
//! a divisor-structured guess, not a verified key.
//!
//! Run with `RUST_LOG=debug` to watch the pipeline transitions.

use qpf_sim::SimulatorConfig;
use qpf_solver::{SolveMode, SolveResult, SolverPipeline};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let base = 5u128;
    let modulus = 23u128;

    let result = SolverPipeline::new(base, modulus)
        .with_mode(SolveMode::PeriodEstimate)
        .with_shots(1024)
        .with_backend_config(SimulatorConfig::default().with_seed(2024))
        .solve();

    match result {
        Ok(SolveResult::Found(period)) => {
            println!("period estimate for order of {} mod {}: {}", base, modulus, period);
        }
        Ok(SolveResult::NotFound) => println!("not found"),
        Err(err) => eprintln!("solve failed: {}", err),
    }
}
