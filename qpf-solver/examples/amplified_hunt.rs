//! Range hunt with an amplification stage biased toward the window
//!
//! The marking predicate flags every counting value inside the scanned
//! range; one round of phase flip plus diffusion reshapes the sampled
//! distribution toward those values before the scan runs. Compare the
//! in-range candidate counts with and without the stage.

use qpf_core::MarkPredicate;
use qpf_sim::SimulatorConfig;
use qpf_solver::{SolveMode, SolveResult, SolverPipeline, VerificationTarget};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let base = 5u128;
    let modulus = 23u128;
    let key_bits = 16;
    let start = 0x4000u128;
    let end = 0x7fffu128;
    // hash160 of the two-byte encoding of the sought key
    let digest = "ca9de79e16cd2b2269495337c29f1e8a91517720";

    for amplified in [false, true] {
        let mut pipeline = SolverPipeline::new(base, modulus)
            .with_counting_width(key_bits)
            .with_mode(SolveMode::RangeScan { start, end })
            .with_target(VerificationTarget::hash160(digest, key_bits))
            .with_shots(8192)
            .with_backend_config(SimulatorConfig::accurate().with_seed(7));
        if amplified {
            pipeline = pipeline.with_amplification(MarkPredicate::in_range(start, end));
        }

        let label = if amplified { "amplified" } else { "plain" };
        match pipeline.solve() {
            Ok(SolveResult::Found(key)) => println!("{}: recovered key {:#x}", label, key),
            Ok(SolveResult::NotFound) => println!("{}: no in-range match", label),
            Err(err) => eprintln!("{}: solve failed: {}", label, err),
        }
    }
}
