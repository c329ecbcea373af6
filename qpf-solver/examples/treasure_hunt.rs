//! Range-constrained key hunt verified against a hash160 digest
//!
//! A 16-qubit counting register is sampled and every measured value inside
//! the window is hashed (SHA-256 then RIPEMD-160) and compared to the
//! target digest. The digest below belongs to 0x5174, which sits on a
//! likely Fourier peak for base 5 mod 23, so a run with enough shots
//! usually recovers it; "not found" is the legitimate outcome otherwise.

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

    let result = SolverPipeline::new(base, modulus)
        .with_counting_width(key_bits)
        .with_mode(SolveMode::RangeScan { start, end })
        .with_target(VerificationTarget::hash160(digest, key_bits))
        .with_shots(8192)
        .with_backend_config(SimulatorConfig::accurate().with_seed(7))
        .solve();

    match result {
        Ok(SolveResult::Found(key)) => println!("recovered key: {:#x} ({})", key, key),
        Ok(SolveResult::NotFound) => {
            println!("no key in [{:#x}, {:#x}] matched the digest", start, end)
        }
        Err(err) => eprintln!("solve failed: {}", err),
    }
}
