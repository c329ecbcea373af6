//! Candidate verification against a known target
//!
//! A candidate is accepted only on exact equality: either its recomputed
//! public value matches, or the hash160 digest of its fixed-width encoding
//! matches the stored hex string byte for byte.

use qpf_core::arith::pow_mod;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use tracing::trace;

/// The comparison value a candidate must reproduce
///
/// Supplied once at pipeline configuration time and immutable for the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationTarget {
    /// A public value `base^key mod modulus`; the verifier recomputes it
    /// with the run's own group parameters
    PublicValue(u128),
    /// A lowercase hex hash160 digest of the key's fixed-width encoding
    ///
    /// `key_bits` fixes the encoding width: the candidate is zero-padded
    /// big-endian to `ceil(key_bits / 8)` bytes before hashing.
    Hash160 { digest: String, key_bits: usize },
}

impl VerificationTarget {
    /// Hash-digest target for a key of the given declared bit length
    pub fn hash160(digest: impl Into<String>, key_bits: usize) -> Self {
        Self::Hash160 {
            digest: digest.into(),
            key_bits,
        }
    }
}

/// Checks candidates against one [`VerificationTarget`]
///
/// # Example
/// ```
/// use qpf_solver::{VerificationTarget, Verifier};
///
/// // 5^6 mod 23 = 8
/// let verifier = Verifier::new(5, 23, VerificationTarget::PublicValue(8));
/// assert!(verifier.verify(6));
/// assert!(!verifier.verify(7));
/// ```
#[derive(Clone, Debug)]
pub struct Verifier {
    base: u128,
    modulus: u128,
    target: VerificationTarget,
}

impl Verifier {
    /// Create a verifier for the run's group parameters and target
    pub fn new(base: u128, modulus: u128, target: VerificationTarget) -> Self {
        Self {
            base,
            modulus,
            target,
        }
    }

    /// The target this verifier compares against
    pub fn target(&self) -> &VerificationTarget {
        &self.target
    }

    /// Accept or reject one candidate; never partial, never fuzzy
    pub fn verify(&self, candidate: u128) -> bool {
        let accepted = match &self.target {
            VerificationTarget::PublicValue(expected) => {
                pow_mod(self.base, candidate, self.modulus) == *expected
            }
            VerificationTarget::Hash160 { digest, key_bits } => {
                let encoded = encode_candidate(candidate, *key_bits);
                hex::encode(hash160(&encoded)) == *digest
            }
        };
        trace!(candidate = %format_args!("{:#x}", candidate), accepted, "verified candidate");
        accepted
    }
}

/// Zero-padded big-endian encoding, `ceil(key_bits / 8)` bytes wide
///
/// Candidates wider than the declared bit length keep their high bytes;
/// the verifier will simply reject them when the digest differs.
pub fn encode_candidate(candidate: u128, key_bits: usize) -> Vec<u8> {
    let byte_width = key_bits.div_ceil(8).max(1);
    let full = candidate.to_be_bytes();
    if byte_width >= full.len() {
        let mut padded = vec![0u8; byte_width - full.len()];
        padded.extend_from_slice(&full);
        padded
    } else {
        full[full.len() - byte_width..].to_vec()
    }
}

/// RIPEMD-160 of SHA-256, the two-stage digest of the hash targets
pub fn hash160(bytes: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(bytes);
    let ripe = Ripemd160::digest(sha);
    ripe.into()
}
