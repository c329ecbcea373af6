//! Counting register measurement with efficient sampling
//!
//! Measurement reads only the counting register (the low qubits). The work
//! register is marginalized: the probabilities of all basis states sharing
//! a counting value are folded together before sampling. Multi-shot
//! sampling uses the alias method for O(1) draws after O(2^n) setup.

use crate::error::{Result, StateError};
use crate::state_vector::StateVector;
use std::collections::HashMap;

/// Sampling result containing counts from multiple measurement shots
#[derive(Debug, Clone)]
pub struct SamplingResult {
    /// Map from counting register value to count
    pub counts: HashMap<u64, usize>,

    /// Total number of shots
    pub shots: usize,
}

impl SamplingResult {
    /// Create a new sampling result
    pub fn new(shots: usize) -> Self {
        Self {
            counts: HashMap::new(),
            shots,
        }
    }

    /// Add a measurement outcome
    pub fn add_outcome(&mut self, outcome: u64) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Get the count for a specific outcome
    pub fn get_count(&self, outcome: u64) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Get the probability of an outcome (count / shots)
    pub fn get_probability(&self, outcome: u64) -> f64 {
        self.get_count(outcome) as f64 / self.shots as f64
    }

    /// Get all outcomes sorted by count (descending), ties by value (ascending)
    pub fn sorted_outcomes(&self) -> Vec<(u64, usize)> {
        let mut outcomes: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        outcomes
    }

    /// Convert counts to zero-padded bitstring format
    pub fn to_bitstring_counts(&self, width: usize) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (format!("{:0width$b}", outcome, width = width), count))
            .collect()
    }
}

/// Marginal probability distribution of the counting register
///
/// Returns `2^counting_width` probabilities; entry `v` sums the squared
/// magnitudes of every basis state whose counting value is `v`.
///
/// # Errors
/// Returns [`StateError::RegisterTooWide`] if the counting register does
/// not fit the state.
pub fn counting_probabilities(state: &StateVector, counting_width: usize) -> Result<Vec<f64>> {
    if counting_width > state.num_qubits() {
        return Err(StateError::RegisterTooWide {
            counting_width,
            num_qubits: state.num_qubits(),
        });
    }

    let size = 1usize << counting_width;
    let mask = size - 1;
    let mut probabilities = vec![0.0; size];
    for (i, amp) in state.amplitudes().iter().enumerate() {
        probabilities[i & mask] += amp.norm_sqr();
    }
    Ok(probabilities)
}

/// Sample the counting register for the given number of shots
///
/// The state is not modified; each shot is an independent draw from the
/// marginal counting distribution.
///
/// # Arguments
/// * `state` - The quantum state to measure
/// * `counting_width` - Number of low qubits forming the counting register
/// * `shots` - Number of measurement shots
/// * `rng` - Random number generator function returning values in [0, 1)
pub fn sample_counting_register(
    state: &StateVector,
    counting_width: usize,
    shots: usize,
    rng: &mut dyn FnMut() -> f64,
) -> Result<SamplingResult> {
    if shots == 0 {
        return Ok(SamplingResult::new(0));
    }

    let probabilities = counting_probabilities(state, counting_width)?;
    let alias_table = AliasTable::new(&probabilities)?;

    let mut result = SamplingResult::new(shots);
    for _ in 0..shots {
        let outcome = alias_table.sample(rng);
        result.add_outcome(outcome as u64);
    }

    Ok(result)
}

/// Alias table for O(1) sampling from a discrete probability distribution
///
/// Uses the alias method (Walker's algorithm) to sample from a discrete
/// distribution in O(1) time after O(n) setup.
struct AliasTable {
    /// Probability threshold for each index
    prob: Vec<f64>,

    /// Alias index for each index
    alias: Vec<usize>,
}

impl AliasTable {
    fn new(probabilities: &[f64]) -> Result<Self> {
        let n = probabilities.len();
        if n == 0 {
            return Err(StateError::EmptyDistribution);
        }

        let mut prob = vec![0.0; n];
        let mut alias = vec![0; n];

        // Scale probabilities
        let scaled: Vec<f64> = probabilities.iter().map(|&p| p * n as f64).collect();

        // Separate into small and large
        let mut small = Vec::new();
        let mut large = Vec::new();

        for (i, &p) in scaled.iter().enumerate() {
            if p < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        let mut remaining = scaled;

        while !small.is_empty() && !large.is_empty() {
            let s = small.pop().unwrap();
            let l = large.pop().unwrap();

            prob[s] = remaining[s];
            alias[s] = l;

            remaining[l] = (remaining[l] + remaining[s]) - 1.0;

            if remaining[l] < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        // Handle remaining entries (floating-point rounding)
        while let Some(l) = large.pop() {
            prob[l] = 1.0;
        }
        while let Some(s) = small.pop() {
            prob[s] = 1.0;
        }

        Ok(Self { prob, alias })
    }

    /// Sample an index from the distribution in O(1) time
    fn sample(&self, rng: &mut dyn FnMut() -> f64) -> usize {
        let n = self.prob.len();
        let i = (rng() * n as f64) as usize;
        let i = i.min(n - 1); // Handle edge case where rng() == 1.0

        if rng() < self.prob[i] {
            i
        } else {
            self.alias[i]
        }
    }
}
