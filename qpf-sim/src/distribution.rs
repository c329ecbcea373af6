//! Measurement distributions over the counting register

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shot counts keyed by counting-register bit-string
///
/// Keys are zero-padded to `width` characters, so lexicographic order on
/// keys agrees with numeric order on the measured values. Work-register
/// bits never appear; backends marginalize them before sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDistribution {
    counts: HashMap<String, usize>,
    width: usize,
    shots: usize,
}

impl MeasurementDistribution {
    /// Create a distribution from pre-aggregated bit-string counts
    pub fn from_counts(counts: HashMap<String, usize>, width: usize, shots: usize) -> Self {
        Self {
            counts,
            width,
            shots,
        }
    }

    /// Width of the counting register in qubits
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of shots behind the counts
    #[inline]
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// The raw bit-string counts
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Number of distinct outcomes observed
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcome was observed at all
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Observed probability of one bit-string (count / shots)
    pub fn probability(&self, bitstring: &str) -> f64 {
        self.counts.get(bitstring).copied().unwrap_or(0) as f64 / self.shots as f64
    }

    /// The most frequent outcome; ties resolve to the smallest value
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(key, &count)| (key.as_str(), count))
    }

    /// All outcomes, highest count first, ties in ascending value order
    pub fn sorted_counts(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(key, &count)| (key.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}
