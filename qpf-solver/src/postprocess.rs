//! Classical extraction from measurement distributions
//!
//! Two independent readings of the same sampled counts: a period estimate
//! from the dominant peak (continued-fraction reduction of the measured
//! fraction), or a range-filtered candidate list for verification.

use crate::cf::limit_denominator;
use crate::error::ExtractionError;
use qpf_core::arith::bits;
use qpf_sim::MeasurementDistribution;

/// Parse a distribution key as a binary numeral
pub fn parse_outcome(key: &str) -> Result<u128, ExtractionError> {
    u128::from_str_radix(key, 2).map_err(|_| ExtractionError::MalformedKey {
        key: key.to_string(),
    })
}

/// Estimate the oracle period from the dominant measured outcome
///
/// Takes the most frequent bit-string (smallest value on ties), reads it as
/// `measured_value`, and reduces `measured_value / 2^width` to the closest
/// fraction with denominator at most `modulus`. The denominator is the
/// period estimate.
///
/// # Errors
/// Fails on an empty distribution, on a key that is not a binary numeral,
/// and on widths too large for exact `u128` convergent arithmetic.
pub fn estimate_period(
    distribution: &MeasurementDistribution,
    modulus: u128,
) -> Result<u128, ExtractionError> {
    let width = distribution.width();
    check_width(width, modulus)?;

    let (peak, _) = distribution
        .most_frequent()
        .ok_or(ExtractionError::EmptyDistribution)?;
    let measured = parse_outcome(peak)?;

    let (_, period) = limit_denominator(measured, 1u128 << width, modulus);
    Ok(period)
}

/// Exact-arithmetic guard for the convergent walk
///
/// `limit_denominator` compares `2 * d * (q0 + k*q1)` against the input
/// denominator, so `2^(width+1) * modulus` must fit a `u128`.
pub fn check_width(width: usize, modulus: u128) -> Result<(), ExtractionError> {
    if width + 1 + bits(modulus) > 127 {
        return Err(ExtractionError::WidthOverflow { width, modulus });
    }
    Ok(())
}

/// Observed outcomes inside `[start, end]`, ascending
///
/// Every observed bit-string is parsed and filtered against the inclusive
/// range; survivors are sorted numerically so verification order never
/// depends on the distribution's map iteration order. The caller drains the
/// returned sequence front to back and stops at the first accepted
/// candidate.
pub fn range_candidates(
    distribution: &MeasurementDistribution,
    start: u128,
    end: u128,
) -> Result<Vec<u128>, ExtractionError> {
    let mut candidates = Vec::new();
    for key in distribution.counts().keys() {
        let value = parse_outcome(key)?;
        if value >= start && value <= end {
            candidates.push(value);
        }
    }
    candidates.sort_unstable();
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn distribution(entries: &[(&str, usize)], width: usize) -> MeasurementDistribution {
        let counts: HashMap<String, usize> = entries
            .iter()
            .map(|&(key, count)| (key.to_string(), count))
            .collect();
        let shots = entries.iter().map(|&(_, count)| count).sum();
        MeasurementDistribution::from_counts(counts, width, shots)
    }

    #[test]
    fn test_parse_outcome() {
        assert_eq!(parse_outcome("01000"), Ok(8));
        assert_eq!(parse_outcome("00000"), Ok(0));
        assert!(matches!(
            parse_outcome("01x01"),
            Err(ExtractionError::MalformedKey { .. })
        ));
    }

    #[test]
    fn test_estimate_period_from_peak() {
        // peak 8 out of 2^5: 8/32 = 1/4, period estimate 4
        let dist = distribution(&[("01000", 700), ("00000", 200), ("11000", 124)], 5);
        assert_eq!(estimate_period(&dist, 23), Ok(4));
    }

    #[test]
    fn test_estimate_period_semiconvergent() {
        // 13/32 with bound 23 reduces to 9/22
        let dist = distribution(&[("01101", 900), ("00000", 124)], 5);
        assert_eq!(estimate_period(&dist, 23), Ok(22));
    }

    #[test]
    fn test_estimate_period_empty_distribution() {
        let dist = distribution(&[], 5);
        assert_eq!(
            estimate_period(&dist, 23),
            Err(ExtractionError::EmptyDistribution)
        );
    }

    #[test]
    fn test_estimate_period_width_overflow() {
        let dist = distribution(&[("0", 1)], 125);
        assert!(matches!(
            estimate_period(&dist, 23),
            Err(ExtractionError::WidthOverflow { width: 125, .. })
        ));
    }

    #[test]
    fn test_check_width_boundary() {
        // bits(23) = 5, so 121 + 1 + 5 = 127 passes and 122 fails
        assert!(check_width(121, 23).is_ok());
        assert!(check_width(122, 23).is_err());
    }

    #[test]
    fn test_range_candidates_filters_and_sorts() {
        let dist = distribution(&[("1100", 5), ("0011", 90), ("0111", 2), ("1111", 1)], 4);
        // observed values 12, 3, 7, 15; range keeps 3 and 7
        assert_eq!(range_candidates(&dist, 2, 10), Ok(vec![3, 7]));
    }

    #[test]
    fn test_range_candidates_inclusive_bounds() {
        let dist = distribution(&[("0010", 1), ("1010", 1), ("0001", 1), ("1011", 1)], 4);
        assert_eq!(range_candidates(&dist, 2, 10), Ok(vec![2, 10]));
    }

    #[test]
    fn test_range_candidates_none_in_range() {
        let dist = distribution(&[("0001", 10), ("1111", 10)], 4);
        assert_eq!(range_candidates(&dist, 4, 8), Ok(vec![]));
    }

    #[test]
    fn test_range_candidates_ignore_counts_for_order() {
        // the low-count outcome still sorts first by value
        let dist = distribution(&[("1000", 900), ("0100", 1)], 4);
        assert_eq!(range_candidates(&dist, 0, 15), Ok(vec![4, 8]));
    }
}
