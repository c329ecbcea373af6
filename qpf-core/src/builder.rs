//! Circuit template builder

use crate::arith::bits;
use crate::spec::CircuitSpec;
use crate::stage::{FourierDirection, MarkPredicate, Stage};
use crate::Result;

/// Builder for a [`CircuitSpec`]
///
/// `new(base, modulus)` derives the counting width as the number of bits
/// needed to hold `modulus - 1`; `with_counting_width` overrides it for
/// fixed-width searches. The stage list is always emitted in the fixed
/// order hadamard, oracle, fourier, optional amplification.
///
/// # Example
/// ```
/// use qpf_core::{CircuitBuilder, FourierDirection};
///
/// let spec = CircuitBuilder::new(2, 61)
///     .with_counting_width(12)
///     .with_fourier_direction(FourierDirection::Forward)
///     .build()
///     .unwrap();
/// assert_eq!(spec.counting_width(), 12);
/// assert_eq!(spec.num_stages(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct CircuitBuilder {
    base: u128,
    modulus: u128,
    counting_width: Option<usize>,
    direction: FourierDirection,
    amplify: Option<MarkPredicate>,
}

impl CircuitBuilder {
    /// Start a builder for the given group parameters
    pub fn new(base: u128, modulus: u128) -> Self {
        Self {
            base,
            modulus,
            counting_width: None,
            direction: FourierDirection::Forward,
            amplify: None,
        }
    }

    /// Override the derived counting width (fixed-bit-length searches)
    pub fn with_counting_width(mut self, width: usize) -> Self {
        self.counting_width = Some(width);
        self
    }

    /// Select the Fourier-stage direction
    pub fn with_fourier_direction(mut self, direction: FourierDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Append the optional amplification stage with a marking predicate
    pub fn with_amplification(mut self, predicate: MarkPredicate) -> Self {
        self.amplify = Some(predicate);
        self
    }

    /// Assemble and validate the spec
    ///
    /// # Errors
    /// Fails fast on a zero width, a modulus below 2, a base outside
    /// `[1, modulus)`, or a base sharing a factor with the modulus.
    pub fn build(self) -> Result<CircuitSpec> {
        let width = match self.counting_width {
            Some(w) => w,
            // smallest width whose register can index every group element
            None => bits(self.modulus.saturating_sub(1)).max(1),
        };

        let mut stages = vec![
            Stage::Hadamard { width },
            Stage::Oracle {
                base: self.base,
                modulus: self.modulus,
                width,
            },
            Stage::Fourier {
                width,
                direction: self.direction,
            },
        ];
        if let Some(predicate) = self.amplify {
            stages.push(Stage::Amplify { width, predicate });
        }

        let spec = CircuitSpec::new(width, self.base, self.modulus, stages);
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn test_derived_width() {
        let spec = CircuitBuilder::new(5, 23).build().unwrap();
        assert_eq!(spec.counting_width(), 5);

        let spec = CircuitBuilder::new(3, 16).build().unwrap();
        assert_eq!(spec.counting_width(), 4);

        // modulus 2 still gets one counting qubit
        let spec = CircuitBuilder::new(1, 2).build().unwrap();
        assert_eq!(spec.counting_width(), 1);
    }

    #[test]
    fn test_explicit_width() {
        let spec = CircuitBuilder::new(5, 23)
            .with_counting_width(67)
            .build()
            .unwrap();
        assert_eq!(spec.counting_width(), 67);
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = CircuitBuilder::new(5, 23).with_counting_width(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidWidth(0))));
    }

    #[test]
    fn test_invalid_modulus_rejected() {
        let result = CircuitBuilder::new(0, 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidModulus(1))));
    }

    #[test]
    fn test_base_out_of_range_rejected() {
        let result = CircuitBuilder::new(23, 23).build();
        assert!(matches!(result, Err(ConfigError::BaseOutOfRange { .. })));

        let result = CircuitBuilder::new(0, 23).build();
        assert!(matches!(result, Err(ConfigError::BaseOutOfRange { .. })));
    }

    #[test]
    fn test_non_coprime_base_rejected() {
        let result = CircuitBuilder::new(6, 21).build();
        assert!(matches!(
            result,
            Err(ConfigError::BaseNotCoprime {
                base: 6,
                modulus: 21
            })
        ));
    }

    #[test]
    fn test_amplification_appends_stage() {
        let plain = CircuitBuilder::new(5, 23).build().unwrap();
        assert_eq!(plain.num_stages(), 3);

        let amplified = CircuitBuilder::new(5, 23)
            .with_amplification(crate::MarkPredicate::in_range(0, 3))
            .build()
            .unwrap();
        assert_eq!(amplified.num_stages(), 4);
        let last = amplified.stages().last().unwrap();
        assert_eq!(last.name(), "amplify");
    }
}
