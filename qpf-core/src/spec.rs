//! Immutable circuit template description

use crate::arith::{bits, gcd};
use crate::stage::Stage;
use crate::{ConfigError, Result};

/// Immutable description of one period-finding computation
///
/// Built through [`CircuitBuilder`](crate::CircuitBuilder); carries the
/// group parameters and the ordered stage list. The work-register width is
/// derived from the modulus, so a spec fully determines the qubit layout.
///
/// # Example
/// ```
/// use qpf_core::CircuitBuilder;
///
/// let spec = CircuitBuilder::new(5, 23).build().unwrap();
/// assert_eq!(spec.counting_width(), 5);
/// assert_eq!(spec.work_width(), 5);
/// assert_eq!(spec.total_qubits(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct CircuitSpec {
    counting_width: usize,
    base: u128,
    modulus: u128,
    stages: Vec<Stage>,
}

impl CircuitSpec {
    pub(crate) fn new(
        counting_width: usize,
        base: u128,
        modulus: u128,
        stages: Vec<Stage>,
    ) -> Self {
        Self {
            counting_width,
            base,
            modulus,
            stages,
        }
    }

    /// Number of qubits in the counting register
    #[inline]
    pub const fn counting_width(&self) -> usize {
        self.counting_width
    }

    /// The generator whose order is sought
    #[inline]
    pub const fn base(&self) -> u128 {
        self.base
    }

    /// The group modulus
    #[inline]
    pub const fn modulus(&self) -> u128 {
        self.modulus
    }

    /// Number of qubits in the work register, enough to hold `modulus - 1`
    #[inline]
    pub fn work_width(&self) -> usize {
        bits(self.modulus - 1)
    }

    /// Total qubits across both registers
    #[inline]
    pub fn total_qubits(&self) -> usize {
        self.counting_width + self.work_width()
    }

    /// Get an iterator over the stages
    pub fn stages(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Number of stages
    #[inline]
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Validate the spec invariants
    ///
    /// Checks the parameter ranges, coprimality, and that every stage
    /// declares the counting-register width.
    pub fn validate(&self) -> Result<()> {
        if self.counting_width == 0 {
            return Err(ConfigError::InvalidWidth(0));
        }
        if self.modulus <= 1 {
            return Err(ConfigError::InvalidModulus(self.modulus));
        }
        if self.base == 0 || self.base >= self.modulus {
            return Err(ConfigError::base_out_of_range(self.base, self.modulus));
        }
        if gcd(self.base, self.modulus) != 1 {
            return Err(ConfigError::base_not_coprime(self.base, self.modulus));
        }
        for stage in &self.stages {
            if stage.width() != self.counting_width {
                return Err(ConfigError::stage_width_mismatch(
                    stage.name(),
                    stage.width(),
                    self.counting_width,
                ));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for CircuitSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "CircuitSpec(base={}, modulus={}, {} counting + {} work qubits)",
            self.base,
            self.modulus,
            self.counting_width,
            self.work_width()
        )?;
        for (i, stage) in self.stages.iter().enumerate() {
            writeln!(f, "  {}: {}", i, stage)?;
        }
        Ok(())
    }
}
