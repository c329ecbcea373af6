//! Gate library: primitive operations and stage lowering
//!
//! Stages are descriptors; the functions here lower them to the closed set
//! of primitive operations the simulator executes. All constructors are
//! pure functions from integer parameters to operation lists.

use smallvec::SmallVec;
use std::f64::consts::PI;
use std::fmt;

use crate::arith::mul_mod;
use crate::spec::CircuitSpec;
use crate::stage::{FourierDirection, MarkPredicate, Stage};
use crate::QubitId;

/// A primitive operation applied to the state vector
#[derive(Clone, Debug)]
pub enum GateOp {
    /// Hadamard on one qubit
    Hadamard { target: QubitId },
    /// Bit flip on one qubit
    PauliX { target: QubitId },
    /// Phase `e^{i*angle}` on states where both qubits are set
    ControlledPhase {
        control: QubitId,
        target: QubitId,
        angle: f64,
    },
    /// Exchange two qubits
    Swap { a: QubitId, b: QubitId },
    /// Work-register permutation `w -> w * factor mod modulus` where the
    /// control qubit is set; identity on work values at or above the modulus
    ControlledModMul {
        control: QubitId,
        factor: u128,
        modulus: u128,
    },
    /// Negate the amplitude of states whose counting value is marked
    PhaseFlip { predicate: MarkPredicate },
    /// Reflect each work branch about its mean over the counting register
    Diffuse,
}

impl GateOp {
    /// The name of the operation (e.g., "H", "CP")
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Hadamard { .. } => "H",
            GateOp::PauliX { .. } => "X",
            GateOp::ControlledPhase { .. } => "CP",
            GateOp::Swap { .. } => "SWAP",
            GateOp::ControlledModMul { .. } => "CMODMUL",
            GateOp::PhaseFlip { .. } => "FLIP",
            GateOp::Diffuse => "DIFFUSE",
        }
    }

    /// The explicitly addressed qubits (register-wide operations address none)
    pub fn qubits(&self) -> SmallVec<[QubitId; 2]> {
        match self {
            GateOp::Hadamard { target } | GateOp::PauliX { target } => {
                SmallVec::from_slice(&[*target])
            }
            GateOp::ControlledPhase {
                control, target, ..
            } => SmallVec::from_slice(&[*control, *target]),
            GateOp::Swap { a, b } => SmallVec::from_slice(&[*a, *b]),
            GateOp::ControlledModMul { control, .. } => SmallVec::from_slice(&[*control]),
            GateOp::PhaseFlip { .. } | GateOp::Diffuse => SmallVec::new(),
        }
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, q) in self.qubits().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

/// One Hadamard per counting position: the equal-superposition stage.
pub fn hadamard_stage(width: usize) -> Vec<GateOp> {
    (0..width)
        .map(|k| GateOp::Hadamard {
            target: QubitId::new(k),
        })
        .collect()
}

/// A single controlled modular multiplication by `base^exponent_step`.
///
/// The factor is reduced up front, so a description never repeats an
/// operation `exponent_step` times.
pub fn modular_multiply_op(
    base: u128,
    exponent_step: u128,
    modulus: u128,
    control: QubitId,
) -> GateOp {
    GateOp::ControlledModMul {
        control,
        factor: crate::arith::pow_mod(base, exponent_step, modulus),
        modulus,
    }
}

/// The oracle stage: work-register preparation plus the multiplication
/// ladder.
///
/// The work register is prepared to `|1>` by flipping its lowest qubit;
/// counting qubit `j` then controls multiplication by `base^(2^j)`, with
/// each ladder factor obtained by modular squaring of the previous one.
pub fn oracle_stage(base: u128, modulus: u128, width: usize) -> Vec<GateOp> {
    let mut ops = Vec::with_capacity(width + 1);
    ops.push(GateOp::PauliX {
        target: QubitId::new(width),
    });
    let mut factor = base % modulus;
    for j in 0..width {
        ops.push(GateOp::ControlledModMul {
            control: QubitId::new(j),
            factor,
            modulus,
        });
        factor = mul_mod(factor, factor, modulus);
    }
    ops
}

/// The Fourier stage over the counting register.
///
/// Forward: for each position `j` in ascending order, a Hadamard followed
/// by controlled phases `+pi/2^(j-k)` from every lower position `k`.
/// Inverse: the conjugate network in mirror order, then a full positional
/// reversal. The inverse network without the swaps is the exact adjoint of
/// the forward network.
pub fn fourier_stage(width: usize, direction: FourierDirection) -> Vec<GateOp> {
    let mut ops = Vec::new();
    match direction {
        FourierDirection::Forward => {
            for j in 0..width {
                ops.push(GateOp::Hadamard {
                    target: QubitId::new(j),
                });
                for k in 0..j {
                    ops.push(GateOp::ControlledPhase {
                        control: QubitId::new(k),
                        target: QubitId::new(j),
                        angle: PI / 2f64.powi((j - k) as i32),
                    });
                }
            }
        }
        FourierDirection::Inverse => {
            for j in (0..width).rev() {
                for k in (0..j).rev() {
                    ops.push(GateOp::ControlledPhase {
                        control: QubitId::new(k),
                        target: QubitId::new(j),
                        angle: -PI / 2f64.powi((j - k) as i32),
                    });
                }
                ops.push(GateOp::Hadamard {
                    target: QubitId::new(j),
                });
            }
            for i in 0..width / 2 {
                ops.push(GateOp::Swap {
                    a: QubitId::new(i),
                    b: QubitId::new(width - 1 - i),
                });
            }
        }
    }
    ops
}

/// The amplification stage: one phase flip of marked counting values
/// followed by one diffusion.
pub fn amplification_stage(predicate: MarkPredicate) -> Vec<GateOp> {
    vec![GateOp::PhaseFlip { predicate }, GateOp::Diffuse]
}

/// Lower a single stage to its primitive operations.
pub fn lower_stage(stage: &Stage) -> Vec<GateOp> {
    match stage {
        Stage::Hadamard { width } => hadamard_stage(*width),
        Stage::Oracle {
            base,
            modulus,
            width,
        } => oracle_stage(*base, *modulus, *width),
        Stage::Fourier { width, direction } => fourier_stage(*width, *direction),
        Stage::Amplify { predicate, .. } => amplification_stage(predicate.clone()),
    }
}

/// Lower a spec's stage list to the primitive operation sequence.
pub fn lower(spec: &CircuitSpec) -> Vec<GateOp> {
    spec.stages().flat_map(|stage| lower_stage(stage)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CircuitBuilder;

    #[test]
    fn test_hadamard_stage_targets() {
        let ops = hadamard_stage(3);
        assert_eq!(ops.len(), 3);
        for (k, op) in ops.iter().enumerate() {
            match op {
                GateOp::Hadamard { target } => assert_eq!(target.index(), k),
                other => panic!("Expected Hadamard, got {}", other),
            }
        }
    }

    #[test]
    fn test_oracle_ladder_factors() {
        // base 5 mod 23: successive squarings 5, 2, 4, 16, 3
        let ops = oracle_stage(5, 23, 5);
        assert_eq!(ops.len(), 6);
        assert!(matches!(&ops[0], GateOp::PauliX { target } if target.index() == 5));

        let expected = [5u128, 2, 4, 16, 3];
        for (j, op) in ops[1..].iter().enumerate() {
            match op {
                GateOp::ControlledModMul {
                    control, factor, ..
                } => {
                    assert_eq!(control.index(), j);
                    assert_eq!(*factor, expected[j]);
                }
                other => panic!("Expected CMODMUL, got {}", other),
            }
        }
    }

    #[test]
    fn test_ladder_matches_closed_form() {
        let ops = oracle_stage(5, 23, 5);
        for j in 0..5 {
            let closed = modular_multiply_op(5, 1u128 << j, 23, QubitId::new(j));
            match (&ops[j + 1], &closed) {
                (
                    GateOp::ControlledModMul { factor: a, .. },
                    GateOp::ControlledModMul { factor: b, .. },
                ) => assert_eq!(a, b),
                _ => panic!("Expected CMODMUL pair"),
            }
        }
    }

    #[test]
    fn test_forward_fourier_shape() {
        let ops = fourier_stage(4, FourierDirection::Forward);
        // 4 Hadamards + 6 controlled phases, no swaps
        assert_eq!(ops.len(), 10);
        assert!(!ops.iter().any(|op| matches!(op, GateOp::Swap { .. })));
        for op in &ops {
            if let GateOp::ControlledPhase { angle, .. } = op {
                assert!(*angle > 0.0);
            }
        }
    }

    #[test]
    fn test_inverse_fourier_shape() {
        let ops = fourier_stage(4, FourierDirection::Inverse);
        // mirror network plus two reversal swaps
        assert_eq!(ops.len(), 12);
        let swaps: Vec<_> = ops
            .iter()
            .filter(|op| matches!(op, GateOp::Swap { .. }))
            .collect();
        assert_eq!(swaps.len(), 2);
        for op in &ops {
            if let GateOp::ControlledPhase { angle, .. } = op {
                assert!(*angle < 0.0);
            }
        }
        // the swaps come last
        assert!(matches!(ops[10], GateOp::Swap { .. }));
        assert!(matches!(ops[11], GateOp::Swap { .. }));
    }

    #[test]
    fn test_inverse_mirrors_forward_angles() {
        let fwd = fourier_stage(3, FourierDirection::Forward);
        let inv = fourier_stage(3, FourierDirection::Inverse);
        let fwd_phases: Vec<f64> = fwd
            .iter()
            .filter_map(|op| match op {
                GateOp::ControlledPhase { angle, .. } => Some(*angle),
                _ => None,
            })
            .collect();
        let mut inv_phases: Vec<f64> = inv
            .iter()
            .filter_map(|op| match op {
                GateOp::ControlledPhase { angle, .. } => Some(*angle),
                _ => None,
            })
            .collect();
        inv_phases.reverse();
        assert_eq!(fwd_phases.len(), inv_phases.len());
        for (a, b) in fwd_phases.iter().zip(inv_phases.iter()) {
            assert_eq!(*a, -*b);
        }
    }

    #[test]
    fn test_lower_full_spec() {
        let spec = CircuitBuilder::new(5, 23).build().unwrap();
        let ops = lower(&spec);
        // 5 H + (1 X + 5 CMODMUL) + (5 H + 10 CP)
        assert_eq!(ops.len(), 26);
        assert!(matches!(ops[0], GateOp::Hadamard { .. }));
        assert!(matches!(ops[5], GateOp::PauliX { .. }));
    }

    #[test]
    fn test_lower_amplified_spec() {
        let spec = CircuitBuilder::new(5, 23)
            .with_amplification(MarkPredicate::in_range(0, 1))
            .build()
            .unwrap();
        let ops = lower(&spec);
        assert!(matches!(ops[ops.len() - 2], GateOp::PhaseFlip { .. }));
        assert!(matches!(ops[ops.len() - 1], GateOp::Diffuse));
    }

    #[test]
    fn test_display() {
        let op = GateOp::ControlledPhase {
            control: QubitId::new(0),
            target: QubitId::new(3),
            angle: PI / 8.0,
        };
        assert_eq!(format!("{}", op), "CP(q0, q3)");
        assert_eq!(format!("{}", GateOp::Diffuse), "DIFFUSE()");
    }
}
