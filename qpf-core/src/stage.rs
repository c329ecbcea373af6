//! Stage descriptors for the period-finding circuit template

use std::fmt;
use std::sync::Arc;

/// Direction of the Fourier-transform stage
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FourierDirection {
    Forward,
    Inverse,
}

/// Marking criterion for the amplification stage
///
/// Wraps a shared predicate over counting-register values (a measured
/// bit-string read as a binary numeral). The amplification stage flips the
/// phase of every basis state whose counting value satisfies the predicate.
///
/// # Example
/// ```
/// use qpf_core::MarkPredicate;
///
/// let in_range = MarkPredicate::in_range(0x400, 0x7ff);
/// assert!(in_range.matches(0x666));
/// assert!(!in_range.matches(0x200));
/// ```
#[derive(Clone)]
pub struct MarkPredicate(Arc<dyn Fn(u128) -> bool + Send + Sync>);

impl MarkPredicate {
    /// Wrap an arbitrary predicate
    pub fn new(predicate: impl Fn(u128) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Mark every value inside `[start, end]` (inclusive)
    pub fn in_range(start: u128, end: u128) -> Self {
        Self::new(move |value| value >= start && value <= end)
    }

    /// Evaluate the predicate on a counting-register value
    #[inline]
    pub fn matches(&self, value: u128) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for MarkPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MarkPredicate(..)")
    }
}

/// A named sub-circuit descriptor
///
/// Stage order within a spec is fixed: hadamard first, then oracle, then
/// fourier, then the optional amplification; measurement is implicit and
/// always last.
#[derive(Clone, Debug)]
pub enum Stage {
    /// Equal superposition over the counting register
    Hadamard { width: usize },
    /// Controlled modular-multiplication ladder entangling counting and work
    Oracle {
        base: u128,
        modulus: u128,
        width: usize,
    },
    /// Phase-rotation network over the counting register
    Fourier {
        width: usize,
        direction: FourierDirection,
    },
    /// Phase flip of marked counting values followed by diffusion
    Amplify {
        width: usize,
        predicate: MarkPredicate,
    },
}

impl Stage {
    /// The counting-register width this stage declares
    pub fn width(&self) -> usize {
        match self {
            Stage::Hadamard { width }
            | Stage::Oracle { width, .. }
            | Stage::Fourier { width, .. }
            | Stage::Amplify { width, .. } => *width,
        }
    }

    /// Short stage name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Hadamard { .. } => "hadamard",
            Stage::Oracle { .. } => "oracle",
            Stage::Fourier {
                direction: FourierDirection::Forward,
                ..
            } => "fourier",
            Stage::Fourier {
                direction: FourierDirection::Inverse,
                ..
            } => "inverse-fourier",
            Stage::Amplify { .. } => "amplify",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Oracle { base, modulus, .. } => {
                write!(f, "{}(base={}, modulus={})", self.name(), base, modulus)
            }
            _ => write!(f, "{}(width={})", self.name(), self.width()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_in_range_inclusive() {
        let p = MarkPredicate::in_range(10, 20);
        assert!(p.matches(10));
        assert!(p.matches(20));
        assert!(!p.matches(9));
        assert!(!p.matches(21));
    }

    #[test]
    fn test_predicate_clone_shares_closure() {
        let p = MarkPredicate::new(|v| v % 2 == 0);
        let q = p.clone();
        assert!(p.matches(4));
        assert!(q.matches(4));
        assert!(!q.matches(5));
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Hadamard { width: 3 }.name(), "hadamard");
        let fwd = Stage::Fourier {
            width: 3,
            direction: FourierDirection::Forward,
        };
        let inv = Stage::Fourier {
            width: 3,
            direction: FourierDirection::Inverse,
        };
        assert_eq!(fwd.name(), "fourier");
        assert_eq!(inv.name(), "inverse-fourier");
    }

    #[test]
    fn test_stage_display() {
        let oracle = Stage::Oracle {
            base: 5,
            modulus: 23,
            width: 5,
        };
        let text = format!("{}", oracle);
        assert!(text.contains("oracle"));
        assert!(text.contains("base=5"));
        assert!(text.contains("modulus=23"));
    }
}
