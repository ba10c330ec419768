//! Error types for ephemeris arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the exact-division steps of the ephemeris.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MathError {
    /// A long division that must come out even left a remainder.
    NonZeroResidue { stage: &'static str, residue: i64 },
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonZeroResidue { stage, residue } => {
                write!(f, "non-zero residue {residue} in {stage}")
            }
        }
    }
}

impl Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_display() {
        let e = MathError::NonZeroResidue {
            stage: "sun equation",
            residue: 12,
        };
        assert_eq!(e.to_string(), "non-zero residue 12 in sun equation");
    }
}
