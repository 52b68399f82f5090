use thiserror::Error;

/// Error type for layout operations.
///
/// Every variant is recoverable. Division by zero is not represented here:
/// [`crate::divmod`] panics instead, since a zero divisor is a programming error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two sequences that must share a length disagree.
    ///
    /// # Common Causes
    /// - A coordinate with a different rank than the shape
    /// - A strides array built for a different shape
    /// - A permutation pattern whose length is not the rank of its operands
    /// - Permuting several operands of different ranks together
    ///
    /// # Recommended Actions
    /// - Check the rank of every sequence passed to the call
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which sequence was compared
        what: &'static str,
        /// The length every operand must have
        expected: usize,
        /// The offending length
        actual: usize,
    },

    /// A permutation pattern names an axis outside `[0, rank)`.
    #[error("Invalid axis {axis} for rank {rank}")]
    InvalidAxis {
        /// The offending axis
        axis: usize,
        /// The rank of the permuted operands
        rank: usize,
    },

    /// A permutation pattern names the same axis more than once.
    #[error("Axis {axis} is repeated in the permutation pattern")]
    DuplicateAxis {
        /// The repeated axis
        axis: usize,
    },

    /// A permutation was requested without any operand to permute.
    #[error("No operands were given to permute")]
    NoOperands,

    /// No coordinate maps to the offset under the given strides.
    ///
    /// Only reachable with strides that are not a permutation of standard
    /// row-major strides, e.g. strides with a gap.
    #[error("Offset {offset} is not reachable with the given strides (remainder {remainder})")]
    UnreachableOffset {
        /// The offset that was decomposed
        offset: usize,
        /// What was left after dividing by the smallest stride
        remainder: usize,
    },
}

/// The category of a [`LayoutError`].
///
/// Lets callers branch on the failure kind without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutErrorKind {
    /// Sequences that must share a length disagree.
    DimensionMismatch,
    /// A permutation pattern is not a bijection on `[0, rank)`.
    AxisValidity,
    /// A permutation had no operands.
    NoOperands,
    /// An offset has no coordinate under the given strides.
    UnreachableOffset,
}

impl LayoutError {
    /// Creates a DimensionMismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Returns the category of the error.
    pub fn kind(&self) -> LayoutErrorKind {
        match self {
            Self::DimensionMismatch { .. } => LayoutErrorKind::DimensionMismatch,
            Self::InvalidAxis { .. } | Self::DuplicateAxis { .. } => LayoutErrorKind::AxisValidity,
            Self::NoOperands => LayoutErrorKind::NoOperands,
            Self::UnreachableOffset { .. } => LayoutErrorKind::UnreachableOffset,
        }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::DimensionMismatch { .. } => {
                "Check that shape, strides, coordinates and pattern all have the same rank"
            }
            Self::InvalidAxis { .. } | Self::DuplicateAxis { .. } => {
                "A pattern must name every axis in [0, rank) exactly once"
            }
            Self::NoOperands => "Pass at least one shape or strides array to permute",
            Self::UnreachableOffset { .. } => {
                "Strides must be a permutation of row-major strides to invert an offset"
            }
        }
    }
}
