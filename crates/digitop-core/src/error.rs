//! Error types for domain construction.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Errors arising from [`HyperRectDomain`](crate::HyperRectDomain) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// Lower and upper corners have different dimensions.
    DimensionMismatch {
        /// Dimension of the lower corner.
        lower: usize,
        /// Dimension of the upper corner.
        upper: usize,
    },
    /// The corners are zero-dimensional.
    EmptyDimension,
    /// `lower[axis] > upper[axis]` on some axis.
    InvertedBounds {
        /// First offending axis.
        axis: usize,
        /// The lower corner.
        lower: Point,
        /// The upper corner.
        upper: Point,
    },
    /// The number of points does not fit in `usize`.
    TooLarge {
        /// The lower corner.
        lower: Point,
        /// The upper corner.
        upper: Point,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { lower, upper } => {
                write!(f, "domain corners differ in dimension: {lower} vs {upper}")
            }
            Self::EmptyDimension => write!(f, "domain must have at least one dimension"),
            Self::InvertedBounds { axis, lower, upper } => {
                write!(
                    f,
                    "domain bounds inverted on axis {axis}: {lower} > {upper}"
                )
            }
            Self::TooLarge { lower, upper } => {
                write!(f, "domain {lower} .. {upper} has too many points to index")
            }
        }
    }
}

impl Error for DomainError {}
