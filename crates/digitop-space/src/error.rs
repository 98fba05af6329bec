//! Error types for adjacency and topology construction.

use std::error::Error;
use std::fmt;

/// Errors arising from adjacency construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdjacencyError {
    /// Attempted to build a relation over zero-dimensional points.
    ZeroDimension,
    /// The L1 bound of a metric adjacency is outside `1..=dim`.
    InvalidMaxNorm1 {
        /// Dimension of the lattice.
        dim: usize,
        /// The rejected bound.
        max_norm1: u32,
    },
    /// A metric adjacency was requested in more dimensions than its
    /// offset table supports.
    DimensionTooLarge {
        /// The requested dimension.
        dim: usize,
        /// Largest supported dimension.
        max: usize,
    },
    /// A relation and the domain or points it is combined with differ in
    /// dimension.
    DimensionMismatch {
        /// Dimension the relation expects.
        expected: usize,
        /// Dimension that was supplied.
        found: usize,
    },
}

impl fmt::Display for AdjacencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "adjacency must have at least one dimension"),
            Self::InvalidMaxNorm1 { dim, max_norm1 } => {
                write!(
                    f,
                    "metric adjacency in dimension {dim} needs 1 <= max_norm1 <= {dim}, got {max_norm1}"
                )
            }
            Self::DimensionTooLarge { dim, max } => {
                write!(
                    f,
                    "metric adjacency supports at most {max} dimensions, got {dim}"
                )
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl Error for AdjacencyError {}

/// Errors arising from [`DigitalTopology`](crate::DigitalTopology) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// Foreground and background relations differ in dimension.
    DimensionMismatch {
        /// Dimension of the foreground adjacency.
        foreground: usize,
        /// Dimension of the background adjacency.
        background: usize,
    },
    /// A Jordan topology was requested with identical foreground and
    /// background relations.
    NotJordanPair {
        /// Debug rendering of the shared relation.
        adjacency: String,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                foreground,
                background,
            } => write!(
                f,
                "foreground adjacency is {foreground}D but background adjacency is {background}D"
            ),
            Self::NotJordanPair { adjacency } => {
                write!(f, "({adjacency}, {adjacency}) is not a Jordan pair")
            }
        }
    }
}

impl Error for TopologyError {}
