//! Lattice-wide adjacency bounded by the L1 and L∞ norms.

use crate::adjacency::{Adjacency, Neighbours};
use crate::error::AdjacencyError;
use digitop_core::{Coord, Point};
use std::fmt;

/// Largest dimension a [`MetricAdjacency`] accepts; building it scans
/// `3^dim` candidate offsets.
pub const MAX_METRIC_DIM: usize = 12;

/// The standard adjacencies of `Z^d`: `p ~ q` iff `‖p − q‖∞ <= 1` and
/// `‖p − q‖₁ <= max_norm1`.
///
/// `max_norm1 = 1` gives the 2d-adjacency (4 in 2D, 6 in 3D) and
/// `max_norm1 = d` the (3^d − 1)-adjacency (8 in 2D, 26 in 3D); 18 in 3D
/// is `max_norm1 = 2`. The relation is symmetric and spans the whole
/// lattice; wrap it in a [`DomainAdjacency`](crate::DomainAdjacency) to
/// restrict it to a bounded domain.
///
/// # Examples
///
/// ```
/// use digitop_core::Point;
/// use digitop_space::{Adjacency, MetricAdjacency};
///
/// let adj8 = MetricAdjacency::grid8();
/// assert_eq!(adj8.neighbours(&Point::from([0, 0])).len(), 8);
/// assert!(adj8.is_adjacent_to(&Point::from([0, 0]), &Point::from([1, -1])));
/// assert!(!MetricAdjacency::grid4().is_adjacent_to(&Point::from([0, 0]), &Point::from([1, -1])));
/// ```
#[derive(Clone)]
pub struct MetricAdjacency {
    dim: usize,
    max_norm1: u32,
    /// Displacements to the proper neighbours, in enumeration order.
    offsets: Vec<Coord>,
}

impl MetricAdjacency {
    /// Create the metric adjacency of `Z^dim` with the given L1 bound.
    ///
    /// Returns `Err(AdjacencyError::ZeroDimension)` if `dim == 0`, or
    /// `Err(AdjacencyError::InvalidMaxNorm1)` unless `1 <= max_norm1 <= dim`,
    /// or `Err(AdjacencyError::DimensionTooLarge)` above [`MAX_METRIC_DIM`].
    pub fn new(dim: usize, max_norm1: u32) -> Result<Self, AdjacencyError> {
        if dim == 0 {
            return Err(AdjacencyError::ZeroDimension);
        }
        if dim > MAX_METRIC_DIM {
            return Err(AdjacencyError::DimensionTooLarge {
                dim,
                max: MAX_METRIC_DIM,
            });
        }
        if max_norm1 == 0 || max_norm1 as usize > dim {
            return Err(AdjacencyError::InvalidMaxNorm1 { dim, max_norm1 });
        }
        Ok(Self {
            dim,
            max_norm1,
            offsets: unit_offsets(dim, max_norm1),
        })
    }

    /// 4-adjacency of `Z²`.
    pub fn grid4() -> Self {
        Self::standard(2, 1)
    }

    /// 8-adjacency of `Z²`.
    pub fn grid8() -> Self {
        Self::standard(2, 2)
    }

    /// 6-adjacency of `Z³`.
    pub fn grid6() -> Self {
        Self::standard(3, 1)
    }

    /// 18-adjacency of `Z³`.
    pub fn grid18() -> Self {
        Self::standard(3, 2)
    }

    /// 26-adjacency of `Z³`.
    pub fn grid26() -> Self {
        Self::standard(3, 3)
    }

    fn standard(dim: usize, max_norm1: u32) -> Self {
        Self {
            dim,
            max_norm1,
            offsets: unit_offsets(dim, max_norm1),
        }
    }

    /// The L1 bound.
    pub fn max_norm1(&self) -> u32 {
        self.max_norm1
    }

    /// Number of proper neighbours of any point: `Σ_{i=1..k} C(d, i)·2^i`.
    pub fn degree(&self) -> usize {
        self.offsets.len()
    }
}

/// Every non-zero vector of `{-1, 0, 1}^dim` with at most `max_norm1`
/// non-zero entries, in lexicographic order.
fn unit_offsets(dim: usize, max_norm1: u32) -> Vec<Coord> {
    let total = 3usize.pow(dim as u32);
    let mut out = Vec::new();
    for code in 0..total {
        let mut rest = code;
        let mut offset: Coord = Coord::from_elem(0, dim);
        // Most significant digit on axis 0 keeps the order lexicographic.
        for axis in (0..dim).rev() {
            offset[axis] = (rest % 3) as i32 - 1;
            rest /= 3;
        }
        let nonzero = offset.iter().filter(|&&c| c != 0).count() as u32;
        if nonzero > 0 && nonzero <= max_norm1 {
            out.push(offset);
        }
    }
    out
}

impl fmt::Debug for MetricAdjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricAdjacency")
            .field("dim", &self.dim)
            .field("max_norm1", &self.max_norm1)
            .field("degree", &self.degree())
            .finish()
    }
}

impl Adjacency for MetricAdjacency {
    fn dim(&self) -> usize {
        self.dim
    }

    fn is_adjacent_to(&self, p: &Point, q: &Point) -> bool {
        if p.dim() != self.dim || q.dim() != self.dim {
            return false;
        }
        let mut norm1 = 0u32;
        for (&a, &b) in p.coords().iter().zip(q.coords()) {
            let d = (i64::from(a) - i64::from(b)).unsigned_abs();
            if d > 1 {
                return false;
            }
            norm1 += d as u32;
        }
        norm1 <= self.max_norm1
    }

    fn neighbours(&self, p: &Point) -> Neighbours {
        debug_assert_eq!(
            p.dim(),
            self.dim,
            "point dimension does not match adjacency"
        );
        self.offsets
            .iter()
            .filter_map(|offset| {
                p.coords()
                    .iter()
                    .zip(offset.iter())
                    .map(|(&c, &d)| c.checked_add(d))
                    .collect::<Option<Coord>>()
                    .map(Point::from)
            })
            .collect()
    }

    fn max_degree(&self) -> usize {
        self.degree()
    }

    fn adjacency_eq(&self, other: &dyn Adjacency) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|o| o.dim == self.dim && o.max_norm1 == self.max_norm1)
    }
}
