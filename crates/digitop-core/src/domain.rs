//! Axis-aligned rectangular domains of the integer lattice.

use crate::error::DomainError;
use crate::point::{Coord, Point};
use smallvec::SmallVec;
use std::fmt;

/// The set of lattice points `p` with `lower[i] <= p[i] <= upper[i]` on
/// every axis.
///
/// A domain bounds the points a point set may hold and, through
/// domain-restricted adjacencies, which neighbours are enumerated.
/// Iteration visits points with the first axis varying fastest; the
/// position of a point in that sequence is its
/// [`linear_index`](Self::linear_index).
///
/// # Examples
///
/// ```
/// use digitop_core::{HyperRectDomain, Point};
///
/// let d = HyperRectDomain::new(Point::from([-1, -1]), Point::from([1, 1])).unwrap();
/// assert_eq!(d.size(), 9);
/// assert!(d.contains(&Point::from([0, 1])));
/// assert!(!d.contains(&Point::from([2, 0])));
/// assert_eq!(d.iter().next(), Some(Point::from([-1, -1])));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HyperRectDomain {
    lower: Point,
    upper: Point,
    /// Number of points along each axis.
    extents: SmallVec<[usize; 4]>,
    size: usize,
}

impl HyperRectDomain {
    /// Create the domain spanned by two corners (both inclusive).
    ///
    /// Returns `Err(DomainError::DimensionMismatch)` if the corners differ in
    /// dimension, `Err(DomainError::EmptyDimension)` for zero-dimensional
    /// corners, `Err(DomainError::InvertedBounds)` if `lower > upper` on an
    /// axis, or `Err(DomainError::TooLarge)` if the point count overflows.
    pub fn new(lower: Point, upper: Point) -> Result<Self, DomainError> {
        if lower.dim() != upper.dim() {
            return Err(DomainError::DimensionMismatch {
                lower: lower.dim(),
                upper: upper.dim(),
            });
        }
        if lower.dim() == 0 {
            return Err(DomainError::EmptyDimension);
        }
        if let Some(axis) = (0..lower.dim()).find(|&i| lower[i] > upper[i]) {
            return Err(DomainError::InvertedBounds { axis, lower, upper });
        }

        let extents: SmallVec<[usize; 4]> = (0..lower.dim())
            .map(|i| (i64::from(upper[i]) - i64::from(lower[i]) + 1) as usize)
            .collect();
        let size = extents
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or_else(|| DomainError::TooLarge {
                lower: lower.clone(),
                upper: upper.clone(),
            })?;

        Ok(Self {
            lower,
            upper,
            extents,
            size,
        })
    }

    /// The cube `[-radius, radius]^dim` centred on the origin.
    pub fn centered(dim: usize, radius: u32) -> Result<Self, DomainError> {
        let r = radius.min(i32::MAX as u32) as i32;
        Self::new(
            Point::new(std::iter::repeat(-r).take(dim)),
            Point::new(std::iter::repeat(r).take(dim)),
        )
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.lower.dim()
    }

    /// Lowest corner (inclusive).
    pub fn lower(&self) -> &Point {
        &self.lower
    }

    /// Highest corner (inclusive).
    pub fn upper(&self) -> &Point {
        &self.upper
    }

    /// Number of points along `axis`.
    pub fn extent(&self, axis: usize) -> usize {
        self.extents[axis]
    }

    /// Total number of points.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `p` lies in the domain. Points of another dimension never do.
    pub fn contains(&self, p: &Point) -> bool {
        p.dim() == self.dim()
            && p.coords()
                .iter()
                .zip(self.lower.coords().iter().zip(self.upper.coords()))
                .all(|(&c, (&lo, &hi))| lo <= c && c <= hi)
    }

    /// Position of `p` in iteration order, `None` outside the domain.
    pub fn linear_index(&self, p: &Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let mut index = 0usize;
        let mut stride = 1usize;
        for axis in 0..self.dim() {
            index += (i64::from(p[axis]) - i64::from(self.lower[axis])) as usize * stride;
            stride *= self.extents[axis];
        }
        Some(index)
    }

    /// The point at position `index` in iteration order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn point_at(&self, index: usize) -> Point {
        assert!(
            index < self.size,
            "index {index} out of domain of size {}",
            self.size
        );
        let mut rest = index;
        let coord: Coord = (0..self.dim())
            .map(|axis| {
                let offset = rest % self.extents[axis];
                rest /= self.extents[axis];
                (i64::from(self.lower[axis]) + offset as i64) as i32
            })
            .collect();
        Point::from(coord)
    }

    /// Iterate over every point, first axis varying fastest.
    pub fn iter(&self) -> DomainIter<'_> {
        DomainIter {
            domain: self,
            next: Some(self.lower.coords().iter().copied().collect()),
            remaining: self.size,
        }
    }
}

impl<'a> IntoIterator for &'a HyperRectDomain {
    type Item = Point;
    type IntoIter = DomainIter<'a>;

    fn into_iter(self) -> DomainIter<'a> {
        self.iter()
    }
}

impl fmt::Display for HyperRectDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HyperRectDomain {} .. {}]", self.lower, self.upper)
    }
}

/// Iterator over the points of a [`HyperRectDomain`].
#[derive(Clone, Debug)]
pub struct DomainIter<'a> {
    domain: &'a HyperRectDomain,
    next: Option<Coord>,
    remaining: usize,
}

impl Iterator for DomainIter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next.take()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            let mut succ = current.clone();
            for axis in 0..succ.len() {
                if succ[axis] < self.domain.upper[axis] {
                    succ[axis] += 1;
                    break;
                }
                succ[axis] = self.domain.lower[axis];
            }
            self.next = Some(succ);
        }
        Some(Point::from(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DomainIter<'_> {}
