//! The `PointSet` storage capability.

use digitop_core::{HyperRectDomain, Point};
use std::fmt;

/// A mutable, iterable set of lattice points bounded by a domain.
///
/// Every contained point lies in [`domain`](Self::domain). Inserting a
/// point outside the domain is a contract violation, checked with
/// `debug_assert!`; [`contains`](Self::contains) simply answers `false`
/// for such points.
///
/// Iteration order is backend-defined and not necessarily sorted, but two
/// iterations with no mutation in between yield the same sequence.
pub trait PointSet: Clone + fmt::Debug {
    /// Iterator over the points of the set.
    type Iter<'a>: Iterator<Item = Point>
    where
        Self: 'a;

    /// An empty set bounded by `domain`.
    fn with_domain(domain: HyperRectDomain) -> Self;

    /// The bounding domain.
    fn domain(&self) -> &HyperRectDomain;

    /// Number of points.
    fn len(&self) -> usize;

    /// Whether the set holds no point.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership test.
    fn contains(&self, p: &Point) -> bool;

    /// Insert `p`; returns `false` if it was already present.
    fn insert(&mut self, p: Point) -> bool;

    /// Insert a point the caller knows to be absent.
    ///
    /// Skips the membership check where the backend allows it. Inserting a
    /// point that is already present breaks the set's invariants; debug
    /// builds assert against it.
    fn insert_new(&mut self, p: Point);

    /// Remove `p`; returns `false` if it was absent.
    fn erase(&mut self, p: &Point) -> bool;

    /// Remove every point.
    fn clear(&mut self);

    /// Iterate over the points.
    fn iter(&self) -> Self::Iter<'_>;

    /// Replace the contents with the points of `other` that satisfy `keep`.
    ///
    /// Works across backends; the points of `other` must lie in
    /// `self.domain()`.
    fn assign_from<T: PointSet>(&mut self, other: &T, mut keep: impl FnMut(&Point) -> bool) {
        self.clear();
        for p in other.iter() {
            if keep(&p) {
                self.insert_new(p);
            }
        }
    }

    /// Replace the contents with every point of `other`.
    fn assign<T: PointSet>(&mut self, other: &T) {
        self.assign_from(other, |_| true);
    }

    /// Remove every point that `other` contains.
    fn subtract<T: PointSet>(&mut self, other: &T) {
        let doomed: Vec<Point> = self.iter().filter(|p| other.contains(p)).collect();
        for p in &doomed {
            self.erase(p);
        }
    }

    /// Insert every point of `points`.
    fn extend_points(&mut self, points: impl IntoIterator<Item = Point>) {
        for p in points {
            self.insert(p);
        }
    }

    /// Whether every point of `self` is in `other`.
    fn is_subset_of<T: PointSet>(&self, other: &T) -> bool {
        self.len() <= other.len() && self.iter().all(|p| other.contains(&p))
    }

    /// Whether both sets hold exactly the same points.
    fn same_points<T: PointSet>(&self, other: &T) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }

    /// Collect the points into a vector, in iteration order.
    fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }
}
