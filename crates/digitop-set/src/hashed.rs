//! Hash-backed point set.

use crate::point_set::PointSet;
use digitop_core::{HyperRectDomain, Point};
use indexmap::IndexSet;
use std::iter::Cloned;

/// A point set backed by an [`IndexSet`].
///
/// Constant-time membership with memory proportional to the number of
/// points, independent of the domain size. Iteration follows insertion
/// order until a point is erased: erasure moves the last point into the
/// hole.
#[derive(Clone, Debug)]
pub struct HashPointSet {
    domain: HyperRectDomain,
    points: IndexSet<Point>,
}

impl HashPointSet {
    /// An empty set with room for `capacity` points.
    pub fn with_capacity(domain: HyperRectDomain, capacity: usize) -> Self {
        Self {
            domain,
            points: IndexSet::with_capacity(capacity),
        }
    }

    /// Sort the points lexicographically, fixing the iteration order.
    pub fn sort(&mut self) {
        self.points.sort();
    }
}

impl PointSet for HashPointSet {
    type Iter<'a> = Cloned<indexmap::set::Iter<'a, Point>>;

    fn with_domain(domain: HyperRectDomain) -> Self {
        Self::with_capacity(domain, 0)
    }

    fn domain(&self) -> &HyperRectDomain {
        &self.domain
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn contains(&self, p: &Point) -> bool {
        self.points.contains(p)
    }

    fn insert(&mut self, p: Point) -> bool {
        debug_assert!(self.domain.contains(&p), "{p} outside {}", self.domain);
        self.points.insert(p)
    }

    fn insert_new(&mut self, p: Point) {
        debug_assert!(self.domain.contains(&p), "{p} outside {}", self.domain);
        let fresh = self.points.insert(p);
        debug_assert!(fresh, "point already in set");
    }

    fn erase(&mut self, p: &Point) -> bool {
        self.points.swap_remove(p)
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.points.iter().cloned()
    }
}

impl Extend<Point> for HashPointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.extend_points(iter);
    }
}
