//! Vector-backed point set for a handful of points.

use crate::point_set::PointSet;
use digitop_core::{HyperRectDomain, Point};
use smallvec::SmallVec;
use std::iter::Cloned;
use std::slice;

/// A point set stored as an unsorted inline vector.
///
/// Lookup is linear, which beats hashing for the few points of a
/// neighbourhood. Up to 8 points live inline; more spill to the heap.
/// Iteration follows insertion order.
#[derive(Clone, Debug)]
pub struct SmallPointSet {
    domain: HyperRectDomain,
    points: SmallVec<[Point; 8]>,
}

impl SmallPointSet {
    /// The points as a slice, in insertion order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl PointSet for SmallPointSet {
    type Iter<'a> = Cloned<slice::Iter<'a, Point>>;

    fn with_domain(domain: HyperRectDomain) -> Self {
        Self {
            domain,
            points: SmallVec::new(),
        }
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
        if self.contains(&p) {
            return false;
        }
        self.insert_new(p);
        true
    }

    fn insert_new(&mut self, p: Point) {
        debug_assert!(self.domain.contains(&p), "{p} outside {}", self.domain);
        debug_assert!(!self.contains(&p), "{p} already in set");
        self.points.push(p);
    }

    fn erase(&mut self, p: &Point) -> bool {
        match self.points.iter().position(|q| q == p) {
            Some(i) => {
                self.points.remove(i);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.points.iter().cloned()
    }

    // `other` holds distinct points, so the linear duplicate check of
    // `insert_new` is skipped; copying a large set stays linear.
    fn assign_from<T: PointSet>(&mut self, other: &T, mut keep: impl FnMut(&Point) -> bool) {
        self.points.clear();
        for p in other.iter().filter(|p| keep(p)) {
            debug_assert!(self.domain.contains(&p), "{p} outside {}", self.domain);
            self.points.push(p);
        }
    }
}
