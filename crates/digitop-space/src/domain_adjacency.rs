//! Adjacency restricted to a bounded domain.

use crate::adjacency::{Adjacency, Neighbours};
use crate::error::AdjacencyError;
use crate::metric::MetricAdjacency;
use digitop_core::{HyperRectDomain, Point};

/// An adjacency whose points are confined to a [`HyperRectDomain`].
///
/// Neighbours outside the domain are omitted, so points on the domain
/// boundary have fewer neighbours. Two points are adjacent only if both
/// lie in the domain and are adjacent under the wrapped relation.
///
/// Used as a background adjacency, this makes the complement of an object
/// "the rest of the domain": a point touching only the outside of the
/// domain is not on the object's border.
///
/// # Examples
///
/// ```
/// use digitop_core::{HyperRectDomain, Point};
/// use digitop_space::{Adjacency, DomainAdjacency, MetricAdjacency};
///
/// let domain = HyperRectDomain::new(Point::from([0, 0]), Point::from([4, 4])).unwrap();
/// let adj4 = DomainAdjacency::new(domain, MetricAdjacency::grid4()).unwrap();
/// // Corner has 2 neighbours, interior has 4.
/// assert_eq!(adj4.neighbours(&Point::from([0, 0])).len(), 2);
/// assert_eq!(adj4.neighbours(&Point::from([2, 2])).len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DomainAdjacency<A = MetricAdjacency> {
    domain: HyperRectDomain,
    inner: A,
}

impl<A: Adjacency> DomainAdjacency<A> {
    /// Restrict `inner` to `domain`.
    ///
    /// Returns `Err(AdjacencyError::DimensionMismatch)` if the two differ in
    /// dimension.
    pub fn new(domain: HyperRectDomain, inner: A) -> Result<Self, AdjacencyError> {
        if domain.dim() != inner.dim() {
            return Err(AdjacencyError::DimensionMismatch {
                expected: inner.dim(),
                found: domain.dim(),
            });
        }
        Ok(Self { domain, inner })
    }

    /// The bounding domain.
    pub fn domain(&self) -> &HyperRectDomain {
        &self.domain
    }

    /// The unrestricted relation.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Adjacency> Adjacency for DomainAdjacency<A> {
    fn dim(&self) -> usize {
        self.domain.dim()
    }

    fn is_adjacent_to(&self, p: &Point, q: &Point) -> bool {
        self.domain.contains(p) && self.domain.contains(q) && self.inner.is_adjacent_to(p, q)
    }

    fn neighbours(&self, p: &Point) -> Neighbours {
        if !self.domain.contains(p) {
            return Neighbours::new();
        }
        let mut n = self.inner.neighbours(p);
        n.retain(|q| self.domain.contains(q));
        n
    }

    fn max_degree(&self) -> usize {
        self.inner.max_degree()
    }

    fn adjacency_eq(&self, other: &dyn Adjacency) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|o| o.domain == self.domain && self.inner.adjacency_eq(&o.inner))
    }
}
