//! The core `Adjacency` trait and `dyn Adjacency` downcast support.

use digitop_core::Point;
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;

/// Neighbour list returned by [`Adjacency::neighbours`].
///
/// Inline capacity of 8 covers the 2D relations without heap allocation;
/// 3D relations spill transparently.
pub type Neighbours = SmallVec<[Point; 8]>;

/// A binary adjacency relation over lattice points.
///
/// Neighbourhood, border and connected-component queries on digital
/// objects are defined entirely in terms of this trait. A relation is
/// reflexive by convention (`is_adjacent_to(p, p)` holds); the *proper*
/// neighbours of `p` exclude `p` itself.
///
/// # Object Safety
///
/// This trait is designed for use as `dyn Adjacency`: a
/// [`DigitalTopology`](crate::DigitalTopology) holds its two relations as
/// `Arc<dyn Adjacency>`. Use `downcast_ref` for opt-in specialization on
/// concrete types.
///
/// # Thread Safety
///
/// `Send + Sync` lets a topology be shared between objects living on
/// different threads; no relation carries interior mutability.
pub trait Adjacency: Any + Send + Sync + fmt::Debug + 'static {
    /// Dimension of the points this relation connects.
    fn dim(&self) -> usize;

    /// Whether `p` and `q` are adjacent. Holds for `p == q`.
    fn is_adjacent_to(&self, p: &Point, q: &Point) -> bool;

    /// Whether `p` and `q` are adjacent and distinct.
    fn is_proper_adjacent_to(&self, p: &Point, q: &Point) -> bool {
        p != q && self.is_adjacent_to(p, q)
    }

    /// Enumerate the proper neighbours of `p`.
    ///
    /// Returns points in a deterministic, backend-defined order. Every
    /// returned `q` satisfies `is_proper_adjacent_to(p, q)`.
    fn neighbours(&self, p: &Point) -> Neighbours;

    /// Enumerate `p` followed by its proper neighbours.
    fn closed_neighbours(&self, p: &Point) -> Neighbours {
        let mut out = Neighbours::new();
        out.push(p.clone());
        out.extend(self.neighbours(p));
        out
    }

    /// Upper bound on `neighbours(p).len()` over all points.
    fn max_degree(&self) -> usize;

    /// Returns `true` if `self` and `other` are the same relation:
    /// same concrete type and identical parameters.
    ///
    /// Implementors should downcast `other` to `Self` and compare all
    /// behaviour-relevant fields. Return `false` if the downcast fails.
    fn adjacency_eq(&self, other: &dyn Adjacency) -> bool;
}

impl dyn Adjacency {
    /// Attempt to downcast a trait object to a concrete adjacency type.
    pub fn downcast_ref<T: Adjacency>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
