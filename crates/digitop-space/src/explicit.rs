//! Rule-based adjacency from an explicit edge table.

use crate::adjacency::{Adjacency, Neighbours};
use crate::error::AdjacencyError;
use digitop_core::Point;
use indexmap::{IndexMap, IndexSet};

/// An adjacency given by listing its edges.
///
/// Edges are directed: `add_edge(p, q)` makes `q` a neighbour of `p` but
/// not the converse. Use [`add_symmetric_edge`](Self::add_symmetric_edge)
/// or [`symmetrized`](Self::symmetrized) for an undirected relation.
/// Neighbours are enumerated in edge insertion order.
///
/// A background adjacency must be symmetric for borders to be meaningful;
/// [`is_symmetric`](Self::is_symmetric) checks it.
#[derive(Clone, Debug)]
pub struct ExplicitAdjacency {
    dim: usize,
    edges: IndexMap<Point, IndexSet<Point>>,
    max_degree: usize,
}

impl ExplicitAdjacency {
    /// Create an empty relation (only reflexive pairs) over `Z^dim`.
    pub fn new(dim: usize) -> Result<Self, AdjacencyError> {
        if dim == 0 {
            return Err(AdjacencyError::ZeroDimension);
        }
        Ok(Self {
            dim,
            edges: IndexMap::new(),
            max_degree: 0,
        })
    }

    /// Create a relation from a list of directed edges.
    pub fn from_edges(
        dim: usize,
        edges: impl IntoIterator<Item = (Point, Point)>,
    ) -> Result<Self, AdjacencyError> {
        let mut adj = Self::new(dim)?;
        for (p, q) in edges {
            adj.add_edge(p, q)?;
        }
        Ok(adj)
    }

    fn check_dim(&self, p: &Point) -> Result<(), AdjacencyError> {
        if p.dim() != self.dim {
            return Err(AdjacencyError::DimensionMismatch {
                expected: self.dim,
                found: p.dim(),
            });
        }
        Ok(())
    }

    /// Add the directed edge `p -> q`.
    ///
    /// Returns `Ok(false)` if the edge already existed or `p == q` (the
    /// relation is reflexive anyway).
    pub fn add_edge(&mut self, p: Point, q: Point) -> Result<bool, AdjacencyError> {
        self.check_dim(&p)?;
        self.check_dim(&q)?;
        if p == q {
            return Ok(false);
        }
        let out = self.edges.entry(p).or_default();
        let added = out.insert(q);
        self.max_degree = self.max_degree.max(out.len());
        Ok(added)
    }

    /// Add both `p -> q` and `q -> p`.
    pub fn add_symmetric_edge(&mut self, p: Point, q: Point) -> Result<bool, AdjacencyError> {
        let forward = self.add_edge(p.clone(), q.clone())?;
        let backward = self.add_edge(q, p)?;
        Ok(forward || backward)
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexSet::len).sum()
    }

    /// Whether every edge `p -> q` has its reverse `q -> p`.
    pub fn is_symmetric(&self) -> bool {
        self.edges.iter().all(|(p, out)| {
            out.iter()
                .all(|q| self.edges.get(q).is_some_and(|back| back.contains(p)))
        })
    }

    /// The smallest symmetric relation containing this one.
    pub fn symmetrized(&self) -> Self {
        let mut sym = self.clone();
        for (p, out) in &self.edges {
            for q in out {
                // Dimensions were checked on insertion.
                let _ = sym.add_edge(q.clone(), p.clone());
            }
        }
        sym
    }
}

impl Adjacency for ExplicitAdjacency {
    fn dim(&self) -> usize {
        self.dim
    }

    fn is_adjacent_to(&self, p: &Point, q: &Point) -> bool {
        if p.dim() != self.dim {
            return false;
        }
        p == q || self.edges.get(p).is_some_and(|out| out.contains(q))
    }

    fn neighbours(&self, p: &Point) -> Neighbours {
        self.edges
            .get(p)
            .map(|out| out.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn max_degree(&self) -> usize {
        self.max_degree
    }

    fn adjacency_eq(&self, other: &dyn Adjacency) -> bool {
        other.downcast_ref::<Self>().is_some_and(|o| {
            o.dim == self.dim
                && o.edges.len() == self.edges.len()
                && self
                    .edges
                    .iter()
                    .all(|(p, out)| o.edges.get(p).is_some_and(|other_out| other_out == out))
        })
    }
}
