//! Adjacency trait compliance test helpers.
//!
//! These functions verify that an Adjacency implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules (MetricAdjacency, DomainAdjacency, ExplicitAdjacency).

use crate::adjacency::Adjacency;
use digitop_core::Point;
use indexmap::IndexSet;

/// Every point of `[-radius, radius]^dim`.
pub fn sample_points(dim: usize, radius: i32) -> Vec<Point> {
    let mut out = vec![Point::origin(0)];
    for _ in 0..dim {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (-radius..=radius).map(move |c| {
                    Point::new(prefix.coords().iter().copied().chain(std::iter::once(c)))
                })
            })
            .collect();
    }
    out
}

/// Assert that `is_adjacent_to(p, p)` holds and `is_proper_adjacent_to(p, p)` does not.
pub fn assert_reflexive(adj: &dyn Adjacency, points: &[Point]) {
    for p in points {
        assert!(adj.is_adjacent_to(p, p), "{p} not adjacent to itself");
        assert!(
            !adj.is_proper_adjacent_to(p, p),
            "{p} properly adjacent to itself"
        );
    }
}

/// Assert that every enumerated neighbour satisfies the predicate, is
/// distinct from `p`, and appears once.
pub fn assert_neighbours_match_predicate(adj: &dyn Adjacency, points: &[Point]) {
    for p in points {
        let n = adj.neighbours(p);
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbours of {p}: {n:?}");
        for q in &n {
            assert!(
                adj.is_proper_adjacent_to(p, q),
                "{q} enumerated as neighbour of {p} but predicate disagrees"
            );
        }
    }
}

/// Assert that the predicate never accepts a point the enumeration misses.
pub fn assert_enumeration_complete(adj: &dyn Adjacency, points: &[Point]) {
    for p in points {
        let n = adj.neighbours(p);
        for q in points {
            if adj.is_proper_adjacent_to(p, q) {
                assert!(n.contains(q), "{q} adjacent to {p} but not enumerated");
            }
        }
    }
}

/// Assert that `q in neighbours(p)` implies `p in neighbours(q)`.
pub fn assert_neighbours_symmetric(adj: &dyn Adjacency, points: &[Point]) {
    for p in points {
        for q in adj.neighbours(p) {
            assert!(
                adj.neighbours(&q).contains(p),
                "neighbour symmetry violated: {q} in N({p}) but {p} not in N({q})"
            );
        }
    }
}

/// Assert that two enumerations of the same point agree, and respect `max_degree`.
pub fn assert_enumeration_deterministic(adj: &dyn Adjacency, points: &[Point]) {
    for p in points {
        let a = adj.neighbours(p);
        let b = adj.neighbours(p);
        assert_eq!(a, b, "neighbours({p}) is non-deterministic");
        assert!(
            a.len() <= adj.max_degree(),
            "neighbours({p}) has {} entries, max_degree is {}",
            a.len(),
            adj.max_degree()
        );
    }
}

/// Assert that closed neighbourhoods are `p` followed by the proper ones.
pub fn assert_closed_neighbours(adj: &dyn Adjacency, points: &[Point]) {
    for p in points {
        let closed = adj.closed_neighbours(p);
        assert_eq!(closed.first(), Some(p));
        assert_eq!(&closed[1..], &adj.neighbours(p)[..]);
    }
}

/// Run every check that does not assume symmetry.
pub fn run_relation_compliance(adj: &dyn Adjacency, points: &[Point]) {
    assert_reflexive(adj, points);
    assert_neighbours_match_predicate(adj, points);
    assert_enumeration_complete(adj, points);
    assert_enumeration_deterministic(adj, points);
    assert_closed_neighbours(adj, points);
}

/// Run all compliance checks, symmetry included.
pub fn run_full_compliance(adj: &dyn Adjacency, points: &[Point]) {
    run_relation_compliance(adj, points);
    assert_neighbours_symmetric(adj, points);
}
