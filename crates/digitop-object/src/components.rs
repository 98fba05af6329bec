//! Connected components under the foreground adjacency.

use crate::object::Object;
use digitop_core::Point;
use digitop_set::PointSet;
use std::collections::VecDeque;
use std::fmt;

/// Whether an object forms a single `κ`-connected piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectedness {
    /// One component. The empty object also counts as connected.
    Connected,
    /// Two or more components.
    Disconnected,
}

impl fmt::Display for Connectedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectedness::Connected => write!(f, "connected"),
            Connectedness::Disconnected => write!(f, "disconnected"),
        }
    }
}

impl<S: PointSet> Object<S> {
    /// Breadth-first flood from `start` through object points not yet in
    /// `visited`, marking them visited and reporting each one to `reached`.
    fn flood(&self, start: Point, visited: &mut S, mut reached: impl FnMut(&Point)) {
        let set = self.point_set();
        let kappa = self.adjacency();
        let mut queue = VecDeque::new();
        reached(&start);
        visited.insert_new(start.clone());
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            for q in kappa.neighbours(&p) {
                if set.contains(&q) && !visited.contains(&q) {
                    reached(&q);
                    visited.insert_new(q.clone());
                    queue.push_back(q);
                }
            }
        }
    }

    /// Hand each `κ`-connected component to `sink`, in order of first
    /// point.
    ///
    /// Components partition the object: they are pairwise disjoint, cover
    /// it, each is connected, and no point of one is `κ`-adjacent to a
    /// point of another. Every component shares this object's topology and
    /// domain. Returns the number of components.
    pub fn write_components(&self, mut sink: impl FnMut(Object<S>)) -> usize {
        let set = self.point_set();
        let domain = set.domain();
        let mut visited = S::with_domain(domain.clone());
        let mut count = 0;
        for start in set.iter() {
            if visited.contains(&start) {
                continue;
            }
            let mut component = S::with_domain(domain.clone());
            self.flood(start, &mut visited, |p| component.insert_new(p.clone()));
            log::trace!("component {count}: {} points", component.len());
            count += 1;
            sink(self.sibling(component));
        }
        log::debug!("{count} components over {} points", set.len());
        count
    }

    /// Every `κ`-connected component, in order of first point.
    pub fn components(&self) -> Vec<Object<S>> {
        let mut out = Vec::new();
        self.write_components(|c| out.push(c));
        out
    }

    /// Number of `κ`-connected components, without building them.
    pub fn component_count(&self) -> usize {
        let set = self.point_set();
        let mut visited = S::with_domain(set.domain().clone());
        let mut count = 0;
        for start in set.iter() {
            if !visited.contains(&start) {
                self.flood(start, &mut visited, |_| {});
                count += 1;
            }
        }
        count
    }

    /// Whether the object is a single `κ`-connected piece.
    ///
    /// Floods from one point and stops there, so a disconnected object is
    /// detected without enumerating its other components.
    pub fn connectedness(&self) -> Connectedness {
        let set = self.point_set();
        let Some(start) = set.iter().next() else {
            return Connectedness::Connected;
        };
        let mut visited = S::with_domain(set.domain().clone());
        self.flood(start, &mut visited, |_| {});
        if visited.len() == set.len() {
            Connectedness::Connected
        } else {
            Connectedness::Disconnected
        }
    }

    /// Shorthand for `connectedness() == Connectedness::Connected`.
    pub fn is_connected(&self) -> bool {
        self.connectedness() == Connectedness::Connected
    }
}
