//! The `Object` type: a point set under a digital topology.

use digitop_core::{HyperRectDomain, Point};
use digitop_set::{CowContainer, HashPointSet, PointSet, SmallPointSet};
use digitop_space::{Adjacency, DigitalTopology};
use std::fmt;
use std::sync::Arc;

/// An object whose storage is a [`SmallPointSet`], as returned by
/// neighbourhood queries.
pub type SmallObject = Object<SmallPointSet>;

#[derive(Clone, Debug)]
struct Parts<S> {
    topology: Arc<DigitalTopology>,
    set: CowContainer<S>,
}

/// A finite set of lattice points together with the digital topology that
/// gives it neighbourhoods, a border and connected components.
///
/// Cloning is O(1): the clone shares the point set until either side
/// mutates it through [`point_set_mut`](Self::point_set_mut), after which
/// the two evolve independently. The topology is immutable and shared by
/// reference count.
///
/// A [`Default`] object is *invalid*: it has neither topology nor storage.
/// Calling anything other than [`is_valid`](Self::is_valid) on it panics.
///
/// ```
/// use digitop_core::{HyperRectDomain, Point};
/// use digitop_object::Object;
/// use digitop_space::{DigitalTopology, MetricAdjacency, TopologyMode};
///
/// let dt48 = DigitalTopology::new(
///     MetricAdjacency::grid4(),
///     MetricAdjacency::grid8(),
///     TopologyMode::Jordan,
/// ).unwrap();
/// let domain = HyperRectDomain::centered(2, 3).unwrap();
/// let mut a: Object = Object::empty(dt48, domain);
/// a.insert(Point::from([0, 0]));
/// a.insert(Point::from([1, 0]));
///
/// let b = a.clone();
/// a.erase(&Point::from([0, 0]));
/// assert_eq!(a.len(), 1);
/// assert_eq!(b.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Object<S: PointSet = HashPointSet> {
    parts: Option<Parts<S>>,
}

impl<S: PointSet> Object<S> {
    /// Build an object from owned values.
    ///
    /// # Panics
    ///
    /// If the set's domain and the topology differ in dimension.
    pub fn new(topology: DigitalTopology, set: S) -> Self {
        Self::with_shared_topology(Arc::new(topology), set)
    }

    /// Build an object sharing an existing topology.
    ///
    /// # Panics
    ///
    /// If the set's domain and the topology differ in dimension.
    pub fn with_shared_topology(topology: Arc<DigitalTopology>, set: S) -> Self {
        Self::from_cow(topology, CowContainer::new(set))
    }

    /// Build an object over storage that may already be shared.
    ///
    /// # Panics
    ///
    /// If the set's domain and the topology differ in dimension.
    pub fn from_cow(topology: Arc<DigitalTopology>, set: CowContainer<S>) -> Self {
        assert_eq!(
            set.domain().dim(),
            topology.dim(),
            "point set and topology differ in dimension"
        );
        Self {
            parts: Some(Parts { topology, set }),
        }
    }

    /// Build an object taking ownership of heap-allocated storage.
    ///
    /// # Panics
    ///
    /// If the set's domain and the topology differ in dimension.
    pub fn attach(topology: Arc<DigitalTopology>, set: Box<S>) -> Self {
        Self::from_cow(topology, CowContainer::from_box(set))
    }

    /// An empty object bounded by `domain`.
    pub fn empty(topology: DigitalTopology, domain: HyperRectDomain) -> Self {
        Self::new(topology, S::with_domain(domain))
    }

    /// An empty object bounded by `domain`, sharing `topology`.
    pub fn empty_shared(topology: Arc<DigitalTopology>, domain: HyperRectDomain) -> Self {
        Self::with_shared_topology(topology, S::with_domain(domain))
    }

    fn parts(&self) -> &Parts<S> {
        match &self.parts {
            Some(parts) => parts,
            None => panic!("operation on an invalid Object"),
        }
    }

    fn parts_mut(&mut self) -> &mut Parts<S> {
        match &mut self.parts {
            Some(parts) => parts,
            None => panic!("operation on an invalid Object"),
        }
    }

    /// Whether the object has a topology and storage.
    pub fn is_valid(&self) -> bool {
        self.parts.is_some()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.point_set().len()
    }

    /// Number of points; same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the object holds no point.
    pub fn is_empty(&self) -> bool {
        self.point_set().is_empty()
    }

    /// The domain bounding the point set.
    pub fn domain(&self) -> &HyperRectDomain {
        self.point_set().domain()
    }

    /// Read access to the point set. Never copies.
    pub fn point_set(&self) -> &S {
        self.parts().set.read()
    }

    /// Write access to the point set.
    ///
    /// Duplicates the storage first if another object shares it.
    pub fn point_set_mut(&mut self) -> &mut S {
        self.parts_mut().set.write()
    }

    /// The copy-on-write storage handle.
    pub fn storage(&self) -> &CowContainer<S> {
        &self.parts().set
    }

    /// Whether `self` and `other` currently share storage.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        CowContainer::ptr_eq(&self.parts().set, &other.parts().set)
    }

    /// The digital topology.
    pub fn topology(&self) -> &DigitalTopology {
        &self.parts().topology
    }

    /// The shared topology handle.
    pub fn shared_topology(&self) -> &Arc<DigitalTopology> {
        &self.parts().topology
    }

    /// The foreground adjacency `κ`.
    pub fn adjacency(&self) -> &dyn Adjacency {
        self.topology().kappa()
    }

    /// Membership test.
    pub fn contains(&self, p: &Point) -> bool {
        self.point_set().contains(p)
    }

    /// Insert `p`; returns `false` if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        self.point_set_mut().insert(p)
    }

    /// Remove `p`; returns `false` if it was absent.
    pub fn erase(&mut self, p: &Point) -> bool {
        self.point_set_mut().erase(p)
    }

    /// Iterate over the points.
    pub fn iter(&self) -> S::Iter<'_> {
        self.point_set().iter()
    }

    /// A new object over `set` with this object's topology.
    pub(crate) fn sibling<T: PointSet>(&self, set: T) -> Object<T> {
        Object::with_shared_topology(Arc::clone(self.shared_topology()), set)
    }

    /// The points of the object in the closed `κ`-neighbourhood of `p`.
    ///
    /// Contains `p` itself exactly when `p` belongs to the object.
    pub fn neighborhood(&self, p: &Point) -> SmallObject {
        let set = self.point_set();
        let mut out = SmallPointSet::with_domain(set.domain().clone());
        for q in self.adjacency().closed_neighbours(p) {
            if set.contains(&q) {
                out.insert_new(q);
            }
        }
        self.sibling(out)
    }

    /// Size of [`neighborhood`](Self::neighborhood), without building it.
    pub fn neighborhood_size(&self, p: &Point) -> usize {
        let set = self.point_set();
        let own = usize::from(set.contains(p));
        own + self.count_in_set(self.adjacency().neighbours(p).iter())
    }

    /// The points of the object `κ`-adjacent to `p`, excluding `p`.
    pub fn proper_neighborhood(&self, p: &Point) -> SmallObject {
        let set = self.point_set();
        let mut out = SmallPointSet::with_domain(set.domain().clone());
        for q in self.adjacency().neighbours(p) {
            if set.contains(&q) {
                out.insert_new(q);
            }
        }
        self.sibling(out)
    }

    /// Size of [`proper_neighborhood`](Self::proper_neighborhood), without
    /// building it.
    pub fn proper_neighborhood_size(&self, p: &Point) -> usize {
        self.count_in_set(self.adjacency().neighbours(p).iter())
    }

    fn count_in_set<'p>(&self, points: impl Iterator<Item = &'p Point>) -> usize {
        let set = self.point_set();
        points.filter(|q| set.contains(q)).count()
    }

    /// The points having at least one `λ`-neighbour outside the object.
    ///
    /// Neighbours come from the background adjacency as given: when it is
    /// a [`DomainAdjacency`](digitop_space::DomainAdjacency), points beyond
    /// the domain are not part of the complement. The background relation
    /// must be symmetric; this is not checked.
    pub fn border(&self) -> Object<S> {
        let set = self.point_set();
        let lambda = self.topology().lambda();
        let mut out = S::with_domain(set.domain().clone());
        for p in set.iter() {
            if lambda.neighbours(&p).iter().any(|q| !set.contains(q)) {
                out.insert_new(p);
            }
        }
        log::debug!("border: {} of {} points", out.len(), set.len());
        self.sibling(out)
    }
}

impl<S: PointSet> Default for Object<S> {
    /// An invalid object.
    fn default() -> Self {
        Self { parts: None }
    }
}

impl<S: PointSet> fmt::Display for Object<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parts {
            Some(parts) => write!(
                f,
                "[Object topology={} size={}]",
                parts.topology,
                parts.set.len()
            ),
            None => write!(f, "[Object invalid]"),
        }
    }
}
