//! Breadth-first layer expansion inside an object.

use crate::object::Object;
use digitop_core::{Norm, Point};
use digitop_set::{HashPointSet, PointSet};
use std::fmt;

/// Grows successive layers from a set of seeds through an object.
///
/// Layer 0 is the seeds that belong to the object. Each following layer
/// holds the object points `κ`-adjacent to the previous layer that no
/// earlier layer reached; the union of the layers so far is the *core*.
/// Layer `k` is therefore exactly the set of points at topological
/// distance `k` from the seeds, and expansion stops once the whole
/// connected part of the object containing the seeds is covered.
///
/// ```
/// use digitop_core::{HyperRectDomain, Point};
/// use digitop_object::{Expander, Object};
/// use digitop_set::PointSet;
/// use digitop_space::{DigitalTopology, MetricAdjacency, TopologyMode};
///
/// let dt = DigitalTopology::new(
///     MetricAdjacency::grid4(),
///     MetricAdjacency::grid8(),
///     TopologyMode::Jordan,
/// ).unwrap();
/// let domain = HyperRectDomain::centered(2, 5).unwrap();
/// let mut line: Object = Object::empty(dt, domain);
/// for x in 0..4 {
///     line.insert(Point::from([x, 0]));
/// }
///
/// let mut e = Expander::new(&line, Point::from([0, 0]));
/// while e.next_layer() {}
/// assert!(e.finished());
/// assert_eq!(e.distance(), 3);
/// assert_eq!(e.core().len(), 4);
/// ```
pub struct Expander<'a, S: PointSet = HashPointSet> {
    object: &'a Object<S>,
    seeds: Vec<Point>,
    core: S,
    layer: S,
    distance: usize,
    finished: bool,
    norm: Norm,
}

impl<'a, S: PointSet> Expander<'a, S> {
    /// Start from a single seed.
    pub fn new(object: &'a Object<S>, seed: Point) -> Self {
        Self::with_seeds(object, std::iter::once(seed))
    }

    /// Start from several seeds. Seeds outside the object are ignored;
    /// if none remain the expander is finished at once.
    pub fn with_seeds(object: &'a Object<S>, seeds: impl IntoIterator<Item = Point>) -> Self {
        let domain = object.domain();
        let mut layer = S::with_domain(domain.clone());
        let mut kept = Vec::new();
        for seed in seeds {
            if object.contains(&seed) && layer.insert(seed.clone()) {
                kept.push(seed);
            }
        }
        let core = layer.clone();
        let finished = layer.is_empty();
        Self {
            object,
            seeds: kept,
            core,
            layer,
            distance: 0,
            finished,
            norm: Norm::default(),
        }
    }

    /// Measure [`metric_radius`](Self::metric_radius) with `norm` instead
    /// of the Euclidean norm.
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Compute the next layer.
    ///
    /// Returns `false`, and marks the expander finished, when no new point
    /// is reachable; the current layer and distance are then left as they
    /// were. Calling it again after that is a no-op.
    pub fn next_layer(&mut self) -> bool {
        if self.finished {
            return false;
        }
        let kappa = self.object.adjacency();
        let mut next = S::with_domain(self.object.domain().clone());
        for p in self.layer.iter() {
            for q in kappa.neighbours(&p) {
                if self.object.contains(&q) && !self.core.contains(&q) && !next.contains(&q) {
                    next.insert_new(q);
                }
            }
        }
        if next.is_empty() {
            self.finished = true;
            log::debug!(
                "expansion finished: distance {}, core {} points, radius {:.3}",
                self.distance,
                self.core.len(),
                self.metric_radius()
            );
            return false;
        }
        for p in next.iter() {
            self.core.insert_new(p);
        }
        self.layer = next;
        self.distance += 1;
        log::trace!("layer {}: {} points", self.distance, self.layer.len());
        true
    }

    /// Whether no further layer can be produced.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// The current layer, or the last non-empty one once finished.
    pub fn layer(&self) -> &S {
        &self.layer
    }

    /// Every point reached so far, seeds included.
    pub fn core(&self) -> &S {
        &self.core
    }

    /// Topological distance from the seeds to the current layer.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Largest distance, under the configured norm, from a point of the
    /// current layer to its nearest seed. Zero when there is no seed.
    pub fn metric_radius(&self) -> f64 {
        self.layer
            .iter()
            .map(|p| {
                self.seeds
                    .iter()
                    .map(|s| (&p - s).norm(self.norm))
                    .fold(f64::INFINITY, f64::min)
            })
            .fold(0.0, f64::max)
    }

    /// The seeds that belong to the object, in the order given.
    pub fn seeds(&self) -> &[Point] {
        &self.seeds
    }

    /// The object being expanded.
    pub fn object(&self) -> &'a Object<S> {
        self.object
    }

    /// Turn the expander into an iterator over its layers, starting with
    /// the current one.
    pub fn into_layers(self) -> Layers<'a, S> {
        Layers {
            expander: self,
            started: false,
        }
    }
}

impl<S: PointSet> fmt::Debug for Expander<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander")
            .field("seeds", &self.seeds)
            .field("distance", &self.distance)
            .field("layer", &self.layer.len())
            .field("core", &self.core.len())
            .field("finished", &self.finished)
            .finish()
    }
}

impl<S: PointSet> fmt::Display for Expander<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Expander layer={} size={} core={} finished={}]",
            self.distance,
            self.layer.len(),
            self.core.len(),
            self.finished
        )
    }
}

/// Iterator over the layers of an [`Expander`], created by
/// [`Expander::into_layers`].
pub struct Layers<'a, S: PointSet = HashPointSet> {
    expander: Expander<'a, S>,
    started: bool,
}

impl<'a, S: PointSet> Layers<'a, S> {
    /// The underlying expander.
    pub fn expander(&self) -> &Expander<'a, S> {
        &self.expander
    }
}

impl<S: PointSet> Iterator for Layers<'_, S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if !self.started {
            self.started = true;
            if self.expander.layer.is_empty() {
                return None;
            }
            return Some(self.expander.layer.clone());
        }
        if self.expander.next_layer() {
            Some(self.expander.layer.clone())
        } else {
            None
        }
    }
}
