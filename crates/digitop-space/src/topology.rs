//! Digital topologies: a foreground and a background adjacency.

use crate::adjacency::Adjacency;
use crate::error::TopologyError;
use std::fmt;
use std::sync::Arc;

/// Consistency tag of a [`DigitalTopology`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TopologyMode {
    /// The pair satisfies the digital Jordan theorem (e.g. (4,8), (8,4),
    /// (6,18), (6,26) in the standard lattices).
    Jordan,
    /// The pair is known not to be a Jordan pair.
    NotJordan,
    /// Nothing is claimed about the pair.
    #[default]
    Unknown,
}

impl fmt::Display for TopologyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jordan => write!(f, "Jordan"),
            Self::NotJordan => write!(f, "not Jordan"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A pair of adjacencies `(κ, λ)`: `κ` connects the points of an object
/// (foreground), `λ` connects the points of its complement (background).
///
/// Immutable once built. Relations are held behind `Arc` so that cloning a
/// topology, or sharing it across every object derived from one another,
/// never copies an adjacency table.
///
/// # Examples
///
/// ```
/// use digitop_space::{Adjacency, DigitalTopology, MetricAdjacency, TopologyMode};
///
/// let dt48 = DigitalTopology::new(
///     MetricAdjacency::grid4(),
///     MetricAdjacency::grid8(),
///     TopologyMode::Jordan,
/// ).unwrap();
/// let dt84 = dt48.reversed();
/// assert_eq!(dt84.kappa().max_degree(), 8);
/// ```
#[derive(Clone)]
pub struct DigitalTopology {
    foreground: Arc<dyn Adjacency>,
    background: Arc<dyn Adjacency>,
    mode: TopologyMode,
}

impl DigitalTopology {
    /// Pair two adjacencies.
    ///
    /// Returns `Err(TopologyError::DimensionMismatch)` if they differ in
    /// dimension, or `Err(TopologyError::NotJordanPair)` if `mode` is
    /// [`TopologyMode::Jordan`] and both relations are the same.
    pub fn new(
        foreground: impl Adjacency,
        background: impl Adjacency,
        mode: TopologyMode,
    ) -> Result<Self, TopologyError> {
        Self::from_shared(Arc::new(foreground), Arc::new(background), mode)
    }

    /// Pair two already-shared adjacencies.
    pub fn from_shared(
        foreground: Arc<dyn Adjacency>,
        background: Arc<dyn Adjacency>,
        mode: TopologyMode,
    ) -> Result<Self, TopologyError> {
        if foreground.dim() != background.dim() {
            return Err(TopologyError::DimensionMismatch {
                foreground: foreground.dim(),
                background: background.dim(),
            });
        }
        if mode == TopologyMode::Jordan && foreground.adjacency_eq(background.as_ref()) {
            return Err(TopologyError::NotJordanPair {
                adjacency: format!("{foreground:?}"),
            });
        }
        Ok(Self {
            foreground,
            background,
            mode,
        })
    }

    /// The foreground adjacency `κ`.
    pub fn kappa(&self) -> &dyn Adjacency {
        self.foreground.as_ref()
    }

    /// The background adjacency `λ`.
    pub fn lambda(&self) -> &dyn Adjacency {
        self.background.as_ref()
    }

    /// Alias of [`kappa`](Self::kappa).
    pub fn foreground(&self) -> &dyn Adjacency {
        self.kappa()
    }

    /// Alias of [`lambda`](Self::lambda).
    pub fn background(&self) -> &dyn Adjacency {
        self.lambda()
    }

    /// Shared handle on the foreground adjacency.
    pub fn shared_foreground(&self) -> &Arc<dyn Adjacency> {
        &self.foreground
    }

    /// Shared handle on the background adjacency.
    pub fn shared_background(&self) -> &Arc<dyn Adjacency> {
        &self.background
    }

    /// Consistency tag.
    pub fn mode(&self) -> TopologyMode {
        self.mode
    }

    /// Dimension of both relations.
    pub fn dim(&self) -> usize {
        self.foreground.dim()
    }

    /// The topology `(λ, κ)`, used to reason about the complement of an
    /// object. Shares both relations with `self`.
    pub fn reversed(&self) -> Self {
        Self {
            foreground: Arc::clone(&self.background),
            background: Arc::clone(&self.foreground),
            mode: self.mode,
        }
    }

    /// Whether both topologies use the same relations and mode.
    pub fn topology_eq(&self, other: &DigitalTopology) -> bool {
        self.mode == other.mode
            && self.foreground.adjacency_eq(other.foreground.as_ref())
            && self.background.adjacency_eq(other.background.as_ref())
    }
}

impl fmt::Debug for DigitalTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitalTopology")
            .field("kappa", &self.foreground)
            .field("lambda", &self.background)
            .field("mode", &self.mode)
            .finish()
    }
}

impl fmt::Display for DigitalTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[DigitalTopology kappa={:?} lambda={:?} mode={}]",
            self.foreground, self.background, self.mode
        )
    }
}
