//! Object configuration, validation, and error types.
//!
//! [`ObjectConfig`] collects the plain parameters of a digital object (the
//! domain corners, the two adjacencies and the storage backend) and turns
//! them into validated [`HyperRectDomain`], [`DigitalTopology`] and
//! [`Object`] values.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use digitop_core::{DomainError, HyperRectDomain, Point};
use digitop_set::{AnyPointSet, PointSet, SetKind};
use digitop_space::{
    Adjacency, AdjacencyError, DigitalTopology, DomainAdjacency, MetricAdjacency, TopologyError,
    TopologyMode,
};

use crate::object::Object;

/// Largest domain, in points, that [`SetKind::Dense`] storage accepts.
pub const MAX_DENSE_DOMAIN: usize = u32::MAX as usize;

// ── AdjacencySpec ──────────────────────────────────────────────────

/// Parameters of one metric adjacency.
///
/// Two points are adjacent when they differ by at most 1 on every axis and
/// by at most `max_norm1` in total: 1 gives the 4-adjacency in 2D and the
/// 6-adjacency in 3D, `dim` gives the 8- and 26-adjacencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdjacencySpec {
    /// Bound on the L1 distance between adjacent points. Default: 1.
    pub max_norm1: u32,
}

impl AdjacencySpec {
    /// The relation with the given L1 bound.
    pub fn new(max_norm1: u32) -> Self {
        Self { max_norm1 }
    }
}

impl Default for AdjacencySpec {
    fn default() -> Self {
        Self { max_norm1: 1 }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`ObjectConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Domain corners are invalid.
    Domain(DomainError),
    /// An adjacency is invalid for the domain's dimension.
    Adjacency(AdjacencyError),
    /// The adjacencies do not form the requested topology.
    Topology(TopologyError),
    /// The storage backend cannot hold the domain.
    UnsupportedSetKind {
        /// The requested backend.
        kind: SetKind,
        /// Number of points in the domain.
        domain_size: usize,
    },
    /// A point given to the object lies outside the domain.
    PointOutsideDomain {
        /// The offending point.
        point: Point,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "domain: {e}"),
            Self::Adjacency(e) => write!(f, "adjacency: {e}"),
            Self::Topology(e) => write!(f, "topology: {e}"),
            Self::UnsupportedSetKind { kind, domain_size } => {
                write!(
                    f,
                    "{kind} storage cannot hold a domain of {domain_size} points"
                )
            }
            Self::PointOutsideDomain { point } => {
                write!(f, "point {point} lies outside the domain")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Adjacency(e) => Some(e),
            Self::Topology(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DomainError> for ConfigError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<AdjacencyError> for ConfigError {
    fn from(e: AdjacencyError) -> Self {
        Self::Adjacency(e)
    }
}

impl From<TopologyError> for ConfigError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

// ── ObjectConfig ───────────────────────────────────────────────────

/// Plain parameters describing a digital object.
///
/// The default is the square `[-8, 8]²` under the (4, 8) Jordan topology,
/// stored in a hash set, with both adjacencies bounded by the domain.
///
/// ```
/// use digitop_core::Point;
/// use digitop_object::ObjectConfig;
///
/// let config = ObjectConfig::default();
/// let object = config
///     .object_from_points([Point::from([0, 0]), Point::from([1, 1])])
///     .unwrap();
/// assert_eq!(object.len(), 2);
/// assert_eq!(object.component_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectConfig {
    /// Lower corner of the domain (inclusive).
    pub lower: Vec<i32>,
    /// Upper corner of the domain (inclusive).
    pub upper: Vec<i32>,
    /// Foreground adjacency `κ`. Default: L1 bound 1.
    pub foreground: AdjacencySpec,
    /// Background adjacency `λ`. Default: L1 bound 2.
    pub background: AdjacencySpec,
    /// Declared relationship between the two adjacencies. Default: Jordan.
    pub mode: TopologyMode,
    /// Storage backend. Default: hashed.
    pub set_kind: SetKind,
    /// Restrict both adjacencies to the domain. Default: true.
    ///
    /// When set, points beyond the domain never count as neighbours, so
    /// an object touching the domain boundary has no border there.
    pub bound_to_domain: bool,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            lower: vec![-8, -8],
            upper: vec![8, 8],
            foreground: AdjacencySpec::new(1),
            background: AdjacencySpec::new(2),
            mode: TopologyMode::Jordan,
            set_kind: SetKind::Hashed,
            bound_to_domain: true,
        }
    }
}

impl ObjectConfig {
    /// Check every parameter without building anything large.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = self.domain()?;
        self.topology_for(&domain)?;
        if self.set_kind == SetKind::Dense && domain.size() > MAX_DENSE_DOMAIN {
            return Err(ConfigError::UnsupportedSetKind {
                kind: self.set_kind,
                domain_size: domain.size(),
            });
        }
        Ok(())
    }

    /// The validated domain.
    pub fn domain(&self) -> Result<HyperRectDomain, ConfigError> {
        Ok(HyperRectDomain::new(
            Point::from(self.lower.as_slice()),
            Point::from(self.upper.as_slice()),
        )?)
    }

    /// The validated topology.
    pub fn topology(&self) -> Result<DigitalTopology, ConfigError> {
        self.topology_for(&self.domain()?)
    }

    fn adjacency(
        &self,
        spec: AdjacencySpec,
        domain: &HyperRectDomain,
    ) -> Result<Arc<dyn Adjacency>, ConfigError> {
        let metric = MetricAdjacency::new(domain.dim(), spec.max_norm1)?;
        if self.bound_to_domain {
            Ok(Arc::new(DomainAdjacency::new(domain.clone(), metric)?))
        } else {
            Ok(Arc::new(metric))
        }
    }

    fn topology_for(&self, domain: &HyperRectDomain) -> Result<DigitalTopology, ConfigError> {
        let foreground = self.adjacency(self.foreground, domain)?;
        let background = self.adjacency(self.background, domain)?;
        Ok(DigitalTopology::from_shared(foreground, background, self.mode)?)
    }

    /// A validated empty object.
    pub fn empty_object(&self) -> Result<Object<AnyPointSet>, ConfigError> {
        self.validate()?;
        let domain = self.domain()?;
        let topology = self.topology_for(&domain)?;
        Ok(Object::new(topology, AnyPointSet::new(self.set_kind, domain)))
    }

    /// A validated object holding `points`.
    ///
    /// Returns `Err(ConfigError::PointOutsideDomain)` for the first point
    /// outside the domain. Duplicates are ignored.
    pub fn object_from_points(
        &self,
        points: impl IntoIterator<Item = Point>,
    ) -> Result<Object<AnyPointSet>, ConfigError> {
        let mut object = self.empty_object()?;
        let set = object.point_set_mut();
        for p in points {
            if !set.domain().contains(&p) {
                return Err(ConfigError::PointOutsideDomain { point: p });
            }
            set.insert(p);
        }
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validates() {
        let config = ObjectConfig::default();
        assert!(config.validate().is_ok());
        let dt = config.topology().unwrap();
        assert_eq!(dt.mode(), TopologyMode::Jordan);
        assert!(dt.kappa().downcast_ref::<DomainAdjacency>().is_some());
        assert_eq!(config.domain().unwrap().size(), 17 * 17);
    }

    #[test]
    fn inverted_corners_are_rejected() {
        let config = ObjectConfig {
            lower: vec![0, 5],
            upper: vec![3, 2],
            ..ObjectConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Domain(DomainError::InvertedBounds { axis: 1, .. }))
        ));
    }

    #[test]
    fn norm_bound_above_dimension_is_rejected() {
        let config = ObjectConfig {
            background: AdjacencySpec::new(3),
            ..ObjectConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Adjacency(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("adjacency: "), "{err}");
    }

    #[test]
    fn equal_relations_are_not_a_jordan_pair() {
        let config = ObjectConfig {
            background: AdjacencySpec::new(1),
            ..ObjectConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Topology(TopologyError::NotJordanPair { .. }))
        ));
        let relaxed = ObjectConfig {
            mode: TopologyMode::NotJordan,
            ..config
        };
        assert!(relaxed.validate().is_ok());
    }

    #[test]
    fn dense_storage_limit() {
        let config = ObjectConfig {
            lower: vec![0, 0, 0],
            upper: vec![4095, 4095, 4095],
            foreground: AdjacencySpec::new(1),
            background: AdjacencySpec::new(3),
            set_kind: SetKind::Dense,
            ..ObjectConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsupportedSetKind {
                kind: SetKind::Dense,
                domain_size: 1 << 36,
            })
        );
    }

    #[test]
    fn points_outside_domain_are_rejected() {
        let err = ObjectConfig::default()
            .object_from_points([Point::from([0, 0]), Point::from([9, 0])])
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PointOutsideDomain {
                point: Point::from([9, 0])
            }
        );
    }

    #[test]
    fn set_kind_selects_backend() {
        let config = ObjectConfig {
            set_kind: SetKind::Dense,
            ..ObjectConfig::default()
        };
        let object = config.empty_object().unwrap();
        assert_eq!(object.point_set().kind(), SetKind::Dense);
    }

    #[test]
    fn unbounded_adjacencies_see_past_the_domain() {
        let bounded = ObjectConfig {
            lower: vec![0, 0],
            upper: vec![2, 2],
            ..ObjectConfig::default()
        };
        let unbounded = ObjectConfig {
            bound_to_domain: false,
            ..bounded.clone()
        };
        let full: Vec<Point> = bounded.domain().unwrap().iter().collect();
        assert!(bounded
            .object_from_points(full.clone())
            .unwrap()
            .border()
            .is_empty());
        assert_eq!(
            unbounded.object_from_points(full).unwrap().border().len(),
            8
        );
    }
}
