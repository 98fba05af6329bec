//! digitop: digital topology on integer lattices.
//!
//! This is the facade crate that re-exports the public API of every
//! digitop sub-crate. For most users, adding `digitop` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use digitop::prelude::*;
//!
//! // A 5×5 square under the (4, 8) topology, restricted to its domain.
//! let config = ObjectConfig {
//!     lower: vec![-2, -2],
//!     upper: vec![2, 2],
//!     ..ObjectConfig::default()
//! };
//! let domain = config.domain().unwrap();
//! let mut square = config.object_from_points(domain.iter()).unwrap();
//! assert_eq!(square.len(), 25);
//!
//! // Nothing lies outside the domain, so the full square has no border.
//! assert!(square.border().is_empty());
//!
//! // Punch a hole: its eight surrounding points become border points.
//! let copy = square.clone();
//! square.erase(&Point::origin(2));
//! assert_eq!(square.border().len(), 8);
//! assert_eq!(copy.len(), 25);
//!
//! // Grow layers from a corner.
//! let mut expander = Expander::new(&square, Point::from([-2, -2]));
//! while expander.next_layer() {}
//! assert_eq!(expander.distance(), 8);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`kernel`] | `digitop-core` | Points, norms, rectangular domains |
//! | [`space`] | `digitop-space` | Adjacency relations and digital topologies |
//! | [`set`] | `digitop-set` | Point-set backends and copy-on-write storage |
//! | [`object`] | `digitop-object` | Objects, components, expansion, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Points, norms and rectangular domains (`digitop-core`).
pub use digitop_core as kernel;

/// Adjacency relations and digital topologies (`digitop-space`).
///
/// Provides the [`space::Adjacency`] trait and its backends:
/// [`space::MetricAdjacency`], [`space::DomainAdjacency`] and
/// [`space::ExplicitAdjacency`].
pub use digitop_space as space;

/// Point-set backends and copy-on-write storage (`digitop-set`).
///
/// [`set::PointSet`] is implemented by [`set::SmallPointSet`],
/// [`set::HashPointSet`], [`set::DensePointSet`] and [`set::AnyPointSet`].
pub use digitop_set as set;

/// Digital objects (`digitop-object`).
///
/// [`object::Object`] answers neighbourhood, border and connectivity
/// queries; [`object::Expander`] grows layers inside one.
pub use digitop_object as object;

/// Common imports for typical digitop usage.
///
/// ```rust
/// use digitop::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use digitop_core::{HyperRectDomain, Norm, Point};

    // Relations
    pub use digitop_space::{
        Adjacency, DigitalTopology, DomainAdjacency, MetricAdjacency, TopologyMode,
    };

    // Storage
    pub use digitop_set::{
        AnyPointSet, CowContainer, DensePointSet, HashPointSet, PointSet, SetKind, SmallPointSet,
    };

    // Objects
    pub use digitop_object::{
        AdjacencySpec, ConfigError, Connectedness, Expander, Object, ObjectConfig, SmallObject,
    };
}
