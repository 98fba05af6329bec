//! Adjacency relations and digital topologies for digitop.
//!
//! This crate defines the [`Adjacency`] trait, through which every
//! neighbourhood, border and connectivity query flows, along with
//! concrete relations and the [`DigitalTopology`] pairing a foreground and
//! a background adjacency.
//!
//! # Backends
//!
//! - [`MetricAdjacency`]: lattice-wide relation bounded by the L1 and L∞
//!   norms (4/8 in 2D, 6/18/26 in 3D)
//! - [`DomainAdjacency`]: any adjacency restricted to a [`HyperRectDomain`]
//! - [`ExplicitAdjacency`]: rule-based relation from an explicit edge table
//!
//! [`HyperRectDomain`]: digitop_core::HyperRectDomain

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod domain_adjacency;
pub mod error;
pub mod explicit;
pub mod metric;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::{Adjacency, Neighbours};
pub use domain_adjacency::DomainAdjacency;
pub use error::{AdjacencyError, TopologyError};
pub use explicit::ExplicitAdjacency;
pub use metric::{MetricAdjacency, MAX_METRIC_DIM};
pub use topology::{DigitalTopology, TopologyMode};
