//! Lattice points, norms and bounded domains for digitop.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the integer [`Point`] every other crate manipulates, the [`Norm`]s
//! used to measure displacements, and the [`HyperRectDomain`] that bounds
//! point sets and adjacency enumeration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod point;

pub use domain::{DomainIter, HyperRectDomain};
pub use error::DomainError;
pub use point::{Coord, Norm, Point, Vector};
