//! Point sets and copy-on-write storage for digitop.
//!
//! [`PointSet`] is the storage capability digital objects are built on.
//! Three backends trade memory for lookup speed, and [`AnyPointSet`]
//! picks one at run time from [`SetKind`]. [`CowContainer`] shares a set
//! between owners until one of them writes to it.
//!
//! # Backends
//!
//! - [`SmallPointSet`]: inline vector with linear lookup, for neighbourhoods
//! - [`HashPointSet`]: insertion-ordered hash set
//! - [`DensePointSet`]: one bit per domain point

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod any;
pub mod cow;
pub mod dense;
pub mod hashed;
pub mod point_set;
pub mod small;

pub use any::{AnyIter, AnyPointSet, SetAccess, SetKind, SetSize};
pub use cow::CowContainer;
pub use dense::DensePointSet;
pub use hashed::HashPointSet;
pub use point_set::PointSet;
pub use small::SmallPointSet;
