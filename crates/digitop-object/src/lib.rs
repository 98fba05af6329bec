//! Digital objects for digitop.
//!
//! An [`Object`] is a point set read through a [`DigitalTopology`]: the
//! foreground adjacency drives neighbourhoods, connectivity and layer
//! expansion, the background adjacency decides which points lie on the
//! border. Objects share their storage copy-on-write, so cloning is cheap
//! and every clone behaves as an independent value.
//!
//! [`Expander`] grows breadth-first layers from a set of seeds inside an
//! object. [`ObjectConfig`] builds validated domains, topologies and
//! objects from plain parameters.
//!
//! [`DigitalTopology`]: digitop_space::DigitalTopology

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod components;
pub mod config;
pub mod expander;
pub mod object;

pub use components::Connectedness;
pub use config::{AdjacencySpec, ConfigError, ObjectConfig};
pub use expander::{Expander, Layers};
pub use object::{Object, SmallObject};
