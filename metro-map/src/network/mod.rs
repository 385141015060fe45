//! The metro network model and its loader.
//!
//! [`Network`] is built once from a map payload and is read-only from
//! then on: every query and traversal goes through its lookup surface,
//! and nothing mutates a [`Station`] or [`Link`] after construction.

mod load;
mod model;
mod neighbours;

pub use load::{IdToken, LinkRecord, LoadError, MapPayload, StationRecord};
pub use model::{Link, LinkKind, Network, Station};
pub use neighbours::Neighbour;
