//! Identifier and error types for the metro domain.
//!
//! All identifier types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod error;
mod line;
mod link_id;
mod station;

pub use error::NetworkError;
pub use line::LineId;
pub use link_id::{InvalidLinkId, LinkId};
pub use station::{InvalidStationId, StationId};
