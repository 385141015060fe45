//! Metro map analytics.
//!
//! Models a subway network as a graph of stations joined by same-line
//! track links and cross-line transfers, and answers structural
//! queries over it: neighbour lookup, transfer/termination/junction
//! classification, adjacency checks, and extraction of the maximal
//! line segment around a station.

pub mod domain;
pub mod network;
pub mod topology;

#[cfg(test)]
pub(crate) mod testutil;
