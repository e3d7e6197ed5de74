//! hopnet-core: reachability and hop-distance over a fixed, dense network.
//!
//! A pure Rust library holding an undirected, unweighted adjacency structure
//! over nodes `1..=size` and answering two questions about it: are two nodes
//! connected, and how many hops apart are they.
//!
//! [`Network`] is single-threaded; [`SharedNetwork`] wraps it in a lock for
//! concurrent callers.

mod error;
mod network;
mod shared;
mod stats;
mod traversal;

pub use error::{InvalidArgument, NetworkError};
pub use network::{Network, NodeId};
pub use shared::SharedNetwork;
pub use stats::NetworkStats;
pub use traversal::Neighbor;
