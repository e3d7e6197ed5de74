use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{InvalidArgument, NetworkError};
use crate::stats::NetworkStats;
use crate::traversal::{self, Neighbor};

/// Node label. Valid labels run from 1 to the network size inclusive.
pub type NodeId = u32;

/// Undirected, unweighted network over a fixed set of nodes `1..=size`.
///
/// Adjacency is stored densely: `adjacency[id - 1]` is the neighbor set of
/// node `id`. Every edge is recorded in both endpoint sets, so the structure
/// is always symmetric. The node count never changes after construction;
/// only edges are added and removed.
#[derive(Debug, Clone)]
pub struct Network {
    adjacency: Vec<HashSet<NodeId>>,
    generation: u64,
}

impl Network {
    /// Create a network of `size` isolated nodes.
    pub fn new(size: u32) -> Result<Self, NetworkError> {
        if size == 0 {
            warn!("hopnet: rejected network size 0");
            return Err(InvalidArgument::NonPositiveSize { size }.into());
        }
        Ok(Self {
            adjacency: (0..size).map(|_| HashSet::new()).collect(),
            generation: 0,
        })
    }

    /// Bulk construction from an edge list. Fails on the first invalid edge.
    pub fn from_edges<I>(size: u32, edges: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut network = Self::new(size)?;
        for (a, b) in edges {
            network.connect(a, b)?;
        }
        Ok(network)
    }

    pub fn size(&self) -> u32 {
        self.adjacency.len() as u32
    }

    /// Whether `id` names a node of this network.
    pub fn contains(&self, id: NodeId) -> bool {
        id >= 1 && id <= self.size()
    }

    /// Monotonic counter bumped by every connect/disconnect that changed adjacency.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Add the undirected edge `a`–`b`. Re-connecting an existing pair is a no-op.
    ///
    /// `connect(a, a)` is accepted and records a self-edge, which never
    /// changes any query answer.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), NetworkError> {
        self.validate_pair(a, b)?;
        let inserted = self.slot_mut(a).insert(b);
        self.slot_mut(b).insert(a);
        if inserted {
            self.generation += 1;
            debug!(a, b, generation = self.generation, "hopnet: connected");
        }
        Ok(())
    }

    /// Remove the undirected edge `a`–`b`. Removing an absent edge is a no-op.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> Result<(), NetworkError> {
        self.validate_pair(a, b)?;
        let removed = self.slot_mut(a).remove(&b);
        self.slot_mut(b).remove(&a);
        if removed {
            self.generation += 1;
            debug!(a, b, generation = self.generation, "hopnet: disconnected");
        }
        Ok(())
    }

    /// True iff `b` is reachable from `a` over zero or more edges.
    pub fn query(&self, a: NodeId, b: NodeId) -> Result<bool, NetworkError> {
        self.validate_pair(a, b)?;
        Ok(traversal::is_reachable(self, a, b))
    }

    /// Minimum number of hops from `a` to `b`.
    ///
    /// Returns 0 both when `a == b` and when `b` is unreachable from `a`.
    /// Use [`Network::hop_distance`] to tell those cases apart.
    pub fn level_connection(&self, a: NodeId, b: NodeId) -> Result<u32, NetworkError> {
        self.validate_pair(a, b)?;
        Ok(traversal::bfs_level(self, a, b).unwrap_or(0))
    }

    /// Minimum number of hops from `a` to `b`, or `None` if unreachable.
    pub fn hop_distance(&self, a: NodeId, b: NodeId) -> Result<Option<u32>, NetworkError> {
        self.validate_pair(a, b)?;
        Ok(traversal::bfs_level(self, a, b))
    }

    /// One shortest path from `a` to `b`, both endpoints included.
    pub fn shortest_path(&self, a: NodeId, b: NodeId) -> Result<Option<Vec<NodeId>>, NetworkError> {
        self.validate_pair(a, b)?;
        Ok(traversal::shortest_path(self, a, b))
    }

    /// Every node within `max_depth` hops of `start`, excluding `start`.
    pub fn neighborhood(&self, start: NodeId, max_depth: u32) -> Result<Vec<Neighbor>, NetworkError> {
        self.validate(start)?;
        Ok(traversal::bfs_neighborhood(self, start, max_depth))
    }

    /// Direct neighbors of `id`, in no particular order.
    pub fn neighbors(&self, id: NodeId) -> Result<impl Iterator<Item = NodeId> + '_, NetworkError> {
        self.validate(id)?;
        Ok(self.neighbor_set(id).iter().copied())
    }

    pub fn degree(&self, id: NodeId) -> Result<usize, NetworkError> {
        self.validate(id)?;
        Ok(self.neighbor_set(id).len())
    }

    /// Whether the edge `a`–`b` exists.
    pub fn is_connected_directly(&self, a: NodeId, b: NodeId) -> Result<bool, NetworkError> {
        self.validate_pair(a, b)?;
        Ok(self.neighbor_set(a).contains(&b))
    }

    /// Number of undirected edges. A self-edge counts once.
    pub fn edge_count(&self) -> usize {
        let (endpoints, loops) = self.adjacency.iter().enumerate().fold(
            (0usize, 0usize),
            |(endpoints, loops), (idx, set)| {
                let id = idx as NodeId + 1;
                (endpoints + set.len(), loops + usize::from(set.contains(&id)))
            },
        );
        // Each non-loop edge appears in two sets, a self-edge in one.
        (endpoints - loops) / 2 + loops
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let slots = self.adjacency.capacity() * size_of::<HashSet<NodeId>>();
        // Bucket storage plus one control byte per bucket.
        let buckets: usize = self
            .adjacency
            .iter()
            .map(|s| s.capacity() * (size_of::<NodeId>() + 1))
            .sum();

        size_of::<Self>() + slots + buckets
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats::collect(self)
    }

    /// Neighbor set of a node already known to be in range.
    pub(crate) fn neighbor_set(&self, id: NodeId) -> &HashSet<NodeId> {
        &self.adjacency[(id - 1) as usize]
    }

    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        1..=self.size()
    }

    fn slot_mut(&mut self, id: NodeId) -> &mut HashSet<NodeId> {
        &mut self.adjacency[(id - 1) as usize]
    }

    fn validate(&self, id: NodeId) -> Result<(), NetworkError> {
        if self.contains(id) {
            return Ok(());
        }
        warn!(node = id, size = self.size(), "hopnet: node out of range");
        Err(InvalidArgument::NodeOutOfRange { node: id, size: self.size() }.into())
    }

    fn validate_pair(&self, a: NodeId, b: NodeId) -> Result<(), NetworkError> {
        self.validate(a)?;
        self.validate(b)
    }
}
