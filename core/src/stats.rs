use serde::Serialize;

use crate::network::Network;

/// Point-in-time summary of a network's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    pub size: u32,
    pub edge_count: usize,
    pub self_loops: usize,
    /// Nodes with no edge other than a possible self-edge.
    pub isolated_nodes: usize,
    pub max_degree: usize,
    pub generation: u64,
    pub memory_bytes: usize,
}

impl NetworkStats {
    pub(crate) fn collect(network: &Network) -> Self {
        let mut self_loops = 0;
        let mut isolated_nodes = 0;
        let mut max_degree = 0;

        for id in network.node_ids() {
            let set = network.neighbor_set(id);
            let has_loop = set.contains(&id);
            if has_loop {
                self_loops += 1;
            }
            if set.len() == usize::from(has_loop) {
                isolated_nodes += 1;
            }
            max_degree = max_degree.max(set.len());
        }

        Self {
            size: network.size(),
            edge_count: network.edge_count(),
            self_loops,
            isolated_nodes,
            max_degree,
            generation: network.generation(),
            memory_bytes: network.memory_usage(),
        }
    }
}
