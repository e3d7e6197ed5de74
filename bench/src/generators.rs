//! Deterministic topology generators. All O(n) or O(n + edges), single-threaded.

use hopnet_core::{Network, NetworkError};

/// Simple LCG for deterministic, fast pseudo-random numbers.
pub struct FastRng(u64);

impl FastRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    /// Uniform node id in `1..=size`.
    fn node(&mut self, size: u32) -> u32 {
        self.next(size as u64) as u32 + 1
    }
}

pub type Generator = fn(u32, u64) -> Result<Network, NetworkError>;

/// Path 1 – 2 – … – n. Longest possible hop distance.
pub fn gen_chain(node_count: u32, _seed: u64) -> Result<Network, NetworkError> {
    Network::from_edges(node_count, (1..node_count).map(|i| (i, i + 1)))
}

/// Node 1 joined to every other node. Widest single BFS level.
pub fn gen_star(node_count: u32, _seed: u64) -> Result<Network, NetworkError> {
    Network::from_edges(node_count, (2..=node_count).map(|i| (1, i)))
}

/// Ring with a chord every 1000 nodes, exercising visited-set pruning.
pub fn gen_cycle(node_count: u32, _seed: u64) -> Result<Network, NetworkError> {
    let ring = (1..=node_count).map(move |i| (i, i % node_count + 1));
    let chords = (1..=node_count)
        .step_by(1000)
        .map(move |i| (i, (i + node_count / 2 - 1) % node_count + 1));
    Network::from_edges(node_count, ring.chain(chords))
}

/// Erdos-Renyi: ~3 uniform random edges per node. Leaves some nodes isolated.
pub fn gen_random(node_count: u32, seed: u64) -> Result<Network, NetworkError> {
    let mut network = Network::new(node_count)?;
    let mut rng = FastRng::new(seed);

    for _ in 0..node_count as u64 * 3 {
        let from = rng.node(node_count);
        let to = rng.node(node_count);
        if from != to {
            network.connect(from, to)?;
        }
    }

    Ok(network)
}

/// Barbell: two random clusters joined by a chain of 10 bridge nodes.
///
/// Worst case for "find path through bottleneck". The far endpoint sits in
/// the second cluster so every query must cross the bridge.
pub fn gen_barbell(node_count: u32, seed: u64) -> Result<Network, NetworkError> {
    let bridge_len = 10u32;
    let cluster = (node_count - bridge_len) / 2;
    let mut network = Network::new(node_count)?;
    let mut rng = FastRng::new(seed);

    // Cluster A: 1..=cluster. Cluster B: the last `cluster` nodes.
    let b_start = node_count - cluster + 1;
    for (first, offset) in [(1u32, 0u32), (b_start, b_start - 1)] {
        // Spanning chain keeps each cluster connected; random edges add density.
        for i in first..first + cluster - 1 {
            network.connect(i, i + 1)?;
        }
        for i in 0..cluster {
            for _ in 0..5 {
                let target = rng.node(cluster) + offset;
                if target != first + i {
                    network.connect(first + i, target)?;
                }
            }
        }
    }

    // Bridge: cluster..=b_start, passing through the bridge nodes in between.
    for id in cluster..b_start {
        network.connect(id, id + 1)?;
    }

    Ok(network)
}
