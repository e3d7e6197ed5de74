use std::collections::VecDeque;

use serde::Serialize;
use tracing::trace;

use crate::network::{Network, NodeId};

/// A node found during BFS neighborhood traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub node_id: NodeId,
    pub distance: u32,
}

/// Dense visited bitmap indexed by node id. Slot 0 is never used.
struct Visited(Vec<bool>);

impl Visited {
    fn new(network: &Network) -> Self {
        Self(vec![false; network.size() as usize + 1])
    }

    /// Mark `id`; returns true if it was not yet visited.
    fn insert(&mut self, id: NodeId) -> bool {
        !std::mem::replace(&mut self.0[id as usize], true)
    }

    fn count(&self) -> usize {
        self.0.iter().filter(|&&v| v).count()
    }
}

/// Depth-first reachability from `start` to `target`.
///
/// Uses an explicit stack so traversal depth is bounded by heap, not by the
/// call stack. Each node is pushed at most once. Returns as soon as `target`
/// is seen as a neighbor.
pub(crate) fn is_reachable(network: &Network, start: NodeId, target: NodeId) -> bool {
    if start == target {
        return true;
    }

    let mut visited = Visited::new(network);
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        for &neighbor in network.neighbor_set(current) {
            if neighbor == target {
                return true;
            }
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    trace!(start, target, visited = visited.count(), "hopnet: target unreachable");
    false
}

/// BFS hop count from `start` to `target`: the level at which `target` is
/// first dequeued. `Some(0)` when `start == target`, `None` if unreachable.
pub(crate) fn bfs_level(network: &Network, start: NodeId, target: NodeId) -> Option<u32> {
    if start == target {
        return Some(0);
    }

    let mut visited = Visited::new(network);
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, level)) = queue.pop_front() {
        if current == target {
            return Some(level);
        }
        for &neighbor in network.neighbor_set(current) {
            if visited.insert(neighbor) {
                queue.push_back((neighbor, level + 1));
            }
        }
    }

    trace!(start, target, visited = visited.count(), "hopnet: level search exhausted");
    None
}

/// Shortest path from `start` to `target` using BFS with parent pointers.
///
/// Returns the path including both endpoints, or None if no path exists.
pub(crate) fn shortest_path(network: &Network, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    if start == target {
        return Some(vec![start]);
    }

    // parent[id] == 0 means unvisited; the start node is its own parent.
    let mut parent: Vec<NodeId> = vec![0; network.size() as usize + 1];
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    parent[start as usize] = start;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &neighbor in network.neighbor_set(current) {
            if parent[neighbor as usize] != 0 {
                continue;
            }
            parent[neighbor as usize] = current;
            if neighbor == target {
                return Some(reconstruct_path(&parent, start, target));
            }
            queue.push_back(neighbor);
        }
    }

    None
}

fn reconstruct_path(parent: &[NodeId], start: NodeId, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        current = parent[current as usize];
        path.push(current);
    }
    path.reverse();
    path
}

/// Every node reachable from `start` within `max_depth` hops, at its minimum
/// distance. `start` itself is excluded. Sorted by (distance, node_id).
pub(crate) fn bfs_neighborhood(network: &Network, start: NodeId, max_depth: u32) -> Vec<Neighbor> {
    let mut visited = Visited::new(network);
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    let mut found = Vec::new();
    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for &neighbor in network.neighbor_set(current) {
            if visited.insert(neighbor) {
                found.push(Neighbor { node_id: neighbor, distance: depth + 1 });
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    found.sort_unstable_by_key(|n| (n.distance, n.node_id));
    found
}
