use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::NetworkError;
use crate::network::{Network, NodeId};
use crate::stats::NetworkStats;

/// A [`Network`] shared across threads.
///
/// Every public operation holds one mutex for its full duration, so a
/// traversal always sees a single adjacency snapshot. Clones share the same
/// network.
#[derive(Debug, Clone)]
pub struct SharedNetwork {
    inner: Arc<Mutex<Network>>,
}

impl SharedNetwork {
    pub fn new(size: u32) -> Result<Self, NetworkError> {
        Network::new(size).map(Self::from)
    }

    pub fn connect(&self, a: NodeId, b: NodeId) -> Result<(), NetworkError> {
        self.lock().connect(a, b)
    }

    pub fn disconnect(&self, a: NodeId, b: NodeId) -> Result<(), NetworkError> {
        self.lock().disconnect(a, b)
    }

    pub fn query(&self, a: NodeId, b: NodeId) -> Result<bool, NetworkError> {
        self.lock().query(a, b)
    }

    pub fn level_connection(&self, a: NodeId, b: NodeId) -> Result<u32, NetworkError> {
        self.lock().level_connection(a, b)
    }

    pub fn hop_distance(&self, a: NodeId, b: NodeId) -> Result<Option<u32>, NetworkError> {
        self.lock().hop_distance(a, b)
    }

    pub fn shortest_path(&self, a: NodeId, b: NodeId) -> Result<Option<Vec<NodeId>>, NetworkError> {
        self.lock().shortest_path(a, b)
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    pub fn stats(&self) -> NetworkStats {
        self.lock().stats()
    }

    /// Run `f` against the network under the lock.
    pub fn with_network<R, F: FnOnce(&Network) -> R>(&self, f: F) -> R {
        f(&self.lock())
    }

    // Validation runs before any mutation, so a panicking holder cannot leave
    // adjacency half-updated and the poisoned guard is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Network> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Network> for SharedNetwork {
    fn from(network: Network) -> Self {
        Self { inner: Arc::new(Mutex::new(network)) }
    }
}
