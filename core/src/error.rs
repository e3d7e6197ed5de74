use thiserror::Error;

use crate::network::NodeId;

/// The reason an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("network size must be positive, got {size}")]
    NonPositiveSize { size: u32 },

    #[error("node {node} is outside the network range 1..={size}")]
    NodeOutOfRange { node: NodeId, size: u32 },
}

/// Errors returned by [`Network`](crate::Network) operations.
///
/// Every failure is a synchronous validation failure raised before any
/// mutation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

impl NetworkError {
    /// The rejected-argument detail.
    pub fn detail(&self) -> InvalidArgument {
        match self {
            NetworkError::InvalidArgument(detail) => *detail,
        }
    }
}
