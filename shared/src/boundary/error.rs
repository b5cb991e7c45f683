use thiserror::Error;

/// Errors reported by the remote side of the mutation boundary
///
/// Any of these aborts the commit that issued the failing call. Mutations
/// already applied earlier in the same batch stay applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    /// The remote host is gone (channel closed, process exited)
    #[error("Remote host disconnected")]
    Disconnected,

    /// The message queue to the host is full; nothing drained it in time
    #[error("Cannot queue {operation} - queue full at capacity {capacity}")]
    QueueFull {
        operation: &'static str,
        capacity: usize,
    },

    /// The remote host refused the call
    #[error("Remote host rejected {operation}: {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },

    /// The remote host has no node with the given id
    #[error("Cannot {operation} - node {node_id} not found on remote host")]
    UnknownNode {
        node_id: u64,
        operation: &'static str,
    },

    /// Any other failure raised by the remote runtime
    #[error("Remote host error: {message}")]
    Remote {
        message: String,
    },
}
