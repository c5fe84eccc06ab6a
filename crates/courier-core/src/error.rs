//! Error types for the client pipeline

use std::time::Duration;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T, E = TransportError> = std::result::Result<T, E>;

/// Failure reported by a transport or a middleware layer.
///
/// A failed exchange is data flowing back up the chain, not a panic:
/// middleware may observe it, but the caller receives it unchanged. The
/// `Display` rendering is the stable textual form other layers embed in
/// their own output.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection to the remote endpoint could not be established.
    #[error("connect to {endpoint} failed: {reason}")]
    Connect {
        /// The endpoint the transport was dialing.
        endpoint: String,
        /// Transport-specific description of the failure.
        reason: String,
    },

    /// The exchange did not complete within the transport's deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// An I/O error below the transport.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A middleware layer failed before reaching the transport.
    #[error("middleware: {0}")]
    Middleware(String),
}
