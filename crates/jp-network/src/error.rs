//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `jp-network`.
///
/// Graph construction never fails: bad stops and routes are skipped and
/// logged.  These variants cover snapshot loading and explicit lookups.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("stop {0:?} not found in network")]
    UnknownStop(String),

    #[error("snapshot parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
