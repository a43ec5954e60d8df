//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `JpError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

/// The base error type for `jp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum JpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `jp-core`.
pub type JpResult<T> = Result<T, JpError>;
