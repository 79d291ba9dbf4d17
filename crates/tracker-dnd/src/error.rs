//! Error types for drag payload decoding.

use thiserror::Error;

/// Reasons a transfer does not hold a usable project payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The transfer declares no data at all.
    #[error("drag carries no data")]
    Empty,

    /// The first declared kind is not one we understand.
    #[error("unsupported payload kind: {0}")]
    UnsupportedKind(String),

    /// The payload is present but the id is empty.
    #[error("payload has an empty project id")]
    EmptyId,
}

/// Result type alias for payload operations.
pub type Result<T> = std::result::Result<T, PayloadError>;
