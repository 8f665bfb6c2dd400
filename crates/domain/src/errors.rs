//! Error types used throughout the cache workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for stash operations
///
/// Persistence failures are always reported after the in-memory mutation has
/// committed; none of these variants implies a rollback of cache state.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CacheError {
    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for stash operations
pub type Result<T> = std::result::Result<T, CacheError>;
