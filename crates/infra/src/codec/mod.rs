//! Codec adapters for the persisted record sequence

mod json;

// Re-export public API
pub use json::JsonCodec;
