//! # Stash Core
//!
//! The cache container and its port interfaces - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - The `Cache` container and its authoritative key registry
//! - Port traits for the eviction store, codec, and file sink
//!
//! ## Architecture Principles
//! - Only depends on `stash-domain`
//! - No filesystem or serialization code
//! - All external capabilities via traits
//! - Pure, testable cache logic

pub mod cache;

// Re-export specific items to avoid ambiguity
pub use cache::ports::{Codec, EvictionListener, EvictionStore, FileSink};
pub use cache::Cache;
