//! # Stash Infra
//!
//! Concrete adapters for the `stash-core` ports.
//!
//! This crate contains:
//! - `BoundedStore`: a count-bounded in-memory eviction store with
//!   configurable policies and an eviction-listener slot
//! - `JsonCodec`: serde_json encoding for the persisted record sequence
//! - `AtomicFileSink`: all-or-nothing file replacement via tempfile + rename
//!
//! ## Architecture
//! - Implements the port traits from `stash-core`
//! - All filesystem and serialization code lives here

pub mod codec;
pub mod fs;
pub mod store;

// Re-export public API
pub use codec::JsonCodec;
pub use fs::AtomicFileSink;
pub use store::{BoundedStore, EvictionPolicy, StoreConfig, StoreConfigBuilder, StoreStats};
