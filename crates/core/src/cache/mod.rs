//! Generic cache container with pluggable eviction and persistence
//!
//! The container composes two opaque capabilities: an [`EvictionStore`] that
//! holds the payloads and may drop entries under internal pressure, and an
//! optional persistence pair (a target location plus a [`Codec`]) that causes
//! every successful mutation to re-encode the full contents and overwrite a
//! single file through a [`FileSink`].
//!
//! # Example
//!
//! ```rust,ignore
//! use stash_core::Cache;
//! use stash_infra::{AtomicFileSink, BoundedStore, JsonCodec, StoreConfig};
//!
//! let store: BoundedStore<String, i32> = BoundedStore::new(StoreConfig::lru(100));
//! let mut cache = Cache::new(store, Box::new(AtomicFileSink));
//! cache.set_location(Some("/tmp/stash.json".into()));
//! cache.set_codec(Some(Box::new(JsonCodec)));
//!
//! cache.insert("answer".to_string(), 42);
//! assert_eq!(cache.get(&"answer".to_string()), Some(42));
//! ```
//!
//! [`EvictionStore`]: ports::EvictionStore
//! [`Codec`]: ports::Codec
//! [`FileSink`]: ports::FileSink

pub mod container;
pub mod ports;

// Re-export public API
pub use container::Cache;
