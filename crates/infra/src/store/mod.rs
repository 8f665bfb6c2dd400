//! Count-bounded eviction store with configurable policies
//!
//! `BoundedStore` is one conforming implementation of the
//! [`EvictionStore`](stash_core::EvictionStore) port: a hashmap capped at a
//! configurable number of entries, evicting a victim chosen by the
//! configured policy whenever a new key arrives at capacity. The installed
//! listener is notified synchronously, exactly once per victim, and never
//! for explicit `remove` / `remove_all` calls.
//!
//! # Example
//!
//! ```
//! use stash_core::EvictionStore;
//! use stash_infra::{BoundedStore, StoreConfig};
//!
//! let store: BoundedStore<String, i32> = BoundedStore::new(StoreConfig::lru(100));
//! store.put("key".to_string(), 42);
//! assert_eq!(store.get(&"key".to_string()), Some(42));
//! ```

mod bounded;
mod config;
mod stats;

// Re-export public API
pub use bounded::BoundedStore;
pub use config::{EvictionPolicy, StoreConfig, StoreConfigBuilder};
pub use stats::StoreStats;
