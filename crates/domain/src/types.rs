//! Persisted record types

use serde::{Deserialize, Serialize};

/// A single persisted cache entry.
///
/// The on-disk form of a cache is a sequence of these records; the file root
/// is the sequence itself, not a keyed document. Record order follows the
/// cache registry's iteration order and is not guaranteed to be stable
/// between writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<K, V> {
    /// The cache key this record was stored under
    pub key: K,

    /// The payload resident for `key` at encode time
    pub value: V,
}

impl<K, V> Record<K, V> {
    /// Create a record from a key-value pair
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}
