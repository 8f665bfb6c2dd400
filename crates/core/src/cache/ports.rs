//! Port interfaces consumed by the cache container

use std::path::Path;

use stash_domain::Result;

/// Listener invoked by a store when it unilaterally drops an entry.
///
/// Receives the evicted key and its payload. Listeners must not re-enter the
/// store that invoked them.
pub type EvictionListener<K, V> = Box<dyn Fn(K, V) + Send + Sync>;

/// A bounded key-value store that may evict entries under internal pressure.
///
/// Implementations own the eviction policy entirely; the container never
/// inspects it. The contract for the listener slot:
/// - invoked synchronously, within the `put` call that caused the eviction
/// - at most once per dropped entry
/// - never for explicit `remove` / `remove_all` calls
pub trait EvictionStore<K, V> {
    /// Insert or overwrite an entry. May evict other entries to make room,
    /// invoking the listener for each victim before returning.
    fn put(&self, key: K, value: V);

    /// Look up the value stored under `key`.
    fn get(&self, key: &K) -> Option<V>;

    /// Remove an entry. Removing an absent key is a no-op; the eviction
    /// listener does not fire.
    fn remove(&self, key: &K);

    /// Drop every entry. The eviction listener does not fire.
    fn remove_all(&self);

    /// Install the eviction listener, replacing any previous one. The slot
    /// holds a single listener.
    fn on_evict(&self, listener: EvictionListener<K, V>);
}

/// Encode/decode capability for the persisted record sequence.
///
/// Parameterized over the encoded type so the trait stays object-safe; the
/// container uses `Codec<Vec<Record<K, V>>>`.
pub trait Codec<T>: Send + Sync {
    /// Encode `value` to bytes. Fails with [`CacheError::Encode`] when the
    /// content cannot be represented.
    ///
    /// [`CacheError::Encode`]: stash_domain::CacheError::Encode
    fn encode(&self, value: &T) -> Result<Vec<u8>>;

    /// Decode a previously encoded byte sequence. Fails with
    /// [`CacheError::Decode`] on malformed input.
    ///
    /// [`CacheError::Decode`]: stash_domain::CacheError::Decode
    fn decode(&self, bytes: &[u8]) -> Result<T>;
}

/// Filesystem write capability with overwrite semantics.
///
/// A write either fully replaces the previous contents of `location` or
/// leaves them intact; partial writes must never be observable to a
/// subsequent read.
pub trait FileSink: Send + Sync {
    /// Write `bytes` to `location`, replacing prior contents. Fails with
    /// [`CacheError::Io`] on permission, space, or path failures.
    ///
    /// [`CacheError::Io`]: stash_domain::CacheError::Io
    fn write(&self, location: &Path, bytes: &[u8]) -> Result<()>;
}
