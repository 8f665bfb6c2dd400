//! The cache container and its authoritative key registry
//!
//! Every mutating operation applies to the eviction store first, then to the
//! registry, then re-encodes and rewrites the persistence target when one is
//! configured. Eviction flows the other way: the store notifies the listener
//! installed at construction, and the listener's only job is to drop the
//! evicted key from the registry. Eviction never triggers a persistence
//! write; the on-disk copy catches up on the next explicit mutation.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use stash_domain::{CacheError, Record, Result};

use super::ports::{Codec, EvictionListener, EvictionStore, FileSink};

type Registry<K> = Mutex<HashSet<K>>;

/// Generic cache with store-driven eviction and optional file persistence
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`, sendable into the eviction
///   listener)
/// - `V`: Value type
/// - `S`: The eviction store capability holding the payloads
///
/// The design assumes a single logical owner: mutating operations are not
/// synchronized against each other. The one reentrant path is the eviction
/// listener, which the store may invoke from inside a `put`; it only touches
/// the registry and never re-enters the store or the persistence path.
pub struct Cache<K, V, S>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: 'static,
    S: EvictionStore<K, V>,
{
    store: S,
    /// Authoritative set of keys the cache believes are resident. Shared
    /// with the eviction listener through a weak handle.
    keys: Arc<Registry<K>>,
    location: Option<PathBuf>,
    codec: Option<Box<dyn Codec<Vec<Record<K, V>>>>>,
    sink: Box<dyn FileSink>,
}

impl<K, V, S> Cache<K, V, S>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: 'static,
    S: EvictionStore<K, V>,
{
    /// Create a cache over `store`, writing through `sink` whenever
    /// persistence is configured.
    ///
    /// Installs the eviction listener on the store. The listener holds a
    /// non-owning handle to the registry, so it stays safe to invoke while
    /// the cache is being torn down and does not keep the registry alive.
    pub fn new(store: S, sink: Box<dyn FileSink>) -> Self {
        let keys: Arc<Registry<K>> = Arc::new(Mutex::new(HashSet::new()));
        store.on_evict(Self::eviction_listener(Arc::downgrade(&keys)));
        Self { store, keys, location: None, codec: None, sink }
    }

    fn eviction_listener(registry: Weak<Registry<K>>) -> EvictionListener<K, V> {
        Box::new(move |key, _value| {
            if let Some(keys) = registry.upgrade() {
                keys.lock().remove(&key);
                tracing::trace!("store evicted an entry; key dropped from registry");
            }
        })
    }

    /// Look up the value stored under `key`.
    ///
    /// Always consults the store directly, so a key the store has evicted
    /// reads as absent even before the registry notices. No side effects,
    /// never fails.
    pub fn get(&self, key: &K) -> Option<V> {
        self.store.get(key)
    }

    /// Insert or overwrite `value` under `key`, then persist if active.
    ///
    /// The registry add is unconditional and optimistic: the key is tracked
    /// even if the store refused the entry or evicted it within the `put`
    /// call. Any eviction of *other* keys caused by this insert fires the
    /// listener before this method returns.
    ///
    /// # Errors
    /// Propagates encode or write failures from the persistence path. The
    /// in-memory mutation has already committed when such an error surfaces.
    pub fn try_insert(&self, key: K, value: V) -> Result<()> {
        self.store.put(key.clone(), value);
        self.keys.lock().insert(key);
        self.persist()
    }

    /// Non-fallible form of [`try_insert`](Self::try_insert); persistence
    /// errors are logged and discarded.
    pub fn insert(&self, key: K, value: V) {
        if let Err(err) = self.try_insert(key, value) {
            tracing::warn!(error = %err, "cache persisted state is behind in-memory state");
        }
    }

    /// Remove the entry under `key`, then persist if active.
    ///
    /// Idempotent: removing an absent key is a no-op, not an error.
    ///
    /// # Errors
    /// Propagates encode or write failures from the persistence path.
    pub fn try_remove(&self, key: &K) -> Result<()> {
        self.store.remove(key);
        self.keys.lock().remove(key);
        self.persist()
    }

    /// Non-fallible form of [`try_remove`](Self::try_remove); persistence
    /// errors are logged and discarded.
    pub fn remove(&self, key: &K) {
        if let Err(err) = self.try_remove(key) {
            tracing::warn!(error = %err, "cache persisted state is behind in-memory state");
        }
    }

    /// Drop every entry, then persist an empty record set if active.
    ///
    /// # Errors
    /// Propagates encode or write failures from the persistence path.
    pub fn try_clear(&self) -> Result<()> {
        self.store.remove_all();
        self.keys.lock().clear();
        self.persist()
    }

    /// Non-fallible form of [`try_clear`](Self::try_clear); persistence
    /// errors are logged and discarded.
    pub fn clear(&self) {
        if let Err(err) = self.try_clear() {
            tracing::warn!(error = %err, "cache persisted state is behind in-memory state");
        }
    }

    /// Assignment-style sugar: `Some(value)` behaves like
    /// [`insert`](Self::insert), `None` like [`remove`](Self::remove).
    pub fn put(&self, key: K, value: Option<V>) {
        match value {
            Some(value) => self.insert(key, value),
            None => self.remove(&key),
        }
    }

    /// Set or clear the persistence target location.
    pub fn set_location(&mut self, location: Option<PathBuf>) {
        self.location = location;
    }

    /// The configured persistence target, if any.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Set or clear the persistence codec.
    pub fn set_codec(&mut self, codec: Option<Box<dyn Codec<Vec<Record<K, V>>>>>) {
        self.codec = codec;
    }

    /// Whether a codec is configured.
    pub fn has_codec(&self) -> bool {
        self.codec.is_some()
    }

    /// Persistence runs iff a location and a codec are both configured;
    /// either one alone disables it.
    pub fn persistence_active(&self) -> bool {
        self.location.is_some() && self.codec.is_some()
    }

    /// Number of keys currently tracked by the registry.
    pub fn len(&self) -> usize {
        self.keys.lock().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The registry's current keys, in iteration order (not stable).
    pub fn keys(&self) -> Vec<K> {
        self.keys.lock().iter().cloned().collect()
    }

    /// Point-in-time view of every registry key that still resolves in the
    /// store, as persisted records.
    ///
    /// Keys the store has dropped without (or before) notifying are skipped;
    /// this is the defensive check the encode path relies on when registry
    /// and store have diverged.
    pub fn snapshot(&self) -> Vec<Record<K, V>> {
        let keys = self.keys.lock();
        keys.iter()
            .filter_map(|key| self.store.get(key).map(|value| Record::new(key.clone(), value)))
            .collect()
    }

    /// Rehydrate this cache from previously encoded bytes by replaying each
    /// record through the normal insert path.
    ///
    /// This is the only supported reconstruction route; it does not bypass
    /// the registry. When persistence is already configured on `self`, every
    /// replayed insert re-runs the write path - redundant but harmless, so
    /// callers usually configure the location after restoring.
    ///
    /// # Errors
    /// - [`CacheError::Config`] when no codec is configured
    /// - [`CacheError::Decode`] when the bytes are malformed
    /// - encode/write failures from replayed inserts when persistence is
    ///   already active
    pub fn try_restore(&self, bytes: &[u8]) -> Result<()> {
        let codec = self
            .codec
            .as_ref()
            .ok_or_else(|| CacheError::Config("no codec configured for restore".to_string()))?;
        let records = codec.decode(bytes)?;
        let count = records.len();
        for record in records {
            self.try_insert(record.key, record.value)?;
        }
        tracing::debug!(records = count, "cache restored from encoded contents");
        Ok(())
    }

    /// Re-encode the full registry contents and overwrite the target.
    ///
    /// A no-op unless both location and codec are configured. The write is
    /// all-or-nothing through the sink; on failure the previous file
    /// contents remain and the in-memory state is not rolled back.
    fn persist(&self) -> Result<()> {
        let (Some(location), Some(codec)) = (self.location.as_deref(), self.codec.as_ref())
        else {
            tracing::trace!("persistence inactive; skipping write");
            return Ok(());
        };

        let records = self.snapshot();
        let bytes = codec.encode(&records)?;
        self.sink.write(location, &bytes)?;
        tracing::debug!(
            records = records.len(),
            location = %location.display(),
            "cache contents persisted"
        );
        Ok(())
    }
}
