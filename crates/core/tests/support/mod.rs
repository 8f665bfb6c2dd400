//! Shared port mocks for cache integration tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use stash_core::{Codec, EvictionListener, EvictionStore, FileSink};
use stash_domain::{CacheError, Record, Result};

/// In-memory store with an optional entry cap and FIFO eviction.
///
/// A `MemStore` is a handle to a shared table; cloning yields a second
/// handle, so tests can keep driving the store after moving one handle into
/// a cache (or after dropping the cache). Deterministic: when full, the
/// oldest inserted key is dropped and the listener fires. `evict_now` lets
/// tests trigger a store-driven eviction outside any cache API call.
pub struct MemStore<K, V> {
    inner: Arc<MemStoreInner<K, V>>,
}

struct MemStoreInner<K, V> {
    entries: Mutex<HashMap<K, V>>,
    insertion_order: Mutex<Vec<K>>,
    max_size: Option<usize>,
    listener: Mutex<Option<EvictionListener<K, V>>>,
}

impl<K, V> Clone for MemStore<K, V> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<K, V> MemStore<K, V>
where
    K: Eq + std::hash::Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::bounded(None)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self::bounded(Some(max_size))
    }

    fn bounded(max_size: Option<usize>) -> Self {
        Self {
            inner: Arc::new(MemStoreInner {
                entries: Mutex::new(HashMap::new()),
                insertion_order: Mutex::new(Vec::new()),
                max_size,
                listener: Mutex::new(None),
            }),
        }
    }

    /// Drop `key` as if internal pressure evicted it, firing the listener.
    pub fn evict_now(&self, key: &K) {
        let value = self.inner.entries.lock().unwrap().remove(key);
        self.inner.insertion_order.lock().unwrap().retain(|k| k != key);
        if let Some(value) = value {
            if let Some(listener) = self.inner.listener.lock().unwrap().as_ref() {
                listener(key.clone(), value);
            }
        }
    }

    fn evict_oldest(&self) -> Option<(K, V)> {
        let oldest = {
            let mut order = self.inner.insertion_order.lock().unwrap();
            if order.is_empty() { None } else { Some(order.remove(0)) }
        };
        let key = oldest?;
        let value = self.inner.entries.lock().unwrap().remove(&key)?;
        Some((key, value))
    }
}

impl<K, V> EvictionStore<K, V> for MemStore<K, V>
where
    K: Eq + std::hash::Hash + Clone,
    V: Clone,
{
    fn put(&self, key: K, value: V) {
        let at_capacity = {
            let entries = self.inner.entries.lock().unwrap();
            self.inner
                .max_size
                .is_some_and(|max_size| entries.len() >= max_size && !entries.contains_key(&key))
        };
        let evicted = if at_capacity { self.evict_oldest() } else { None };

        self.inner.entries.lock().unwrap().insert(key.clone(), value);
        let mut order = self.inner.insertion_order.lock().unwrap();
        order.retain(|k| k != &key);
        order.push(key);
        drop(order);

        if let Some((key, value)) = evicted {
            if let Some(listener) = self.inner.listener.lock().unwrap().as_ref() {
                listener(key, value);
            }
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.inner.entries.lock().unwrap().get(key).cloned()
    }

    fn remove(&self, key: &K) {
        self.inner.entries.lock().unwrap().remove(key);
        self.inner.insertion_order.lock().unwrap().retain(|k| k != key);
    }

    fn remove_all(&self) {
        self.inner.entries.lock().unwrap().clear();
        self.inner.insertion_order.lock().unwrap().clear();
    }

    fn on_evict(&self, listener: EvictionListener<K, V>) {
        *self.inner.listener.lock().unwrap() = Some(listener);
    }
}

/// Store that silently drops new entries once full: no eviction, no
/// notification. Exercises the optimistic-registry contract.
pub struct RefusingStore<K, V> {
    entries: Mutex<HashMap<K, V>>,
    max_size: usize,
}

impl<K, V> RefusingStore<K, V> {
    pub fn with_capacity(max_size: usize) -> Self {
        Self { entries: Mutex::new(HashMap::new()), max_size }
    }
}

impl<K, V> EvictionStore<K, V> for RefusingStore<K, V>
where
    K: Eq + std::hash::Hash + Clone,
    V: Clone,
{
    fn put(&self, key: K, value: V) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= self.max_size && !entries.contains_key(&key) {
            return;
        }
        entries.insert(key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn remove(&self, key: &K) {
        self.entries.lock().unwrap().remove(key);
    }

    fn remove_all(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn on_evict(&self, _listener: EvictionListener<K, V>) {
        // Refuses instead of evicting, so the slot is unused.
    }
}

/// Sink that records every write so tests can assert on file contents
/// without touching the filesystem.
#[derive(Clone, Default)]
pub struct CapturingSink {
    writes: Arc<Mutex<Vec<(PathBuf, Vec<u8>)>>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn last_write(&self) -> Option<Vec<u8>> {
        self.writes.lock().unwrap().last().map(|(_, bytes)| bytes.clone())
    }
}

impl FileSink for CapturingSink {
    fn write(&self, location: &Path, bytes: &[u8]) -> Result<()> {
        self.writes.lock().unwrap().push((location.to_path_buf(), bytes.to_vec()));
        Ok(())
    }
}

/// Sink that rejects every write with an I/O error.
pub struct FailingSink;

impl FileSink for FailingSink {
    fn write(&self, location: &Path, _bytes: &[u8]) -> Result<()> {
        Err(CacheError::Io(format!("refusing to write {}", location.display())))
    }
}

/// JSON codec that starts failing encodes after a configured number of
/// successful calls.
pub struct FlakyCodec {
    fail_after: usize,
    encodes: AtomicUsize,
}

impl FlakyCodec {
    /// A codec that never fails.
    pub fn reliable() -> Self {
        Self::fail_after(usize::MAX)
    }

    /// A codec whose first `fail_after` encodes succeed and the rest fail.
    pub fn fail_after(fail_after: usize) -> Self {
        Self { fail_after, encodes: AtomicUsize::new(0) }
    }
}

impl Codec<Vec<Record<String, i32>>> for FlakyCodec {
    fn encode(&self, value: &Vec<Record<String, i32>>) -> Result<Vec<u8>> {
        let calls = self.encodes.fetch_add(1, Ordering::SeqCst);
        if calls >= self.fail_after {
            return Err(CacheError::Encode("codec failure injected".to_string()));
        }
        serde_json::to_vec(value).map_err(|err| CacheError::Encode(err.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Record<String, i32>>> {
        serde_json::from_slice(bytes).map_err(|err| CacheError::Decode(err.to_string()))
    }
}
