//! Count-bounded store implementation with configurable eviction policies

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;
use stash_core::{EvictionListener, EvictionStore};

use super::config::{EvictionPolicy, StoreConfig};
use super::stats::{MetricsCollector, StoreStats};

/// Entry stored with metadata for eviction policies
struct StoreEntry<V> {
    value: V,
    access_count: u64,
}

/// Internal tables guarded by a single lock
struct StoreTables<K, V>
where
    K: Eq + Hash + Clone,
{
    entries: HashMap<K, StoreEntry<V>>,
    /// Tracks order for LRU/FIFO eviction
    access_order: Vec<K>,
}

impl<K, V> StoreTables<K, V>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self { entries: HashMap::new(), access_order: Vec::new() }
    }
}

/// Count-bounded key-value store with a single eviction-listener slot
///
/// When a `put` arrives at capacity with a new key, one victim is chosen by
/// the configured [`EvictionPolicy`] and removed; the listener is invoked
/// with the victim's key and value after the internal lock is released but
/// before `put` returns. Explicit `remove` / `remove_all` calls never
/// notify.
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`)
/// - `V`: Value type (must be `Clone`)
pub struct BoundedStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    tables: Mutex<StoreTables<K, V>>,
    listener: Mutex<Option<EvictionListener<K, V>>>,
    config: StoreConfig,
    metrics: MetricsCollector,
}

impl<K, V> BoundedStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new store with the given configuration
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tables: Mutex::new(StoreTables::new()),
            listener: Mutex::new(None),
            config,
            metrics: MetricsCollector::new(),
        }
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.tables.lock().entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get current statistics snapshot
    pub fn stats(&self) -> StoreStats {
        self.metrics.snapshot(self.len(), self.config.max_size)
    }

    /// Choose and remove one victim according to the configured policy
    fn evict_one(&self, tables: &mut StoreTables<K, V>) -> Option<(K, V)> {
        let victim = match self.config.eviction_policy {
            // Least recently used / first inserted (first in access order)
            EvictionPolicy::Lru | EvictionPolicy::Fifo => tables.access_order.first().cloned(),

            EvictionPolicy::Lfu => tables
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.access_count)
                .map(|(key, _)| key.clone()),

            EvictionPolicy::Random => {
                use rand::seq::IteratorRandom;
                let mut rng = rand::thread_rng();
                tables.entries.keys().choose(&mut rng).cloned()
            }

            EvictionPolicy::None => None,
        };

        let key = victim?;
        let entry = tables.entries.remove(&key)?;
        tables.access_order.retain(|k| k != &key);
        Some((key, entry.value))
    }
}

impl<K, V> EvictionStore<K, V> for BoundedStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn put(&self, key: K, value: V) {
        let evicted = {
            let mut tables = self.tables.lock();

            let mut evicted = None;
            if let Some(max_size) = self.config.max_size {
                if tables.entries.len() >= max_size && !tables.entries.contains_key(&key) {
                    evicted = self.evict_one(&mut tables);
                }
            }

            tables.entries.insert(key.clone(), StoreEntry { value, access_count: 0 });

            // Update access order for LRU/FIFO policies
            if matches!(self.config.eviction_policy, EvictionPolicy::Lru | EvictionPolicy::Fifo) {
                tables.access_order.retain(|k| k != &key);
                tables.access_order.push(key);
            }

            evicted
        };

        if self.config.track_metrics {
            self.metrics.record_insert();
        }

        if let Some((key, value)) = evicted {
            if self.config.track_metrics {
                self.metrics.record_eviction();
            }
            tracing::trace!("bounded store evicted an entry at capacity");
            // Invoked outside the table lock so the listener may observe the
            // store, still synchronously within this put.
            if let Some(listener) = self.listener.lock().as_ref() {
                listener(key, value);
            }
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        let mut tables = self.tables.lock();

        if let Some(entry) = tables.entries.get_mut(key) {
            entry.access_count += 1;
            let value = entry.value.clone();

            // Update LRU order (after the entry borrow has ended)
            if self.config.eviction_policy == EvictionPolicy::Lru {
                tables.access_order.retain(|k| k != key);
                tables.access_order.push(key.clone());
            }
            drop(tables);

            if self.config.track_metrics {
                self.metrics.record_hit();
            }
            Some(value)
        } else {
            drop(tables);
            if self.config.track_metrics {
                self.metrics.record_miss();
            }
            None
        }
    }

    fn remove(&self, key: &K) {
        let mut tables = self.tables.lock();
        tables.entries.remove(key);
        tables.access_order.retain(|k| k != key);
    }

    fn remove_all(&self) {
        let mut tables = self.tables.lock();
        tables.entries.clear();
        tables.access_order.clear();
    }

    fn on_evict(&self, listener: EvictionListener<K, V>) {
        *self.listener.lock() = Some(listener);
    }
}
