//! Store configuration types and builder patterns

/// Eviction policy applied when the store is at capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Least Recently Used - evicts the least recently accessed entry
    #[default]
    Lru,
    /// Least Frequently Used - evicts the entry with the lowest access count
    Lfu,
    /// First In First Out - evicts the oldest entry by insertion time
    Fifo,
    /// Random eviction
    Random,
    /// No automatic eviction - the store grows past `max_size`
    None,
}

/// Configuration for store behavior
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of entries (None = unlimited)
    pub max_size: Option<usize>,

    /// Eviction policy when max_size is reached
    pub eviction_policy: EvictionPolicy,

    /// Whether to collect access metrics
    pub track_metrics: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { max_size: None, eviction_policy: EvictionPolicy::Lru, track_metrics: false }
    }
}

impl StoreConfig {
    /// Create a new configuration builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Quick preset for an LRU-bounded store
    ///
    /// # Example
    /// ```
    /// use stash_infra::StoreConfig;
    ///
    /// let config = StoreConfig::lru(1000);
    /// ```
    pub fn lru(max_size: usize) -> Self {
        Self { max_size: Some(max_size), eviction_policy: EvictionPolicy::Lru, track_metrics: false }
    }

    /// Quick preset for a FIFO-bounded store
    pub fn fifo(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            eviction_policy: EvictionPolicy::Fifo,
            track_metrics: false,
        }
    }

    /// Quick preset for an unbounded store (never evicts)
    pub fn unbounded() -> Self {
        Self { max_size: None, eviction_policy: EvictionPolicy::None, track_metrics: false }
    }
}

/// Builder for StoreConfig with fluent API
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum number of entries
    pub fn max_size(mut self, size: usize) -> Self {
        self.config.max_size = Some(size);
        self
    }

    /// Set eviction policy
    pub fn eviction_policy(mut self, policy: EvictionPolicy) -> Self {
        self.config.eviction_policy = policy;
        self
    }

    /// Enable or disable metrics tracking
    pub fn track_metrics(mut self, enabled: bool) -> Self {
        self.config.track_metrics = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        self.config
    }
}
