use crate::bytes::AsBytes;
use crate::error::Error;
use crate::hash::BucketHasher;
use std::cmp::Ordering;

/// Bucket count a map starts with unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 128;

/// Which hash strategy to use for bucket assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashStrategy {
    /// Murmur-style mixing hash (default, well-distributed).
    #[default]
    Murmur,
    /// Polynomial djb2 hash (cheapest per byte).
    Djb2,
    /// From-scratch SHA-256 digest hash (slow, near-uniform distribution).
    Sha256,
    /// ahash-backed strategy for callers that prefer the ecosystem hasher.
    AHash,
    /// fxhash-backed strategy (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

/// User-provided key comparison. Enables keys whose equality is narrower
/// than their byte view (or custom orderings for chain-level sorting).
pub trait KeyComparer<K: ?Sized> {
    /// Total order over keys; the map treats `Ordering::Equal` as a match.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Default comparison: lexicographic over the keys' byte views.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesComparer;

impl<K: AsBytes + ?Sized> KeyComparer<K> for BytesComparer {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.as_bytes().cmp(b.as_bytes())
    }
}

/// Configuration for a ChainMap instance.
#[derive(Debug)]
pub struct Config {
    pub(crate) initial_capacity: usize,
    pub(crate) hash_strategy: HashStrategy,
}

impl Config {
    /// Create a new config with defaults (128 buckets, murmur strategy).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting bucket count. Must be greater than 0; this is also
    /// the floor the map shrinks back to.
    pub fn initial_capacity(mut self, capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        self.initial_capacity = capacity;
        Ok(self)
    }

    /// Set the hash strategy to use.
    pub fn hash_strategy(mut self, strategy: HashStrategy) -> Self {
        self.hash_strategy = strategy;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            hash_strategy: HashStrategy::Murmur,
        }
    }
}

/// Builder for creating a ChainMap with custom configuration.
pub struct ChainMapBuilder<C = BytesComparer> {
    config: Config,
    comparer: C,
}

impl ChainMapBuilder<BytesComparer> {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            comparer: BytesComparer,
        }
    }
}

impl<C> ChainMapBuilder<C> {
    /// Set the starting bucket count. Must be greater than 0.
    pub fn initial_capacity(mut self, capacity: usize) -> Result<Self, Error> {
        self.config = self.config.initial_capacity(capacity)?;
        Ok(self)
    }

    /// Set the hash strategy to use.
    pub fn hash_strategy(mut self, strategy: HashStrategy) -> Self {
        self.config = self.config.hash_strategy(strategy);
        self
    }

    /// Use a custom key comparer instead of byte-view comparison.
    pub fn comparer<C2>(self, comparer: C2) -> ChainMapBuilder<C2> {
        ChainMapBuilder {
            config: self.config,
            comparer,
        }
    }

    /// Build a ChainMap with the configured settings.
    pub fn build<K, V>(self) -> Result<crate::ChainMap<K, V, C>, Error>
    where
        K: AsBytes,
        C: KeyComparer<K>,
    {
        crate::ChainMap::with_comparer(self.config, self.comparer)
    }
}

impl Default for ChainMapBuilder<BytesComparer> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a hash strategy instance based on the configuration.
pub(crate) fn create_hasher(strategy: HashStrategy) -> BucketHasher {
    match strategy {
        HashStrategy::Murmur => BucketHasher::Murmur,
        HashStrategy::Djb2 => BucketHasher::Djb2,
        HashStrategy::Sha256 => BucketHasher::Sha256,
        HashStrategy::AHash => BucketHasher::AHash,
        #[cfg(feature = "fxhash")]
        HashStrategy::FxHash => BucketHasher::FxHash,
    }
}
