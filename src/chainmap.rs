use crate::bytes::AsBytes;
use crate::chain::Chain;
use crate::config::{create_hasher, BytesComparer, Config, KeyComparer};
use crate::error::Error;
use crate::hash::BucketHasher;
use crate::stats::{OpCounters, Stats};
use std::cmp::Ordering;

/// Load factor above which the bucket array doubles.
const GROWTH_LOAD_FACTOR: f64 = 0.75;
/// Load factor below which the bucket array halves.
const SHRINK_LOAD_FACTOR: f64 = 0.25;
/// Longest-to-shortest chain ratio that also forces a growth resize.
const GROWTH_CHAIN_FACTOR: f64 = 2.0;
/// Capacity multiplier/divisor applied by a resize.
const RESIZE_FACTOR: usize = 2;

pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Separate-chaining hash map with pluggable hash strategies.
///
/// Entries hashing to the same bucket live on a [`Chain`]; the map reacts to
/// its own load factor and chain imbalance by rebuilding the bucket array at
/// double (or half) the capacity. Keys expose their bytes through
/// [`AsBytes`], and equality is decided by the map's [`KeyComparer`]
/// (byte comparison unless configured otherwise).
///
/// # Example
///
/// ```rust
/// use chainmap::ChainMap;
///
/// let mut map = ChainMap::new();
/// map.set("key1", "value1")?;
///
/// assert_eq!(*map.get(&"key1")?, "value1");
/// # Ok::<(), chainmap::Error>(())
/// ```
pub struct ChainMap<K, V, C = BytesComparer> {
    buckets: Vec<Chain<Entry<K, V>>>,
    size: usize,
    initial_capacity: usize,
    max_chain_length: usize,
    min_chain_length: usize,
    hasher: BucketHasher,
    comparer: C,
    counters: OpCounters,
}

impl<K, V> ChainMap<K, V>
where
    K: AsBytes,
{
    /// Create a new map with defaults (128 buckets, murmur strategy, byte
    /// comparison).
    pub fn new() -> Self {
        Self::with_config(Config::default()).unwrap()
    }

    /// Create a new map with custom config and byte comparison.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Self::with_comparer(config, BytesComparer)
    }
}

impl<K, V, C> ChainMap<K, V, C>
where
    K: AsBytes,
    C: KeyComparer<K>,
{
    /// Create a new map with custom config and a custom key comparer.
    pub fn with_comparer(config: Config, comparer: C) -> Result<Self, Error> {
        if config.initial_capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        let mut buckets = Vec::with_capacity(config.initial_capacity);
        for _ in 0..config.initial_capacity {
            buckets.push(Chain::new());
        }
        Ok(Self {
            buckets,
            size: 0,
            initial_capacity: config.initial_capacity,
            max_chain_length: 0,
            min_chain_length: 0,
            hasher: create_hasher(config.hash_strategy),
            comparer,
            counters: OpCounters::new(),
        })
    }

    /// Insert or overwrite a key. Returns the previous value if the key
    /// existed.
    ///
    /// A new entry is prepended to its bucket's chain, so within a bucket the
    /// most recently inserted entry is found first. Inserting (never
    /// overwriting) may grow the bucket array: the map doubles its capacity
    /// as soon as the load factor exceeds 0.75 or the longest tracked chain
    /// reaches twice the shortest.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chainmap::ChainMap;
    ///
    /// let mut map = ChainMap::new();
    /// assert!(map.set("key", "value")?.is_none());
    /// assert_eq!(map.set("key", "new_value")?, Some("value"));
    /// # Ok::<(), chainmap::Error>(())
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        let capacity = self.buckets.len();
        let index = self.hasher.bucket_index(key.as_bytes(), capacity);
        let comparer = &self.comparer;
        let bucket = &mut self.buckets[index];

        if let Ok(entry) =
            bucket.find_mut(|entry| comparer.compare(&entry.key, &key) == Ordering::Equal)
        {
            let previous = std::mem::replace(&mut entry.value, value);
            self.counters.record_write();
            return Ok(Some(previous));
        }

        bucket.push_front(Entry { key, value });
        let bucket_len = bucket.len();
        self.size += 1;
        if bucket_len > self.max_chain_length {
            self.max_chain_length = bucket_len;
        }
        self.counters.record_write();

        if self.load_factor()? > GROWTH_LOAD_FACTOR
            || self.chain_length_factor() >= GROWTH_CHAIN_FACTOR
        {
            self.resize(self.buckets.len() * RESIZE_FACTOR)?;
        }
        Ok(None)
    }

    /// Borrow the value stored under `key`.
    ///
    /// The borrow is tied to the map, so it cannot outlive the next mutation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chainmap::{ChainMap, Error};
    ///
    /// let mut map = ChainMap::new();
    /// map.set("key", 7)?;
    ///
    /// assert_eq!(*map.get(&"key")?, 7);
    /// assert_eq!(map.get(&"missing"), Err(Error::KeyNotFound));
    /// # Ok::<(), chainmap::Error>(())
    /// ```
    pub fn get(&self, key: &K) -> Result<&V, Error> {
        let index = self.hasher.bucket_index(key.as_bytes(), self.buckets.len());
        let bucket = &self.buckets[index];

        // Singleton bucket: skip the chain search, but the lone entry still
        // has to match.
        if bucket.len() == 1 {
            return match bucket.front() {
                Some(entry) if self.comparer.compare(&entry.key, key) == Ordering::Equal => {
                    self.counters.record_read();
                    Ok(&entry.value)
                }
                _ => Err(Error::KeyNotFound),
            };
        }

        let comparer = &self.comparer;
        let entry = bucket
            .find(|entry| comparer.compare(&entry.key, key) == Ordering::Equal)
            .map_err(|_| Error::KeyNotFound)?;
        self.counters.record_read();
        Ok(&entry.value)
    }

    /// Remove the entry stored under `key` and return its value.
    ///
    /// Removal may shrink the bucket array: the map halves its capacity as
    /// soon as the load factor drops below 0.25, stopping at the initial
    /// capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chainmap::{ChainMap, Error};
    ///
    /// let mut map = ChainMap::new();
    /// map.set("key", "value")?;
    ///
    /// assert_eq!(map.dispose(&"key")?, "value");
    /// assert_eq!(map.dispose(&"key"), Err(Error::KeyNotFound));
    /// # Ok::<(), chainmap::Error>(())
    /// ```
    pub fn dispose(&mut self, key: &K) -> Result<V, Error> {
        let capacity = self.buckets.len();
        let index = self.hasher.bucket_index(key.as_bytes(), capacity);
        let comparer = &self.comparer;
        let bucket = &mut self.buckets[index];

        let removed = if bucket.len() == 1 {
            let matches = match bucket.front() {
                Some(entry) => comparer.compare(&entry.key, key) == Ordering::Equal,
                None => false,
            };
            if !matches {
                return Err(Error::KeyNotFound);
            }
            bucket.remove(0).map_err(|_| Error::KeyNotFound)?
        } else {
            bucket
                .remove_by(|entry| comparer.compare(&entry.key, key) == Ordering::Equal)
                .map_err(|_| Error::KeyNotFound)?
        };

        let bucket_len = bucket.len();
        self.size -= 1;
        if bucket_len < self.min_chain_length {
            self.min_chain_length = bucket_len;
        }
        self.counters.record_remove();

        if self.load_factor()? < SHRINK_LOAD_FACTOR
            && self.buckets.len() / RESIZE_FACTOR >= self.initial_capacity
        {
            self.resize(self.buckets.len() / RESIZE_FACTOR)?;
        }
        Ok(removed.value)
    }

    /// Rebuild the bucket array at `new_capacity`, rehashing every entry
    /// against the new capacity.
    ///
    /// Entries are moved, not cloned. The tracked chain-length extremes are
    /// recomputed from the resulting distribution, since moving entries
    /// invalidates the running values.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        let mut new_buckets = Vec::with_capacity(new_capacity);
        for _ in 0..new_capacity {
            new_buckets.push(Chain::new());
        }

        let old_buckets = std::mem::replace(&mut self.buckets, new_buckets);
        for mut old_bucket in old_buckets {
            while let Some(entry) = old_bucket.pop_front() {
                let index = self.hasher.bucket_index(entry.key.as_bytes(), new_capacity);
                self.buckets[index].push_front(entry);
            }
        }

        self.max_chain_length = self.buckets.iter().map(Chain::len).max().unwrap_or(0);
        self.min_chain_length = self.buckets.iter().map(Chain::len).min().unwrap_or(0);
        self.counters.record_resize();
        Ok(())
    }

    /// `size / capacity`.
    pub fn load_factor(&self) -> Result<f64, Error> {
        if self.buckets.is_empty() {
            return Err(Error::ZeroDivision);
        }
        Ok(self.size as f64 / self.buckets.len() as f64)
    }

    /// Longest-to-shortest tracked chain ratio, defined as 1.0 while the
    /// shortest tracked chain is empty.
    pub fn chain_length_factor(&self) -> f64 {
        if self.min_chain_length == 0 {
            return 1.0;
        }
        self.max_chain_length as f64 / self.min_chain_length as f64
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Snapshot of the map's shape and activity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chainmap::ChainMap;
    ///
    /// let mut map = ChainMap::new();
    /// map.set("key1", 1)?;
    /// map.set("key2", 2)?;
    ///
    /// let stats = map.stats();
    /// assert_eq!(stats.size, 2);
    /// assert_eq!(stats.capacity, 128);
    /// # Ok::<(), chainmap::Error>(())
    /// ```
    pub fn stats(&self) -> Stats {
        Stats {
            size: self.size,
            capacity: self.buckets.len(),
            bucket_lengths: self.buckets.iter().map(Chain::len).collect(),
            max_chain_length: self.max_chain_length,
            min_chain_length: self.min_chain_length,
            load_factor: self.load_factor().unwrap_or(0.0),
            chain_length_factor: self.chain_length_factor(),
            operations: self.counters.snapshot(),
        }
    }

    /// Iterate over all entries, bucket by bucket.
    pub fn iter(&self) -> crate::iter::Iter<'_, K, V> {
        crate::iter::Iter::new(&self.buckets, self.size)
    }
}

impl<K, V> Default for ChainMap<K, V>
where
    K: AsBytes,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V, C> IntoIterator for &'a ChainMap<K, V, C>
where
    K: AsBytes,
    C: KeyComparer<K>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = crate::iter::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
