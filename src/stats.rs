//! Statistics and diagnostics types.

#[cfg(feature = "metrics")]
use std::cell::Cell;

/// Operation counts for a map.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOps {
    /// Number of successful lookups (0 when metrics feature disabled).
    pub reads: u64,
    /// Number of inserts and overwrites (0 when metrics feature disabled).
    pub writes: u64,
    /// Number of removals (0 when metrics feature disabled).
    pub removes: u64,
    /// Number of bucket-array rebuilds (0 when metrics feature disabled).
    pub resizes: u64,
}

/// Operation counters for a single map.
///
/// The map is single-threaded, so plain `Cell` counters are enough.
#[cfg(feature = "metrics")]
pub(crate) struct OpCounters {
    reads: Cell<u64>,
    writes: Cell<u64>,
    removes: Cell<u64>,
    resizes: Cell<u64>,
}

#[cfg(feature = "metrics")]
impl OpCounters {
    pub fn new() -> Self {
        Self {
            reads: Cell::new(0),
            writes: Cell::new(0),
            removes: Cell::new(0),
            resizes: Cell::new(0),
        }
    }

    #[inline]
    pub fn record_read(&self) {
        self.reads.set(self.reads.get() + 1);
    }

    #[inline]
    pub fn record_write(&self) {
        self.writes.set(self.writes.get() + 1);
    }

    #[inline]
    pub fn record_remove(&self) {
        self.removes.set(self.removes.get() + 1);
    }

    #[inline]
    pub fn record_resize(&self) {
        self.resizes.set(self.resizes.get() + 1);
    }

    pub fn snapshot(&self) -> TableOps {
        TableOps {
            reads: self.reads.get(),
            writes: self.writes.get(),
            removes: self.removes.get(),
            resizes: self.resizes.get(),
        }
    }
}

#[cfg(feature = "metrics")]
impl Default for OpCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-sized placeholder when metrics are disabled.
#[cfg(not(feature = "metrics"))]
pub(crate) struct OpCounters;

#[cfg(not(feature = "metrics"))]
impl OpCounters {
    pub fn new() -> Self {
        OpCounters
    }

    #[inline]
    pub fn record_read(&self) {}

    #[inline]
    pub fn record_write(&self) {}

    #[inline]
    pub fn record_remove(&self) {}

    #[inline]
    pub fn record_resize(&self) {}

    pub fn snapshot(&self) -> TableOps {
        TableOps::default()
    }
}

#[cfg(not(feature = "metrics"))]
impl Default for OpCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate snapshot of a map's shape and activity.
#[derive(Debug, Clone)]
pub struct Stats {
    /// Total number of entries across all buckets.
    pub size: usize,
    /// Current bucket count.
    pub capacity: usize,
    /// Number of entries in each bucket.
    pub bucket_lengths: Vec<usize>,
    /// Longest chain length the map is currently tracking.
    pub max_chain_length: usize,
    /// Shortest chain length the map is currently tracking.
    pub min_chain_length: usize,
    /// `size / capacity` at snapshot time.
    pub load_factor: f64,
    /// Longest-to-shortest tracked chain ratio (1.0 while the shortest is 0).
    pub chain_length_factor: f64,
    /// Operation counts (zeros when the `metrics` feature is disabled).
    pub operations: TableOps,
}
