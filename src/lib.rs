//! # ChainMap
//!
//! A separate-chaining hash map that tells you how it is loaded.
//!
//! ChainMap keeps every colliding entry on a per-bucket linked chain and
//! rebuilds its bucket array when the load factor or chain imbalance says
//! it should. The hash strategy is pluggable, from a simple polynomial
//! hash to a from-scratch SHA-256, and every growth/shrink decision is
//! observable through the stats surface.
//!
//! ## Features
//!
//! - **Separate Chaining**: collisions live on owned singly-linked chains
//! - **Pluggable Hashing**: murmur, djb2, SHA-256, ahash (fxhash optional)
//! - **Pluggable Equality**: byte-view comparison by default, custom
//!   comparers via a single-method trait
//! - **Self-Resizing**: grows past 0.75 load, shrinks below 0.25, reacts to
//!   chain imbalance
//! - **Introspectable**: per-bucket lengths, load factor, chain extremes,
//!   operation counters
//! - **Explicit Errors**: misses and invalid configurations come back as
//!   error kinds, never panics
//!
//! ## Example
//!
//! ```rust
//! use chainmap::ChainMap;
//!
//! let mut map = ChainMap::new();
//!
//! // Insert values
//! map.set("key1", "value1")?;
//! map.set("key2", "value2")?;
//!
//! // Read values (borrowed, no copy)
//! assert_eq!(*map.get(&"key1")?, "value1");
//!
//! // Overwrite in place
//! map.set("key1", "updated")?;
//!
//! // Iterate over entries
//! for (key, value) in map.iter() {
//!     println!("{}: {}", key, value);
//! }
//!
//! // Remove values
//! let removed = map.dispose(&"key2")?;
//! assert_eq!(removed, "value2");
//!
//! // Get statistics
//! let stats = map.stats();
//! println!("{} entries over {} buckets", stats.size, stats.capacity);
//! # Ok::<(), chainmap::Error>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use chainmap::{ChainMapBuilder, HashStrategy};
//!
//! let map = ChainMapBuilder::new()
//!     .initial_capacity(256)?
//!     .hash_strategy(HashStrategy::Sha256)
//!     .build::<String, i32>()?;
//! # let _ = map;
//! # Ok::<(), chainmap::Error>(())
//! ```
//!
//! ## Threading
//!
//! All operations are synchronous and single-threaded; there is no internal
//! locking. Sharing a map across threads requires external mutual exclusion
//! around *every* operation, including reads, which can race with a
//! concurrent resize.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Byte-view trait for keys.
pub mod bytes;
/// The per-bucket singly-linked chain.
pub mod chain;
/// Main ChainMap implementation.
pub mod chainmap;
/// Configuration and builder types.
pub mod config;
/// Error types.
pub mod error;
/// Hash strategy implementations.
pub mod hash;
/// Iterator implementations.
pub mod iter;
/// From-scratch SHA-256 digest.
pub mod sha256;
/// Statistics and metrics collection.
pub mod stats;

// Re-export main types
pub use bytes::AsBytes;
pub use chain::Chain;
pub use chainmap::ChainMap;
pub use config::{
    BytesComparer, ChainMapBuilder, Config, HashStrategy, KeyComparer, DEFAULT_CAPACITY,
};
pub use error::Error;
pub use stats::{Stats, TableOps};
