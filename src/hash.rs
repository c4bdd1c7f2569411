use crate::sha256;
use std::hash::{Hash, Hasher};

/// Hash strategy implementation for bucket assignment.
/// Uses an enum to avoid trait object limitations with generics.
///
/// Every strategy is a pure function of the key bytes and the current
/// capacity: no per-call state, and the same `(bytes, capacity)` pair always
/// produces the same index. Strategies are re-evaluated against whatever
/// capacity the caller passes, which is what makes rehashing during a resize
/// work.
pub enum BucketHasher {
    /// Murmur-style mixing hash (default, well-distributed).
    Murmur,
    /// Polynomial djb2 hash (cheapest per byte).
    Djb2,
    /// SHA-256 digest hash (slow, near-uniform distribution).
    Sha256,
    /// AHash-backed strategy for callers that prefer the ecosystem hasher.
    AHash,
    /// FxHash implementation (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

impl BucketHasher {
    /// Map `key` to a bucket index in `[0, capacity)`.
    ///
    /// A zero capacity yields index 0; the map never constructs with one.
    pub fn bucket_index(&self, key: &[u8], capacity: usize) -> usize {
        if capacity == 0 {
            return 0;
        }
        let hash = match self {
            BucketHasher::Murmur => murmur_mix(key, MURMUR_SEED),
            BucketHasher::Djb2 => djb2(key),
            BucketHasher::Sha256 => sha256_prefix(key),
            BucketHasher::AHash => {
                let mut hasher = ahash::AHasher::default();
                key.hash(&mut hasher);
                hasher.finish()
            }
            #[cfg(feature = "fxhash")]
            BucketHasher::FxHash => {
                let mut hasher = fxhash::FxHasher::default();
                key.hash(&mut hasher);
                hasher.finish()
            }
        };
        (hash % capacity as u64) as usize
    }
}

impl Default for BucketHasher {
    fn default() -> Self {
        BucketHasher::Murmur
    }
}

const MURMUR_SEED: u64 = 42;

/// djb2: accumulator seeded at 5381, `hash * 33 + byte` per byte.
fn djb2(data: &[u8]) -> u64 {
    let mut hash: u64 = 5381;
    for &byte in data {
        hash = (hash << 5).wrapping_add(hash).wrapping_add(byte as u64); // hash * 33 + byte
    }
    hash
}

/// Murmur-style per-byte mix with a final xor-shift avalanche.
fn murmur_mix(data: &[u8], seed: u64) -> u64 {
    const C1: u64 = 0xcc9e2d51;
    const C2: u64 = 0x1b873593;

    let mut hash = seed;
    for &byte in data {
        let mut k = byte as u64;
        k = k.wrapping_mul(C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(C2);

        hash ^= k;
        hash = hash.rotate_left(13);
        hash = hash.wrapping_mul(5).wrapping_add(0xe6546b64);
    }

    hash ^= data.len() as u64;
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(0x85ebca6b);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(0xc2b2ae35);
    hash ^= hash >> 16;

    hash
}

/// Leading 8 digest bytes interpreted as a big-endian integer.
fn sha256_prefix(data: &[u8]) -> u64 {
    let digest = sha256::digest(data);
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}
