//! Bounded least-recently-used cache over an indexed heap
//!
//! [`RecencyCache`] stores values in a hash map and tracks recency in a
//! [`MinIndexedHeap`] keyed by a monotonically increasing tick. Touching a key
//! re-prioritizes it to the newest tick, so the heap's top is always the least
//! recently used key. Inserting into a full cache evicts that key and inserts
//! the new one with a single [`replace`](MinIndexedHeap::replace) on the heap.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::recency::RecencyCache;
//!
//! let mut cache = RecencyCache::new(2).unwrap();
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! assert_eq!(cache.get(&"a"), Some(&1)); // "b" is now the stalest
//!
//! assert_eq!(cache.insert("c", 3), Some(("b", 2)));
//! assert!(!cache.contains(&"b"));
//! ```

use crate::indexed::MinIndexedHeap;
use crate::traits::HeapError;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors returned when building a [`RecencyCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A cache must be able to hold at least one entry
    #[error("cache capacity must be at least 1")]
    ZeroCapacity,
}

/// Fixed-capacity cache evicting the least recently used key
#[derive(Debug, Clone)]
pub struct RecencyCache<K, V> {
    values: FxHashMap<K, V>,
    /// Key -> tick of its last use
    recency: MinIndexedHeap<K, u64>,
    capacity: usize,
    tick: u64,
}

impl<K, V> RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries
    ///
    /// # Errors
    /// Returns [`CacheError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(Self {
            values: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            recency: MinIndexedHeap::with_capacity(capacity),
            capacity,
            tick: 0,
        })
    }

    /// Returns the maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `key` is cached; does not count as a use
    pub fn contains(&self, key: &K) -> bool {
        self.recency.contains(key)
    }

    /// Returns the value for `key` and marks it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.touch(key).ok()?;
        self.values.get(key)
    }

    /// Returns the value for `key` without marking it used
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    /// Returns the key that the next eviction would remove
    pub fn peek_weakest(&self) -> Option<&K> {
        self.recency.peek().ok().map(|(key, _)| key)
    }

    /// Marks `key` most recently used
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if `key` is not cached.
    pub fn touch(&mut self, key: &K) -> Result<(), HeapError> {
        let tick = self.tick + 1;
        self.recency.set_priority(key, tick)?;
        self.tick = tick;
        Ok(())
    }

    /// Inserts or updates `key`, marking it most recently used
    ///
    /// Inserting a new key into a full cache evicts the least recently used
    /// entry first; the evicted pair is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.tick += 1;

        if self.values.contains_key(&key) || self.values.len() < self.capacity {
            self.recency.push(key.clone(), self.tick);
            self.values.insert(key, value);
            return None;
        }

        let (evicted_key, _) = self.recency.replace(key.clone(), self.tick).ok()?;
        self.values.insert(key, value);
        let evicted_value = self.values.remove(&evicted_key)?;
        Some((evicted_key, evicted_value))
    }

    /// Removes and returns the least recently used entry
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the cache is empty.
    pub fn evict_weakest(&mut self) -> Result<(K, V), HeapError> {
        let (key, _) = self.recency.pop()?;
        let value = self.values.remove(&key).ok_or(HeapError::NotFound)?;
        Ok((key, value))
    }

    /// Removes `key`, returning its value
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.recency.remove(key).ok()?;
        self.values.remove(key)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.values.clear();
        self.recency.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            RecencyCache::<u32, u32>::new(0).unwrap_err(),
            CacheError::ZeroCapacity
        );
    }

    #[test]
    fn test_evicts_least_recent() {
        let mut cache = RecencyCache::new(3).unwrap();
        assert_eq!(cache.insert(1, "one"), None);
        assert_eq!(cache.insert(2, "two"), None);
        assert_eq!(cache.insert(3, "three"), None);

        cache.touch(&1).unwrap();
        assert_eq!(cache.peek_weakest(), Some(&2));
        assert_eq!(cache.insert(4, "four"), Some((2, "two")));
        assert_eq!(cache.len(), 3);
        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
    }

    #[test]
    fn test_update_existing_does_not_evict() {
        let mut cache = RecencyCache::new(2).unwrap();
        cache.insert("a", 1);
        cache.insert("b", 2);
        assert_eq!(cache.insert("a", 10), None);
        assert_eq!(cache.peek(&"a"), Some(&10));
        assert_eq!(cache.peek_weakest(), Some(&"b"));
    }

    #[test]
    fn test_touch_missing_key() {
        let mut cache: RecencyCache<u8, u8> = RecencyCache::new(1).unwrap();
        assert_eq!(cache.touch(&9), Err(HeapError::NotFound));
        assert_eq!(cache.get(&9), None);
    }

    #[test]
    fn test_evict_weakest() {
        let mut cache = RecencyCache::new(4).unwrap();
        for i in 0..4 {
            cache.insert(i, i * 10);
        }
        cache.get(&0);
        assert_eq!(cache.evict_weakest(), Ok((1, 10)));
        assert_eq!(cache.evict_weakest(), Ok((2, 20)));
        assert_eq!(cache.evict_weakest(), Ok((3, 30)));
        assert_eq!(cache.evict_weakest(), Ok((0, 0)));
        assert_eq!(cache.evict_weakest(), Err(HeapError::Empty));
    }

    #[test]
    fn test_remove() {
        let mut cache = RecencyCache::new(2).unwrap();
        cache.insert('x', 1);
        cache.insert('y', 2);
        assert_eq!(cache.remove(&'x'), Some(1));
        assert_eq!(cache.remove(&'x'), None);
        assert_eq!(cache.len(), 1);
        // Room again: no eviction.
        assert_eq!(cache.insert('z', 3), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = RecencyCache::new(1).unwrap();
        cache.insert(1, 'a');
        assert_eq!(cache.insert(2, 'b'), Some((1, 'a')));
        assert_eq!(cache.insert(3, 'c'), Some((2, 'b')));
        assert_eq!(cache.capacity(), 1);
    }
}
