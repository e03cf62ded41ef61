//! Indexed binary heap ("dict-heap")
//!
//! An [`IndexedHeap`] stores `(element, priority)` pairs in the same array
//! layout as [`BinaryHeap`](crate::binary::BinaryHeap) and additionally keeps
//! a hash map from each element to the array slot currently holding it. The map
//! gives O(1) membership tests and lets [`IndexedHeap::set_priority`] find an
//! element and move it up or down in O(log n), without removing and
//! re-inserting it.
//!
//! The heap owns its array and its swap routine: every swap performed while
//! sifting rewrites the map entries of *both* slots involved. Elements are
//! unique; pushing an element that is already stored changes its priority.
//!
//! # Design
//!
//! Elements are cloned once into the map on insertion, so cheap-to-clone
//! identities (integers, interned strings, `Rc`s, small keys) work best. The
//! map uses FxHash.
//!
//! It is a logic error for an element's `Hash`/`Eq` behavior to change while
//! it is stored. The heap stays memory-safe but lookups become unspecified.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity      |
//! |----------------|-----------------|
//! | `contains`     | O(1) expected   |
//! | `push`         | O(log n)        |
//! | `pop`          | O(log n)        |
//! | `peek`         | O(1)            |
//! | `replace`      | O(log n)        |
//! | `set_priority` | O(log n)        |
//! | `remove`       | O(log n)        |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::MinIndexedHeap;
//!
//! let mut heap = MinIndexedHeap::new();
//! heap.push("a", 5);
//! heap.push("b", 3);
//! heap.push("c", 9);
//!
//! heap.set_priority("c", 1).unwrap();
//! assert_eq!(heap.peek(), Ok((&"c", &1)));
//!
//! heap.set_priority("b", 100).unwrap();
//! assert_eq!(heap.pop(), Ok(("c", 1)));
//! assert_eq!(heap.pop(), Ok(("a", 5)));
//! assert_eq!(heap.pop(), Ok(("b", 100)));
//! ```

use crate::binary::{left_child, parent};
use crate::order::{HeapOrder, MaxOrder, MinOrder};
use crate::traits::{Heap, HeapError, ReprioritizeHeap};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// A binary heap of unique elements with re-prioritization
///
/// `K` is the element identity, `P` its priority, and `O` the ordering policy
/// over priorities.
#[derive(Debug, Clone)]
pub struct IndexedHeap<K, P, O = MinOrder> {
    /// Heap-ordered `(element, priority)` pairs, root first
    entries: Vec<(K, P)>,
    /// Element -> slot in `entries`
    index_of: FxHashMap<K, usize>,
    order: O,
}

/// Indexed heap with the smallest priority on top
pub type MinIndexedHeap<K, P> = IndexedHeap<K, P, MinOrder>;

/// Indexed heap with the largest priority on top
pub type MaxIndexedHeap<K, P> = IndexedHeap<K, P, MaxOrder>;

impl<K, P, O: Default> IndexedHeap<K, P, O> {
    /// Creates an empty heap using the default value of the policy
    pub fn new() -> Self {
        Self::with_order(O::default())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, O::default())
    }
}

impl<K, P, O> IndexedHeap<K, P, O> {
    /// Creates an empty heap ordered by `order`
    pub fn with_order(order: O) -> Self {
        Self {
            entries: Vec::new(),
            index_of: FxHashMap::default(),
            order,
        }
    }

    /// Creates an empty heap ordered by `order` with room for `capacity` elements
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index_of: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the ordering policy
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the backing array in heap order (root first)
    pub fn as_slice(&self) -> &[(K, P)] {
        &self.entries
    }

    /// Iterates over `(element, priority)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &P)> + '_ {
        self.entries.iter().map(|(key, priority)| (key, priority))
    }

    /// Iterates over the stored elements in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index_of.clear();
    }

    /// Returns the top `(element, priority)` pair without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek(&self) -> Result<(&K, &P), HeapError> {
        self.entries
            .first()
            .map(|(key, priority)| (key, priority))
            .ok_or(HeapError::Empty)
    }
}

impl<K, P, O> IndexedHeap<K, P, O>
where
    K: Eq + Hash + Clone,
    O: HeapOrder<P>,
{
    /// Returns true if `key` is stored
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of.contains_key(key)
    }

    /// Returns the current priority of `key`, if stored
    pub fn priority<Q>(&self, key: &Q) -> Option<&P>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of.get(key).map(|&index| &self.entries[index].1)
    }

    /// Returns the array slot currently holding `key`, if stored
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of.get(key).copied()
    }

    /// Inserts `key` with `priority`, or changes its priority if it is
    /// already stored
    pub fn push(&mut self, key: K, priority: P) {
        if let Some(&index) = self.index_of.get(&key) {
            self.reprioritize_at(index, priority);
            return;
        }

        let index = self.entries.len();
        self.index_of.insert(key.clone(), index);
        self.entries.push((key, priority));
        let settled = self.sift_up(index);
        self.debug_check(settled);
    }

    /// Removes and returns the top `(element, priority)` pair
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> Result<(K, P), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.remove_at(0))
    }

    /// Changes the priority of a stored element
    ///
    /// A stronger priority (one that may now sit above the old one) sifts the
    /// element up, a weaker one sifts it down; either way at most one pass
    /// runs. A priority that compares equal to the old one is stored without
    /// moving anything.
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if `key` is not stored; nothing changes.
    pub fn set_priority<Q>(&mut self, key: &Q, priority: P) -> Result<(), HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.index_of.get(key).ok_or(HeapError::NotFound)?;
        self.reprioritize_at(index, priority);
        Ok(())
    }

    /// Overwrites the top pair with `(key, priority)` and sifts it down,
    /// returning the displaced pair
    ///
    /// If `key` is already stored below the top, that entry is taken out
    /// first so elements stay unique; the heap then shrinks by one.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty; nothing changes.
    pub fn replace(&mut self, key: K, priority: P) -> Result<(K, P), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }
        if let Some(&index) = self.index_of.get(&key) {
            if index != 0 {
                self.remove_at(index);
            }
        }

        let top = std::mem::replace(&mut self.entries[0], (key, priority));
        self.index_of.remove(&top.0);
        self.index_of.insert(self.entries[0].0.clone(), 0);
        let settled = self.sift_down(0);
        self.debug_check(settled);
        Ok(top)
    }

    /// Removes `key` from anywhere in the heap and returns its priority
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if `key` is not stored.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<P, HeapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.index_of.get(key).ok_or(HeapError::NotFound)?;
        Ok(self.remove_at(index).1)
    }

    /// Returns true if the heap order holds and the map agrees with the array
    pub fn is_valid(&self) -> bool {
        let ordered = (1..self.entries.len())
            .all(|i| self.order.holds(&self.entries[parent(i)].1, &self.entries[i].1));
        let indexed = self.index_of.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, (key, _))| self.index_of.get(key) == Some(&i));
        ordered && indexed
    }

    /// Takes the entry at `index` out of the heap, fills the hole with the
    /// last entry and restores the order around it
    fn remove_at(&mut self, index: usize) -> (K, P) {
        let removed = self.entries.swap_remove(index);
        self.index_of.remove(&removed.0);

        if index < self.entries.len() {
            self.reindex(index);
            // The filler came from the bottom row, so it may belong above or below.
            let index = self.sift_up(index);
            let settled = self.sift_down(index);
            self.debug_check(settled);
        }
        removed
    }

    fn reprioritize_at(&mut self, index: usize, priority: P) {
        let current = &self.entries[index].1;
        let rises = self.order.precedes(&priority, current);
        let sinks = self.order.precedes(current, &priority);
        self.entries[index].1 = priority;

        let settled = if rises {
            self.sift_up(index)
        } else if sinks {
            self.sift_down(index)
        } else {
            index
        };
        self.debug_check(settled);
    }

    /// Swaps two slots and rewrites the map entries of both
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    /// Points the map entry of the element in `index` back at `index`
    fn reindex(&mut self, index: usize) {
        if let Some(slot) = self.index_of.get_mut(&self.entries[index].0) {
            *slot = index;
        }
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let up = parent(index);
            if self.order.holds(&self.entries[up].1, &self.entries[index].1) {
                break;
            }
            self.swap(index, up);
            index = up;
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }
            let right = left + 1;

            let contender = if right < len
                && !self.order.holds(&self.entries[left].1, &self.entries[right].1)
            {
                right
            } else {
                left
            };

            if self.order.holds(&self.entries[index].1, &self.entries[contender].1) {
                break;
            }
            self.swap(index, contender);
            index = contender;
        }
        index
    }

    /// Cheap local invariant check after a mutation (debug builds only)
    #[inline]
    fn debug_check(&self, settled: usize) {
        debug_assert_eq!(
            self.index_of.len(),
            self.entries.len(),
            "index map has {} entries but the heap holds {}",
            self.index_of.len(),
            self.entries.len()
        );
        if cfg!(debug_assertions) && settled < self.entries.len() {
            let (key, priority) = &self.entries[settled];
            debug_assert_eq!(self.index_of.get(key), Some(&settled));
            if settled > 0 {
                debug_assert!(self.order.holds(&self.entries[parent(settled)].1, priority));
            }
        }
    }
}

impl<K, P, O: Default> Default for IndexedHeap<K, P, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P, O> FromIterator<(K, P)> for IndexedHeap<K, P, O>
where
    K: Eq + Hash + Clone,
    O: HeapOrder<P> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<K, P, O> Extend<(K, P)> for IndexedHeap<K, P, O>
where
    K: Eq + Hash + Clone,
    O: HeapOrder<P>,
{
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, priority) in iter {
            self.push(key, priority);
        }
    }
}

impl<K, P, O> Heap for IndexedHeap<K, P, O>
where
    K: Eq + Hash + Clone,
    O: HeapOrder<P>,
{
    type Entry = (K, P);
    type Top<'a>
        = (&'a K, &'a P)
    where
        Self: 'a;

    fn len(&self) -> usize {
        IndexedHeap::len(self)
    }

    fn push(&mut self, (key, priority): (K, P)) {
        IndexedHeap::push(self, key, priority)
    }

    fn pop(&mut self) -> Result<(K, P), HeapError> {
        IndexedHeap::pop(self)
    }

    fn peek(&self) -> Result<Self::Top<'_>, HeapError> {
        IndexedHeap::peek(self)
    }

    fn replace(&mut self, (key, priority): (K, P)) -> Result<(K, P), HeapError> {
        IndexedHeap::replace(self, key, priority)
    }

    fn is_valid(&self) -> bool {
        IndexedHeap::is_valid(self)
    }
}

impl<K, P, O> ReprioritizeHeap for IndexedHeap<K, P, O>
where
    K: Eq + Hash + Clone,
    O: HeapOrder<P>,
{
    type Key = K;
    type Priority = P;

    fn contains(&self, key: &K) -> bool {
        IndexedHeap::contains(self, key)
    }

    fn set_priority(&mut self, key: &K, priority: P) -> Result<(), HeapError> {
        IndexedHeap::set_priority(self, key, priority)
    }
}
