//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for the heaps in this crate:
//!
//! - [`Heap`]: Base trait shared by every heap (push, pop, peek, replace)
//! - [`ReprioritizeHeap`]: Extended trait adding membership tests and in-place
//!   priority changes keyed by element identity
//!
//! Both tiers report contract violations through [`HeapError`] instead of
//! returning `Option`, so callers can propagate them with `?`.

use thiserror::Error;

/// Error type for heap operations
///
/// Both variants are caller-contract violations: check [`Heap::is_empty`] or
/// [`ReprioritizeHeap::contains`] first to stay off the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HeapError {
    /// The operation needs at least one element and the heap has none
    #[error("heap is empty")]
    Empty,
    /// The operation needs an element that is not stored in the heap
    #[error("element is not present in the heap")]
    NotFound,
}

/// Base trait for heap/priority queue data structures
///
/// Which entry sits on top is decided by the heap's ordering policy (see
/// [`HeapOrder`](crate::order::HeapOrder)), so the same trait covers min-heaps,
/// max-heaps and heaps ordered by an arbitrary predicate.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{Heap, MinHeap};
///
/// fn drain<H: Heap>(heap: &mut H) -> Vec<H::Entry> {
///     let mut out = Vec::new();
///     while let Ok(entry) = heap.pop() {
///         out.push(entry);
///     }
///     out
/// }
///
/// let mut heap: MinHeap<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// ```
pub trait Heap {
    /// What `push` accepts and `pop` hands back
    type Entry;

    /// Borrowed view of the top entry returned by `peek`
    type Top<'a>
    where
        Self: 'a;

    /// Returns the number of entries in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an entry
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, entry: Self::Entry);

    /// Removes and returns the top entry
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<Self::Entry, HeapError>;

    /// Returns the top entry without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<Self::Top<'_>, HeapError>;

    /// Overwrites the top entry and restores the heap order in a single
    /// downward pass, returning the displaced entry
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn replace(&mut self, entry: Self::Entry) -> Result<Self::Entry, HeapError>;

    /// Returns true if every structural invariant of the heap holds
    ///
    /// # Time Complexity
    /// O(n)
    fn is_valid(&self) -> bool;
}

/// Extended heap trait with identity lookup and re-prioritization
///
/// Elements are unique within a `ReprioritizeHeap`; their priority can move
/// in either direction while they are queued.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{MinIndexedHeap, ReprioritizeHeap};
///
/// let mut heap = MinIndexedHeap::new();
/// heap.push("job", 10);
/// ReprioritizeHeap::set_priority(&mut heap, &"job", 5).unwrap();
/// assert_eq!(heap.peek(), Ok((&"job", &5)));
/// ```
pub trait ReprioritizeHeap: Heap {
    /// Element identity type
    type Key;

    /// Priority type
    type Priority;

    /// Returns true if `key` is currently stored
    ///
    /// # Time Complexity
    /// O(1) expected
    fn contains(&self, key: &Self::Key) -> bool;

    /// Changes the priority of a stored element, moving it toward the top or
    /// the bottom as needed
    ///
    /// # Errors
    /// Returns [`HeapError::NotFound`] if `key` is not stored.
    ///
    /// # Time Complexity
    /// O(log n)
    fn set_priority(&mut self, key: &Self::Key, priority: Self::Priority) -> Result<(), HeapError>;
}
