//! Binary heap core
//!
//! An array-backed complete binary tree whose order is decided by a pluggable
//! [`HeapOrder`] policy. The node at index `i` has children at `2i + 1` and
//! `2i + 2` and its parent at `(i - 1) / 2`; the array never has gaps.
//!
//! The value stored is its own priority. For a heap that tracks elements by
//! identity and can re-prioritize them, see
//! [`IndexedHeap`](crate::indexed::IndexedHeap).
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `replace` | O(log n)   |
//! | `from`    | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{BinaryHeap, MaxOrder};
//!
//! let mut heap = BinaryHeap::with_order(MaxOrder);
//! heap.push(3);
//! heap.push(8);
//! heap.push(5);
//!
//! assert_eq!(heap.peek(), Ok(&8));
//! assert_eq!(heap.replace(1), Ok(8));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(1));
//! assert!(heap.pop().is_err());
//! ```

use crate::order::{HeapOrder, MinOrder};
use crate::traits::{Heap, HeapError};
use std::mem;

#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// A binary heap ordered by `O`
///
/// `O` defaults to [`MinOrder`]; see [`MinHeap`](crate::ordered::MinHeap) and
/// [`MaxHeap`](crate::ordered::MaxHeap) for the two common instantiations.
///
/// It is a logic error for a value to be modified, through interior
/// mutability, in a way that changes how the policy orders it while it is
/// stored. The heap stays memory-safe but its order becomes unspecified.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, O = MinOrder> {
    /// Heap-ordered values, root first
    data: Vec<T>,
    order: O,
}

impl<T, O: Default> BinaryHeap<T, O> {
    /// Creates an empty heap using the default value of the policy
    pub fn new() -> Self {
        Self::with_order(O::default())
    }

    /// Creates an empty heap with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, O::default())
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Creates an empty heap ordered by `order`
    pub fn with_order(order: O) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap ordered by `order` with room for `capacity` values
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the ordering policy
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the backing array in heap order (root first)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the values in arbitrary order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the backing array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, O: HeapOrder<T>> BinaryHeap<T, O> {
    /// Builds a heap from arbitrary values in O(n)
    pub fn from_vec_with_order(data: Vec<T>, order: O) -> Self {
        let mut heap = Self { data, order };
        heap.rebuild();
        heap
    }

    /// Inserts a value
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let settled = self.sift_up(self.data.len() - 1);
        debug_assert!(self.is_settled(settled));
    }

    /// Removes and returns the top value
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let last = self.data.pop().ok_or(HeapError::Empty)?;
        if self.data.is_empty() {
            return Ok(last);
        }

        let top = mem::replace(&mut self.data[0], last);
        let settled = self.sift_down(0);
        debug_assert!(self.is_settled(settled));
        Ok(top)
    }

    /// Returns the top value without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Overwrites the top value with `value` and sifts it down, returning the
    /// value it displaced
    ///
    /// This is a pop followed by a push without the intermediate sift-up.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap is empty; `value` is dropped.
    pub fn replace(&mut self, value: T) -> Result<T, HeapError> {
        let root = self.data.first_mut().ok_or(HeapError::Empty)?;
        let top = mem::replace(root, value);
        let settled = self.sift_down(0);
        debug_assert!(self.is_settled(settled));
        Ok(top)
    }

    /// Consumes the heap and returns its values in pop order
    /// (ascending for a min-heap, descending for a max-heap)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns true if every parent may sit above both of its children
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| self.order.holds(&self.data[parent(i)], &self.data[i]))
    }

    /// Moves the value at `index` toward the root while its parent may not
    /// sit above it. Returns where it came to rest.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let up = parent(index);
            if self.order.holds(&self.data[up], &self.data[index]) {
                break;
            }
            self.data.swap(index, up);
            index = up;
        }
        index
    }

    /// Moves the value at `index` toward the leaves while it may not sit above
    /// its contender child. Returns where it came to rest.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = left_child(index);
            if left >= len {
                break;
            }
            let right = left + 1;

            // The contender is the child that may legally parent its sibling.
            let contender =
                if right < len && !self.order.holds(&self.data[left], &self.data[right]) {
                    right
                } else {
                    left
                };

            if self.order.holds(&self.data[index], &self.data[contender]) {
                break;
            }
            self.data.swap(index, contender);
            index = contender;
        }
        index
    }

    /// Bottom-up heapify
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Checks the order between `index` and its immediate neighbours
    fn is_settled(&self, index: usize) -> bool {
        let len = self.data.len();
        if index >= len {
            return true;
        }
        let above = index == 0 || self.order.holds(&self.data[parent(index)], &self.data[index]);
        let left = left_child(index);
        let below = (left..(left + 2).min(len))
            .all(|child| self.order.holds(&self.data[index], &self.data[child]));
        above && below
    }
}

impl<T, O: Default> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: HeapOrder<T> + Default> From<Vec<T>> for BinaryHeap<T, O> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_order(data, O::default())
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, O: HeapOrder<T>> Heap for BinaryHeap<T, O> {
    type Entry = T;
    type Top<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, entry: T) {
        BinaryHeap::push(self, entry)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        BinaryHeap::pop(self)
    }

    fn peek(&self) -> Result<Self::Top<'_>, HeapError> {
        BinaryHeap::peek(self)
    }

    fn replace(&mut self, entry: T) -> Result<T, HeapError> {
        BinaryHeap::replace(self, entry)
    }

    fn is_valid(&self) -> bool {
        BinaryHeap::is_valid(self)
    }
}
