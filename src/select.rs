//! Smallest-k selection with a bounded heap
//!
//! [`smallest_k`] keeps at most `min(k, n - k)` values in a heap while
//! scanning the input once, for O(n log k) time and O(k) extra space.
//!
//! When `k` is at most half the input a [`MaxHeap`] of the `k` smallest values
//! seen so far is kept; a smaller value replaces its top. Otherwise a
//! [`MinHeap`] of the `n - k` largest values is kept the same way and the
//! answer is the input minus those values.

use crate::binary::BinaryHeap;
use crate::order::HeapOrder;
use crate::ordered::{MaxHeap, MinHeap};
use crate::traits::HeapError;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors returned by [`smallest_k`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// More values were requested than the input holds
    #[error("cannot select {k} values from an input of {len}")]
    TooLarge {
        /// Requested count
        k: usize,
        /// Input length
        len: usize,
    },
    /// A heap operation failed
    #[error(transparent)]
    Heap(#[from] HeapError),
}

/// Returns the `k` smallest values of `values` as a multiset, in no
/// particular order
///
/// # Errors
/// Returns [`SelectError::TooLarge`] if `k > values.len()`.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::select::smallest_k;
///
/// let mut picked = smallest_k(&[7, 1, 9, 3, 3, 8], 3).unwrap();
/// picked.sort();
/// assert_eq!(picked, vec![1, 3, 3]);
/// ```
pub fn smallest_k<T>(values: &[T], k: usize) -> Result<Vec<T>, SelectError>
where
    T: Ord + Hash + Clone,
{
    let len = values.len();
    if k > len {
        return Err(SelectError::TooLarge { k, len });
    }
    if k == 0 {
        return Ok(Vec::new());
    }
    if k == len {
        return Ok(values.to_vec());
    }

    if k <= len / 2 {
        let kept = keep_strongest(values, k, MaxHeap::with_capacity(k))?;
        Ok(kept.into_vec())
    } else {
        let excluded = keep_strongest(values, len - k, MinHeap::with_capacity(len - k))?;
        Ok(exclude(values, excluded.as_slice()))
    }
}

/// Fills `heap` with `limit` values, then lets any value that may not sit
/// above the current top take its place
///
/// For a max-heap this retains the `limit` smallest values, for a min-heap
/// the `limit` largest.
fn keep_strongest<T, O>(
    values: &[T],
    limit: usize,
    mut heap: BinaryHeap<T, O>,
) -> Result<BinaryHeap<T, O>, HeapError>
where
    T: Clone,
    O: HeapOrder<T>,
{
    for value in values {
        if heap.len() < limit {
            heap.push(value.clone());
            continue;
        }
        let top = heap.peek()?;
        if !heap.order().holds(value, top) {
            heap.replace(value.clone())?;
        }
    }
    Ok(heap)
}

/// Returns `values` in input order with one occurrence removed for every
/// occurrence in `excluded`
fn exclude<T>(values: &[T], excluded: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut counts: FxHashMap<&T, usize> = FxHashMap::default();
    for value in excluded {
        *counts.entry(value).or_insert(0) += 1;
    }

    values
        .iter()
        .filter(|&value| match counts.get_mut(value) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}
