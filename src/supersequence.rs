//! Shortest window of a sequence containing every required value
//!
//! Given a short list of distinct required values and a longer sequence,
//! [`shortest_supersequence`] finds the shortest contiguous window of the
//! longer sequence that contains every required value, in O(N log M) for a
//! sequence of length N and M required values.
//!
//! # Algorithm
//!
//! Scan forward to the first index at which every required value has been
//! seen; a window ending there starts at the least recent of the most recent
//! occurrences. From then on a [`MinIndexedHeap`] maps each required value to
//! the index of its latest occurrence, so its top is always the *stalest*
//! required value. Each new occurrence re-prioritizes its value to the current
//! index. Only when the value that just reappeared was the stalest does the
//! window ending here start later than before, so only then can it beat the
//! best window found so far.

use crate::indexed::MinIndexedHeap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

/// Returns the inclusive `(start, end)` indices of a shortest window of
/// `longer` that contains every value of `shorter`
///
/// Returns `None` if `longer` is empty or no such window exists, and
/// `Some((0, 0))` if `shorter` is empty but `longer` is not. Among windows of
/// equal length the one ending first wins. Duplicates in `shorter` count once.
///
/// # Example
///
/// ```rust
/// use indexed_heaps::supersequence::shortest_supersequence;
///
/// let shorter = [1, 5, 9];
/// let longer = [7, 5, 9, 0, 2, 1, 3, 5, 7, 9, 1, 1, 5, 8, 8, 9, 7];
/// assert_eq!(shortest_supersequence(&shorter, &longer), Some((7, 10)));
/// ```
pub fn shortest_supersequence<T>(shorter: &[T], longer: &[T]) -> Option<(usize, usize)>
where
    T: Eq + Hash,
{
    if longer.is_empty() {
        return None;
    }
    if shorter.is_empty() {
        return Some((0, 0));
    }

    let (first_end, mut recent) = first_complete_window(shorter, longer)?;
    let mut best = (*recent.peek().ok()?.1, first_end);

    for (i, value) in longer.iter().enumerate().skip(first_end + 1) {
        if !recent.contains(value) {
            continue;
        }

        let was_stalest = *recent.peek().ok()?.0 == value;
        recent.set_priority(value, i).ok()?;

        if was_stalest {
            let start = *recent.peek().ok()?.1;
            if i - start < best.1 - best.0 {
                best = (start, i);
            }
        }
    }

    Some(best)
}

/// Finds the lowest index at which a window containing every required value
/// ends, together with a heap of each required value's latest index up to it
fn first_complete_window<'a, T>(
    shorter: &'a [T],
    longer: &'a [T],
) -> Option<(usize, MinIndexedHeap<&'a T, usize>)>
where
    T: Eq + Hash,
{
    let required: FxHashSet<&T> = shorter.iter().collect();

    // A plain map keeps the heap out of the prefix scan.
    let mut most_recent: FxHashMap<&T, usize> = FxHashMap::default();
    let end = longer.iter().enumerate().find_map(|(i, value)| {
        if required.contains(value) {
            most_recent.insert(value, i);
        }
        (most_recent.len() == required.len()).then_some(i)
    })?;

    Some((end, most_recent.into_iter().collect()))
}
