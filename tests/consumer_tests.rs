//! Tests for the algorithms built on top of the heaps
//!
//! Each consumer is checked against a straightforward reference computed by
//! sorting or scanning.

use indexed_heaps::median::MedianKeeper;
use indexed_heaps::recency::{CacheError, RecencyCache};
use indexed_heaps::select::{smallest_k, SelectError};
use indexed_heaps::supersequence::shortest_supersequence;
use indexed_heaps::HeapError;

use std::collections::VecDeque;

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_below(&mut self, bound: u64) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 33) % bound
    }
}

#[test]
fn test_median_of_stream() {
    let mut keeper = MedianKeeper::new();
    let mut sorted: Vec<u32> = Vec::new();
    let mut rng = Lcg::new(3);

    for _ in 0..2_000 {
        let value = rng.next_below(10_000) as u32;
        keeper.insert(value);
        let at = sorted.partition_point(|&v| v < value);
        sorted.insert(at, value);

        let n = sorted.len();
        let expected = if n % 2 == 1 {
            f64::from(sorted[n / 2])
        } else {
            (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
        };
        assert_eq!(keeper.median(), Some(expected));
    }
    assert_eq!(keeper.len(), 2_000);
}

#[test]
fn test_median_middle_pair() {
    let mut keeper = MedianKeeper::new();
    keeper.extend([3i64, 9, 1, 7]);
    assert_eq!(keeper.middle(), Some((3, 7)));
    keeper.insert(5);
    assert_eq!(keeper.middle(), Some((5, 5)));
}

#[test]
fn test_supersequence_worked_example() {
    let shorter = [1, 5, 9];
    let longer = [7, 5, 9, 0, 2, 1, 3, 5, 7, 9, 1, 1, 5, 8, 8, 9, 7];
    assert_eq!(shortest_supersequence(&shorter, &longer), Some((7, 10)));
}

#[test]
fn test_supersequence_no_window() {
    assert_eq!(shortest_supersequence(&['x', 'y'], &['x', 'x', 'z']), None);
}

#[test]
fn test_supersequence_whole_input() {
    let shorter = [1, 2, 3];
    let longer = [1, 4, 4, 2, 4, 3];
    assert_eq!(shortest_supersequence(&shorter, &longer), Some((0, 5)));
}

#[test]
fn test_supersequence_first_shortest_wins() {
    // Windows [0, 1] and [3, 4] tie; the earlier one is reported.
    let shorter = ["a", "b"];
    let longer = ["a", "b", "c", "b", "a"];
    assert_eq!(shortest_supersequence(&shorter, &longer), Some((0, 1)));
}

#[test]
fn test_smallest_k_against_sorting() {
    let mut rng = Lcg::new(11);
    let values: Vec<u16> = (0..301).map(|_| rng.next_below(50) as u16).collect();
    let mut reference = values.clone();
    reference.sort_unstable();

    for k in [0, 1, 2, 75, 150, 151, 200, 299, 300, 301] {
        let mut picked = smallest_k(&values, k).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, reference[..k].to_vec(), "k = {k}");
    }
}

#[test]
fn test_smallest_k_too_large() {
    let err = smallest_k(&[1, 2], 3).unwrap_err();
    assert_eq!(err, SelectError::TooLarge { k: 3, len: 2 });
    assert_eq!(err.to_string(), "cannot select 3 values from an input of 2");
}

#[test]
fn test_select_error_from_heap_error() {
    let err: SelectError = HeapError::Empty.into();
    assert_eq!(err.to_string(), "heap is empty");
}

#[test]
fn test_recency_cache_matches_reference() {
    // Reference: most recent use at the back.
    let mut order: VecDeque<u32> = VecDeque::new();
    let mut cache = RecencyCache::new(16).unwrap();
    let mut rng = Lcg::new(5);

    for step in 0..5_000u32 {
        let key = rng.next_below(40) as u32;
        if step % 2 == 0 {
            let hit = cache.get(&key).copied();
            match order.iter().position(|&k| k == key) {
                Some(at) => {
                    assert_eq!(hit, Some(key * 10));
                    order.remove(at);
                    order.push_back(key);
                }
                None => assert_eq!(hit, None),
            }
        } else {
            let evicted = cache.insert(key, key * 10);
            if let Some(at) = order.iter().position(|&k| k == key) {
                order.remove(at);
                assert_eq!(evicted, None);
            } else if order.len() == 16 {
                let stalest = order.pop_front();
                assert_eq!(evicted.map(|(k, _)| k), stalest);
            } else {
                assert_eq!(evicted, None);
            }
            order.push_back(key);
        }
        assert_eq!(cache.len(), order.len());
        assert_eq!(cache.peek_weakest(), order.front());
    }
}

#[test]
fn test_recency_cache_errors() {
    assert_eq!(
        RecencyCache::<String, ()>::new(0).unwrap_err(),
        CacheError::ZeroCapacity
    );
    let mut cache: RecencyCache<String, u8> = RecencyCache::new(2).unwrap();
    assert_eq!(cache.evict_weakest(), Err(HeapError::Empty));
    assert_eq!(cache.touch(&"missing".to_string()), Err(HeapError::NotFound));
    assert!(cache.is_empty());
}
