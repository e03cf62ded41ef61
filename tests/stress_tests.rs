//! Stress tests that push the heaps through large operation counts
//!
//! These tests perform large numbers of operations in various patterns to
//! catch edge cases in the sift routines and the index map.

use indexed_heaps::{Heap, MaxHeap, MaxIndexedHeap, MinHeap, MinIndexedHeap};

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_range(&mut self, min: u32, max: u32) -> u32 {
        let range = (max - min) as u64;
        if range == 0 {
            return min;
        }
        min + ((self.next() >> 33) % range) as u32
    }
}

/// Test massive numbers of pushes and pops
fn test_massive_operations<H: Heap<Entry = i32> + Default>(ascending: bool) {
    let mut heap = H::default();
    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        let expected = if ascending { i } else { 9_999 - i };
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert!(heap.is_empty());
}

/// Test alternating push and pop with a drifting working set
fn test_alternating_ops<H: Heap<Entry = i32> + Default>() {
    let mut heap = H::default();
    let mut rng = Lcg::new(7);
    for round in 0..5_000 {
        heap.push(rng.next_range(0, 1_000) as i32);
        heap.push(rng.next_range(0, 1_000) as i32);
        if round % 3 != 0 {
            assert!(heap.pop().is_ok());
        }
    }
    assert!(heap.is_valid());
}

#[test]
fn test_min_heap_massive() {
    test_massive_operations::<MinHeap<i32>>(true);
}

#[test]
fn test_max_heap_massive() {
    test_massive_operations::<MaxHeap<i32>>(false);
}

#[test]
fn test_min_heap_alternating() {
    test_alternating_ops::<MinHeap<i32>>();
}

#[test]
fn test_max_heap_alternating() {
    test_alternating_ops::<MaxHeap<i32>>();
}

#[test]
fn test_indexed_many_reprioritizations() {
    let mut heap: MinIndexedHeap<u32, u32> = MinIndexedHeap::new();
    let mut rng = Lcg::new(42);
    let mut priorities = vec![0u32; 2_000];

    for (key, slot) in priorities.iter_mut().enumerate() {
        *slot = rng.next_range(0, 1_000_000);
        heap.push(key as u32, *slot);
    }

    for _ in 0..50_000 {
        let key = rng.next_range(0, 2_000);
        let priority = rng.next_range(0, 1_000_000);
        heap.set_priority(&key, priority).unwrap();
        priorities[key as usize] = priority;
    }
    assert!(heap.is_valid());

    priorities.sort_unstable();
    for expected in priorities {
        let (_, priority) = heap.pop().unwrap();
        assert_eq!(priority, expected);
    }
}

#[test]
fn test_indexed_churn_with_removals() {
    let mut heap: MaxIndexedHeap<u32, u32> = MaxIndexedHeap::new();
    let mut rng = Lcg::new(1234);

    for step in 0..40_000u32 {
        let key = rng.next_range(0, 500);
        match step % 5 {
            0 | 1 => heap.push(key, rng.next_range(0, 10_000)),
            2 => {
                let _ = heap.set_priority(&key, rng.next_range(0, 10_000));
            }
            3 => {
                let _ = heap.remove(&key);
            }
            _ => {
                let _ = heap.pop();
            }
        }
        if step % 1_000 == 0 {
            assert!(heap.is_valid());
        }
    }
    assert!(heap.is_valid());

    let mut last = u32::MAX;
    while let Ok((key, priority)) = heap.pop() {
        assert!(priority <= last);
        assert!(!heap.contains(&key));
        last = priority;
    }
}

#[test]
fn test_indexed_same_priority_everywhere() {
    let mut heap: MinIndexedHeap<u32, u8> = (0..1_000).map(|key| (key, 1)).collect();
    for key in 0..1_000u32 {
        heap.set_priority(&key, 1).unwrap();
    }
    assert!(heap.is_valid());
    heap.set_priority(&999, 0).unwrap();
    assert_eq!(heap.pop(), Ok((999, 0)));
    assert_eq!(heap.len(), 999);
}

#[test]
fn test_replace_stream_keeps_largest() {
    // Keep the 100 largest of a long stream in a min-heap.
    let mut heap: MinHeap<u64> = MinHeap::with_capacity(100);
    let mut rng = Lcg::new(99);
    let mut all = Vec::new();

    for _ in 0..20_000 {
        let value = rng.next();
        all.push(value);
        if heap.len() < 100 {
            heap.push(value);
        } else if heap.peek().map_or(false, |&top| value > top) {
            heap.replace(value).unwrap();
        }
    }

    all.sort_unstable_by(|a, b| b.cmp(a));
    let mut kept = heap.into_sorted_vec();
    kept.reverse();
    assert_eq!(kept, all[..100].to_vec());
}
