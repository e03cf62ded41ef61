//! Array-backed binary heaps for Rust
//!
//! This crate provides a binary heap parameterized by an ordering policy, and an
//! indexed variant that tracks where each element lives so its priority can be
//! changed in place.
//!
//! # Features
//!
//! - **BinaryHeap**: array heap over any [`HeapOrder`]; O(log n) push, pop and replace;
//!   O(n) heapify
//! - **MinHeap / MaxHeap**: the core with `<=` or `>=` ordering, no `Reverse` wrappers needed
//! - **IndexedHeap**: unique `(element, priority)` pairs with O(1) membership and O(log n)
//!   `set_priority` and `remove`
//!
//! Built on top of the heaps:
//!
//! - [`median::MedianKeeper`]: running median of a stream
//! - [`supersequence::shortest_supersequence`]: shortest window containing every required value
//! - [`select::smallest_k`]: k smallest values with a bounded heap
//! - [`recency::RecencyCache`]: least-recently-used cache
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{MaxHeap, MinIndexedHeap};
//!
//! let mut heap: MaxHeap<u32> = vec![4, 9, 2].into();
//! assert_eq!(heap.pop(), Ok(9));
//!
//! let mut tasks = MinIndexedHeap::new();
//! tasks.push("build", 2);
//! tasks.push("test", 3);
//! tasks.set_priority("test", 1).unwrap();
//! assert_eq!(tasks.pop(), Ok(("test", 1)));
//! ```

pub mod binary;
pub mod indexed;
pub mod median;
pub mod order;
pub mod ordered;
pub mod recency;
pub mod select;
pub mod supersequence;
pub mod traits;

// Re-export the core types for convenience
pub use binary::BinaryHeap;
pub use indexed::{IndexedHeap, MaxIndexedHeap, MinIndexedHeap};
pub use order::{FnOrder, HeapOrder, MaxOrder, MinOrder};
pub use ordered::{MaxHeap, MinHeap};
pub use traits::{Heap, HeapError, ReprioritizeHeap};
