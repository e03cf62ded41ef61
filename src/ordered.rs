//! Min-heap and max-heap
//!
//! [`MinHeap`] and [`MaxHeap`] are the [`BinaryHeap`] core instantiated with
//! [`MinOrder`] and [`MaxOrder`]. They carry no extra state and expose exactly
//! the core API.
//!
//! # Differences from `std::collections::BinaryHeap`
//!
//! - Both directions are available without wrapping values in `Reverse`.
//! - `pop`, `peek` and `replace` return `Result<_, HeapError>` instead of `Option`.
//! - `replace` (pop then push in one downward pass) is a first-class operation.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{MaxHeap, MinHeap};
//!
//! let mut low = MinHeap::new();
//! let mut high = MaxHeap::new();
//! for value in [5, 1, 8, 1, 9] {
//!     low.push(value);
//!     high.push(value);
//! }
//! assert_eq!(low.into_sorted_vec(), vec![1, 1, 5, 8, 9]);
//! assert_eq!(high.into_sorted_vec(), vec![9, 8, 5, 1, 1]);
//! ```

use crate::binary::BinaryHeap;
use crate::order::{MaxOrder, MinOrder};

/// Binary heap with the smallest value on top
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// Binary heap with the largest value on top
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;
