//! Running median over a stream of values
//!
//! [`MedianKeeper`] splits the values seen so far into a lower half kept in a
//! [`MaxHeap`] and an upper half kept in a [`MinHeap`], plus a single middle
//! slot that is occupied exactly when the count is odd. Both halves always
//! have the same size, so the median is read from the two tops (or the middle
//! slot) in O(1).
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::median::MedianKeeper;
//!
//! let mut keeper = MedianKeeper::new();
//! assert_eq!(keeper.median(), None);
//!
//! keeper.insert(5);
//! assert_eq!(keeper.median(), Some(5.0));
//! keeper.insert(1);
//! assert_eq!(keeper.median(), Some(3.0));
//! keeper.insert(9);
//! assert_eq!(keeper.median(), Some(5.0));
//! ```

use crate::ordered::{MaxHeap, MinHeap};

/// Maintains the median of every value inserted so far
#[derive(Debug, Clone)]
pub struct MedianKeeper<T> {
    lower: MaxHeap<T>,
    upper: MinHeap<T>,
    /// Occupied iff an odd number of values has been inserted
    mid: Option<T>,
}

impl<T: Ord + Copy> MedianKeeper<T> {
    /// Creates an empty keeper
    pub fn new() -> Self {
        Self {
            lower: MaxHeap::new(),
            upper: MinHeap::new(),
            mid: None,
        }
    }

    /// Returns the number of values inserted
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len() + usize::from(self.mid.is_some())
    }

    /// Returns true if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.mid.is_none() && self.lower.is_empty()
    }

    /// Adds a value
    ///
    /// With an odd count the new value and the middle value are pushed into
    /// opposite halves. With an even count the new value becomes the middle
    /// unless it falls outside the two tops, in which case it replaces the
    /// nearer top and that top becomes the middle.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, value: T) {
        if let Some(mid) = self.mid.take() {
            let (small, large) = if value <= mid { (value, mid) } else { (mid, value) };
            self.lower.push(small);
            self.upper.push(large);
            return;
        }

        // An empty heap has nothing to displace, so `value` itself is the middle.
        let tops = (self.lower.peek().ok().copied(), self.upper.peek().ok().copied());
        let mid = match tops {
            (_, Some(high)) if value > high => self.upper.replace(value).unwrap_or(value),
            (Some(low), _) if value < low => self.lower.replace(value).unwrap_or(value),
            _ => value,
        };
        self.mid = Some(mid);
    }

    /// Returns the middle value (odd count) or the two values straddling the
    /// middle (even count), or `None` if empty
    pub fn middle(&self) -> Option<(T, T)> {
        match self.mid {
            Some(mid) => Some((mid, mid)),
            None => match (self.lower.peek(), self.upper.peek()) {
                (Ok(&low), Ok(&high)) => Some((low, high)),
                _ => None,
            },
        }
    }
}

impl<T: Ord + Copy + Into<f64>> MedianKeeper<T> {
    /// Returns the median, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    pub fn median(&self) -> Option<f64> {
        self.middle().map(|(low, high)| (low.into() + high.into()) / 2.0)
    }
}

impl<T: Ord + Copy> Default for MedianKeeper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Copy> Extend<T> for MedianKeeper<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
