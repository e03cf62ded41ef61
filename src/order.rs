//! Ordering policies
//!
//! A heap is parameterized by a [`HeapOrder`] value that answers one question:
//! may `parent` sit above `child`? [`MinOrder`] answers with `<=`, [`MaxOrder`]
//! with `>=`, and [`FnOrder`] defers to a caller-supplied closure.
//!
//! The policy is fixed when the heap is built. `holds` must be a total
//! preorder (reflexive, transitive, any two values comparable) and must give
//! the same answer for the same pair every time it is asked; the heaps do not
//! check this, and an inconsistent policy leaves them in an unspecified (but
//! memory-safe) order.

use std::fmt;

/// Strategy deciding which of two priorities may be the parent of the other
pub trait HeapOrder<P: ?Sized> {
    /// Returns true if `parent` may be stored above `child`
    fn holds(&self, parent: &P, child: &P) -> bool;

    /// Returns true if `a` must be stored above `b`, i.e. `a` may be the
    /// parent of `b` and not the other way around
    fn precedes(&self, a: &P, b: &P) -> bool {
        self.holds(a, b) && !self.holds(b, a)
    }
}

/// Smallest priority on top (`parent <= child`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<P: Ord + ?Sized> HeapOrder<P> for MinOrder {
    #[inline]
    fn holds(&self, parent: &P, child: &P) -> bool {
        parent <= child
    }
}

/// Largest priority on top (`parent >= child`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<P: Ord + ?Sized> HeapOrder<P> for MaxOrder {
    #[inline]
    fn holds(&self, parent: &P, child: &P) -> bool {
        parent >= child
    }
}

/// Ordering given by a closure `Fn(&parent, &child) -> bool`
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{BinaryHeap, FnOrder};
///
/// // Shortest string on top.
/// let mut heap = BinaryHeap::with_order(FnOrder::new(|a: &&str, b: &&str| a.len() <= b.len()));
/// heap.push("ccc");
/// heap.push("a");
/// heap.push("bb");
/// assert_eq!(heap.pop(), Ok("a"));
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F>(F);

impl<F> FnOrder<F> {
    /// Wraps `holds` as an ordering policy
    pub fn new(holds: F) -> Self {
        FnOrder(holds)
    }
}

impl<P: ?Sized, F> HeapOrder<P> for FnOrder<F>
where
    F: Fn(&P, &P) -> bool,
{
    #[inline]
    fn holds(&self, parent: &P, child: &P) -> bool {
        (self.0)(parent, child)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}
