//! Common traits for predicate-ordered heaps
//!
//! This module provides the public contract shared by heap implementations:
//!
//! - [`Heap`]: insert, extract, peek and size over elements of type `T`
//! - [`HeapError`]: the recoverable failures a caller can observe
//!
//! Unlike `std::collections::BinaryHeap`, the ordering is not taken from
//! `Ord`. Every heap is built around a [`Predicate`](crate::Predicate) that
//! decides which of two elements belongs closer to the root, so the same
//! implementation serves as a min-heap, a max-heap, or anything in between.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Construction was attempted without an ordering predicate
    #[error("no ordering predicate was supplied, heap was not created")]
    MissingPredicate,
    /// The heap holds no elements
    #[error("heap is empty")]
    Empty,
}

/// Base trait for heap/priority queue data structures
///
/// The element that the heap's predicate ranks highest is always the one
/// returned by [`peek`](Heap::peek) and [`extract`](Heap::extract). An
/// empty heap is a normal state: both return `None` rather than failing.
///
/// # Example
///
/// ```rust
/// use predicate_heap::{BinaryHeap, Heap};
///
/// let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a > b);
/// heap.insert(3);
/// heap.insert(7);
/// heap.insert(5);
///
/// assert_eq!(heap.peek(), Some(&7));
/// assert_eq!(heap.extract(), Some(7));
/// assert_eq!(heap.size(), 2);
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns the number of elements in the heap
    ///
    /// Alias of [`len`](Heap::len).
    fn size(&self) -> usize {
        self.len()
    }

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, element: T);

    /// Returns the highest-ranked element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-ranked element
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract(&mut self) -> Option<T>;
}
