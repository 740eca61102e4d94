//! Binary heap ordered by a predicate
//!
//! An array-backed binary heap whose order comes from a caller-supplied
//! [`Predicate`] rather than from `Ord`. A min-heap, a max-heap and any other
//! strict weak ordering all share this one implementation.
//!
//! The elements live in a single `Vec` read as a complete binary tree: the
//! root is at index 0 and the children of index `i` are at `2i + 1` and
//! `2i + 2`. After every public operation no element outranks its parent.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `extract`    | O(log n)   |
//! | `peek`       | O(1)       |
//! | `len`        | O(1)       |
//! | `from_vec`   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use predicate_heap::{BinaryHeap, Heap};
//!
//! let mut heap = BinaryHeap::from_vec(|a: &i32, b: &i32| a < b, vec![5, 1, 4]);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.extract(), Some(1));
//! assert_eq!(heap.extract(), Some(2));
//! assert_eq!(heap.len(), 2);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use log::{debug, trace};

use crate::predicate::Predicate;
use crate::traits::{Heap, HeapError};

/// A binary heap arranged by a predicate
///
/// `P` decides which element sits closer to the root; see [`Predicate`].
/// The heap owns its storage outright: elements handed to a constructor are
/// moved or cloned in, never borrowed, so nothing outside the heap can
/// disturb the tree.
///
/// When neither child of a node outranks the other, sift-down prefers the
/// left child. The extraction order of equal-ranked elements is therefore
/// deterministic for a given sequence of operations.
#[derive(Clone)]
pub struct BinaryHeap<T, P> {
    /// The tree, stored level by level
    data: Vec<T>,
    predicate: P,
}

impl<T, P: Predicate<T>> BinaryHeap<T, P> {
    /// Creates an empty heap ordered by `predicate`
    pub fn new(predicate: P) -> Self {
        Self {
            data: Vec::new(),
            predicate,
        }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    pub fn with_capacity(predicate: P, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            predicate,
        }
    }

    /// Builds a heap from `data`, taking ownership of the vector
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec(predicate: P, data: Vec<T>) -> Self {
        let mut heap = Self { data, predicate };
        heap.rebuild();
        heap
    }

    /// Builds a heap from the given predicate and initial elements
    ///
    /// Returns [`HeapError::MissingPredicate`] when `predicate` is `None`;
    /// no heap is created in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use predicate_heap::{BinaryHeap, Heap, HeapError};
    ///
    /// let heap = BinaryHeap::construct(Some(|a: &i32, b: &i32| a > b), [3, 9, 4]).unwrap();
    /// assert_eq!(heap.peek(), Some(&9));
    ///
    /// let missing = BinaryHeap::<i32, fn(&i32, &i32) -> bool>::construct(None, []);
    /// assert_eq!(missing.unwrap_err(), HeapError::MissingPredicate);
    /// ```
    pub fn construct<I>(predicate: Option<P>, initial: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        match predicate {
            Some(predicate) => Ok(Self::from_vec(predicate, initial.into_iter().collect())),
            None => {
                debug!("refusing to build a heap without an ordering predicate");
                Err(HeapError::MissingPredicate)
            }
        }
    }

    /// Builds a heap from a copy of `initial`
    ///
    /// Later changes to `initial` do not affect the heap.
    pub fn from_slice(predicate: P, initial: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(predicate, initial.to_vec())
    }

    /// Returns the predicate this heap is ordered by
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Returns the underlying tree, root first
    ///
    /// Only the root's position is meaningful to callers; the rest follows
    /// the heap property but no particular order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Checks that no element outranks its parent
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.predicate.outranks(&self.data[i], &self.data[parent])
        })
    }

    /// Like [`peek`](Heap::peek), but reports an empty heap as an error
    pub fn try_peek(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Like [`extract`](Heap::extract), but reports an empty heap as an error
    pub fn try_extract(&mut self) -> Result<T, HeapError> {
        self.extract().ok_or(HeapError::Empty)
    }

    /// Drops every element, keeping the predicate
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its storage in tree order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in extraction order
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap, yielding its elements in extraction order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, P> {
        IntoIterSorted { inner: self }
    }

    /// Removes the elements in extraction order
    ///
    /// Elements the iterator did not yield are dropped with it, leaving the
    /// heap empty either way.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, P> {
        DrainSorted { inner: self }
    }

    /// Restores the heap property over the whole vector
    ///
    /// Sifts down every internal node, deepest first. Most nodes sit near
    /// the leaves and move at most a level or two, so the total is O(n).
    fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.predicate.outranks(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// The right child only replaces the left as the candidate when it
    /// strictly outranks it.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < len && self.predicate.outranks(&self.data[left], &self.data[best]) {
                best = left;
            }
            if right < len && self.predicate.outranks(&self.data[right], &self.data[best]) {
                best = right;
            }

            if best == index {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }
}

impl<T, P: Predicate<T>> Heap<T> for BinaryHeap<T, P> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn extract(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }

        let root = mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(root)
    }
}

impl<T, P: Predicate<T>> Extend<T> for BinaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T: Copy + 'a, P: Predicate<T>> Extend<&'a T> for BinaryHeap<T, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: fmt::Debug, P> fmt::Debug for BinaryHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Owning iterator over a heap's elements in extraction order
///
/// Created by [`BinaryHeap::into_iter_sorted`].
#[derive(Clone)]
pub struct IntoIterSorted<T, P> {
    inner: BinaryHeap<T, P>,
}

impl<T: fmt::Debug, P> fmt::Debug for IntoIterSorted<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIterSorted").field(&self.inner).finish()
    }
}

impl<T, P: Predicate<T>> Iterator for IntoIterSorted<T, P> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.extract()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.data.len();
        (exact, Some(exact))
    }
}

impl<T, P: Predicate<T>> ExactSizeIterator for IntoIterSorted<T, P> {}

impl<T, P: Predicate<T>> FusedIterator for IntoIterSorted<T, P> {}

/// Draining iterator over a heap's elements in extraction order
///
/// Created by [`BinaryHeap::drain_sorted`].
pub struct DrainSorted<'a, T, P> {
    inner: &'a mut BinaryHeap<T, P>,
}

impl<T: fmt::Debug, P> fmt::Debug for DrainSorted<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainSorted").field(&*self.inner).finish()
    }
}

impl<T, P: Predicate<T>> Iterator for DrainSorted<'_, T, P> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.extract()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.data.len();
        (exact, Some(exact))
    }
}

impl<T, P: Predicate<T>> ExactSizeIterator for DrainSorted<'_, T, P> {}

impl<T, P: Predicate<T>> FusedIterator for DrainSorted<'_, T, P> {}

impl<T, P> Drop for DrainSorted<'_, T, P> {
    fn drop(&mut self) {
        self.inner.data.clear();
    }
}
