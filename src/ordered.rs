//! Heaps over `Ord` elements
//!
//! [`MinHeap`] and [`MaxHeap`] name the two common orders. Any heap whose
//! predicate implements `Default` (these two included) can also be built
//! without naming the predicate at all, through `Default`, `FromIterator` and
//! `From`. Every conversion from existing elements uses the O(n) bulk build.
//!
//! # Example
//!
//! ```rust
//! use predicate_heap::{Heap, MaxHeap, MinHeap};
//!
//! let mut min: MinHeap<i32> = [5, 3, 7].into();
//! assert_eq!(min.extract(), Some(3));
//!
//! let max: MaxHeap<i32> = vec![5, 3, 7].into_iter().collect();
//! assert_eq!(max.peek(), Some(&7));
//! ```

use crate::binary::BinaryHeap;
use crate::predicate::{MaxFirst, MinFirst, Predicate};

/// A heap that yields its smallest element first
pub type MinHeap<T> = BinaryHeap<T, MinFirst<T>>;

/// A heap that yields its largest element first
pub type MaxHeap<T> = BinaryHeap<T, MaxFirst<T>>;

impl<T, P: Predicate<T> + Default> Default for BinaryHeap<T, P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<T, P: Predicate<T> + Default> FromIterator<T> for BinaryHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(P::default(), iter.into_iter().collect())
    }
}

impl<T, P: Predicate<T> + Default> From<Vec<T>> for BinaryHeap<T, P> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(P::default(), data)
    }
}

impl<T, P: Predicate<T> + Default, const N: usize> From<[T; N]> for BinaryHeap<T, P> {
    fn from(data: [T; N]) -> Self {
        Self::from_iter(data)
    }
}
