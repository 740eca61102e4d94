//! Ordering predicates
//!
//! A [`Predicate`] is the only thing a [`BinaryHeap`](crate::BinaryHeap)
//! knows about the order of its elements. `outranks(a, b)` returns true when
//! `a` must sit strictly closer to the root than `b`; equal-ranked elements
//! return false in both directions.
//!
//! Any `Fn(&T, &T) -> bool` is a predicate, and so is a shared reference to
//! one or to [`MinFirst`]/[`MaxFirst`]. For `Ord` types, [`MinFirst`] and [`MaxFirst`] give the usual min-heap
//! and max-heap orders without a closure.
//!
//! The predicate is expected to be a strict weak ordering and to answer
//! consistently for the same pair. The heap cannot detect a predicate that
//! breaks these rules; it keeps every access in bounds, but the extraction
//! order is then unspecified.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Strict ordering used to arrange a heap
pub trait Predicate<T: ?Sized> {
    /// Returns true if `a` belongs strictly closer to the root than `b`
    fn outranks(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first, according to `T`'s [`Ord`] implementation
pub struct MinFirst<T: ?Sized + Ord>(PhantomData<fn(&T)>);

/// Largest element first, according to `T`'s [`Ord`] implementation
pub struct MaxFirst<T: ?Sized + Ord>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> MinFirst<T> {
    /// Creates the predicate that puts the smallest element at the root
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> MaxFirst<T> {
    /// Creates the predicate that puts the largest element at the root
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Predicate<T> for MinFirst<T> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Less
    }
}

impl<T: ?Sized + Ord> Predicate<T> for MaxFirst<T> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a.cmp(b) == Ordering::Greater
    }
}

impl<T: ?Sized + Ord> Predicate<T> for &MinFirst<T> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        (**self).outranks(a, b)
    }
}

impl<T: ?Sized + Ord> Predicate<T> for &MaxFirst<T> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        (**self).outranks(a, b)
    }
}

// Manual impls: the markers place no bounds on `T` beyond `Ord`.

impl<T: ?Sized + Ord> Default for MinFirst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Ord> Clone for MinFirst<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + Ord> Copy for MinFirst<T> {}

impl<T: ?Sized + Ord> fmt::Debug for MinFirst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MinFirst")
    }
}

impl<T: ?Sized + Ord> Default for MaxFirst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Ord> Clone for MaxFirst<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + Ord> Copy for MaxFirst<T> {}

impl<T: ?Sized + Ord> fmt::Debug for MaxFirst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MaxFirst")
    }
}
