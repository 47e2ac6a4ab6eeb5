//! Core traits and adapters for smoothsort.
//!
//! This module defines:
//! - [`SortableSequence`]: The trait users implement to sort their custom collections.
//! - [`FloatSlice`]: Adapter giving floating-point slices a total order (NaN first).
//! - [`SortBy`]: Adapter sorting a slice under a caller-supplied comparator.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A trait for comparing and exchanging elements of a collection by position.
///
/// This is the only channel through which smoothsort observes and mutates data:
/// it never copies an element out of the collection except inside [`swap`].
/// Anything with O(1) random access can implement it (slices, ring buffers,
/// columnar arrays, several parallel arrays sorted by one key column, ...).
///
/// Indices passed to [`compare`] and [`swap`] are always `< len()`. Implementors
/// may panic on out-of-range indices; the sort never produces them.
///
/// [`compare`] must be deterministic and describe a strict weak ordering. An
/// inconsistent ordering can leave the output unsorted, but the sort still
/// terminates.
///
/// [`compare`]: SortableSequence::compare
/// [`swap`]: SortableSequence::swap
///
/// # Examples
///
/// Sorting two parallel arrays by the first one:
///
/// ```
/// use smoothsort::{smoothsort, SortableSequence};
/// use std::cmp::Ordering;
///
/// struct Table {
///     ids: Vec<u32>,
///     names: Vec<&'static str>,
/// }
///
/// impl SortableSequence for Table {
///     fn len(&self) -> usize {
///         self.ids.len()
///     }
///
///     fn compare(&self, i: usize, j: usize) -> Ordering {
///         self.ids[i].cmp(&self.ids[j])
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.ids.swap(i, j);
///         self.names.swap(i, j);
///     }
/// }
///
/// let mut table = Table {
///     ids: vec![3, 1, 2],
///     names: vec!["c", "a", "b"],
/// };
/// smoothsort(&mut table);
///
/// assert_eq!(table.names, vec!["a", "b", "c"]);
/// ```
pub trait SortableSequence {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Three-way comparison of the elements at `i` and `j`.
    fn compare(&self, i: usize, j: usize) -> Ordering;

    /// Exchanges the elements at `i` and `j`. `i == j` must be a no-op.
    fn swap(&mut self, i: usize, j: usize);
}

// Blanket implementation for slices of totally ordered elements.
// Integers, `String`, `&str` and `Vec<u8>` all land here; text compares byte-wise.
impl<T: Ord> SortableSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: Ord> SortableSequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

// Implementation for VecDeque.
// Indexing wraps around the ring buffer, so no make_contiguous() is needed.
impl<T: Ord> SortableSequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j)
    }
}

/// Total order over partially ordered values, placing unordered values first.
///
/// For floats this means every NaN compares equal to every other NaN and less
/// than any number; `-0.0` and `0.0` compare equal. The result is a total
/// preorder, so sorting with it is well defined.
///
/// A value is treated as unordered when it does not compare with itself.
///
/// # Examples
///
/// ```
/// use smoothsort::nan_first_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(nan_first_cmp(&f64::NAN, &f64::NEG_INFINITY), Ordering::Less);
/// assert_eq!(nan_first_cmp(&f64::NAN, &f64::NAN), Ordering::Equal);
/// assert_eq!(nan_first_cmp(&1.0, &f64::NAN), Ordering::Greater);
/// assert_eq!(nan_first_cmp(&-0.0, &0.0), Ordering::Equal);
/// ```
#[inline(always)]
pub fn nan_first_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => {
            let a_unordered = a.partial_cmp(a).is_none();
            let b_unordered = b.partial_cmp(b).is_none();
            b_unordered.cmp(&a_unordered)
        }
    }
}

/// Adapter sorting a slice of partially ordered values (`f32`, `f64`, ...)
/// under [`nan_first_cmp`].
///
/// ```
/// use smoothsort::{smoothsort, FloatSlice};
///
/// let mut data = [2.5, f64::NAN, -1.0];
/// smoothsort(&mut FloatSlice(&mut data));
///
/// assert!(data[0].is_nan());
/// assert_eq!(&data[1..], &[-1.0, 2.5]);
/// ```
#[derive(Debug)]
pub struct FloatSlice<'a, T>(pub &'a mut [T]);

impl<T: PartialOrd> SortableSequence for FloatSlice<'_, T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        nan_first_cmp(&self.0[i], &self.0[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
}

/// Adapter sorting a slice under an arbitrary comparator.
///
/// The comparator must describe a strict weak ordering.
pub struct SortBy<'a, T, F> {
    data: &'a mut [T],
    compare: F,
}

impl<'a, T, F> SortBy<'a, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(data: &'a mut [T], compare: F) -> Self {
        Self { data, compare }
    }

    /// Gives the underlying slice back.
    pub fn into_inner(self) -> &'a mut [T] {
        self.data
    }
}

impl<T, F> SortableSequence for SortBy<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        (self.compare)(&self.data[i], &self.data[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }
}
