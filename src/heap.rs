//! Array-backed binary heap ordered by a caller-supplied `is_less` relation.

#![cfg(feature = "alloc")]

use crate::{
	error::EmptyError,
	heap_sort::{sift_down, sift_up},
};
use alloc::vec::Vec;
use core::fmt;
use ndarray::aview_mut1;

/// Priority queue whose root is the least element with respect to `is_less`.
///
/// With `T::lt` this is a min-heap, with `T::gt` a max-heap, see [`Heap::min`] and [`Heap::max`].
/// Insertion and removal are *O*(log *n*). Removal restores the heap property lazily, on the next
/// [`peek`](Heap::peek) or [`add`](Heap::add).
///
/// # Examples
///
/// ```
/// use ndarray_introsort::{EmptyError, Heap};
///
/// let mut heap = Heap::min();
/// heap.add_all([3, 1, 4, 2]);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.remove(), Ok(1));
/// assert_eq!(heap.remove(), Ok(2));
/// assert_eq!(heap.remove(), Ok(3));
/// assert_eq!(heap.remove(), Ok(4));
/// assert_eq!(heap.peek(), Err(EmptyError));
/// ```
#[derive(Clone)]
pub struct Heap<T, F> {
	values: Vec<T>,
	is_less: F,
	/// Whether the root may violate the heap property since the last removal.
	needs_reheap: bool,
}

impl<T: Ord> Heap<T, fn(&T, &T) -> bool> {
	/// Creates an empty heap yielding the minimum first.
	#[must_use]
	pub fn min() -> Self {
		Self::new(T::lt)
	}
	/// Creates an empty heap yielding the maximum first.
	#[must_use]
	pub fn max() -> Self {
		Self::new(T::gt)
	}
}

impl<T, F> Heap<T, F>
where
	F: FnMut(&T, &T) -> bool,
{
	/// Creates an empty heap ordered by `is_less`.
	///
	/// The relation must be a strict weak ordering, otherwise the order of removal is
	/// unspecified.
	#[must_use]
	pub const fn new(is_less: F) -> Self {
		Self {
			values: Vec::new(),
			is_less,
			needs_reheap: false,
		}
	}
	/// Creates an empty heap ordered by `is_less` with space for at least `capacity` elements.
	#[must_use]
	pub fn with_capacity(capacity: usize, is_less: F) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
			is_less,
			needs_reheap: false,
		}
	}

	/// Inserts `value`.
	pub fn add(&mut self, value: T) {
		self.reheap();
		self.values.push(value);
		let last = self.values.len() - 1;
		let is_less = &mut self.is_less;
		sift_up(aview_mut1(&mut self.values), last, &mut |a: &T, b: &T| {
			is_less(b, a)
		});
	}
	/// Inserts every element of `values`.
	pub fn add_all<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
	{
		let values = values.into_iter();
		self.values.reserve(values.size_hint().0);
		for value in values {
			self.add(value);
		}
	}

	/// Returns the least element without removing it.
	///
	/// # Errors
	///
	/// Returns [`EmptyError`] if the heap holds no elements.
	pub fn peek(&mut self) -> Result<&T, EmptyError> {
		self.reheap();
		self.values.first().ok_or(EmptyError)
	}
	/// Removes and returns the least element.
	///
	/// # Errors
	///
	/// Returns [`EmptyError`] if the heap holds no elements.
	pub fn remove(&mut self) -> Result<T, EmptyError> {
		self.peek()?;
		let root = self.values.swap_remove(0);
		self.needs_reheap = true;
		Ok(root)
	}

	/// Restores the heap property at the root if a removal left it pending.
	fn reheap(&mut self) {
		if self.needs_reheap {
			let is_less = &mut self.is_less;
			sift_down(aview_mut1(&mut self.values), 0, &mut |a: &T, b: &T| {
				is_less(b, a)
			});
			self.needs_reheap = false;
		}
	}
}

impl<T, F> Heap<T, F> {
	/// Returns the elements in unspecified order.
	#[must_use]
	pub fn values(&self) -> &[T] {
		&self.values
	}
	/// Returns the number of elements.
	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}
	/// Returns `true` if the heap holds no elements.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
	/// Consumes the heap, returning its elements in unspecified order.
	#[must_use]
	pub fn into_vec(self) -> Vec<T> {
		self.values
	}
}

impl<T, F> Extend<T> for Heap<T, F>
where
	F: FnMut(&T, &T) -> bool,
{
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.add_all(iter);
	}
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Heap")
			.field("values", &self.values)
			.field("needs_reheap", &self.needs_reheap)
			.finish_non_exhaustive()
	}
}
