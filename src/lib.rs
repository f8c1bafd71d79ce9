//! Introspective in-place sorting for non-contiguous (sub)views into *n*-dimensional arrays, and a
//! binary [`Heap`] sharing its sift primitives.
//!
//! Sorting is a hybrid of quicksort with median-of-three pivots (escalating to Tukey's ninther on
//! longer views), a three-way partition that collects runs of duplicates into one band, a
//! depth-limited fallback to heapsort, and a final shell pass with gap 6 plus insertion sort on
//! views of up to 12 elements. It is unstable and does not allocate.
//!
//! # Example
//!
//! ```
//! use ndarray_introsort::{ndarray::arr2, Slice1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                    \     \       \
//! //                  column 0 \    column 4         axis 1
//! //                         column 2                axis 1
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, sorting is specifically implemented for non-contiguous
//! // mutable (sub)views.
//! column.sort_unstable();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! //                                   \
//! //                                 column 4 sorted, others untouched
//! ```
//!
//! Slices, vectors, and deques are sorted through a view of their contiguous storage:
//!
//! ```
//! use ndarray_introsort::{ndarray::aview_mut1, sort_by};
//! use std::collections::VecDeque;
//!
//! let mut v = vec!["t", "e", "s", "t"];
//! sort_by(aview_mut1(&mut v), |a, b| a < b);
//! assert_eq!(v, ["e", "s", "t", "t"]);
//!
//! let mut d = VecDeque::from(v);
//! d.rotate_left(1);
//! sort_by(aview_mut1(d.make_contiguous()), |a, b| b < a);
//! assert_eq!(d, ["t", "t", "s", "e"]);
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | Sorting (unstable) | [`Heap`] (per operation) |
//! |----------|------------|--------------------|--------------------------|
//! | Time     | Best       | *O*(*n*)           | *O*(1)                   |
//! | Time     | Average    | *O*(*n* log *n*)   | *O*(log *n*)             |
//! | Time     | Worst      | *O*(*n* log *n*)   | *O*(log *n*)             |
//! | Space    | Worst      | *O*(log *n*)       | *O*(1)                   |
//!
//! # Features
//!
//!   * `alloc` for [`Heap`]. Enabled by `std`.
//!   * `std` for `ndarray/std` and `tracing/std`, otherwise the crate is `no_std`. Enabled by
//!     `default`.
//!   * `stacker` for growing the stack on demand while recursing. Enabled by `default`.
//!   * `tracing` for [`tracing`](https://docs.rs/tracing) events on the heapsort fallback and the
//!     duplicate protection. Enabled by `default`.

#![deny(
	dead_code,
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Emits a `tracing` debug event if enabled.
macro_rules! debug {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		tracing::debug!($($arg)*);
	};
}

/// Emits a `tracing` trace event if enabled.
macro_rules! trace {
	($($arg:tt)*) => {
		#[cfg(feature = "tracing")]
		tracing::trace!($($arg)*);
	};
}

#[cfg(feature = "alloc")]
mod error;
#[cfg(feature = "alloc")]
mod heap;
mod heap_sort;
mod insertion_sort;
mod partition;
mod quick_sort;

#[cfg(feature = "alloc")]
pub use crate::{error::EmptyError, heap::Heap};

use crate::quick_sort::quick_sort;
use core::cmp::Ordering::{self, Equal, Less};
use ndarray::{ArrayBase, ArrayView1, ArrayViewMut1, Data, DataMut, Ix1};

pub use ndarray;

/// Sorts `v` in place such that `is_less(&v[j], &v[i])` is false for all `i < j`.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* log *n*) worst-case. Views of zero or one element are left untouched without calling
/// `is_less`.
///
/// The relation must be a strict weak ordering, i.e., irreflexive and transitive with transitive
/// incomparability. Otherwise, `v` ends up in unspecified order but still holds the same elements,
/// and the sort neither panics nor accesses elements outside `v`.
///
/// # Examples
///
/// ```
/// use ndarray_introsort::{ndarray::arr1, sort_by};
///
/// let mut v = arr1(&[5, 4, 1, 3, 2]);
/// sort_by(v.view_mut(), |a, b| a < b);
/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
///
/// // reverse sorting
/// sort_by(v.view_mut(), |a, b| b < a);
/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
/// ```
#[inline]
pub fn sort_by<T, F>(v: ArrayViewMut1<'_, T>, is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	quick_sort(v, is_less);
}

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing [sorting] methods similar to
/// [`slice`].
///
/// [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
pub trait Slice1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array, but might not preserve the order of equal elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) worst-case.
	///
	/// # Current Implementation
	///
	/// The current algorithm is an introspective quicksort choosing its pivot as median of three,
	/// or as Tukey's ninther on arrays longer than 40 elements. Whenever partitioning suggests a
	/// skewed distribution, all elements equal to the pivot are collected into one band which is
	/// excluded from further partitioning, keeping arrays with few distinct elements at
	/// *O*(*n* log *n*). After `2 * ceil(log2(n + 1))` partitioning steps, the remaining
	/// subarrays are heapsorted, and subarrays of up to 12 elements are finished by a shell pass
	/// with gap 6 followed by insertion sort.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.sort_unstable();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function, but might not preserve the order of equal
	/// elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// `partial_cmp` as our sort function when we know the array doesn't contain a `NaN`.
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	///
	/// # Current Implementation
	///
	/// See [`sort_unstable`](Slice1Ext::sort_unstable).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.sort_unstable_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.sort_unstable_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn sort_unstable_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function, but might not preserve the order of equal
	/// elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*mn* log *n*) worst-case, where the key function is
	/// *O*(*m*).
	///
	/// # Current Implementation
	///
	/// See [`sort_unstable`](Slice1Ext::sort_unstable).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.sort_unstable_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	fn sort_unstable_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// Note that if `Self::Item` is only `PartialOrd`, but not `Ord`, the above definition
	/// implies that this function returns `false` if any two consecutive items are not
	/// comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, Slice1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// Instead of using `PartialOrd::partial_cmp`, this function uses the given `compare`
	/// function to determine the ordering of two elements. Apart from that, it's equivalent to
	/// [`is_sorted`]; see its documentation for more information.
	///
	/// [`is_sorted`]: Slice1Ext::is_sorted
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, Slice1Ext};
	///
	/// assert!(arr1(&[9, 2, 2, 1]).is_sorted_by(|a, b| b.partial_cmp(a)));
	/// ```
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	///
	/// Instead of comparing the array's elements directly, this function compares the keys of the
	/// elements, as determined by `f`. Apart from that, it's equivalent to [`is_sorted`]; see its
	/// documentation for more information.
	///
	/// [`is_sorted`]: Slice1Ext::is_sorted
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, Slice1Ext};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// assert!(!arr1(&[-2i32, -1, 0, 3]).is_sorted_by_key(|n| n.abs()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> Slice1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		quick_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn sort_unstable_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		quick_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less)
	}
	#[inline]
	fn sort_unstable_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		quick_sort(self.view_mut(), &mut |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}

/// Checks whether `compare` yields `Less` or `Equal` for every pair of adjacent elements.
fn is_sorted<A, F>(v: ArrayView1<'_, A>, mut compare: F) -> bool
where
	F: FnMut(&A, &A) -> Option<Ordering>,
{
	v.iter()
		.zip(v.iter().skip(1))
		.all(|(a, b)| matches!(compare(a, b), Some(Less | Equal)))
}
