//! Derivative work of [Go's `sort` package] licensed under `BSD-3-Clause`.
//!
//! Introspective quicksort over (sub)views, finishing short views with a shell pass and insertion
//! sort, and falling back to heapsort once the depth budget is exhausted.
//!
//! [Go's `sort` package]: https://github.com/golang/go/blob/go1.18/src/sort/sort.go

use crate::{
	heap_sort::heap_sort,
	insertion_sort::{MAX_FINISH, shell_insertion_sort},
	partition::{choose_pivot, partition},
};
use core::mem;
use ndarray::{ArrayViewMut1, Axis};

/// Remaining stack below which the recursion allocates a new segment.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 64 * 1024;
/// Size of each newly allocated stack segment.
#[cfg(feature = "stacker")]
const STACK_SIZE: usize = 1024 * 1024;

#[cfg(all(test, feature = "std"))]
std::thread_local! {
	/// Number of heapsort fallbacks taken on this thread.
	static FALLBACKS: core::cell::Cell<usize> = const { core::cell::Cell::new(0) };
}

/// Sorts `v` using introspective quicksort, which is *O*(*n* \* log(*n*)) worst-case.
pub fn quick_sort<T, F>(v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	let limit = max_depth(v.len());

	recurse(v, &mut is_less, limit);
}

/// Depth budget of `2 * ceil(log2(len + 1))` partitioning steps, i.e., twice the number of
/// significant bits of `len`.
#[inline]
pub const fn max_depth(len: usize) -> u32 {
	2 * (usize::BITS - len.leading_zeros())
}

/// Sorts `v` recursively.
///
/// `limit` is the number of partitioning steps allowed before switching to `heap_sort`. If zero,
/// views longer than [`MAX_FINISH`] immediately switch to heapsort.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, mut limit: u32)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		let len = v.len();

		// Short views get finished by a shell pass followed by insertion sort.
		if len <= MAX_FINISH {
			if len >= 2 {
				shell_insertion_sort(v, is_less);
			}
			return;
		}

		// If the depth budget is exhausted, simply fall back to heapsort in order to guarantee
		// `O(n * log(n))` worst-case.
		if limit == 0 {
			debug!(len, "depth budget exhausted, falling back to heapsort");
			#[cfg(all(test, feature = "std"))]
			FALLBACKS.set(FALLBACKS.get() + 1);
			heap_sort(v, is_less);
			return;
		}
		limit -= 1;

		// Choose a pivot and partition the view into lesser, equal, and greater elements.
		let m = choose_pivot(&mut v, is_less);
		let (mid_lo, mid_hi) = partition(v.view_mut(), m, is_less);

		// Split the view into `left`, the band equal to the pivot, and `right`.
		let (left, right) = v.split_at(Axis(0), mid_lo);
		let (_, right) = right.split_at(Axis(0), mid_hi - mid_lo);

		// Recurse into the shorter side only in order to bound the stack depth to `log2(len)`.
		// Then just continue with the longer side (this is akin to tail recursion).
		if left.len() < right.len() {
			descend(left, is_less, limit);
			v = right;
		} else {
			descend(right, is_less, limit);
			v = left;
		}
	}
}

/// Recurses into the shorter side of a partition, growing the stack on demand if enabled.
#[inline]
fn descend<T, F>(v: ArrayViewMut1<'_, T>, is_less: &mut F, limit: u32)
where
	F: FnMut(&T, &T) -> bool,
{
	#[cfg(feature = "stacker")]
	stacker::maybe_grow(RED_ZONE, STACK_SIZE, || recurse(v, is_less, limit));
	#[cfg(not(feature = "stacker"))]
	recurse(v, is_less, limit);
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{FALLBACKS, max_depth, quick_sort, recurse};
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_few_distinct(xs: Vec<(bool, bool)>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), |a, b| a < b);
		assert_eq!(array.to_vec(), sorted);
	}

	#[test]
	fn depth_budget() {
		assert_eq!(max_depth(0), 0);
		assert_eq!(max_depth(1), 2);
		assert_eq!(max_depth(2), 4);
		assert_eq!(max_depth(3), 4);
		assert_eq!(max_depth(4), 6);
		assert_eq!(max_depth(1000), 20);
		assert_eq!(max_depth(1024), 22);
	}

	#[test]
	fn exhausted_budget_falls_back_to_heapsort() {
		FALLBACKS.set(0);
		let mut array = Array1::from_iter((0..500u32).rev());
		recurse(array.view_mut(), &mut u32::lt, 0);
		assert_eq!(array.to_vec(), (0..500).collect::<Vec<_>>());
		assert_eq!(FALLBACKS.get(), 1);

		// Short views are finished without touching the budget.
		FALLBACKS.set(0);
		let mut array = Array1::from_iter((0..12u32).rev());
		recurse(array.view_mut(), &mut u32::lt, 0);
		assert_eq!(array.to_vec(), (0..12).collect::<Vec<_>>());
		assert_eq!(FALLBACKS.get(), 0);
	}

	/// Sorts `0..n` against McIlroy's adversary, which decides the outcome of each comparison
	/// lazily such that every pivot ends up near the minimum of its range.
	///
	/// Returns the number of comparisons and of heapsort fallbacks.
	fn antiqsort(n: usize) -> (usize, usize) {
		let gas = n;
		let mut value = vec![gas; n];
		let mut solid = 0;
		let mut candidate = 0;
		let mut comparisons = 0;
		let mut array = Array1::from_iter(0..n);
		FALLBACKS.set(0);
		quick_sort(array.view_mut(), |&x: &usize, &y: &usize| {
			comparisons += 1;
			if value[x] == gas && value[y] == gas {
				if x == candidate {
					value[x] = solid;
				} else {
					value[y] = solid;
				}
				solid += 1;
			}
			if value[x] == gas {
				candidate = x;
			} else if value[y] == gas {
				candidate = y;
			}
			value[x] < value[y]
		});
		for i in 1..n {
			assert!(value[array[i - 1]] <= value[array[i]]);
		}
		let mut items = array.to_vec();
		items.sort_unstable();
		assert_eq!(items, (0..n).collect::<Vec<_>>());
		(comparisons, FALLBACKS.get())
	}

	#[test]
	fn adversary_stays_linearithmic() {
		let n: usize = 10_000;
		let bits = (usize::BITS - n.leading_zeros()) as usize;
		let (comparisons, fallbacks) = antiqsort(n);
		assert!(comparisons < 8 * n * bits, "{comparisons}");
		assert!(fallbacks >= 1);
	}
}
