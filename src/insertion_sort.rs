//! Derivative work of [Go's `sort` package] licensed under `BSD-3-Clause` and of
//! [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! Small-range finisher: a single shell pass with gap 6 followed by insertion sort.
//!
//! [Go's `sort` package]: https://github.com/golang/go/blob/go1.18/src/sort/sort.go
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::ArrayViewMut1;

/// Views of up to this length are finished by [`shell_insertion_sort`] instead of partitioned.
pub const MAX_FINISH: usize = 12;

/// Gap of the single shell pass. Together with [`MAX_FINISH`] this leaves at most two elements
/// per gap class, so one pass of compare-and-swap is a complete shell round.
const SHELL_GAP: usize = 6;

/// Sorts a short view using one shell pass with gap 6 followed by insertion sort.
///
/// The shell pass only moves far-off elements closer to their place, insertion sort is what makes
/// the view sorted. Meant for views of up to [`MAX_FINISH`] elements, *O*(*n*^2) worst-case.
pub fn shell_insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	debug_assert!(v.len() <= MAX_FINISH);

	for i in SHELL_GAP..v.len() {
		if is_less(&v[i], &v[i - SHELL_GAP]) {
			v.swap(i, i - SHELL_GAP);
		}
	}
	insertion_sort(v, is_less);
}

/// Sorts a view using insertion sort with adjacent swaps, which is *O*(*n*^2) worst-case.
pub fn insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	for i in 1..len {
		let mut j = i;
		// SAFETY: `0 < j <= i < len` holds for every index below, so both `j` and `j - 1` are in
		// bounds.
		unsafe {
			while j > 0 && is_less(v.uget(j), v.uget(j - 1)) {
				v.uswap(j, j - 1);
				j -= 1;
			}
		}
	}
}
