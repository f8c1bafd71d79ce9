//! Derivative work of [Go's `sort` package] licensed under `BSD-3-Clause`.
//!
//! Pivot selection and three-way partitioning with protection against many duplicates.
//!
//! [Go's `sort` package]: https://github.com/golang/go/blob/go1.18/src/sort/sort.go

use ndarray::ArrayViewMut1;

/// Views longer than this get a ninther (median of three medians-of-three) as pivot.
const NINTHER_THRESHOLD: usize = 40;
/// If fewer elements than this end up greater than the pivot, assume many duplicates.
const PROTECT_BORDER: usize = 5;

/// Sorts `v[m0]`, `v[m1]`, and `v[m2]` such that `v[m0] <= v[m1] <= v[m2]`.
///
/// The median ends up at `m1`. Uses at most three comparisons and three swaps.
pub fn median_of_three<T, F>(
	v: &mut ArrayViewMut1<'_, T>,
	m1: usize,
	m0: usize,
	m2: usize,
	is_less: &mut F,
) where
	F: FnMut(&T, &T) -> bool,
{
	if is_less(&v[m1], &v[m0]) {
		v.swap(m1, m0);
	}
	// v[m0] <= v[m1]
	if is_less(&v[m2], &v[m1]) {
		v.swap(m2, m1);
		// v[m0] <= v[m2] && v[m1] < v[m2]
		if is_less(&v[m1], &v[m0]) {
			v.swap(m1, m0);
		}
	}
}

/// Chooses a pivot in `v` and moves it to the first index.
///
/// Returns the midpoint index `m`, satisfying `v[m] <= v[0] <= v[len - 1]` afterwards. Views
/// longer than 40 elements use Tukey's ninther, which resists inputs crafted against plain
/// median-of-three.
///
/// `v` must hold at least one element.
pub fn choose_pivot<T, F>(v: &mut ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let (lo, hi) = (0, v.len());
	let m = lo + (hi - lo) / 2;

	if hi - lo > NINTHER_THRESHOLD {
		let s = (hi - lo) / 8;
		median_of_three(v, lo, lo + s, lo + 2 * s, is_less);
		median_of_three(v, m, m - s, m + s, is_less);
		median_of_three(v, hi - 1, hi - 1 - s, hi - 1 - 2 * s, is_less);
	}
	median_of_three(v, lo, m, hi - 1, is_less);

	m
}

/// Partitions `v` around the pivot at index 0, as placed by [`choose_pivot`] returning `m`.
///
/// Returns `(mid_lo, mid_hi)` such that `v[..mid_lo] <= pivot`, `v[mid_lo..mid_hi] == pivot`
/// with the pivot itself at `mid_lo`, and `v[mid_hi..] >= pivot`. The band in the middle holds
/// every duplicate of the pivot whenever the distribution looked skewed towards it, so that long
/// runs of equal elements are not partitioned over and over again.
///
/// `v` must hold at least three elements, so that the three indices sampled by [`choose_pivot`]
/// are distinct.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, m: usize, is_less: &mut F) -> (usize, usize)
where
	F: FnMut(&T, &T) -> bool,
{
	let (lo, hi) = (0, v.len());
	debug_assert!(hi >= 3 && m < hi);

	// Invariants are:
	//
	//   v[lo]            = pivot
	//   v[lo < i < a]    < pivot
	//   v[a <= i < b]   <= pivot
	//   v[b <= i < c]      unexamined
	//   v[c <= i < hi-1] > pivot
	//   v[hi-1]         >= pivot
	let pivot = lo;
	let (mut a, mut c) = (lo + 1, hi - 1);

	while a < c && is_less(&v[a], &v[pivot]) {
		a += 1;
	}
	let mut b = a;
	loop {
		// v[b] <= pivot
		while b < c && !is_less(&v[pivot], &v[b]) {
			b += 1;
		}
		// v[c - 1] > pivot
		while b < c && is_less(&v[pivot], &v[c - 1]) {
			c -= 1;
		}
		if b >= c {
			break;
		}
		// v[b] > pivot && v[c - 1] <= pivot
		v.swap(b, c - 1);
		b += 1;
		c -= 1;
	}

	// If `hi - c < 3`, there are duplicates by the properties of the ninther. Be a bit more
	// conservative and set the border to 5.
	let mut protect = hi - c < PROTECT_BORDER;
	if !protect && hi - c < (hi - lo) / 4 {
		// Probe some points for equality to the pivot.
		let mut dups = 0;
		// v[hi - 1] == pivot
		if !is_less(&v[pivot], &v[hi - 1]) {
			v.swap(c, hi - 1);
			c += 1;
			dups += 1;
		}
		// v[b - 1] == pivot
		if b - 1 > lo && !is_less(&v[b - 1], &v[pivot]) {
			b -= 1;
			dups += 1;
		}
		// `m - lo = (hi - lo) / 2 > 6` and `b - lo > (hi - lo) * 3 / 4 - 1 > 8` imply `m < b` and
		// hence `v[m] <= pivot`.
		if b - 1 > lo && !is_less(&v[m], &v[pivot]) {
			v.swap(m, b - 1);
			b -= 1;
			dups += 1;
		}
		// If at least two points equal the pivot, assume a skewed distribution.
		protect = dups > 1;
	}
	if protect {
		trace!(len = hi, greater = hi - c, "collecting duplicates of pivot");

		// Add invariants:
		//
		//   v[a <= i < b] unexamined
		//   v[b <= i < c] = pivot
		loop {
			// v[b - 1] == pivot
			while a < b && !is_less(&v[b - 1], &v[pivot]) {
				b -= 1;
			}
			// v[a] < pivot
			while a < b && is_less(&v[a], &v[pivot]) {
				a += 1;
			}
			if a >= b {
				break;
			}
			// v[a] == pivot && v[b - 1] < pivot
			v.swap(a, b - 1);
			a += 1;
			b -= 1;
		}
	}

	// Swap the pivot between the lesser elements and its duplicates.
	v.swap(pivot, b - 1);
	(b - 1, c)
}
