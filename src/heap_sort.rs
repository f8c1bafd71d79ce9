//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! Binary heap primitives shared by the heapsort fallback and the `Heap` priority queue.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::{ArrayViewMut1, s};

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
#[cold]
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Build the heap in linear time.
	for i in (0..v.len() / 2).rev() {
		sift_down(v.view_mut(), i, is_less);
	}

	// Pop maximal elements from the heap.
	for i in (1..v.len()).rev() {
		v.swap(0, i);
		sift_down(v.slice_mut(s![..i]), 0, is_less);
	}
}

/// Index of the parent of `node`, which must not be the root.
#[cfg(feature = "alloc")]
#[inline]
pub const fn parent(node: usize) -> usize {
	(node - 1) / 2
}

/// Index of the left child of `node`.
#[inline]
pub const fn left(node: usize) -> usize {
	2 * node + 1
}

/// Index of the right child of `node`.
#[inline]
pub const fn right(node: usize) -> usize {
	left(node) + 1
}

/// Moves `v[node]` down until the invariant `parent >= child` holds below it.
///
/// Assumes the invariant already holds for both subtrees of `node`.
pub fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		let mut child = left(node);
		if child >= v.len() {
			break;
		}

		// Choose the greater child.
		if right(node) < v.len() && is_less(&v[child], &v[right(node)]) {
			child = right(node);
		}

		// Stop if the invariant holds at `node`.
		if !is_less(&v[node], &v[child]) {
			break;
		}

		// Swap `node` with the greater child, move one step down, and continue sifting.
		v.swap(node, child);
		node = child;
	}
}

/// Moves `v[node]` up until the invariant `parent >= child` holds above it.
///
/// Assumes the invariant holds everywhere except between `node` and its ancestors.
#[cfg(feature = "alloc")]
pub fn sift_up<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	while node > 0 {
		let up = parent(node);
		if !is_less(&v[up], &v[node]) {
			break;
		}
		v.swap(up, node);
		node = up;
	}
}
