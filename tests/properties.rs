use ndarray::{Array1, arr1, aview_mut1};
use ndarray_introsort::{EmptyError, Heap, Slice1Ext, sort_by};
use quickcheck_macros::quickcheck;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Sorts `v` with `is_less`, returning the number of comparisons made.
fn counted<T>(v: &mut [T], mut is_less: impl FnMut(&T, &T) -> bool) -> usize {
	let mut comparisons = 0;
	sort_by(aview_mut1(v), |a, b| {
		comparisons += 1;
		is_less(a, b)
	});
	comparisons
}

fn significant_bits(n: usize) -> usize {
	(usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn permuted_and_ordered(xs: Vec<i32>) {
	let mut expected = xs.clone();
	expected.sort();
	let mut array = Array1::from_vec(xs);
	array.sort_unstable();
	assert!(array.is_sorted());
	assert_eq!(array.to_vec(), expected);
}

#[quickcheck]
fn idempotent(xs: Vec<(u8, i8)>) {
	let mut once = Array1::from_vec(xs);
	once.sort_unstable();
	let mut twice = once.clone();
	twice.sort_unstable();
	assert_eq!(once, twice);

	// Equal keys may be reordered, but the sequence of keys is fixed.
	let keys = |v: &Array1<(u8, i8)>| v.iter().map(|&(key, _)| key).collect::<Vec<_>>();
	let mut by_key = once.clone();
	by_key.sort_unstable_by_key(|&(key, _)| key);
	let expected = keys(&by_key);
	by_key.sort_unstable_by_key(|&(key, _)| key);
	assert_eq!(keys(&by_key), expected);
}

#[test]
fn empty_and_singleton_never_compare() {
	let mut empty: [u8; 0] = [];
	assert_eq!(counted(&mut empty, |a, b| a < b), 0);
	let mut singleton = [42];
	assert_eq!(counted(&mut singleton, |a, b| a < b), 0);
	assert_eq!(singleton, [42]);
}

#[test]
fn identical_values_in_linear_comparisons() {
	let n = 10_000;
	let mut v = vec![7u32; n];
	assert!(counted(&mut v, |a, b| a < b) < 3 * n);
	assert!(v.iter().all(|&x| x == 7));
}

#[test]
fn few_distinct_values_stay_linearithmic() {
	let n = 30_000;
	for distinct in [2, 3, 5, 17] {
		let mut v = (0..n).map(|i| (i * 7919) % distinct).collect::<Vec<_>>();
		let comparisons = counted(&mut v, |a, b| a < b);
		assert!(comparisons < 2 * n * significant_bits(n), "{distinct}: {comparisons}");
		assert!(v.windows(2).all(|w| w[0] <= w[1]));
	}
}

#[test]
fn random_inputs_stay_linearithmic() {
	let mut rng = StdRng::seed_from_u64(0x5EED_2026);
	for n in [13, 41, 100, 1_000, 65_536] {
		let mut v = (0..n).map(|_| rng.random::<u64>()).collect::<Vec<_>>();
		let mut expected = v.clone();
		expected.sort_unstable();
		let comparisons = counted(&mut v, |a, b| a < b);
		assert_eq!(v, expected);
		assert!(comparisons < 4 * n * significant_bits(n), "{n}: {comparisons}");
	}
}

#[test]
fn organ_pipe_and_sawtooth_sorted() {
	for n in [50, 257, 4_096] {
		let organ = (0..n).map(|i| i.min(n - 1 - i)).collect::<Vec<_>>();
		let saw = (0..n).map(|i| i % 13).collect::<Vec<_>>();
		let descending = (0..n).rev().collect::<Vec<_>>();
		for mut v in [organ, saw, descending] {
			let mut expected = v.clone();
			expected.sort_unstable();
			sort_by(aview_mut1(&mut v), |a, b| a < b);
			assert_eq!(v, expected);
		}
	}
}

#[test]
fn inconsistent_comparator_keeps_elements() {
	let mut rng = StdRng::seed_from_u64(0xBAD_C0DE);
	for n in [0, 1, 2, 12, 13, 40, 41, 500, 5_000] {
		let mut v = (0..n).collect::<Vec<usize>>();
		sort_by(aview_mut1(&mut v), |_, _| rng.random_bool(0.5));
		v.sort_unstable();
		assert_eq!(v, (0..n).collect::<Vec<_>>());

		let mut v = (0..n).collect::<Vec<usize>>();
		sort_by(aview_mut1(&mut v), |_, _| true);
		v.sort_unstable();
		assert_eq!(v, (0..n).collect::<Vec<_>>());
	}
}

#[test]
fn lexical_ascending() {
	let mut v = arr1(&["t", "e", "s", "t"]);
	sort_by(v.view_mut(), |a, b| a < b);
	assert_eq!(v, arr1(&["e", "s", "t", "t"]));
}

#[test]
fn lexical_descending() {
	let mut v = arr1(&["t", "e", "s", "t"]);
	sort_by(v.view_mut(), |a, b| b < a);
	assert_eq!(v, arr1(&["t", "t", "s", "e"]));
}

#[test]
fn alphabet_goes_through_pivot_selection() {
	let alphabet = ('a'..='y').collect::<Vec<_>>();
	assert_eq!(alphabet.len(), 25);

	let mut first = None;
	let mut v = alphabet.clone();
	sort_by(aview_mut1(&mut v), |a, b| {
		if first.is_none() {
			first = Some((*a, *b));
		}
		a < b
	});
	assert_eq!(v, alphabet);
	// Median of three over the first, middle, and last element.
	assert_eq!(first, Some(('a', 'm')));

	let mut first = None;
	let mut v = alphabet[..12].to_vec();
	sort_by(aview_mut1(&mut v), |a, b| {
		if first.is_none() {
			first = Some((*a, *b));
		}
		a < b
	});
	assert_eq!(v, alphabet[..12]);
	// Shell pass with gap 6.
	assert_eq!(first, Some(('g', 'a')));
}

#[test]
fn heap_drains_in_order() {
	let mut heap = Heap::new(|a: &i32, b: &i32| a < b);
	heap.add_all([3, 1, 4, 2]);
	let mut drained = Vec::new();
	while let Ok(value) = heap.remove() {
		drained.push(value);
	}
	assert_eq!(drained, [1, 2, 3, 4]);
	assert_eq!(heap.peek(), Err(EmptyError));
	assert_eq!(heap.remove(), Err(EmptyError));
}

#[test]
fn heap_snapshot_holds_all_values() {
	let mut heap = Heap::max();
	heap.add_all("introsort".chars());
	let mut values = heap.values().to_vec();
	values.sort_unstable();
	assert_eq!(values, ['i', 'n', 'o', 'o', 'r', 'r', 's', 't', 't']);
	assert_eq!(heap.remove(), Ok('t'));
	assert_eq!(heap.clone().into_vec().len(), 8);
	assert!(format!("{heap:?}").starts_with("Heap"));
}
