use core::{error::Error, fmt};

/// The error returned by [`Heap::peek`] and [`Heap::remove`] when the heap holds no elements.
///
/// [`Heap::peek`]: crate::Heap::peek
/// [`Heap::remove`]: crate::Heap::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("heap is empty")
	}
}

impl Error for EmptyError {}
