//! This module provides the `ByteRange` struct, a contiguous region of an archive file.
//!
//! ```rust
//! use tilepress_core::ByteRange;
//!
//! let range = ByteRange::new(512_000, 42);
//! assert_eq!(range.end(), 512_042);
//! ```

use std::fmt;

/// A range of bytes described by its offset and length.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ByteRange {
	/// The starting offset of the byte range.
	pub offset: u64,
	/// The length of the byte range.
	pub length: u64,
}

impl ByteRange {
	#[must_use]
	pub fn new(offset: u64, length: u64) -> Self {
		Self { offset, length }
	}

	/// First offset after the range.
	#[must_use]
	pub fn end(&self) -> u64 {
		self.offset + self.length
	}
}

impl fmt::Debug for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ByteRange[{},{}]", self.offset, self.length)
	}
}
