//! Tile coordinates in a Web Mercator pyramid, as produced by the tile renderer.
//!
//! The renderer counts rows from the north (XYZ). MBTiles counts from the south (TMS);
//! [`TileCoord::flipped_y`] converts between the two.
//!
//! ```
//! use tilepress_core::TileCoord;
//!
//! let coord = TileCoord::new(3, 1, 2).unwrap();
//! assert_eq!(coord.flipped_y(), 5);
//! ```

use anyhow::{Result, ensure};
use std::fmt::{self, Debug};

/// A 3D tile coordinate: zoom level, column and row.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The column of the tile.
	pub x: u32,
	/// The row of the tile, counted from the north.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > 31 or `x`/`y` lie outside the level's grid.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= 31, "level ({level}) must be <= 31");
		let max = 1u64 << level;
		ensure!(u64::from(x) < max, "x ({x}) out of bounds for level {level}");
		ensure!(u64::from(y) < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Number of rows (and columns) at this level minus one.
	#[must_use]
	pub fn max_index(&self) -> u32 {
		((1u64 << self.level) - 1) as u32
	}

	/// Row index with the vertical axis inverted: `2^level - 1 - y`.
	///
	/// Applying it twice yields the original row.
	#[must_use]
	pub fn flipped_y(&self) -> u32 {
		self.max_index() - self.y
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}
