use std::fmt::Debug;
use tilepress_core::{ByteRange, TileCoord};

/// Directory entry of one tile in a PMTiles archive.
///
/// `row` is the XYZ row as written; PMTiles does not flip it. `offset` is absolute within
/// the file.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PMTilesEntry {
	pub zoom: u8,
	pub col: u32,
	pub row: u32,
	pub offset: u64,
	pub length: u32,
}

impl PMTilesEntry {
	pub fn new(coord: &TileCoord, offset: u64, length: u32) -> PMTilesEntry {
		PMTilesEntry {
			zoom: coord.level,
			col: coord.x,
			row: coord.y,
			offset,
			length,
		}
	}

	pub fn range(&self) -> ByteRange {
		ByteRange::new(self.offset, u64::from(self.length))
	}
}

impl Debug for PMTilesEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"PMTilesEntry({}, [{}, {}], {:?})",
			self.zoom,
			self.col,
			self.row,
			self.range()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_xyz_row() -> anyhow::Result<()> {
		let entry = PMTilesEntry::new(&TileCoord::new(4, 3, 2)?, 512_010, 7);
		assert_eq!((entry.zoom, entry.col, entry.row), (4, 3, 2));
		assert_eq!(entry.range().end(), 512_017);
		assert_eq!(format!("{entry:?}"), "PMTilesEntry(4, [3, 2], ByteRange[512010,7])");
		Ok(())
	}
}
