//! The interface shared by all archive backends.

use crate::MetadataStore;
use anyhow::Result;
use tilepress_core::{Blob, TileCoord};

/// Options applied when an archive is opened for writing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriterOptions {
	/// Proceed over an existing archive instead of failing.
	///
	/// MBTiles keeps the existing database and ignores schema and metadata errors; PMTiles
	/// replaces the existing file.
	pub force: bool,
}

impl WriterOptions {
	pub fn forced() -> Self {
		WriterOptions { force: true }
	}
}

/// What a writer reports once it has been finalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
	/// Number of tiles that were accepted by the archive.
	pub tile_count: u64,
	/// Bytes of tile data that were accepted by the archive.
	pub bytes_written: u64,
}

/// A tile archive that is open for writing.
///
/// Writers are obtained from an `open` constructor (or [`crate::ArchiveFormat::open_writer`])
/// and are open until [`finalize`](TileArchiveWriter::finalize) is called. Any call after that
/// fails with an "already finalized" error. Dropping a writer without finalizing releases its
/// handles but skips the closing steps.
pub trait TileArchiveWriter: Send {
	/// Stores one encoded tile at `coord` (XYZ scheme).
	fn write_tile(&mut self, coord: &TileCoord, blob: &Blob) -> Result<()>;

	/// Completes the archive and releases its handles.
	fn finalize(&mut self) -> Result<ArchiveSummary>;

	/// The relational metadata store of this archive, if the format has one.
	fn metadata_store(&self) -> Option<&MetadataStore>;
}
