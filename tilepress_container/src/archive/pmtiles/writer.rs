//! Write tiles into a PMTiles-style flat file.
//!
//! The file starts with a zero-filled reservation of [`HEADER_RESERVATION`] bytes for the
//! header and root directory. Tile blobs follow back to back in write order, and every
//! write appends a [`PMTilesEntry`] to the in-memory directory.
//!
//! Header and directory are not serialized yet: finalizing only flushes the tile data. The
//! directory can be read from [`PMTilesArchiveWriter::entries`].

use super::PMTilesEntry;
use crate::{ArchiveSummary, MetadataStore, TileArchiveWriter, WriterOptions};
use anyhow::{Context, Result, bail};
use std::{
	fs::{File, remove_file},
	io::{self, BufWriter, Read, Write},
	path::{Path, PathBuf},
};
use tilepress_core::{Blob, TileCoord};

/// Bytes reserved at the start of the file.
pub const HEADER_RESERVATION: u64 = 512_000;

/// Writer for PMTiles-style archives.
pub struct PMTilesArchiveWriter {
	path: PathBuf,
	file: Option<Box<dyn Write + Send>>,
	offset: u64,
	entries: Vec<PMTilesEntry>,
}

impl PMTilesArchiveWriter {
	/// Creates the archive at `path` and writes the zeroed header reservation.
	///
	/// An existing file is an error unless `options.force` is set, in which case it is removed
	/// first. Nothing is written before that check.
	pub fn open(path: &Path, options: WriterOptions) -> Result<PMTilesArchiveWriter> {
		log::debug!("open PMTiles {path:?}");

		if path.exists() {
			if options.force {
				remove_file(path).with_context(|| format!("removing existing file {path:?}"))?;
			} else {
				bail!("file {path:?} exists, use force to replace it");
			}
		}

		let file = File::create(path).with_context(|| format!("creating {path:?}"))?;
		PMTilesArchiveWriter::from_writer(path, BufWriter::new(file))
	}

	/// Writes the header reservation into `writer` and appends tiles after it.
	pub(crate) fn from_writer(path: &Path, writer: impl Write + Send + 'static) -> Result<PMTilesArchiveWriter> {
		let mut writer: Box<dyn Write + Send> = Box::new(writer);
		let reserved = io::copy(&mut io::repeat(0).take(HEADER_RESERVATION), &mut writer)
			.with_context(|| format!("reserving header in {path:?}"))?;

		Ok(PMTilesArchiveWriter {
			path: path.to_path_buf(),
			file: Some(writer),
			offset: reserved,
			entries: Vec::new(),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Absolute file position where the next tile will be written.
	pub fn offset(&self) -> u64 {
		self.offset
	}

	/// The directory collected so far, in write order.
	pub fn entries(&self) -> &[PMTilesEntry] {
		&self.entries
	}
}

impl TileArchiveWriter for PMTilesArchiveWriter {
	/// Appends the blob. After a failed write the file position is unknown, so the writer
	/// rejects every later call.
	fn write_tile(&mut self, coord: &TileCoord, blob: &Blob) -> Result<()> {
		let length = u32::try_from(blob.len()).with_context(|| format!("tile {coord:?} is too large"))?;
		let Some(file) = self.file.as_mut() else {
			bail!("PMTiles writer for {:?} is already finalized or failed", self.path);
		};

		if let Err(err) = file.write_all(blob.as_slice()) {
			self.file = None;
			return Err(err).with_context(|| format!("writing tile {coord:?} to {:?}", self.path));
		}
		self.entries.push(PMTilesEntry::new(coord, self.offset, length));
		self.offset += u64::from(length);

		log::trace!("wrote {coord:?} at {}", self.offset);
		Ok(())
	}

	fn finalize(&mut self) -> Result<ArchiveSummary> {
		let Some(mut file) = self.file.take() else {
			bail!("PMTiles writer for {:?} is already finalized or failed", self.path);
		};
		file.flush().with_context(|| format!("flushing {:?}", self.path))?;
		drop(file);

		log::info!("offset: {}", self.offset);
		log::info!("entries: {}", self.entries.len());

		Ok(ArchiveSummary {
			tile_count: self.entries.len() as u64,
			bytes_written: self.offset - HEADER_RESERVATION,
		})
	}

	fn metadata_store(&self) -> Option<&MetadataStore> {
		None
	}
}
