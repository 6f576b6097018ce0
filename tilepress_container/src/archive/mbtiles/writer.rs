//! Write tiles into an MBTiles (SQLite) database.
//!
//! The database holds two tables:
//! - `metadata (name text, value text)` with a unique index on `name`,
//! - `tiles (zoom_level integer, tile_column integer, tile_row integer, tile_data blob)`
//!   with a unique index on the coordinate columns.
//!
//! Rows are stored in the TMS layout: `tile_row = 2^z - 1 - y`.
//!
//! The connection is tuned for a single bulk writer (`synchronous=0`, exclusive locking,
//! rollback journal). Finalizing runs `ANALYZE` and closes the database.

use crate::{ArchiveSummary, MetadataStore, TileArchiveWriter, WriterOptions};
use anyhow::{Context, Result, anyhow};
use r2d2_sqlite::{SqliteConnectionManager, rusqlite::params};
use std::path::{Path, PathBuf};
use tilepress_core::{Blob, TileCoord};

/// Schema statements with a label for error messages. They run one at a time so that a
/// forced open can skip the ones that already exist.
const SCHEMA: [(&str, &str); 4] = [
	(
		"CREATE TABLE metadata (name text, value text);",
		"tileset already exists, use force if you want to write into the old tileset",
	),
	(
		"CREATE TABLE tiles (zoom_level integer, tile_column integer, tile_row integer, tile_data blob);",
		"create tiles table",
	),
	("CREATE UNIQUE INDEX name ON metadata (name);", "index metadata"),
	(
		"CREATE UNIQUE INDEX tile_index ON tiles (zoom_level, tile_column, tile_row);",
		"index tiles",
	),
];

/// Writer for MBTiles databases.
pub struct MBTilesArchiveWriter {
	path: PathBuf,
	store: Option<MetadataStore>,
	summary: ArchiveSummary,
}

impl MBTilesArchiveWriter {
	/// Opens or creates the database at `path` and creates the schema.
	///
	/// If the schema already exists the open fails, unless `options.force` is set; then the
	/// failing statements are logged and the existing tables are written to.
	pub fn open(path: &Path, options: WriterOptions) -> Result<MBTilesArchiveWriter> {
		log::debug!("open MBTiles {path:?}");

		let manager = SqliteConnectionManager::file(path).with_init(|conn| {
			conn.pragma_update(None, "synchronous", 0)?;
			conn.pragma_update_and_check(None, "locking_mode", "EXCLUSIVE", |_| Ok(()))?;
			conn.pragma_update_and_check(None, "journal_mode", "DELETE", |_| Ok(()))
		});
		let store = MetadataStore::new(&path.to_string_lossy(), manager)?;

		let conn = store.connection()?;
		for (statement, label) in SCHEMA {
			let Err(err) = conn.execute_batch(statement) else {
				continue;
			};

			let err = anyhow::Error::from(err).context(format!("{label}: {path:?}"));

			if options.force {
				log::warn!("{err:#}");
			} else {
				return Err(err);
			}
		}
		drop(conn);

		Ok(MBTilesArchiveWriter {
			path: path.to_path_buf(),
			store: Some(store),
			summary: ArchiveSummary::default(),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn store(&self) -> Result<&MetadataStore> {
		self
			.store
			.as_ref()
			.ok_or_else(|| anyhow!("MBTiles writer for {:?} is already finalized", self.path))
	}
}

impl TileArchiveWriter for MBTilesArchiveWriter {
	/// Inserts the tile with its row flipped to TMS.
	///
	/// A failing insert, e.g. a second tile at the same coordinate, is logged and the tile is
	/// dropped. Only an unusable connection is an error.
	fn write_tile(&mut self, coord: &TileCoord, blob: &Blob) -> Result<()> {
		let conn = self.store()?.connection()?;
		let result = conn.execute(
			"INSERT INTO tiles (zoom_level, tile_column, tile_row, tile_data) VALUES (?1, ?2, ?3, ?4)",
			params![coord.level, coord.x, coord.flipped_y(), blob.as_slice()],
		);
		drop(conn);

		match result {
			Ok(_) => {
				log::trace!("wrote {coord:?} with {} bytes", blob.len());
				self.summary.tile_count += 1;
				self.summary.bytes_written += blob.len();
			}
			Err(err) => log::error!("sqlite insert of {coord:?} into {:?} failed: {err}", self.path),
		}
		Ok(())
	}

	fn finalize(&mut self) -> Result<ArchiveSummary> {
		let store = self
			.store
			.take()
			.ok_or_else(|| anyhow!("MBTiles writer for {:?} is already finalized", self.path))?;

		store
			.connection()?
			.execute_batch("ANALYZE;")
			.with_context(|| format!("ANALYZE failed for {:?}", self.path))?;
		drop(store);

		log::debug!(
			"closed MBTiles {:?}: {} tiles, {} bytes",
			self.path,
			self.summary.tile_count,
			self.summary.bytes_written
		);
		Ok(self.summary)
	}

	fn metadata_store(&self) -> Option<&MetadataStore> {
		self.store.as_ref()
	}
}
