//! Choosing an archive backend by file extension.

use super::{MBTilesArchiveWriter, PMTilesArchiveWriter, TileArchiveWriter, WriterOptions};
use anyhow::{Result, anyhow, bail};
use std::{fmt, path::Path};

/// The archive formats tiles can be written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
	MBTiles,
	PMTiles,
}

impl ArchiveFormat {
	/// Looks up a format by file extension, ignoring case and a leading dot.
	pub fn from_extension(extension: &str) -> Result<ArchiveFormat> {
		match extension.to_ascii_lowercase().trim_matches('.') {
			"mbtiles" => Ok(ArchiveFormat::MBTiles),
			"pmtiles" => Ok(ArchiveFormat::PMTiles),
			other => bail!("file extension '{other}' unknown"),
		}
	}

	pub fn from_path(path: &Path) -> Result<ArchiveFormat> {
		let extension = path
			.extension()
			.and_then(|extension| extension.to_str())
			.ok_or_else(|| anyhow!("path {path:?} has no file extension"))?;
		ArchiveFormat::from_extension(extension)
	}

	pub fn extension(&self) -> &'static str {
		match self {
			ArchiveFormat::MBTiles => "mbtiles",
			ArchiveFormat::PMTiles => "pmtiles",
		}
	}

	/// Opens a writer of this format at `path`.
	pub fn open_writer(&self, path: &Path, options: WriterOptions) -> Result<Box<dyn TileArchiveWriter>> {
		log::debug!("open {} writer for {path:?}", self.extension());
		Ok(match self {
			ArchiveFormat::MBTiles => Box::new(MBTilesArchiveWriter::open(path, options)?),
			ArchiveFormat::PMTiles => Box::new(PMTilesArchiveWriter::open(path, options)?),
		})
	}
}

impl fmt::Display for ArchiveFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.extension())
	}
}
