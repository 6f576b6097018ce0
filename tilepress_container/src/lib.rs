//! Tilepress Container: write tile archives and their metadata.
//!
//! This crate exposes:
//! - the [`TileArchiveWriter`] trait with MBTiles and PMTiles backends,
//! - [`ArchiveFormat`] to pick a backend from a file extension,
//! - [`MetadataWriter`] to fill the metadata table and the `metadata.json` sidecar.
//!
//! # Quick start
//! ```rust,no_run
//! use tilepress_container::*;
//! use tilepress_core::*;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let path = Path::new("/tmp/roads.mbtiles");
//!     let mut writer = ArchiveFormat::from_path(path)?.open_writer(path, WriterOptions::default())?;
//!     writer.write_tile(&TileCoord::new(0, 0, 0)?, &Blob::from("tile data"))?;
//!
//!     let mut tileset = TilesetMetadata::new("roads");
//!     tileset.maxzoom = 14;
//!     MetadataWriter::default().write(writer.metadata_store(), None, &tileset, &LayerMap::new(), false)?;
//!
//!     let summary = writer.finalize()?;
//!     println!("{} tiles", summary.tile_count);
//!     Ok(())
//! }
//! ```

mod archive;
pub use archive::*;

mod metadata;
pub use metadata::*;
