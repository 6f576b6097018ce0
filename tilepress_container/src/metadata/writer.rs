//! Writes tileset metadata into a metadata store and the `metadata.json` sidecar.
//!
//! Keys are written in a fixed order: `name`, `description`, `version`, `minzoom`,
//! `maxzoom`, `center`, `bounds`, `type`, `attribution` (if any), `format`, `generator`,
//! `generator_options` and, for vector tilesets, `json`. The `json` value holds the
//! TileJSON `vector_layers` and, when enabled, the tilestats of the layer map.

use super::{MetadataStore, TilesetMetadata};
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tilepress_core::{LayerMap, Tilestats, TilestatsConfig, field_type_label, json::JsonWriter};

/// File name of the sidecar written next to directory-style outputs.
pub const SIDECAR_FILE_NAME: &str = "metadata.json";

/// Writes tileset metadata under the caps of a [`TilestatsConfig`].
#[derive(Clone, Debug, Default)]
pub struct MetadataWriter {
	config: TilestatsConfig,
	tilestats: Tilestats,
}

impl MetadataWriter {
	pub fn new(config: TilestatsConfig) -> Self {
		MetadataWriter {
			config,
			tilestats: Tilestats::new(config),
		}
	}

	/// Writes all metadata keys for `tileset` and `layermap`.
	///
	/// Without a `store` the keys go to a throwaway in-memory store, which is only useful
	/// together with `sidecar_dir`. A key that cannot be written is an error unless `force`
	/// is set, then it is logged and skipped. The sidecar is only created when it does not
	/// exist yet.
	pub fn write(
		&self,
		store: Option<&MetadataStore>,
		sidecar_dir: Option<&Path>,
		tileset: &TilesetMetadata,
		layermap: &LayerMap,
		force: bool,
	) -> Result<()> {
		let temporary;
		let store = match store {
			Some(store) => store,
			None => {
				temporary = MetadataStore::open_in_memory()?;
				&temporary
			}
		};

		for (key, value) in self.entries(tileset, layermap)? {
			if let Err(err) = store.set(key, &value) {
				if force {
					log::warn!("{err:#}");
				} else {
					log::error!("{err:#}");
					return Err(err);
				}
			}
		}

		if let Some(dir) = sidecar_dir {
			write_sidecar(store, dir)?;
		}
		Ok(())
	}

	/// The metadata keys and values in the order they are written.
	///
	/// An out-of-range `center` is an error.
	pub fn entries(&self, tileset: &TilesetMetadata, layermap: &LayerMap) -> Result<Vec<(&'static str, String)>> {
		tileset.center.check().context("invalid tileset center")?;

		let mut entries = vec![
			("name", tileset.name.clone()),
			("description", tileset.description().to_string()),
			("version", "2".to_string()),
			("minzoom", tileset.minzoom.to_string()),
			("maxzoom", tileset.maxzoom.to_string()),
			("center", tileset.center.as_metadata_string()),
			("bounds", tileset.bounds.as_metadata_string()),
			("type", "overlay".to_string()),
		];

		if let Some(attribution) = tileset.attribution.as_ref().filter(|a| !a.is_empty()) {
			entries.push(("attribution", attribution.clone()));
		}

		entries.push(("format", tileset.format().to_string()));
		entries.push(("generator", tileset.generator()));
		entries.push(("generator_options", tileset.generator_options.clone()));

		if tileset.vector {
			entries.push(("json", self.layers_json(tileset, layermap)?));
		}
		Ok(entries)
	}

	/// The `json` value: `vector_layers` followed by the optional `tilestats`.
	pub fn layers_json(&self, tileset: &TilesetMetadata, layermap: &LayerMap) -> Result<String> {
		let mut text = String::new();
		let mut out = JsonWriter::new(&mut text);

		out.write_hash()?;
		out.set_nospace();
		out.write_string("vector_layers")?;
		out.write_array()?;

		for (name, layer) in layermap {
			out.write_hash()?;

			out.write_string("id")?;
			out.write_string(name)?;

			out.write_string("description")?;
			out.write_string(&layer.description)?;

			out.write_string("minzoom")?;
			out.write_unsigned(u64::from(layer.minzoom))?;

			out.write_string("maxzoom")?;
			out.write_unsigned(u64::from(layer.maxzoom))?;

			out.write_string("fields")?;
			out.write_hash()?;
			out.set_nospace();
			for (attribute, stats) in &layer.file_keys {
				out.write_string(attribute)?;
				match tileset.attribute_descriptions.get(attribute) {
					Some(label) => out.write_string(label)?,
					None => out.write_string(field_type_label(stats.types))?,
				}
			}
			out.set_nospace();
			out.end_hash()?;

			out.end_hash()?;
		}

		out.end_array()?;

		if tileset.tilestats && self.config.max_values > 0 {
			out.set_nospace();
			out.write_string("tilestats")?;
			self.tilestats.write(layermap, self.config.max_values, &mut out)?;
		}

		out.set_nospace();
		out.end_hash()?;
		Ok(text)
	}
}

/// Mirrors all rows of `store` into `dir/metadata.json`, one key per line.
///
/// An existing sidecar is left untouched. Returns whether the file was written.
pub fn write_sidecar(store: &MetadataStore, dir: &Path) -> Result<bool> {
	let path = dir.join(SIDECAR_FILE_NAME);
	if path.exists() {
		log::debug!("leaving existing {path:?} in place");
		return Ok(false);
	}

	let mut text = String::new();
	let mut out = JsonWriter::new(&mut text);
	out.write_hash()?;
	out.write_newline()?;
	for (key, value) in store.entries()? {
		out.comma_newline()?;
		out.write_string(&key)?;
		out.write_string(&value)?;
	}
	out.write_newline()?;
	out.end_hash()?;
	out.write_newline()?;

	fs::write(&path, text).with_context(|| format!("writing {path:?}"))?;
	log::debug!("wrote {path:?}");
	Ok(true)
}
