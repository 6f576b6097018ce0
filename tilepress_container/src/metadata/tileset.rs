use std::collections::BTreeMap;
use tilepress_core::{GeoBBox, GeoCenter};

/// Tileset-level properties written to the archive metadata.
#[derive(Clone, Debug)]
pub struct TilesetMetadata {
	pub name: String,
	/// Falls back to `name` when absent.
	pub description: Option<String>,
	pub minzoom: u8,
	pub maxzoom: u8,
	pub bounds: GeoBBox,
	pub center: GeoCenter,
	/// Only written when present and non-empty.
	pub attribution: Option<String>,
	/// Vector tiles (`pbf`) rather than raster tiles (`png`).
	pub vector: bool,
	pub program: String,
	pub program_version: String,
	/// The invocation that produced the tileset.
	pub generator_options: String,
	/// Labels for attribute names that override the inferred field type in `vector_layers`.
	pub attribute_descriptions: BTreeMap<String, String>,
	/// Whether tilestats are embedded in the `json` key.
	pub tilestats: bool,
}

impl TilesetMetadata {
	pub fn new(name: &str) -> TilesetMetadata {
		TilesetMetadata {
			name: name.to_string(),
			description: None,
			minzoom: 0,
			maxzoom: 0,
			bounds: GeoBBox::new_world(),
			center: GeoCenter(0.0, 0.0, 0),
			attribution: None,
			vector: true,
			program: env!("CARGO_PKG_NAME").to_string(),
			program_version: env!("CARGO_PKG_VERSION").to_string(),
			generator_options: String::new(),
			attribute_descriptions: BTreeMap::new(),
			tilestats: true,
		}
	}

	pub fn description(&self) -> &str {
		self.description.as_deref().unwrap_or(&self.name)
	}

	pub fn generator(&self) -> String {
		format!("{} {}", self.program, self.program_version)
	}

	pub fn format(&self) -> &'static str {
		if self.vector { "pbf" } else { "png" }
	}
}

impl Default for TilesetMetadata {
	fn default() -> Self {
		TilesetMetadata::new("")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn derived_values() {
		let mut tileset = TilesetMetadata::new("roads");
		assert_eq!(tileset.description(), "roads");
		assert_eq!(tileset.format(), "pbf");
		assert!(tileset.generator().starts_with("tilepress_container "));

		tileset.description = Some("Road network".to_string());
		tileset.vector = false;
		assert_eq!(tileset.description(), "Road network");
		assert_eq!(tileset.format(), "png");
	}
}
