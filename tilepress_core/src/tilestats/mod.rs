//! Tilestats: a bounded summary of the layers and attribute values of a vector tileset.
//!
//! The output has this shape (whitespace aside):
//!
//! ```json
//! {"layerCount": 1,"layers": [{"layer": "roads","count": 5,"geometry": "LineString",
//!   "attributeCount": 1,"attributes": [{"attribute": "lanes","count": 2,"type": "number",
//!   "values": [1,2],"min": 1,"max": 2}]}]}
//! ```
//!
//! Names are always consolidated to the key budget before writing, whether or not the
//! caller already truncated them.

use crate::{
	AttributeType, LayerEntry, LayerMap, LayerMapMerger, MAX_KEY_UTF16_UNITS, StatsEntry, TilestatsConfig,
	json::{JsonWriter, is_json_number},
	tilestats_type_name, truncate_utf16,
};
use anyhow::Result;
use std::fmt::Write;

/// Writes tilestats under the caps of a [`TilestatsConfig`].
#[derive(Clone, Debug, Default)]
pub struct Tilestats {
	merger: LayerMapMerger,
}

impl Tilestats {
	pub fn new(config: TilestatsConfig) -> Self {
		Tilestats {
			merger: LayerMapMerger::new(config),
		}
	}

	fn config(&self) -> &TilestatsConfig {
		self.merger.config()
	}

	/// Writes the tilestats object for `layermap` into `out`.
	///
	/// `max_values` limits both the attributes listed per layer and the values listed per
	/// attribute.
	pub fn write<W: Write>(&self, layermap: &LayerMap, max_values: usize, out: &mut JsonWriter<W>) -> Result<()> {
		let layermap = self.merger.consolidate(layermap);

		out.write_hash()?;

		out.set_nospace();
		out.write_string("layerCount")?;
		out.write_unsigned(layermap.len() as u64)?;

		out.set_nospace();
		out.write_string("layers")?;
		out.write_array()?;

		for (name, layer) in &layermap {
			self.write_layer(name, layer, max_values, out)?;
		}

		out.set_nospace();
		out.end_array()?;
		out.set_nospace();
		out.end_hash()
	}

	/// Renders the tilestats object for `layermap` as a string.
	pub fn to_json_string(&self, layermap: &LayerMap, max_values: usize) -> Result<String> {
		let mut text = String::new();
		self.write(layermap, max_values, &mut JsonWriter::new(&mut text))?;
		Ok(text)
	}

	fn write_layer<W: Write>(
		&self,
		name: &str,
		layer: &LayerEntry,
		max_values: usize,
		out: &mut JsonWriter<W>,
	) -> Result<()> {
		out.set_nospace();
		out.write_hash()?;

		out.set_nospace();
		out.write_string("layer")?;
		out.write_string(name)?;

		out.set_nospace();
		out.write_string("count")?;
		out.write_unsigned(layer.feature_count())?;

		out.set_nospace();
		out.write_string("geometry")?;
		out.write_string(layer.geometry_name())?;

		out.set_nospace();
		out.write_string("attributeCount")?;
		out.write_unsigned(layer.file_keys.len().min(self.config().max_attributes) as u64)?;

		out.set_nospace();
		out.write_string("attributes")?;
		out.set_nospace();
		out.write_array()?;

		for (attribute, stats) in layer.file_keys.iter().take(max_values) {
			self.write_attribute(attribute, stats, max_values, out)?;
		}

		out.set_nospace();
		out.end_array()?;
		out.set_nospace();
		out.end_hash()
	}

	fn write_attribute<W: Write>(
		&self,
		attribute: &str,
		stats: &StatsEntry,
		max_values: usize,
		out: &mut JsonWriter<W>,
	) -> Result<()> {
		out.set_nospace();
		out.write_hash()?;

		out.set_nospace();
		out.write_string("attribute")?;
		out.write_string(attribute)?;

		out.set_nospace();
		out.write_string("count")?;
		out.write_unsigned(stats.sample_values.len().min(self.config().max_sample_values) as u64)?;

		out.set_nospace();
		out.write_string("type")?;
		out.write_string(tilestats_type_name(stats.types))?;

		out.set_nospace();
		out.write_string("values")?;
		out.write_array()?;

		// Strings over the key budget and numbers that are not valid JSON tokens are left out
		// of the preview but still counted above.
		let previews = stats
			.sample_values
			.iter()
			.filter(|value| match value.value_type {
				AttributeType::String => truncate_utf16(&value.string, MAX_KEY_UTF16_UNITS).len() == value.string.len(),
				AttributeType::Double => is_json_number(&value.string),
				AttributeType::Bool => matches!(value.string.as_str(), "true" | "false"),
				AttributeType::Null => false,
			})
			.take(max_values);
		for value in previews {
			out.set_nospace();
			if value.value_type == AttributeType::String {
				out.write_string(&value.string)?;
			} else {
				out.write_stringified(&value.string)?;
			}
		}

		out.set_nospace();
		out.end_array()?;

		if stats.has_numbers() {
			out.set_nospace();
			out.write_string("min")?;
			out.write_number(stats.min)?;

			out.set_nospace();
			out.write_string("max")?;
			out.write_number(stats.max)?;
		}

		out.set_nospace();
		out.end_hash()
	}
}

/// Writes tilestats for `layermap` with the caps of `config`.
pub fn write_tilestats<W: Write>(
	layermap: &LayerMap,
	max_values: usize,
	out: &mut JsonWriter<W>,
	config: TilestatsConfig,
) -> Result<()> {
	Tilestats::new(config).write(layermap, max_values, out)
}
