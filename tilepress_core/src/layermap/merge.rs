//! Combining per-shard layer statistics.
//!
//! Every tile-building worker fills its own [`LayerMap`]. Once the shards are done they are
//! folded into one map here. The merge is a single pass over the inputs and does not
//! depend on how the shards were produced. Sample lists stay bounded by
//! [`TilestatsConfig::max_sample_values`]; because eviction depends on insertion order,
//! `merge([a, b])` and `merge([b, a])` may keep different samples once the cap is hit.
//! Both keep only the lexicographically smallest values they saw.

use super::{AttributeType, LayerEntry, LayerMap, StatsEntry, TypeAndString};
use crate::{TilestatsConfig, truncate_key};
use std::{collections::BTreeMap, slice};

/// Merges layer maps under the caps of a [`TilestatsConfig`].
#[derive(Clone, Debug, Default)]
pub struct LayerMapMerger {
	config: TilestatsConfig,
}

impl LayerMapMerger {
	pub fn new(config: TilestatsConfig) -> Self {
		LayerMapMerger { config }
	}

	pub fn config(&self) -> &TilestatsConfig {
		&self.config
	}

	/// Merges `maps` into a new layer map.
	///
	/// Layers without features (and without `retain`) are skipped. With `truncate_names`,
	/// layer and attribute names are cut to the key budget first; names that collide after
	/// truncation are merged into one entry.
	pub fn merge(&self, maps: &[LayerMap], truncate_names: bool) -> LayerMap {
		let max_sample_values = self.config.max_sample_values;
		let mut out = LayerMap::new();

		for map in maps {
			for (name, layer) in map {
				if layer.is_empty() {
					continue;
				}

				let name = if truncate_names {
					truncate_key(name)
				} else {
					name.clone()
				};

				let next_id = out.len();
				let out_layer = out.entry(name).or_insert_with(|| LayerEntry {
					minzoom: layer.minzoom,
					maxzoom: layer.maxzoom,
					description: layer.description.clone(),
					..LayerEntry::new(next_id)
				});

				for (key, stats) in &layer.file_keys {
					let key = if truncate_names {
						truncate_key(key)
					} else {
						key.clone()
					};

					match out_layer.file_keys.get_mut(&key) {
						Some(out_stats) => out_stats.merge(stats, max_sample_values),
						None => {
							out_layer.file_keys.insert(key, stats.clone());
						}
					}
				}

				out_layer.minzoom = out_layer.minzoom.min(layer.minzoom);
				out_layer.maxzoom = out_layer.maxzoom.max(layer.maxzoom);
				out_layer.points += layer.points;
				out_layer.lines += layer.lines;
				out_layer.polygons += layer.polygons;
				out_layer.retain += layer.retain;
			}
		}

		out
	}

	/// Merges a single map with truncated names, consolidating layers and attributes whose
	/// names only differ beyond the key budget.
	pub fn consolidate(&self, map: &LayerMap) -> LayerMap {
		self.merge(slice::from_ref(map), true)
	}
}

/// Merges `maps` with the default caps and without truncating names.
pub fn merge_layermaps(maps: &[LayerMap]) -> LayerMap {
	LayerMapMerger::default().merge(maps, false)
}

/// Records one observed value of `attribute` in a layer's attribute statistics.
///
/// Null values are ignored.
pub fn add_sample(
	file_keys: &mut BTreeMap<String, StatsEntry>,
	attribute: &str,
	value: &TypeAndString,
	config: &TilestatsConfig,
) {
	if value.value_type == AttributeType::Null {
		return;
	}
	file_keys
		.entry(attribute.to_string())
		.or_default()
		.add_sample(value, config.max_sample_values);
}
