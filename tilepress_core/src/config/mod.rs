//! Limits that bound the size of the tilestats summary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

/// Caps applied while merging layer statistics and writing tilestats.
///
/// ```yaml
/// max_attributes: 1000
/// max_sample_values: 1000
/// max_values: 100
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TilestatsConfig {
	/// Upper bound for `attributeCount` of a layer.
	pub max_attributes: usize,

	/// Number of distinct sample values kept per attribute.
	pub max_sample_values: usize,

	/// Number of attributes per layer and of values per attribute listed in tilestats.
	/// Zero disables tilestats.
	pub max_values: usize,
}

impl Default for TilestatsConfig {
	fn default() -> Self {
		TilestatsConfig {
			max_attributes: 1000,
			max_sample_values: 1000,
			max_values: 100,
		}
	}
}

impl TilestatsConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening tilestats config {path:?}"))?;
		Self::from_reader(file).with_context(|| format!("parsing tilestats config {path:?}"))
	}
}
