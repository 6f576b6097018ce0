use super::StatsEntry;
use std::collections::BTreeMap;

/// Feature counts and attribute statistics of one vector layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerEntry {
	/// Position of the layer in the order layers were first seen during a merge.
	pub id: usize,
	pub file_keys: BTreeMap<String, StatsEntry>,
	pub minzoom: u8,
	pub maxzoom: u8,
	pub description: String,
	pub points: u64,
	pub lines: u64,
	pub polygons: u64,
	/// Non-zero keeps the layer in the metadata even without features of its own.
	pub retain: u64,
}

impl LayerEntry {
	#[must_use]
	pub fn new(id: usize) -> Self {
		LayerEntry {
			id,
			..Default::default()
		}
	}

	/// Sum of points, lines and polygons.
	#[must_use]
	pub fn feature_count(&self) -> u64 {
		self.points + self.lines + self.polygons
	}

	/// A layer without features and without `retain` is dropped when merging.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.feature_count() + self.retain == 0
	}

	/// The dominant geometry class. Ties resolve to `Point`, then `LineString`.
	#[must_use]
	pub fn geometry_name(&self) -> &'static str {
		if self.points >= self.lines && self.points >= self.polygons {
			"Point"
		} else if self.lines >= self.polygons {
			"LineString"
		} else {
			"Polygon"
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(5, 5, 0, "Point")]
	#[case(0, 5, 5, "LineString")]
	#[case(1, 1, 2, "Polygon")]
	#[case(0, 0, 0, "Point")]
	#[case(2, 3, 1, "LineString")]
	#[case(5, 0, 5, "Point")]
	fn geometry_tie_break(#[case] points: u64, #[case] lines: u64, #[case] polygons: u64, #[case] expected: &str) {
		let entry = LayerEntry {
			points,
			lines,
			polygons,
			..LayerEntry::new(0)
		};
		assert_eq!(entry.geometry_name(), expected);
	}

	#[test]
	fn emptiness_respects_retain() {
		let mut entry = LayerEntry::new(3);
		assert!(entry.is_empty());
		entry.retain = 1;
		assert!(!entry.is_empty());
		assert_eq!(entry.feature_count(), 0);
	}
}
