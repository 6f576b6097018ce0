use super::{AttributeType, TypeAndString};
use enumset::EnumSet;

/// Accumulated statistics of one attribute.
///
/// `sample_values` is strictly sorted and never longer than the sample cap it is fed with.
/// When a new value pushes it over the cap, the value that sorts last is dropped, so the
/// lexicographically smallest values survive regardless of how often they were seen.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsEntry {
	pub sample_values: Vec<TypeAndString>,
	pub min: f64,
	pub max: f64,
	pub types: EnumSet<AttributeType>,
}

impl Default for StatsEntry {
	fn default() -> Self {
		StatsEntry {
			sample_values: Vec::new(),
			min: f64::INFINITY,
			max: f64::NEG_INFINITY,
			types: EnumSet::empty(),
		}
	}
}

impl StatsEntry {
	/// Records one observed value. Null values are ignored.
	pub fn add_sample(&mut self, value: &TypeAndString, max_sample_values: usize) {
		if value.value_type == AttributeType::Null {
			return;
		}

		if value.is_numeric() {
			let number = value.numeric_value();
			if value.string.trim().parse::<f64>().is_err() {
				log::debug!("numeric sample {:?} read as {number}", value.string);
			}
			self.include_range(number, number);
		}

		self.insert_sample(value.clone(), max_sample_values);
		self.types.insert(value.value_type);
	}

	/// Folds `other` into this entry: samples are inserted one by one under the cap, types are
	/// unioned and the numeric range widened.
	pub fn merge(&mut self, other: &StatsEntry, max_sample_values: usize) {
		for value in &other.sample_values {
			self.insert_sample(value.clone(), max_sample_values);
		}
		self.types.insert_all(other.types);
		self.include_range(other.min, other.max);
	}

	/// Whether a numeric value was ever recorded.
	#[must_use]
	pub fn has_numbers(&self) -> bool {
		self.types.contains(AttributeType::Double)
	}

	fn include_range(&mut self, min: f64, max: f64) {
		if min < self.min {
			self.min = min;
		}
		if max > self.max {
			self.max = max;
		}
	}

	fn insert_sample(&mut self, value: TypeAndString, max_sample_values: usize) {
		if let Err(index) = self.sample_values.binary_search(&value) {
			self.sample_values.insert(index, value);
			if self.sample_values.len() > max_sample_values {
				self.sample_values.pop();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn strings(entry: &StatsEntry) -> Vec<&str> {
		entry.sample_values.iter().map(|v| v.string.as_str()).collect()
	}

	#[test]
	fn keeps_samples_sorted_and_unique() {
		let mut entry = StatsEntry::default();
		for text in ["pear", "apple", "fig", "apple", "pear"] {
			entry.add_sample(&TypeAndString::new_string(text), 1000);
		}
		assert_eq!(strings(&entry), ["apple", "fig", "pear"]);
		assert_eq!(entry.types, EnumSet::only(AttributeType::String));
		assert!(!entry.has_numbers());
		assert_eq!(entry.min, f64::INFINITY);
		assert_eq!(entry.max, f64::NEG_INFINITY);
	}

	#[test]
	fn evicts_last_sorted_value_over_cap() {
		let mut entry = StatsEntry::default();
		for text in ["d", "b", "c"] {
			entry.add_sample(&TypeAndString::new_string(text), 2);
		}
		assert_eq!(strings(&entry), ["b", "c"]);

		entry.add_sample(&TypeAndString::new_string("a"), 2);
		assert_eq!(strings(&entry), ["a", "b"]);

		entry.add_sample(&TypeAndString::new_string("z"), 2);
		assert_eq!(strings(&entry), ["a", "b"]);
	}

	#[test]
	fn numeric_samples_update_range() {
		let mut entry = StatsEntry::default();
		for value in [3.5, -2.0, 10.0] {
			entry.add_sample(&TypeAndString::new_double(value), 1000);
		}
		entry.add_sample(&TypeAndString::new_string("100"), 1000);
		entry.add_sample(&TypeAndString::new_bool(true), 1000);

		assert_eq!(entry.min, -2.0);
		assert_eq!(entry.max, 10.0);
		assert!(entry.has_numbers());
		assert_eq!(
			entry.types,
			AttributeType::Double | AttributeType::String | AttributeType::Bool
		);
	}

	#[test]
	fn ignores_null() {
		let mut entry = StatsEntry::default();
		entry.add_sample(&TypeAndString::new(AttributeType::Null, ""), 1000);
		assert_eq!(entry, StatsEntry::default());
	}

	#[test]
	fn malformed_numbers_still_set_range() {
		let mut entry = StatsEntry::default();
		entry.add_sample(&TypeAndString::new(AttributeType::Double, "12abc"), 1000);
		assert!(entry.has_numbers());
		assert!(entry.min <= entry.max);
		assert_eq!((entry.min, entry.max), (12.0, 12.0));

		let mut entry = StatsEntry::default();
		entry.add_sample(&TypeAndString::new(AttributeType::Double, "n/a"), 1000);
		assert_eq!((entry.min, entry.max), (0.0, 0.0));
		assert_eq!(entry.sample_values.len(), 1);
	}

	#[test]
	fn non_finite_doubles_are_ignored() {
		let mut entry = StatsEntry::default();
		entry.add_sample(&TypeAndString::new_double(f64::NAN), 1000);
		entry.add_sample(&TypeAndString::new_double(f64::INFINITY), 1000);
		assert_eq!(entry, StatsEntry::default());
	}

	#[test]
	fn merge_unions_types_and_ranges() {
		let mut left = StatsEntry::default();
		left.add_sample(&TypeAndString::new_double(5.0), 1000);
		left.add_sample(&TypeAndString::new_string("x"), 1000);

		let mut right = StatsEntry::default();
		right.add_sample(&TypeAndString::new_double(-1.0), 1000);
		right.add_sample(&TypeAndString::new_string("x"), 1000);

		left.merge(&right, 1000);
		assert_eq!(strings(&left), ["-1", "5", "x"]);
		assert_eq!(left.min, -1.0);
		assert_eq!(left.max, 5.0);
		assert_eq!(left.types, AttributeType::Double | AttributeType::String);
	}

	#[test]
	fn merge_of_strings_leaves_range_untouched() {
		let mut left = StatsEntry::default();
		left.add_sample(&TypeAndString::new_double(1.0), 1000);

		let mut right = StatsEntry::default();
		right.add_sample(&TypeAndString::new_string("a"), 1000);

		left.merge(&right, 1000);
		assert_eq!((left.min, left.max), (1.0, 1.0));
	}
}
