use enumset::{EnumSet, EnumSetType};
use std::cmp::Ordering;

/// Type tag of an observed attribute value.
///
/// Variants are declared in vector-tile value tag order; this order breaks ties between
/// samples that share the same text.
#[derive(Debug, EnumSetType, PartialOrd, Ord)]
pub enum AttributeType {
	String,
	Double,
	Bool,
	Null,
}

/// Name of a type set as used by tilestats: `number`, `boolean`, `string` or `mixed`.
pub fn tilestats_type_name(types: EnumSet<AttributeType>) -> &'static str {
	if types == EnumSet::only(AttributeType::Double) {
		"number"
	} else if types == EnumSet::only(AttributeType::Bool) {
		"boolean"
	} else if types == EnumSet::only(AttributeType::String) {
		"string"
	} else {
		"mixed"
	}
}

/// Label of a type set as used by TileJSON `vector_layers` fields.
pub fn field_type_label(types: EnumSet<AttributeType>) -> &'static str {
	if types == EnumSet::only(AttributeType::Double) {
		"Number"
	} else if types == EnumSet::only(AttributeType::Bool) {
		"Boolean"
	} else if types == EnumSet::only(AttributeType::String) {
		"String"
	} else {
		"Mixed"
	}
}

/// One observed attribute value, kept as text together with its type tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAndString {
	pub value_type: AttributeType,
	pub string: String,
}

impl TypeAndString {
	pub fn new(value_type: AttributeType, string: impl Into<String>) -> Self {
		TypeAndString {
			value_type,
			string: string.into(),
		}
	}

	pub fn new_string(string: impl Into<String>) -> Self {
		Self::new(AttributeType::String, string)
	}

	/// A numeric value. Infinities and NaN have no JSON representation and become a null
	/// value, which is never recorded.
	pub fn new_double(value: f64) -> Self {
		if value.is_finite() {
			Self::new(AttributeType::Double, value.to_string())
		} else {
			Self::new(AttributeType::Null, "")
		}
	}

	pub fn new_bool(value: bool) -> Self {
		Self::new(AttributeType::Bool, value.to_string())
	}

	#[must_use]
	pub fn is_numeric(&self) -> bool {
		self.value_type == AttributeType::Double
	}

	/// The number at the start of the text, or `0.0` if there is none.
	///
	/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"` reads as `12`.
	#[must_use]
	pub fn numeric_value(&self) -> f64 {
		parse_number_prefix(&self.string)
	}
}

fn parse_number_prefix(text: &str) -> f64 {
	let text = text.trim_start();
	let bytes = text.as_bytes();
	let digits_from = |mut index: usize| {
		while index < bytes.len() && bytes[index].is_ascii_digit() {
			index += 1;
		}
		index
	};

	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	let integer_end = digits_from(end);
	let mut mantissa_digits = integer_end - end;
	end = integer_end;

	if bytes.get(end) == Some(&b'.') {
		let fraction_end = digits_from(end + 1);
		mantissa_digits += fraction_end - (end + 1);
		if mantissa_digits > 0 {
			end = fraction_end;
		}
	}
	if mantissa_digits == 0 {
		return 0.0;
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
		let exponent_end = digits_from(end + 1 + sign);
		if exponent_end > end + 1 + sign {
			end = exponent_end;
		}
	}

	text[..end].parse().unwrap_or(0.0)
}

impl Ord for TypeAndString {
	fn cmp(&self, other: &Self) -> Ordering {
		self
			.string
			.as_bytes()
			.cmp(other.string.as_bytes())
			.then(self.value_type.cmp(&other.value_type))
	}
}

impl PartialOrd for TypeAndString {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
