/// Escapes `input` so it can be placed between double quotes in a JSON document.
pub fn escape_json_string(input: &str) -> String {
	input
		.chars()
		.map(|c| match c {
			'"' => "\\\"".to_string(),
			'\\' => "\\\\".to_string(),
			'\n' => "\\n".to_string(),
			'\r' => "\\r".to_string(),
			'\t' => "\\t".to_string(),
			'\u{08}' => "\\b".to_string(),
			'\u{0c}' => "\\f".to_string(),
			c if c.is_control() => format!("\\u{:04x}", c as u32),
			c => c.to_string(),
		})
		.collect()
}

/// Formats a float as the shortest text that parses back to the same value.
///
/// JSON has no representation for infinities or NaN; they are written as `null`.
pub fn format_number(value: f64) -> String {
	if value.is_finite() {
		value.to_string()
	} else {
		String::from("null")
	}
}

/// Whether `text` is a number literal as JSON allows it, e.g. `-0.5e3` but not `+1`, `.5`
/// or `NaN`.
pub fn is_json_number(text: &str) -> bool {
	let bytes = text.as_bytes();
	let mut index = usize::from(bytes.first() == Some(&b'-'));
	let digits = |index: &mut usize| {
		let start = *index;
		while *index < bytes.len() && bytes[*index].is_ascii_digit() {
			*index += 1;
		}
		*index - start
	};

	match bytes.get(index) {
		Some(b'0') => index += 1,
		Some(b'1'..=b'9') => {
			digits(&mut index);
		}
		_ => return false,
	}
	if bytes.get(index) == Some(&b'.') {
		index += 1;
		if digits(&mut index) == 0 {
			return false;
		}
	}
	if matches!(bytes.get(index), Some(b'e' | b'E')) {
		index += 1;
		if matches!(bytes.get(index), Some(b'+' | b'-')) {
			index += 1;
		}
		if digits(&mut index) == 0 {
			return false;
		}
	}
	index == bytes.len()
}
