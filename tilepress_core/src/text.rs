//! Length limits for names and values stored in archive metadata.
//!
//! Limits are counted in UTF-16 code units, the unit used by the JavaScript consumers of
//! the metadata. Truncation never splits a character, so a surrogate pair is either kept
//! whole or dropped.

/// Budget for layer names, attribute names and string previews in tilestats.
pub const MAX_KEY_UTF16_UNITS: usize = 256;

/// Returns the longest prefix of `text` that encodes to at most `max_units` UTF-16 code units.
///
/// ```
/// use tilepress_core::truncate_utf16;
///
/// assert_eq!(truncate_utf16("abcdef", 3), "abc");
/// assert_eq!(truncate_utf16("a😊b", 2), "a");
/// assert_eq!(truncate_utf16("a😊b", 3), "a😊");
/// ```
#[must_use]
pub fn truncate_utf16(text: &str, max_units: usize) -> &str {
	let mut units = 0;
	for (index, c) in text.char_indices() {
		units += c.len_utf16();
		if units > max_units {
			return &text[..index];
		}
	}
	text
}

/// Truncates `text` to [`MAX_KEY_UTF16_UNITS`] and returns an owned copy.
#[must_use]
pub fn truncate_key(text: &str) -> String {
	truncate_utf16(text, MAX_KEY_UTF16_UNITS).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", 4, "")]
	#[case("abc", 0, "")]
	#[case("abc", 3, "abc")]
	#[case("abcd", 3, "abc")]
	#[case("äöü", 2, "äö")]
	#[case("😊😊", 1, "")]
	#[case("😊😊", 2, "😊")]
	#[case("😊😊", 3, "😊")]
	#[case("x😊", 2, "x")]
	fn truncates_on_char_boundaries(#[case] text: &str, #[case] max: usize, #[case] expected: &str) {
		assert_eq!(truncate_utf16(text, max), expected);
	}

	#[test]
	fn key_budget() {
		let long = "a".repeat(300);
		assert_eq!(truncate_key(&long).len(), MAX_KEY_UTF16_UNITS);
		assert_eq!(truncate_key("roads"), "roads");

		// 255 ASCII units followed by a surrogate pair: the pair does not fit.
		let edge = format!("{}😊", "a".repeat(255));
		assert_eq!(truncate_key(&edge), "a".repeat(255));
	}
}
