//! Streaming JSON writer.
//!
//! Values are written in call order, which keeps key order stable for consumers that
//! compare metadata documents textually. Separators follow a small state machine:
//!
//! - the first member of a hash or array is preceded by a space,
//! - later members by `", "`,
//! - keys and values are separated by `": "`,
//! - closing brackets are preceded by a space.
//!
//! Setting [`JsonWriter::set_nospace`] suppresses the next space (a later member is then
//! preceded by a bare `,`). The flag is consumed by the next separator that would emit a
//! space.
//!
//! ```
//! use tilepress_core::json::JsonWriter;
//!
//! let mut text = String::new();
//! let mut writer = JsonWriter::new(&mut text);
//! writer.write_hash().unwrap();
//! writer.set_nospace();
//! writer.write_string("layerCount").unwrap();
//! writer.write_unsigned(2).unwrap();
//! writer.set_nospace();
//! writer.end_hash().unwrap();
//! assert_eq!(text, r#"{"layerCount": 2}"#);
//! ```

use super::{escape_json_string, format_number};
use anyhow::{Result, bail};
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
	Top,
	Hash,
	HashKey,
	HashValue,
	Array,
	ArrayElement,
}

/// Writes JSON tokens into any [`std::fmt::Write`] sink.
pub struct JsonWriter<W: Write> {
	out: W,
	states: Vec<State>,
	nospace: bool,
}

impl<W: Write> JsonWriter<W> {
	pub fn new(out: W) -> Self {
		JsonWriter {
			out,
			states: Vec::new(),
			nospace: false,
		}
	}

	/// Suppress the space before the next token.
	pub fn set_nospace(&mut self) {
		self.nospace = true;
	}

	/// Returns the sink, e.g. to reuse a `String` buffer.
	pub fn into_inner(self) -> W {
		self.out
	}

	fn adjust(&mut self) -> Result<()> {
		let Some(state) = self.states.last_mut() else {
			self.states.push(State::Top);
			return Ok(());
		};

		match *state {
			State::Top => {
				self.out.write_char('\n')?;
			}
			State::Hash => {
				if !self.nospace {
					self.out.write_char(' ')?;
				}
				self.nospace = false;
				*state = State::HashKey;
			}
			State::HashKey => {
				self.out.write_str(": ")?;
				*state = State::HashValue;
			}
			State::HashValue => {
				if self.nospace {
					self.out.write_char(',')?;
					self.nospace = false;
				} else {
					self.out.write_str(", ")?;
				}
				*state = State::HashKey;
			}
			State::Array => {
				if !self.nospace {
					self.out.write_char(' ')?;
				}
				self.nospace = false;
				*state = State::ArrayElement;
			}
			State::ArrayElement => {
				if self.nospace {
					self.out.write_char(',')?;
					self.nospace = false;
				} else {
					self.out.write_str(", ")?;
				}
			}
		}
		Ok(())
	}

	fn close(&mut self, bracket: char) -> Result<()> {
		if !self.nospace {
			self.out.write_char(' ')?;
		}
		self.nospace = false;
		self.out.write_char(bracket)?;
		self.states.pop();
		Ok(())
	}

	pub fn write_hash(&mut self) -> Result<()> {
		self.adjust()?;
		self.out.write_char('{')?;
		self.states.push(State::Hash);
		Ok(())
	}

	pub fn end_hash(&mut self) -> Result<()> {
		match self.states.last() {
			Some(State::Hash | State::HashValue) => self.close('}'),
			Some(State::HashKey) => bail!("JSON hash key without value"),
			_ => bail!("JSON hash closed without matching open"),
		}
	}

	pub fn write_array(&mut self) -> Result<()> {
		self.adjust()?;
		self.out.write_char('[')?;
		self.states.push(State::Array);
		Ok(())
	}

	pub fn end_array(&mut self) -> Result<()> {
		match self.states.last() {
			Some(State::Array | State::ArrayElement) => self.close(']'),
			_ => bail!("JSON array closed without matching open"),
		}
	}

	pub fn write_string(&mut self, value: &str) -> Result<()> {
		self.adjust()?;
		write!(self.out, "\"{}\"", escape_json_string(value))?;
		Ok(())
	}

	pub fn write_unsigned(&mut self, value: u64) -> Result<()> {
		self.adjust()?;
		write!(self.out, "{value}")?;
		Ok(())
	}

	pub fn write_signed(&mut self, value: i64) -> Result<()> {
		self.adjust()?;
		write!(self.out, "{value}")?;
		Ok(())
	}

	pub fn write_number(&mut self, value: f64) -> Result<()> {
		self.adjust()?;
		self.out.write_str(&format_number(value))?;
		Ok(())
	}

	/// Writes an already formatted token, such as a number kept in its source text.
	pub fn write_stringified(&mut self, raw: &str) -> Result<()> {
		self.adjust()?;
		self.out.write_str(raw)?;
		Ok(())
	}

	pub fn write_newline(&mut self) -> Result<()> {
		self.out.write_char('\n')?;
		self.nospace = true;
		Ok(())
	}

	/// Ends the current member with `",\n"` so the next one starts on its own line.
	pub fn comma_newline(&mut self) -> Result<()> {
		if let Some(state) = self.states.last_mut() {
			match *state {
				State::HashValue => {
					self.out.write_str(",\n")?;
					*state = State::Hash;
					self.nospace = true;
				}
				State::ArrayElement => {
					self.out.write_str(",\n")?;
					*state = State::Array;
					self.nospace = true;
				}
				_ => {}
			}
		}
		Ok(())
	}
}
