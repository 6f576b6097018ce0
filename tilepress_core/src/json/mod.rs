//! Minimal JSON output: string escaping, number formatting and a streaming [`JsonWriter`].

mod stringify;
mod writer;

pub use stringify::*;
pub use writer::JsonWriter;
