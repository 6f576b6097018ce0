mod writer;
pub use writer::*;
