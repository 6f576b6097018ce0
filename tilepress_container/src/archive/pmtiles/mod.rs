mod entry;
mod writer;

pub use entry::*;
pub use writer::*;
