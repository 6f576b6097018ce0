//! Archive backends and the writer interface they share.

mod format;
mod mbtiles;
mod pmtiles;
mod writer;

pub use format::*;
pub use mbtiles::*;
pub use pmtiles::*;
pub use writer::*;
