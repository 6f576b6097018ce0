//! Tileset metadata: the SQLite metadata table, its content and the JSON sidecar.

mod store;
mod tileset;
mod writer;

pub use store::*;
pub use tileset::*;
pub use writer::*;
