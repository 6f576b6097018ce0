//! Layer statistics, tilestats serialization and the shared tile types used by the archive writers.

pub mod config;
pub mod json;
pub mod layermap;
pub mod text;
pub mod tilestats;
pub mod types;

pub use config::*;
pub use layermap::*;
pub use text::*;
pub use tilestats::*;
pub use types::*;
