//! Per-layer feature counts and attribute statistics, and the engine that merges them.

mod layer_entry;
mod merge;
mod stats_entry;
mod type_and_string;

pub use layer_entry::*;
pub use merge::*;
pub use stats_entry::*;
pub use type_and_string::*;

use std::collections::BTreeMap;

/// Layer name to layer statistics.
pub type LayerMap = BTreeMap<String, LayerEntry>;
