//! Contains value types like tile coordinates, bounding boxes and blobs.

mod blob;
pub use blob::*;

mod byte_range;
pub use byte_range::*;

mod geo_bbox;
pub use geo_bbox::*;

mod geo_center;
pub use geo_center::*;

mod tile_coord;
pub use tile_coord::*;
