use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A geographical bounding box, `[west, south, east, north]` in WGS84 degrees.
///
/// # Examples
/// ```
/// use tilepress_core::GeoBBox;
///
/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// assert_eq!(bbox.as_tuple(), (-10.0, -5.0, 10.0, 5.0));
/// assert!(GeoBBox::new(-10.0, -5.0, 10.0, 95.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a new `GeoBBox` from `west, south, east, north`.
	///
	/// # Errors
	/// Returns an error if a coordinate is out of range or min exceeds max.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<GeoBBox> {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	/// The whole world, the default extent of an empty tileset.
	#[must_use]
	pub fn new_world() -> GeoBBox {
		GeoBBox {
			x_min: -180.0,
			y_min: -85.051_128_779_806_59,
			x_max: 180.0,
			y_max: 85.051_128_779_806_59,
		}
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	/// `minlon,minlat,maxlon,maxlat` with six decimals, the MBTiles `bounds` value.
	///
	/// ```
	/// use tilepress_core::GeoBBox;
	///
	/// let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.5).unwrap();
	/// assert_eq!(bbox.as_metadata_string(), "-10.000000,-5.000000,10.000000,5.500000");
	/// ```
	#[must_use]
	pub fn as_metadata_string(&self) -> String {
		format!(
			"{:.6},{:.6},{:.6},{:.6}",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.x_min >= -180., "x_min ({}) must be >= -180", self.x_min);
		ensure!(self.y_min >= -90., "y_min ({}) must be >= -90", self.y_min);
		ensure!(self.x_max <= 180., "x_max ({}) must be <= 180", self.x_max);
		ensure!(self.y_max <= 90., "y_max ({}) must be <= 90", self.y_max);
		ensure!(
			self.x_min <= self.x_max,
			"x_min ({}) must be <= x_max ({})",
			self.x_min,
			self.x_max
		);
		ensure!(
			self.y_min <= self.y_max,
			"y_min ({}) must be <= y_max ({})",
			self.y_min,
			self.y_max
		);
		Ok(self)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
