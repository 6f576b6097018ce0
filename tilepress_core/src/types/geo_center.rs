use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A center point in geographic space: longitude, latitude and zoom level.
#[derive(Clone, Copy, PartialEq)]
pub struct GeoCenter(pub f64, pub f64, pub u8);

impl GeoCenter {
	/// Checks that longitude, latitude and zoom are within valid ranges.
	///
	/// # Errors
	///
	/// Returns an error if any of these checks fail.
	pub fn check(&self) -> Result<()> {
		ensure!(-180.0 <= self.0, "center[0] (longitude) must be >= -180");
		ensure!(-90.0 <= self.1, "center[1] (latitude) must be >= -90");
		ensure!(self.0 <= 180.0, "center[0] (longitude) must be <= 180");
		ensure!(self.1 <= 90.0, "center[1] (latitude) must be <= 90");
		ensure!(self.2 <= 30, "center[2] (zoom) must be <= 30");
		Ok(())
	}

	/// `lon,lat,zoom` with six decimals, the MBTiles `center` value.
	#[must_use]
	pub fn as_metadata_string(&self) -> String {
		format!("{:.6},{:.6},{}", self.0, self.1, self.2)
	}
}

impl Debug for GeoCenter {
	/// Formats the `GeoCenter` as `"longitude, latitude (zoom)"`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}, {} ({})", self.0, self.1, self.2)
	}
}
