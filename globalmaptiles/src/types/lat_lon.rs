use std::fmt::Debug;

/// A WGS84 position in degrees.
///
/// Latitude is meaningful in the open interval `(-90, 90)`; the Mercator
/// projection diverges at the poles. No range check is applied, so
/// out-of-domain values propagate as infinities or NaNs.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct LatLon {
	/// Latitude in degrees.
	pub lat: f64,
	/// Longitude in degrees.
	pub lon: f64,
}

impl LatLon {
	pub fn new(lat: f64, lon: f64) -> Self {
		Self { lat, lon }
	}

	/// Returns `(lat, lon)`.
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.lat, self.lon)
	}

	/// Returns `[lat, lon]`.
	pub fn as_array(&self) -> [f64; 2] {
		[self.lat, self.lon]
	}

	/// `true` if both components are finite numbers.
	pub fn is_finite(&self) -> bool {
		self.lat.is_finite() && self.lon.is_finite()
	}
}

impl From<(f64, f64)> for LatLon {
	fn from((lat, lon): (f64, f64)) -> Self {
		Self { lat, lon }
	}
}

impl From<[f64; 2]> for LatLon {
	fn from([lat, lon]: [f64; 2]) -> Self {
		Self { lat, lon }
	}
}

impl From<LatLon> for (f64, f64) {
	fn from(value: LatLon) -> Self {
		value.as_tuple()
	}
}

impl Debug for LatLon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "LatLon({}, {})", self.lat, self.lon)
	}
}
