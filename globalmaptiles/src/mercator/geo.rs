use super::GlobalMercator;
use crate::{LatLon, Meters};
use std::f64::consts::PI;

impl GlobalMercator {
	// -------------------------------------------------------------------------
	// WGS84 <-> Spherical Mercator
	// -------------------------------------------------------------------------

	/// Converts a WGS84 latitude/longitude in degrees to Spherical Mercator
	/// (EPSG:900913) meters.
	///
	/// The poles are singular: `lat = -90` yields `y = -inf`, `lat = 90` an
	/// enormous finite `y`, and `|lat| > 90` yields NaN. These values are
	/// returned as they are.
	///
	/// ```
	/// use globalmaptiles::GlobalMercator;
	///
	/// let mercator = GlobalMercator::default();
	/// assert_eq!(mercator.lat_lon_to_meters(0.0, 0.0).as_tuple(), (0.0, 0.0));
	/// ```
	pub fn lat_lon_to_meters(&self, lat: f64, lon: f64) -> Meters {
		let x = lon * self.origin_shift / 180.0;
		let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
		Meters::new(x, y * self.origin_shift / 180.0)
	}

	/// Converts Spherical Mercator meters back to WGS84 latitude/longitude in degrees.
	pub fn meters_to_lat_lon(&self, mx: f64, my: f64) -> LatLon {
		let lon = mx / self.origin_shift * 180.0;
		let lat = my / self.origin_shift * 180.0;
		let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
		LatLon::new(lat, lon)
	}
}
