use crate::{LatLon, Meters};
use std::fmt::Debug;

/// Rectangular extent in Spherical Mercator meters.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct MeterBounds {
	pub min_x: f64,
	pub min_y: f64,
	pub max_x: f64,
	pub max_y: f64,
}

impl MeterBounds {
	pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
		Self {
			min_x,
			min_y,
			max_x,
			max_y,
		}
	}

	/// Builds bounds from the bottom-left and top-right corners.
	pub fn from_corners(min: Meters, max: Meters) -> Self {
		Self::new(min.x, min.y, max.x, max.y)
	}

	/// Returns `(min_x, min_y, max_x, max_y)`.
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.min_x, self.min_y, self.max_x, self.max_y)
	}

	pub fn as_array(&self) -> [f64; 4] {
		[self.min_x, self.min_y, self.max_x, self.max_y]
	}

	pub fn min(&self) -> Meters {
		Meters::new(self.min_x, self.min_y)
	}

	pub fn max(&self) -> Meters {
		Meters::new(self.max_x, self.max_y)
	}

	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	pub fn center(&self) -> Meters {
		Meters::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
	}

	/// `true` if `point` lies inside or on the edge of the bounds.
	pub fn contains(&self, point: &Meters) -> bool {
		(self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
	}
}

impl Debug for MeterBounds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"MeterBounds([{}, {}, {}, {}])",
			self.min_x, self.min_y, self.max_x, self.max_y
		)
	}
}

/// Rectangular extent in WGS84 degrees, ordered south-west to north-east.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct LatLonBounds {
	pub min_lat: f64,
	pub min_lon: f64,
	pub max_lat: f64,
	pub max_lon: f64,
}

impl LatLonBounds {
	pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
		Self {
			min_lat,
			min_lon,
			max_lat,
			max_lon,
		}
	}

	pub fn from_corners(south_west: LatLon, north_east: LatLon) -> Self {
		Self::new(south_west.lat, south_west.lon, north_east.lat, north_east.lon)
	}

	/// Returns `(min_lat, min_lon, max_lat, max_lon)`.
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.min_lat, self.min_lon, self.max_lat, self.max_lon)
	}

	pub fn as_array(&self) -> [f64; 4] {
		[self.min_lat, self.min_lon, self.max_lat, self.max_lon]
	}

	pub fn south_west(&self) -> LatLon {
		LatLon::new(self.min_lat, self.min_lon)
	}

	pub fn north_east(&self) -> LatLon {
		LatLon::new(self.max_lat, self.max_lon)
	}

	/// `true` if `point` lies inside or on the edge of the bounds.
	pub fn contains(&self, point: &LatLon) -> bool {
		(self.min_lat..=self.max_lat).contains(&point.lat) && (self.min_lon..=self.max_lon).contains(&point.lon)
	}
}

impl Debug for LatLonBounds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"LatLonBounds([{}, {}, {}, {}])",
			self.min_lat, self.min_lon, self.max_lat, self.max_lon
		)
	}
}
