use crate::ORIGIN_SHIFT;
use std::fmt::Debug;

/// A Spherical Mercator (EPSG:900913) position in meters.
///
/// Valid positions lie within `[-ORIGIN_SHIFT, ORIGIN_SHIFT]` on both axes.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Meters {
	pub x: f64,
	pub y: f64,
}

impl Meters {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Returns `(x, y)`.
	pub fn as_tuple(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	pub fn as_array(&self) -> [f64; 2] {
		[self.x, self.y]
	}

	/// `true` if the position lies inside the projected world square.
	pub fn is_within_world(&self) -> bool {
		self.x.abs() <= ORIGIN_SHIFT && self.y.abs() <= ORIGIN_SHIFT
	}
}

impl From<(f64, f64)> for Meters {
	fn from((x, y): (f64, f64)) -> Self {
		Self { x, y }
	}
}

impl From<[f64; 2]> for Meters {
	fn from([x, y]: [f64; 2]) -> Self {
		Self { x, y }
	}
}

impl From<Meters> for (f64, f64) {
	fn from(value: Meters) -> Self {
		value.as_tuple()
	}
}

impl Debug for Meters {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Meters({}, {})", self.x, self.y)
	}
}
