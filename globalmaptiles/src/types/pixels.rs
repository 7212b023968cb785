use std::fmt::Debug;

/// Pixel position inside the raster of one zoom level.
///
/// The origin is the bottom-left corner of the map (TMS convention) unless the
/// value was produced by
/// [`GlobalMercator::pixels_to_raster`](crate::GlobalMercator::pixels_to_raster),
/// which moves it to the top-left corner.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Pixels {
	pub x: f64,
	pub y: f64,
}

impl Pixels {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn as_tuple(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	pub fn as_array(&self) -> [f64; 2] {
		[self.x, self.y]
	}
}

impl From<(f64, f64)> for Pixels {
	fn from((x, y): (f64, f64)) -> Self {
		Self { x, y }
	}
}

impl From<[f64; 2]> for Pixels {
	fn from([x, y]: [f64; 2]) -> Self {
		Self { x, y }
	}
}

impl From<Pixels> for (f64, f64) {
	fn from(value: Pixels) -> Self {
		value.as_tuple()
	}
}

impl Debug for Pixels {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Pixels({}, {})", self.x, self.y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions_and_debug() {
		let p = Pixels::new(256.0, 511.5);
		assert_eq!(p.as_tuple(), (256.0, 511.5));
		assert_eq!(Pixels::from((256.0, 511.5)), p);
		assert_eq!(Pixels::from([256.0, 511.5]), p);
		assert_eq!(<(f64, f64)>::from(p), (256.0, 511.5));
		assert_eq!(format!("{p:?}"), "Pixels(256, 511.5)");
	}
}
