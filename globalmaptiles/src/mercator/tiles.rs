use super::GlobalMercator;
use crate::{LatLonBounds, MeterBounds, Meters, Pixels, QuadKey, TileIndex};
use anyhow::Result;

impl GlobalMercator {
	// -------------------------------------------------------------------------
	// Tiles
	// -------------------------------------------------------------------------

	/// Returns the TMS tile containing the Spherical Mercator position at `zoom`.
	pub fn meters_to_tile(&self, mx: f64, my: f64, zoom: u8) -> TileIndex {
		let p = self.meters_to_pixels(mx, my, zoom);
		self.pixels_to_tile(p.x, p.y)
	}

	/// Pixel coordinates of the bottom-left corner of the TMS tile.
	pub fn tile_to_pixels(&self, tx: i64, ty: i64) -> Pixels {
		let size = self.tile_size_f64();
		Pixels::new(tx as f64 * size, ty as f64 * size)
	}

	/// Spherical Mercator position of the bottom-left corner of the TMS tile.
	pub fn tile_to_meters(&self, tx: i64, ty: i64, zoom: u8) -> Meters {
		let p = self.tile_to_pixels(tx, ty);
		self.pixels_to_meters(p.x, p.y, zoom)
	}

	/// Extent of the TMS tile in Spherical Mercator meters.
	///
	/// ```
	/// use globalmaptiles::GlobalMercator;
	///
	/// let mercator = GlobalMercator::default();
	/// let (min_x, min_y, max_x, max_y) = mercator.tile_bounds(1, 1, 1).as_tuple();
	/// assert_eq!((min_x, min_y), (0.0, 0.0));
	/// assert_eq!((max_x, max_y), (mercator.origin_shift(), mercator.origin_shift()));
	/// ```
	pub fn tile_bounds(&self, tx: i64, ty: i64, zoom: u8) -> MeterBounds {
		MeterBounds::from_corners(
			self.tile_to_meters(tx, ty, zoom),
			self.tile_to_meters(tx.wrapping_add(1), ty.wrapping_add(1), zoom),
		)
	}

	/// Extent of the TMS tile in WGS84 degrees.
	pub fn tile_lat_lon_bounds(&self, tx: i64, ty: i64, zoom: u8) -> LatLonBounds {
		let bounds = self.tile_bounds(tx, ty, zoom);
		LatLonBounds::from_corners(
			self.meters_to_lat_lon(bounds.min_x, bounds.min_y),
			self.meters_to_lat_lon(bounds.max_x, bounds.max_y),
		)
	}

	// -------------------------------------------------------------------------
	// Tile schemes
	// -------------------------------------------------------------------------

	/// Converts a TMS tile index to the Google/Bing scheme (and back).
	pub fn google_tile(&self, tx: i64, ty: i64, zoom: u8) -> TileIndex {
		TileIndex::new(tx, ty).flip_y(zoom)
	}

	/// Encodes a TMS tile index as a Microsoft quadkey with `zoom` digits.
	///
	/// ```
	/// use globalmaptiles::GlobalMercator;
	///
	/// let mercator = GlobalMercator::default();
	/// assert_eq!(mercator.quad_tree(3, 5, 3).as_str(), "031");
	/// assert!(mercator.quad_tree(0, 0, 0).is_empty());
	/// ```
	pub fn quad_tree(&self, tx: i64, ty: i64, zoom: u8) -> QuadKey {
		QuadKey::from_tile(tx, ty, zoom)
	}

	/// Decodes a quadkey to its TMS tile index and zoom level.
	pub fn quad_tree_to_tile(&self, key: &QuadKey) -> Result<(TileIndex, u8)> {
		key.to_tile()
	}
}
