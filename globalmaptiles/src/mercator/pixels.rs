use super::GlobalMercator;
use crate::{MAX_ZOOM_SEARCH, Meters, Pixels, TileIndex};
use anyhow::{Result, bail};
use globalmaptiles_derive::context;

impl GlobalMercator {
	// -------------------------------------------------------------------------
	// Resolution
	// -------------------------------------------------------------------------

	/// Meters per pixel at `zoom`, measured at the equator.
	///
	/// Halves exactly with every zoom level.
	pub fn resolution(&self, zoom: u8) -> f64 {
		self.initial_resolution / 2f64.powi(i32::from(zoom))
	}

	/// Edge length of the whole map in pixels at `zoom`.
	pub fn map_size(&self, zoom: u8) -> f64 {
		self.tile_size_f64() * 2f64.powi(i32::from(zoom))
	}

	/// Deepest zoom level whose resolution is not finer than `pixel_size`
	/// (meters per pixel), never going below zoom 0.
	///
	/// Levels `0..30` are searched for the first one that is finer than
	/// `pixel_size`; the level above it is returned.
	///
	/// # Errors
	/// Returns an error if no level in the search range is finer than
	/// `pixel_size`, which happens for non-positive, NaN or vanishingly small
	/// values.
	///
	/// ```
	/// use globalmaptiles::GlobalMercator;
	///
	/// let mercator = GlobalMercator::default();
	/// assert_eq!(mercator.zoom_for_pixel_size(1000.0)?, 7);
	/// assert!(mercator.zoom_for_pixel_size(0.0).is_err());
	/// # Ok::<(), anyhow::Error>(())
	/// ```
	#[context("Failed to find a zoom level for pixel size {pixel_size}")]
	pub fn zoom_for_pixel_size(&self, pixel_size: f64) -> Result<u8> {
		match (0..MAX_ZOOM_SEARCH).find(|&zoom| pixel_size > self.resolution(zoom)) {
			Some(zoom) => Ok(zoom.saturating_sub(1)),
			None => {
				log::warn!("pixel size {pixel_size} is not coarser than any of the first {MAX_ZOOM_SEARCH} zoom levels");
				bail!(
					"no zoom level in 0..{MAX_ZOOM_SEARCH} has a resolution below {pixel_size} m/px (finest is {} m/px)",
					self.resolution(MAX_ZOOM_SEARCH - 1)
				)
			}
		}
	}

	// -------------------------------------------------------------------------
	// Meters <-> Pixels
	// -------------------------------------------------------------------------

	/// Converts pixel coordinates at `zoom` to Spherical Mercator meters.
	pub fn pixels_to_meters(&self, px: f64, py: f64, zoom: u8) -> Meters {
		let res = self.resolution(zoom);
		Meters::new(px * res - self.origin_shift, py * res - self.origin_shift)
	}

	/// Converts Spherical Mercator meters to pixel coordinates at `zoom`.
	pub fn meters_to_pixels(&self, mx: f64, my: f64, zoom: u8) -> Pixels {
		let res = self.resolution(zoom);
		Pixels::new((mx + self.origin_shift) / res, (my + self.origin_shift) / res)
	}

	/// Returns the TMS tile containing the pixel `(px, py)`.
	///
	/// Each index is `ceil(p / tile_size) - 1`: a pixel coordinate lying exactly
	/// on a tile edge belongs to the tile below/left of it, and `0` maps to `-1`.
	///
	/// The subtraction happens in floating point before the saturating cast,
	/// so infinities map to `i64::MIN`/`i64::MAX` and NaN maps to `0`.
	pub fn pixels_to_tile(&self, px: f64, py: f64) -> TileIndex {
		let size = self.tile_size_f64();
		TileIndex::new(((px / size).ceil() - 1.0) as i64, ((py / size).ceil() - 1.0) as i64)
	}

	/// Moves the origin of pixel coordinates from the bottom-left to the
	/// top-left corner of the map.
	pub fn pixels_to_raster(&self, px: f64, py: f64, zoom: u8) -> Pixels {
		Pixels::new(px, self.map_size(zoom) - py)
	}
}
