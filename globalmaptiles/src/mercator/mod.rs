//! The Spherical Mercator tile pyramid projector.
//!
//! [`GlobalMercator`] is configured once with a tile size and derives two
//! constants from it: the resolution at zoom 0 and the origin shift. Every
//! conversion is a pure function of its arguments and these constants, so a
//! single instance can be shared freely between threads.
//!
//! The conversions are grouped by the coordinate systems they connect:
//! - `geo`: WGS84 latitude/longitude and meters,
//! - `pixels`: meters, pixels and resolutions,
//! - `tiles`: tiles, their bounds, Google/Bing indices and quadkeys.
//!
//! # Coordinate conventions
//!
//! Meters are centered on (0°, 0°). Pixels and TMS tiles count from the
//! bottom-left corner of the map; Google/Bing tiles and raster pixels count
//! from the top-left corner.

mod geo;
mod pixels;
mod tiles;


use crate::{ORIGIN_SHIFT, TileSize, WORLD_SIZE};
use anyhow::Result;
use globalmaptiles_derive::context;

/// Converts between WGS84, Spherical Mercator meters, pyramid pixels and tiles.
///
/// ```
/// use globalmaptiles::GlobalMercator;
///
/// let mercator = GlobalMercator::new(256)?;
/// let bounds = mercator.tile_bounds(0, 0, 0);
/// assert_eq!(bounds.min_x, -mercator.origin_shift());
/// assert_eq!(bounds.max_y, mercator.origin_shift());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GlobalMercator {
	tile_size: TileSize,
	initial_resolution: f64,
	origin_shift: f64,
}

impl GlobalMercator {
	/// Creates a projector for square tiles of `tile_size` pixels.
	///
	/// # Errors
	/// Returns an error if `tile_size` is 0.
	#[context("Failed to create GlobalMercator with tile size {tile_size}")]
	pub fn new(tile_size: u32) -> Result<GlobalMercator> {
		Ok(GlobalMercator::from_tile_size(TileSize::new(tile_size)?))
	}

	/// Creates a projector from an already validated tile size.
	pub fn from_tile_size(tile_size: TileSize) -> GlobalMercator {
		let mercator = GlobalMercator {
			tile_size,
			initial_resolution: WORLD_SIZE / tile_size.as_f64(),
			origin_shift: ORIGIN_SHIFT,
		};
		log::debug!(
			"created GlobalMercator: tile size {}, initial resolution {} m/px, origin shift {} m",
			tile_size.size(),
			mercator.initial_resolution,
			mercator.origin_shift
		);
		mercator
	}

	/// Tile edge length in pixels.
	pub fn tile_size(&self) -> u32 {
		self.tile_size.size()
	}

	/// Meters per pixel at zoom level 0.
	pub fn initial_resolution(&self) -> f64 {
		self.initial_resolution
	}

	/// Half the equatorial circumference in meters.
	pub fn origin_shift(&self) -> f64 {
		self.origin_shift
	}

	fn tile_size_f64(&self) -> f64 {
		self.tile_size.as_f64()
	}
}

impl Default for GlobalMercator {
	fn default() -> Self {
		GlobalMercator::from_tile_size(TileSize::default())
	}
}
