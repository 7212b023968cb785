//! Conversions between the coordinate systems of a Spherical Mercator tile pyramid.
//!
//! [`GlobalMercator`] converts among
//! - WGS84 latitude/longitude ([`LatLon`]),
//! - Spherical Mercator (EPSG:900913 / EPSG:3857) meters ([`Meters`]),
//! - pixel coordinates at a zoom level ([`Pixels`]),
//! - TMS and Google/Bing tile indices ([`TileIndex`]) and quadkeys ([`QuadKey`]).
//!
//! ```
//! use globalmaptiles::GlobalMercator;
//!
//! let mercator = GlobalMercator::new(256)?;
//! let meters = mercator.lat_lon_to_meters(52.520008, 13.404954);
//! let tile = mercator.meters_to_tile(meters.x, meters.y, 10);
//! assert_eq!(mercator.google_tile(tile.x, tile.y, 10).as_tuple(), (550, 335));
//! assert_eq!(mercator.quad_tree(tile.x, tile.y, 10).as_str(), "1202102332");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod mercator;
pub use mercator::GlobalMercator;

pub mod types;
pub use types::*;
