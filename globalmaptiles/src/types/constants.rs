//! Spherical Mercator constants shared by the projector and the value types.

use std::f64::consts::PI;

/// Radius of the Spherical Mercator sphere in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Earth circumference in meters at the equator (2 * PI * EARTH_RADIUS).
pub const WORLD_SIZE: f64 = 2.0 * PI * EARTH_RADIUS;

/// Half the equatorial circumference. Projected coordinates lie within
/// `[-ORIGIN_SHIFT, ORIGIN_SHIFT]` on both axes.
pub const ORIGIN_SHIFT: f64 = WORLD_SIZE / 2.0;

/// Number of zoom levels searched by
/// [`GlobalMercator::zoom_for_pixel_size`](crate::GlobalMercator::zoom_for_pixel_size).
pub const MAX_ZOOM_SEARCH: u8 = 30;

/// Longest quadkey that can be decoded, i.e. the deepest level whose tile
/// indices still fit into `i64`.
pub const MAX_QUADKEY_LEVEL: u8 = 62;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;
