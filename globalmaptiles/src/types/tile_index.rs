//! Integer tile indices in a Spherical Mercator pyramid.
//!
//! A [`TileIndex`] carries no zoom level and no scheme. The same pair of
//! numbers is read as TMS (rows counted from the bottom) by
//! [`GlobalMercator`](crate::GlobalMercator) and can be moved to the
//! Google/Bing scheme (rows counted from the top) with [`TileIndex::flip_y`].
//!
//! ```
//! use globalmaptiles::TileIndex;
//!
//! let tms = TileIndex::new(19295, 40895);
//! let google = tms.flip_y(16);
//! assert_eq!(google.as_tuple(), (19295, 24640));
//! assert_eq!(google.flip_y(16), tms);
//! ```

use crate::QuadKey;
use std::fmt::{self, Debug};

/// Column (`x`) and row (`y`) of a tile.
///
/// Indices are signed: pixel coordinates on the lower or left edge of the
/// map fall into tile `-1` under the ceil-minus-one rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileIndex {
	pub x: i64,
	pub y: i64,
}

impl TileIndex {
	pub fn new(x: i64, y: i64) -> Self {
		Self { x, y }
	}

	/// Returns `(x, y)`.
	pub fn as_tuple(&self) -> (i64, i64) {
		(self.x, self.y)
	}

	/// Largest row or column index at `level`, i.e. `2^level - 1`.
	///
	/// Saturates at `i64::MAX - 1` for levels that do not fit into `i64`.
	pub fn max_index(level: u8) -> i64 {
		2f64.powi(i32::from(level)) as i64 - 1
	}

	/// Moves the row origin between the bottom-left (TMS) and the top-left
	/// (Google/Bing) corner. Applying it twice returns the original index.
	///
	/// Rows outside the `i64` range wrap around instead of overflowing.
	#[must_use]
	pub fn flip_y(&self, level: u8) -> TileIndex {
		TileIndex {
			x: self.x,
			y: Self::max_index(level).wrapping_sub(self.y),
		}
	}

	/// Encodes this TMS index as a quadkey of `level` digits.
	pub fn to_quadkey(&self, level: u8) -> QuadKey {
		QuadKey::from_tile(self.x, self.y, level)
	}
}

impl From<(i64, i64)> for TileIndex {
	fn from((x, y): (i64, i64)) -> Self {
		Self { x, y }
	}
}

impl From<TileIndex> for (i64, i64) {
	fn from(value: TileIndex) -> Self {
		value.as_tuple()
	}
}

impl Debug for TileIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileIndex({}, {})", self.x, self.y)
	}
}
