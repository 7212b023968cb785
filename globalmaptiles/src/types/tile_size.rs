use crate::DEFAULT_TILE_SIZE;
use anyhow::{Result, ensure};
use globalmaptiles_derive::context;
use std::fmt::Debug;

/// Edge length of a square tile in pixels.
///
/// Any positive size is accepted; 256 and 512 are the common ones.
///
/// ```
/// use globalmaptiles::TileSize;
///
/// assert_eq!(TileSize::new(512)?.size(), 512);
/// assert!(TileSize::new(0).is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize(u32);

impl TileSize {
	#[context("Invalid tile size {size}")]
	pub fn new(size: u32) -> Result<Self> {
		ensure!(size > 0, "tile size must be positive");
		Ok(Self(size))
	}

	/// Returns the size of the tile in pixels.
	pub fn size(&self) -> u32 {
		self.0
	}

	/// Returns the size of the tile in pixels as `f64`.
	pub fn as_f64(&self) -> f64 {
		f64::from(self.0)
	}
}

impl Default for TileSize {
	fn default() -> Self {
		Self(DEFAULT_TILE_SIZE)
	}
}

impl TryFrom<i64> for TileSize {
	type Error = anyhow::Error;

	fn try_from(size: i64) -> Result<Self> {
		ensure!(size > 0, "Invalid tile size {size}: tile size must be positive");
		TileSize::new(u32::try_from(size)?)
	}
}

impl Debug for TileSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TileSize({})", self.0)
	}
}
