//! Quadkeys: base-4 tile addresses with one digit per zoom level.
//!
//! Each digit combines one bit of the Google/Bing column and row,
//! `digit = x_bit + 2 * y_bit`, starting with the coarsest level.

use crate::{MAX_QUADKEY_LEVEL, TileIndex};
use anyhow::{Result, bail, ensure};
use globalmaptiles_derive::context;
use std::{
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// A validated quadkey string containing only the digits `0` to `3`.
///
/// The empty key addresses the single tile of level 0. Parsing accepts at
/// most [`MAX_QUADKEY_LEVEL`] digits, while [`QuadKey::from_tile`] encodes any
/// `u8` level; keys deeper than that limit do not parse back from their string
/// form and fail in [`QuadKey::to_tile`].
///
/// ```
/// use globalmaptiles::QuadKey;
///
/// let key = QuadKey::from_tile(3, 5, 3);
/// assert_eq!(key.to_string(), "031");
///
/// let (tile, level) = "031".parse::<QuadKey>()?.to_tile()?;
/// assert_eq!((tile.x, tile.y, level), (3, 5, 3));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct QuadKey(String);

impl QuadKey {
	/// Parses and validates a quadkey.
	#[context("Invalid quadkey '{key}'")]
	pub fn new(key: &str) -> Result<QuadKey> {
		ensure!(
			key.len() <= usize::from(MAX_QUADKEY_LEVEL),
			"quadkey has {} digits, at most {MAX_QUADKEY_LEVEL} are supported",
			key.len()
		);
		if let Some(c) = key.chars().find(|c| !matches!(c, '0'..='3')) {
			bail!("character '{c}' is not a quadkey digit (0-3)");
		}
		Ok(QuadKey(key.to_owned()))
	}

	/// Encodes the TMS tile `(tx, ty)` at `level`.
	///
	/// The row is flipped to the Google/Bing scheme first, then one digit per
	/// bit is emitted from bit `level - 1` down to bit `0`.
	///
	/// The level is not limited to [`MAX_QUADKEY_LEVEL`]; deeper keys can be
	/// printed but neither parsed nor decoded.
	pub fn from_tile(tx: i64, ty: i64, level: u8) -> QuadKey {
		let gy = TileIndex::new(tx, ty).flip_y(level).y;
		let key = (0..u32::from(level))
			.rev()
			.map(|i| match (bit(tx, i), bit(gy, i)) {
				(false, false) => '0',
				(true, false) => '1',
				(false, true) => '2',
				(true, true) => '3',
			})
			.collect();
		QuadKey(key)
	}

	/// Decodes the key back to the TMS tile index and its zoom level.
	#[context("Failed to decode quadkey '{}'", self.0)]
	pub fn to_tile(&self) -> Result<(TileIndex, u8)> {
		let level = self.level();
		ensure!(
			level <= MAX_QUADKEY_LEVEL,
			"level {level} exceeds the deepest decodable level {MAX_QUADKEY_LEVEL}"
		);

		let (mut x, mut y) = (0i64, 0i64);
		for c in self.0.bytes() {
			let digit = i64::from(c - b'0');
			x = (x << 1) | (digit & 1);
			y = (y << 1) | (digit >> 1);
		}

		Ok((TileIndex::new(x, y).flip_y(level), level))
	}

	/// Zoom level addressed by this key, i.e. its number of digits.
	pub fn level(&self) -> u8 {
		u8::try_from(self.0.len()).unwrap_or(u8::MAX)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the key of the enclosing tile one level up, or `None` at level 0.
	pub fn parent(&self) -> Option<QuadKey> {
		let mut key = self.0.clone();
		key.pop().map(|_| QuadKey(key))
	}
}

/// Bit `i` of `value`; bits beyond 63 repeat the sign bit.
fn bit(value: i64, i: u32) -> bool {
	(value >> i.min(63)) & 1 == 1
}

impl FromStr for QuadKey {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		QuadKey::new(s)
	}
}

impl TryFrom<&str> for QuadKey {
	type Error = anyhow::Error;

	fn try_from(value: &str) -> Result<Self> {
		QuadKey::new(value)
	}
}

impl AsRef<str> for QuadKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<QuadKey> for String {
	fn from(value: QuadKey) -> Self {
		value.0
	}
}

impl Display for QuadKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Debug for QuadKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "QuadKey({})", self.0)
	}
}
