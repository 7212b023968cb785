//! Value types passed to and returned from [`GlobalMercator`](crate::GlobalMercator).

mod bounds;
pub use bounds::*;

mod constants;
pub use constants::*;

mod lat_lon;
pub use lat_lon::*;

mod meters;
pub use meters::*;

mod pixels;
pub use pixels::*;

mod quadkey;
pub use quadkey::*;

mod tile_index;
pub use tile_index::*;

mod tile_size;
pub use tile_size::*;
