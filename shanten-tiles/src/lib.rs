//! The 34-tile universe and the count-vector primitives built on top of it.
//!
//! This crate is the leaf of the workspace: [`shanten-core`](../shanten_core/index.html)
//! builds the shanten search and decomposition engine on top of [`Tile`] and
//! [`TileCount`], and `shanten-parse` builds the hand-string reader on top of
//! both.

pub mod call;
pub mod error;
pub mod sets;
pub mod tile;
pub mod tile_count;

pub mod prelude {
    pub use crate::call::*;
    pub use crate::error::*;
    pub use crate::sets::*;
    pub use crate::tile::*;
    pub use crate::tile_count::*;
}
