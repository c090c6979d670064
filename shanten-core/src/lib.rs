//! Shanten calculation, hand decomposition, and tile-efficiency analysis
//! for the standard, seven-pairs, and thirteen-orphans winning forms.
//!
//! Built on [`shanten_tiles`]'s 34-tile universe; this crate never touches
//! scoring, multi-player turn state, or I/O. See each checker module for
//! the contract it implements.

pub mod checker;
pub mod division;
pub mod efficiency;
pub mod error;
pub mod hand;
pub mod seven_pairs;
pub mod standard;
pub mod thirteen_orphans;

pub mod prelude {
    pub use crate::checker::*;
    pub use crate::division::*;
    pub use crate::efficiency::*;
    pub use crate::error::*;
    pub use crate::hand::*;
    pub use crate::seven_pairs::*;
    pub use crate::standard::*;
    pub use crate::thirteen_orphans::*;
    pub use shanten_tiles::prelude::*;
}

/// Shanten value meaning a hand is fully complete (agari).
pub const COMPLETE_SHANTEN: i8 = -1;

/// Shanten value meaning a hand is one tile from complete (tenpai).
pub const READY_SHANTEN: i8 = 0;
