use thiserror::Error;

/// Errors surfaced by the checkers and the efficiency layer: one variant
/// per distinct failure, each carrying enough of the offending state to
/// diagnose without re-deriving it.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ShantenError {
    /// The concealed tile count is inconsistent with what this checker
    /// expects (e.g. not `3n+1` for the standard form, or not 13 for
    /// seven-pairs/thirteen-orphans).
    #[error("hand has {0} concealed tiles, which this checker cannot validate")]
    InvalidHandSize(u32),

    /// [`crate::checker::Checker::decompose`] was called on a hand whose
    /// shanten is not [`crate::COMPLETE_SHANTEN`].
    #[error("decomposition requested on a hand that is not complete")]
    NotComplete,

    /// A tile or call record passed in from [`shanten_tiles`] failed its
    /// own validation (invalid tile, bad sequence start, or wrong call
    /// shape); propagated transparently rather than re-wrapped.
    #[error(transparent)]
    Tiles(#[from] shanten_tiles::error::TileError),

    /// A winning tile's wait shape could not be classified against any of
    /// the patterns in the decomposition table. Unreachable for
    /// well-formed inputs; treat as an implementation bug.
    #[error("could not classify the wait shape of tile {0}")]
    AmbiguousWait(u8),
}
