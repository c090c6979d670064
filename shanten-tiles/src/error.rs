use thiserror::Error;

/// Errors raised while building or converting tile-universe values: one
/// variant per distinct failure, carrying the offending value.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TileError {
    /// A tile family/value pair (or a raw encoding) does not map to one of
    /// the 34 indexable tiles. Bonus ("ETC"-family) tiles have no index and
    /// must never reach a [`crate::tile::Tile`].
    #[error("{0} is not one of the 34 indexable tiles")]
    InvalidTile(u8),

    /// A sequence-shaped [`crate::call::Call`] or division part was built on
    /// an index that is not a valid run start (see
    /// [`crate::sets::is_sequence_start`]).
    #[error("index {0} is not a valid sequence start")]
    InvalidSequenceStart(u8),

    /// The tiles presented to a call record do not match the shape its kind
    /// requires (3 consecutive for a run, 3 identical for a triplet, 4
    /// identical for any kan).
    #[error("tiles {0:?} do not form a valid {1:?}")]
    InvalidCallShape(Vec<u8>, crate::call::CallKind),
}
