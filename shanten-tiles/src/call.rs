//! Call records: melds a player has revealed (or concealed-kan'd) from
//! their concealed hand.
//!
//! A tagged variant carrying the tiles involved, validated at
//! construction so nothing downstream has to re-check shape.

use crate::error::TileError;
use crate::sets::is_sequence_start;
use crate::tile::Tile;
use crate::tile_count::TileCount;

/// The kind of meld a [`Call`] represents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallKind {
    /// A run of three consecutive tiles in one numeral suit, taken from
    /// the tile just discarded by the left-hand (previous) player.
    Chii,
    /// Three identical tiles, one of them taken from a discard.
    Pon,
    /// Four identical tiles declared from one's own concealed hand,
    /// without a tile coming from any other seat.
    ConcealedKan,
    /// Four identical tiles added to an existing open pon, or called
    /// outright from a discard: an open kan with a large, visible call.
    BigMeldedKan,
    /// Four identical tiles called from a discard as a fresh open kan.
    SmallMeldedKan,
}

impl CallKind {
    /// Whether this kind's tiles form a run rather than identical copies.
    pub const fn is_sequence(self) -> bool {
        matches!(self, CallKind::Chii)
    }

    /// Whether this kind is some flavor of kan (four-tile meld).
    pub const fn is_kan(self) -> bool {
        matches!(
            self,
            CallKind::ConcealedKan | CallKind::BigMeldedKan | CallKind::SmallMeldedKan
        )
    }

    /// Number of tiles a meld of this kind must hold.
    pub const fn tile_count(self) -> u8 {
        if self.is_kan() {
            4
        } else {
            3
        }
    }
}

/// Which seat, relative to the caller, a meld's tiles came from.
///
/// Carried only for round-tripping the hand-string notation's source
/// character; it has no bearing on shanten or decomposition math.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallSource {
    /// The player to the caller's left (kamicha); discards flow to a
    /// `Chii` from here.
    Prev,
    /// The player across the table (toimen).
    Across,
    /// The player to the caller's right (shimocha).
    Next,
    /// No other seat is involved: a concealed kan drawn from one's own
    /// hand.
    SelfDrawn,
}

/// A single revealed (or concealed-kan) meld.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    kind: CallKind,
    tiles: TileCount,
    source: CallSource,
}

impl Call {
    /// The tiles making up this meld.
    pub fn tiles(&self) -> TileCount {
        self.tiles
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn source(&self) -> CallSource {
        self.source
    }

    /// Builds a `Chii` from `start` (the low tile of the run), validating
    /// that `start` is a legal run start and sourcing it from [`CallSource::Prev`]
    /// per convention (a run can only ever be taken from the left).
    pub fn chii(start: Tile) -> Result<Self, TileError> {
        if !is_sequence_start(start.index()) {
            return Err(TileError::InvalidSequenceStart(start.index()));
        }
        let mut tiles = TileCount::EMPTY;
        for offset in 0..3u8 {
            let tile = Tile::from_index(start.index() + offset).expect("run stays in suit");
            tiles.add(tile, 1);
        }
        Ok(Self { kind: CallKind::Chii, tiles, source: CallSource::Prev })
    }

    /// Builds a `Pon` of three `tile`s from the given source.
    pub fn pon(tile: Tile, source: CallSource) -> Result<Self, TileError> {
        Self::validate_source(CallKind::Pon, source)?;
        let mut tiles = TileCount::EMPTY;
        tiles.add(tile, 3);
        Ok(Self { kind: CallKind::Pon, tiles, source })
    }

    /// Builds a kan of four `tile`s. `kind` must be one of the three kan
    /// variants; `source` must agree with it (only [`CallKind::ConcealedKan`]
    /// may be [`CallSource::SelfDrawn`], and it must be).
    pub fn kan(kind: CallKind, tile: Tile, source: CallSource) -> Result<Self, TileError> {
        if !kind.is_kan() {
            return Err(TileError::InvalidCallShape(vec![tile.index()], kind));
        }
        Self::validate_source(kind, source)?;
        let mut tiles = TileCount::EMPTY;
        tiles.add(tile, 4);
        Ok(Self { kind, tiles, source })
    }

    fn validate_source(kind: CallKind, source: CallSource) -> Result<(), TileError> {
        let concealed_kan = matches!(kind, CallKind::ConcealedKan);
        let self_drawn = matches!(source, CallSource::SelfDrawn);
        if concealed_kan != self_drawn {
            return Err(TileError::InvalidCallShape(vec![], kind));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::t;

    #[test]
    fn chii_holds_three_consecutive_tiles() {
        let call = Call::chii(t!("4m")).unwrap();
        assert_eq!(call.tiles().total(), 3);
        assert_eq!(call.tiles()[t!("4m")], 1);
        assert_eq!(call.tiles()[t!("5m")], 1);
        assert_eq!(call.tiles()[t!("6m")], 1);
        assert_eq!(call.kind(), CallKind::Chii);
    }

    #[test]
    fn chii_rejects_non_sequence_start() {
        assert!(Call::chii(t!("8m")).is_err());
        assert!(Call::chii(t!("1z")).is_err());
    }

    #[test]
    fn pon_holds_three_identical_tiles() {
        let call = Call::pon(t!("1s"), CallSource::Across).unwrap();
        assert_eq!(call.tiles().total(), 3);
        assert_eq!(call.tiles()[t!("1s")], 3);
    }

    #[test]
    fn kan_holds_four_identical_tiles() {
        let call = Call::kan(CallKind::SmallMeldedKan, t!("2p"), CallSource::Next).unwrap();
        assert_eq!(call.tiles().total(), 4);
        assert_eq!(call.tiles()[t!("2p")], 4);
    }

    #[test]
    fn concealed_kan_must_be_self_drawn_and_nothing_else_may_be() {
        assert!(Call::kan(CallKind::ConcealedKan, t!("3z"), CallSource::SelfDrawn).is_ok());
        assert!(Call::kan(CallKind::ConcealedKan, t!("3z"), CallSource::Prev).is_err());
        assert!(Call::kan(CallKind::BigMeldedKan, t!("3z"), CallSource::SelfDrawn).is_err());
        assert!(Call::pon(t!("3z"), CallSource::SelfDrawn).is_err());
    }

    #[test]
    fn kan_rejects_non_kan_kind() {
        assert!(Call::kan(CallKind::Chii, t!("1m"), CallSource::Prev).is_err());
    }
}
