//! [`HandInfo`]: a snapshot of one player's holding: concealed tiles,
//! called melds, and (for checking a win) the winning tile.

use shanten_tiles::call::Call;
use shanten_tiles::tile::Tile;
use shanten_tiles::tile_count::TileCount;

/// A player's tile holding at the moment a checker is asked about it.
///
/// No validation happens at construction; each checker validates the
/// shape it requires, since "valid for standard form" and "valid for
/// seven pairs" disagree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandInfo {
    concealed: TileCount,
    calls: Vec<Call>,
    winning_tile: Option<Tile>,
    self_drawn: bool,
}

impl HandInfo {
    /// Builds a hand from its concealed tiles alone, with no calls and no
    /// winning tile yet: the starting point before a checker is asked
    /// "what if I drew/ronned this tile".
    pub fn from_concealed(concealed: TileCount) -> Self {
        Self { concealed, calls: Vec::new(), winning_tile: None, self_drawn: false }
    }

    pub fn with_calls(mut self, calls: Vec<Call>) -> Self {
        self.calls = calls;
        self
    }

    /// Attaches a winning tile to an otherwise-built hand.
    pub fn with_winning_tile(mut self, tile: Tile, self_drawn: bool) -> Self {
        self.winning_tile = Some(tile);
        self.self_drawn = self_drawn;
        self
    }

    pub fn concealed(&self) -> TileCount {
        self.concealed
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn winning_tile(&self) -> Option<Tile> {
        self.winning_tile
    }

    pub fn self_drawn(&self) -> bool {
        self.self_drawn
    }

    /// Concealed tiles plus every called meld's tiles plus the winning
    /// tile, if present.
    pub fn total_count(&self) -> TileCount {
        let mut total = self.concealed;
        for call in &self.calls {
            total += call.tiles();
        }
        if let Some(tile) = self.winning_tile {
            total.add(tile, 1);
        }
        total
    }

    /// Removes one copy of `tile` from the concealed count, saturating at
    /// zero. Used by the efficiency layer to try each candidate discard
    /// on a scratch hand without disturbing the caller's original.
    pub fn remove_one_concealed(&mut self, tile: Tile) {
        self.concealed.remove(tile, 1);
    }

    /// The concealed count with the winning tile folded in, for checkers
    /// that reason about the completed 3n+2/14-tile shape. Returns the
    /// plain concealed count unchanged if there is no winning tile.
    pub fn concealed_with_winning_tile(&self) -> TileCount {
        let mut counts = self.concealed;
        if let Some(tile) = self.winning_tile {
            counts.add(tile, 1);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shanten_tiles::call::CallSource;
    use shanten_tiles::t;

    #[test]
    fn total_count_folds_calls_and_winning_tile() {
        let concealed = TileCount::from_tiles([t!("1m"), t!("1m")]);
        let call = Call::pon(t!("5p"), CallSource::Across).unwrap();
        let hand = HandInfo::from_concealed(concealed)
            .with_calls(vec![call])
            .with_winning_tile(t!("1m"), true);
        assert_eq!(hand.total_count().total(), 6);
        assert_eq!(hand.total_count()[t!("1m")], 3);
        assert_eq!(hand.total_count()[t!("5p")], 3);
    }

    #[test]
    fn concealed_with_winning_tile_leaves_calls_out() {
        let concealed = TileCount::from_tiles([t!("2s")]);
        let hand = HandInfo::from_concealed(concealed).with_winning_tile(t!("2s"), false);
        assert_eq!(hand.concealed_with_winning_tile()[t!("2s")], 2);
        assert_eq!(hand.concealed()[t!("2s")], 1);
    }

    #[test]
    fn default_hand_has_no_calls_or_winning_tile() {
        let hand = HandInfo::default();
        assert!(hand.calls().is_empty());
        assert_eq!(hand.winning_tile(), None);
        assert!(!hand.self_drawn());
    }
}
