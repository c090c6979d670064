//! [`Division`] and [`DivisionPart`]: one way to decompose a complete
//! hand into structural groups, annotated with the shape of the wait the
//! winning tile completed.

use shanten_tiles::call::{Call, CallKind};
use shanten_tiles::error::TileError;
use shanten_tiles::sets::is_sequence_start;
use shanten_tiles::sets::TERMINALS_AND_HONORS;
use shanten_tiles::tile::Tile;
use shanten_tiles::tile_count::TileCount;

/// Whether a group-part's tiles were completed by self-draw, a called
/// discard (ron), or a revealed meld.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartState {
    /// Completed by self-draw, or a concealed kan, never visible to
    /// opponents before the win is declared.
    Concealed,
    /// The last tile came from an opponent's discard and falls in this
    /// part.
    Ron,
    /// Formed from a revealed meld (chii, pon, or an open kan).
    Opened,
}

/// The structural kind of a [`DivisionPart`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartKind {
    /// A pair of identical tiles.
    Head,
    /// Three consecutive tiles in one numeral suit.
    Sequence,
    /// Three identical tiles.
    Triple,
    /// Four identical tiles, grouped structurally as one set.
    Quad,
    /// The whole hand, used only by the thirteen-orphans form instead of
    /// trying to list 13 pseudo-heads.
    ThirteenOrphans,
}

/// The shape of the "hole" the winning tile filled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaitType {
    /// Completing a pair (tanki).
    SingleWait,
    /// Completing the middle of a run (kanchan).
    ClosedWait,
    /// Completing a 1-2-3 or 7-8-9 run at its outer end (penchan).
    EdgeWait,
    /// Completing one of two identical tiles into a triplet (shanpon).
    DualPonWait,
    /// Completing either end of an open two-tile run (ryanmen).
    SideWait,
    /// Thirteen orphans, already holding one of each terminal/honor plus
    /// the winning duplicate.
    ThirteenOrphans1Wait,
    /// Thirteen orphans, the winning tile is the only missing kind.
    ThirteenOrphans13Wait,
}

/// One structural group within a [`Division`]: its kind, the tiles it
/// holds, and how it was completed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DivisionPart {
    kind: PartKind,
    tiles: TileCount,
    state: PartState,
}

impl DivisionPart {
    pub fn kind(&self) -> PartKind {
        self.kind
    }

    pub fn tiles(&self) -> TileCount {
        self.tiles
    }

    pub fn state(&self) -> PartState {
        self.state
    }

    pub fn with_state(mut self, state: PartState) -> Self {
        self.state = state;
        self
    }

    /// A pair of `tile`.
    pub fn head(tile: Tile, state: PartState) -> Self {
        let mut tiles = TileCount::EMPTY;
        tiles.add(tile, 2);
        Self { kind: PartKind::Head, tiles, state }
    }

    /// Three identical `tile`s.
    pub fn triple(tile: Tile, state: PartState) -> Self {
        let mut tiles = TileCount::EMPTY;
        tiles.add(tile, 3);
        Self { kind: PartKind::Triple, tiles, state }
    }

    /// A run of three starting at `start`. Fails with
    /// [`TileError::InvalidSequenceStart`] if `start` cannot begin a run.
    pub fn sequence(start: Tile, state: PartState) -> Result<Self, TileError> {
        if !is_sequence_start(start.index()) {
            return Err(TileError::InvalidSequenceStart(start.index()));
        }
        let mut tiles = TileCount::EMPTY;
        for offset in 0..3u8 {
            let tile = Tile::from_index(start.index() + offset).expect("run stays in suit");
            tiles.add(tile, 1);
        }
        Ok(Self { kind: PartKind::Sequence, tiles, state })
    }

    /// Four identical `tile`s.
    pub fn quad(tile: Tile, state: PartState) -> Self {
        let mut tiles = TileCount::EMPTY;
        tiles.add(tile, 4);
        Self { kind: PartKind::Quad, tiles, state }
    }

    /// The whole-hand thirteen-orphans part: one of every terminal/honor,
    /// plus a second copy at `head_index`.
    pub fn thirteen_orphans(head_index: Tile, state: PartState) -> Self {
        let mut tiles = TileCount::EMPTY;
        for &index in TERMINALS_AND_HONORS.iter() {
            tiles.add(Tile::from_index(index).expect("terminal/honor index valid"), 1);
        }
        tiles.add(head_index, 1);
        Self { kind: PartKind::ThirteenOrphans, tiles, state }
    }

    /// Builds the part a called meld contributes: CHII maps to SEQUENCE,
    /// PON to TRIPLE, any KAN to QUAD. State is CONCEALED iff the call is
    /// a concealed kan, else OPENED.
    pub fn from_call(call: &Call) -> Self {
        let kind = match call.kind() {
            CallKind::Chii => PartKind::Sequence,
            CallKind::Pon => PartKind::Triple,
            CallKind::ConcealedKan | CallKind::BigMeldedKan | CallKind::SmallMeldedKan => {
                PartKind::Quad
            }
        };
        let state = if matches!(call.kind(), CallKind::ConcealedKan) {
            PartState::Concealed
        } else {
            PartState::Opened
        };
        Self { kind, tiles: call.tiles(), state }
    }
}

/// One complete way to decompose a winning hand: an ordered list of
/// [`DivisionPart`]s plus the wait shape the winning tile completed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Division {
    parts: Vec<DivisionPart>,
    wait_type: WaitType,
}

impl Division {
    pub fn new(parts: Vec<DivisionPart>, wait_type: WaitType) -> Self {
        Self { parts, wait_type }
    }

    pub fn parts(&self) -> &[DivisionPart] {
        &self.parts
    }

    pub fn wait_type(&self) -> WaitType {
        self.wait_type
    }

    /// Sum of all parts' tile counts.
    pub fn tile_count(&self) -> TileCount {
        self.parts.iter().fold(TileCount::EMPTY, |acc, part| acc + part.tiles())
    }

    /// Number of TRIPLE or QUAD parts in CONCEALED state.
    pub fn num_concealed_triplets(&self) -> u32 {
        self.parts
            .iter()
            .filter(|p| {
                matches!(p.kind(), PartKind::Triple | PartKind::Quad)
                    && matches!(p.state(), PartState::Concealed)
            })
            .count() as u32
    }

    /// Number of QUAD parts, concealed or open.
    pub fn num_quads(&self) -> u32 {
        self.parts.iter().filter(|p| matches!(p.kind(), PartKind::Quad)).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shanten_tiles::t;

    #[test]
    fn sequence_rejects_non_sequence_start() {
        assert!(DivisionPart::sequence(t!("8m"), PartState::Concealed).is_err());
    }

    #[test]
    fn division_tile_count_sums_parts() {
        let head = DivisionPart::head(t!("1z"), PartState::Concealed);
        let seq = DivisionPart::sequence(t!("1m"), PartState::Concealed).unwrap();
        let division = Division::new(vec![head, seq], WaitType::SideWait);
        assert_eq!(division.tile_count().total(), 5);
    }

    #[test]
    fn num_concealed_triplets_counts_only_concealed_triples_and_quads() {
        let concealed_triple = DivisionPart::triple(t!("5p"), PartState::Concealed);
        let open_triple = DivisionPart::triple(t!("6p"), PartState::Opened);
        let concealed_quad = DivisionPart::quad(t!("7p"), PartState::Concealed);
        let division = Division::new(
            vec![concealed_triple, open_triple, concealed_quad],
            WaitType::DualPonWait,
        );
        assert_eq!(division.num_concealed_triplets(), 2);
        assert_eq!(division.num_quads(), 1);
    }

    #[test]
    fn thirteen_orphans_part_has_fourteen_tiles() {
        let part = DivisionPart::thirteen_orphans(t!("1m"), PartState::Concealed);
        assert_eq!(part.tiles().total(), 14);
        assert_eq!(part.tiles()[t!("1m")], 2);
    }
}
