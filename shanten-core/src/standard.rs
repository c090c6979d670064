//! The standard-form checker: four sets plus one head.
//!
//! A two-phase recursive search (complete sets, then partial sets) with a
//! lower-bound prune computes shanten; a separate deterministic body
//! enumeration handles decomposition once a hand is known to be complete.

use shanten_tiles::sets::{
    is_sequence_start, LEFT_EDGE_WAIT_STARTS, RIGHT_EDGE_WAIT_STARTS, SIDE_WAIT_STARTS,
};
use shanten_tiles::tile::Tile;
use shanten_tiles::tile_count::TileCount;

use crate::checker::Checker;
use crate::division::{Division, DivisionPart, PartKind, PartState, WaitType};
use crate::error::ShantenError;
use crate::hand::HandInfo;
use crate::COMPLETE_SHANTEN;

/// Stand-in for "no candidate found yet" while the search runs.
const INFINITE_SHANTEN: i32 = 100;

/// The standard winning form: four complete sets (triplet, sequence, or
/// quad) plus one pair.
///
/// Carries mutable scratch state for the recursive search: a working
/// count, a snapshot of all tiles in play, and a running best. A
/// single instance must not be shared across concurrent calls.
#[derive(Debug, Default)]
pub struct StandardChecker {
    working: TileCount,
    used: TileCount,
    best: i32,
}

impl StandardChecker {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate_concealed_shape(hand: &HandInfo) -> Result<(), ShantenError> {
        let num_concealed = hand.concealed().total();
        if num_concealed % 3 != 1 {
            return Err(ShantenError::InvalidHandSize(num_concealed));
        }
        if num_concealed / 3 + hand.calls().len() as u32 != 4 {
            return Err(ShantenError::InvalidHandSize(num_concealed));
        }
        Ok(())
    }

    /// Phase 2a: commit complete sets (triplets, sequences) greedily at
    /// the earliest nonzero index, trying every branch before advancing.
    fn phase2a(&mut self, from: u8, sets: i32, head_fixed: bool) {
        let index = self.working.find_earliest_nonzero_index(from);
        if index == 34 {
            let lower_bound = 5 - sets - 2 * head_fixed as i32;
            if lower_bound >= self.best {
                return;
            }
            self.phase2b(0, sets, 0, head_fixed);
            return;
        }

        if self.working.get(index) >= 3 {
            self.working.set(index, self.working.get(index) - 3);
            self.phase2a(index, sets + 1, head_fixed);
            self.working.set(index, self.working.get(index) + 3);
        }

        if is_sequence_start(index) && self.working.get(index + 1) > 0 && self.working.get(index + 2) > 0
        {
            self.working.set(index, self.working.get(index) - 1);
            self.working.set(index + 1, self.working.get(index + 1) - 1);
            self.working.set(index + 2, self.working.get(index + 2) - 1);
            self.phase2a(index, sets + 1, head_fixed);
            self.working.set(index, self.working.get(index) + 1);
            self.working.set(index + 1, self.working.get(index + 1) + 1);
            self.working.set(index + 2, self.working.get(index + 2) + 1);
        }

        self.phase2a(index + 1, sets, head_fixed);
    }

    /// Phase 2b: commit partial sets (pair, closed-gap, edge, side) until
    /// four total sets are accounted for or the scan runs out of tiles.
    fn phase2b(&mut self, from: u8, sets: i32, partials: i32, head_fixed: bool) {
        let index = self.working.find_earliest_nonzero_index(from);
        if sets + partials == 4 || index == 34 {
            let pair_possible = head_fixed
                || (0u8..34).any(|j| self.working.get(j) == 1 && self.used.get(j) < 4);
            let shanten = 9 - sets * 2 - partials - head_fixed as i32 - pair_possible as i32;
            if shanten < self.best {
                self.best = shanten;
            }
            return;
        }

        if self.working.get(index) >= 2 && self.used.get(index) < 4 {
            self.working.set(index, self.working.get(index) - 2);
            self.phase2b(index, sets, partials + 1, head_fixed);
            self.working.set(index, self.working.get(index) + 2);
        }

        if is_sequence_start(index) && self.working.get(index + 2) > 0 && self.used.get(index + 1) < 4 {
            self.working.set(index, self.working.get(index) - 1);
            self.working.set(index + 2, self.working.get(index + 2) - 1);
            self.phase2b(index, sets, partials + 1, head_fixed);
            self.working.set(index, self.working.get(index) + 1);
            self.working.set(index + 2, self.working.get(index + 2) + 1);
        }

        let is_left_edge = LEFT_EDGE_WAIT_STARTS.contains(&index)
            && self.working.get(index + 1) > 0
            && self.used.get(index + 2) < 4;
        let is_right_edge = RIGHT_EDGE_WAIT_STARTS.contains(&index)
            && self.working.get(index + 1) > 0
            && self.used.get(index - 1) < 4;
        let is_side = SIDE_WAIT_STARTS.contains(&index)
            && self.working.get(index + 1) > 0
            && (self.used.get(index + 2) < 4 || self.used.get(index - 1) < 4);

        if is_left_edge || is_right_edge || is_side {
            self.working.set(index, self.working.get(index) - 1);
            self.working.set(index + 1, self.working.get(index + 1) - 1);
            self.phase2b(index, sets, partials + 1, head_fixed);
            self.working.set(index, self.working.get(index) + 1);
            self.working.set(index + 1, self.working.get(index + 1) + 1);
        }

        self.phase2b(index + 1, sets, partials, head_fixed);
    }

    /// Deterministic body enumeration used only once a hand is already
    /// known complete, for [`Checker::decompose`]. At each earliest
    /// nonzero index, tries committing 0 or 1 triplets plus however many
    /// sequences are needed to exhaust that index's count, then recurses
    /// on the advanced position; a leaf is reached once every tile is
    /// accounted for.
    ///
    /// Committing `k=0` or `k=1` triplets with a zero sequence residual
    /// (`n == 0`) does not additionally require `index` to be a sequence
    /// start: an honor or terminal triplet with nothing left over is
    /// always a valid body on its own. Requiring a sequence start
    /// unconditionally would reject any body anchored on an honor tile
    /// or a high terminal, which would wrongly reject most winning hands.
    fn find_bodies(&mut self, from: u8, parts: &mut Vec<DivisionPart>, leaves: &mut Vec<Vec<DivisionPart>>) {
        let index = self.working.find_earliest_nonzero_index(from);
        if index == 34 {
            leaves.push(parts.clone());
            return;
        }

        let count = self.working.get(index);
        for num_triplet in 0..=1u8 {
            if count < 3 * num_triplet {
                continue;
            }
            let num_sequence = count - 3 * num_triplet;
            let sequence_ok = num_sequence == 0
                || (is_sequence_start(index)
                    && self.working.get(index + 1) >= num_sequence
                    && self.working.get(index + 2) >= num_sequence);
            if !sequence_ok {
                continue;
            }

            let tile = Tile::from_index(index).expect("index < 34");
            let pushed_at_start = parts.len();
            for _ in 0..num_triplet {
                parts.push(DivisionPart::triple(tile, PartState::Concealed));
            }
            for _ in 0..num_sequence {
                parts.push(
                    DivisionPart::sequence(tile, PartState::Concealed)
                        .expect("index verified as a sequence start"),
                );
            }

            self.working.set(index, 0);
            self.working.set(index + 1, self.working.get(index + 1) - num_sequence);
            self.working.set(index + 2, self.working.get(index + 2) - num_sequence);

            self.find_bodies(index + 1, parts, leaves);

            self.working.set(index + 1, self.working.get(index + 1) + num_sequence);
            self.working.set(index + 2, self.working.get(index + 2) + num_sequence);
            self.working.set(index, count);
            parts.truncate(pushed_at_start);
        }
    }

    fn classify_wait(part: &DivisionPart, winning: Tile) -> Result<WaitType, ShantenError> {
        match part.kind() {
            PartKind::Head => Ok(WaitType::SingleWait),
            PartKind::Triple => Ok(WaitType::DualPonWait),
            PartKind::Sequence => {
                let agari = winning.index() as i32;
                let tiles = part.tiles();
                let at = |offset: i32| -> u8 {
                    let idx = agari + offset;
                    if idx < 0 || idx >= 34 { 0 } else { tiles.get(idx as u8) }
                };
                if at(-1) > 0 && at(1) > 0 {
                    Ok(WaitType::ClosedWait)
                } else if at(-2) > 0 && at(-1) > 0 {
                    let run_start = (agari - 2) as u8;
                    Ok(if LEFT_EDGE_WAIT_STARTS.contains(&run_start) {
                        WaitType::EdgeWait
                    } else {
                        WaitType::SideWait
                    })
                } else if at(1) > 0 && at(2) > 0 {
                    let run_start = (agari + 1) as u8;
                    Ok(if RIGHT_EDGE_WAIT_STARTS.contains(&run_start) {
                        WaitType::EdgeWait
                    } else {
                        WaitType::SideWait
                    })
                } else {
                    Err(ShantenError::AmbiguousWait(winning.index()))
                }
            }
            PartKind::Quad | PartKind::ThirteenOrphans => {
                Err(ShantenError::AmbiguousWait(winning.index()))
            }
        }
    }
}

impl Checker for StandardChecker {
    fn shanten(&mut self, hand: &HandInfo) -> Result<i8, ShantenError> {
        Self::validate_concealed_shape(hand)?;

        self.best = INFINITE_SHANTEN;
        self.used = hand.total_count();
        self.working = hand.concealed();
        if let Some(tile) = hand.winning_tile() {
            self.working.add(tile, 1);
        }

        let num_calls = hand.calls().len() as i32;
        for head in 0u8..34 {
            if self.working.get(head) < 2 {
                continue;
            }
            self.working.set(head, self.working.get(head) - 2);
            self.phase2a(0, num_calls, true);
            self.working.set(head, self.working.get(head) + 2);
        }
        self.phase2a(0, num_calls, false);

        Ok(self.best as i8)
    }

    fn decompose(&mut self, hand: &HandInfo) -> Result<Vec<Division>, ShantenError> {
        let winning_tile = hand.winning_tile().ok_or(ShantenError::NotComplete)?;
        if self.shanten(hand)? != COMPLETE_SHANTEN {
            return Err(ShantenError::NotComplete);
        }

        self.working = hand.concealed();
        self.working.add(winning_tile, 1);

        let call_parts: Vec<DivisionPart> = hand.calls().iter().map(DivisionPart::from_call).collect();

        let mut leaves: Vec<Vec<DivisionPart>> = Vec::new();
        let mut scratch = Vec::new();
        for head in 0u8..34 {
            if self.working.get(head) < 2 {
                continue;
            }
            self.working.set(head, self.working.get(head) - 2);
            let head_tile = Tile::from_index(head).expect("index < 34");
            scratch.push(DivisionPart::head(head_tile, PartState::Concealed));
            self.find_bodies(0, &mut scratch, &mut leaves);
            scratch.pop();
            self.working.set(head, self.working.get(head) + 2);
        }

        let mut divisions = Vec::new();
        for leaf in &leaves {
            for (winning_part_index, part) in leaf.iter().enumerate() {
                if part.tiles().get(winning_tile.index()) == 0 {
                    continue;
                }
                let mut parts = leaf.clone();
                let state = if hand.self_drawn() { PartState::Concealed } else { PartState::Ron };
                parts[winning_part_index] = parts[winning_part_index].with_state(state);
                let wait_type = Self::classify_wait(&parts[winning_part_index], winning_tile)?;
                parts.extend(call_parts.iter().copied());
                divisions.push(Division::new(parts, wait_type));
            }
        }

        Ok(divisions)
    }
}
