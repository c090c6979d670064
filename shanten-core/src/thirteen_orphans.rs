//! The thirteen-orphans winning form: one of each terminal/honor tile
//! plus a duplicate of one of them.

use shanten_tiles::sets::TERMINALS_AND_HONORS;
use shanten_tiles::tile::Tile;

use crate::checker::Checker;
use crate::division::{Division, DivisionPart, PartState, WaitType};
use crate::error::ShantenError;
use crate::hand::HandInfo;
use crate::COMPLETE_SHANTEN;

/// Thirteen orphans (kokushi musou): a whole-hand form unrelated to sets
/// or runs.
///
/// Both `shanten` and `decompose` are closed-form over the 13
/// terminal/honor indices, so like [`crate::seven_pairs::SevenPairsChecker`]
/// this type carries no scratch state.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThirteenOrphansChecker;

impl ThirteenOrphansChecker {
    pub fn new() -> Self {
        Self
    }

    fn validate(hand: &HandInfo) -> Result<(), ShantenError> {
        let num_concealed = hand.concealed().total();
        if num_concealed != 13 {
            return Err(ShantenError::InvalidHandSize(num_concealed));
        }
        Ok(())
    }
}

impl Checker for ThirteenOrphansChecker {
    fn shanten(&mut self, hand: &HandInfo) -> Result<i8, ShantenError> {
        Self::validate(hand)?;
        let real = hand.concealed_with_winning_tile();

        let orphan_pair =
            TERMINALS_AND_HONORS.iter().any(|&index| real.get(index) > 1);
        let orphan_kinds =
            TERMINALS_AND_HONORS.iter().filter(|&&index| real.get(index) > 0).count() as i32;

        let shanten = 13 - orphan_kinds - orphan_pair as i32;
        Ok(shanten as i8)
    }

    fn decompose(&mut self, hand: &HandInfo) -> Result<Vec<Division>, ShantenError> {
        let winning_tile = hand.winning_tile().ok_or(ShantenError::NotComplete)?;
        if self.shanten(hand)? != COMPLETE_SHANTEN {
            return Err(ShantenError::NotComplete);
        }

        let concealed = hand.concealed();
        let is_thirteen_wait =
            TERMINALS_AND_HONORS.iter().all(|&index| concealed.get(index) == 1);

        let head_index = if is_thirteen_wait {
            winning_tile
        } else {
            let index = TERMINALS_AND_HONORS
                .iter()
                .copied()
                .find(|&index| concealed.get(index) == 2)
                .ok_or(ShantenError::NotComplete)?;
            Tile::from_index(index).expect("index < 34")
        };

        let wait_type = if is_thirteen_wait {
            WaitType::ThirteenOrphans13Wait
        } else {
            WaitType::ThirteenOrphans1Wait
        };

        let state = if hand.self_drawn() { PartState::Concealed } else { PartState::Ron };
        let part = DivisionPart::thirteen_orphans(head_index, state);

        Ok(vec![Division::new(vec![part], wait_type)])
    }
}
