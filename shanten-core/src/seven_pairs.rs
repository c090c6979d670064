//! The seven-pairs winning form: seven distinct pairs, no sequences or
//! triplets.

use shanten_tiles::tile::Tile;

use crate::checker::Checker;
use crate::division::{Division, DivisionPart, PartState, WaitType};
use crate::error::ShantenError;
use crate::hand::HandInfo;
use crate::COMPLETE_SHANTEN;

/// Seven pairs (chiitoitsu): seven distinct pairs as a whole-hand form.
///
/// Both formulas below are closed-form over tile counts, so unlike
/// [`crate::standard::StandardChecker`] this type needs no mutable
/// fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct SevenPairsChecker;

impl SevenPairsChecker {
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

impl Checker for SevenPairsChecker {
    fn shanten(&mut self, hand: &HandInfo) -> Result<i8, ShantenError> {
        Self::validate(hand)?;
        let real = hand.concealed_with_winning_tile();

        let pairs = (0u8..34).filter(|&i| real.get(i) >= 2).count() as i32;
        let kinds = (0u8..34).filter(|&i| real.get(i) >= 1).count() as i32;

        let shanten = 6 - pairs + (7 - kinds).max(0);
        Ok(shanten as i8)
    }

    fn decompose(&mut self, hand: &HandInfo) -> Result<Vec<Division>, ShantenError> {
        let winning_tile = hand.winning_tile().ok_or(ShantenError::NotComplete)?;
        if self.shanten(hand)? != COMPLETE_SHANTEN {
            return Err(ShantenError::NotComplete);
        }

        let concealed = hand.concealed();
        let mut parts = Vec::with_capacity(7);
        for index in 0u8..34 {
            let count = concealed.get(index);
            if count == 0 && index != winning_tile.index() {
                continue;
            }
            let tile = Tile::from_index(index).expect("index < 34");
            let was_already_paired = count == 2;
            let state = if was_already_paired || hand.self_drawn() {
                PartState::Concealed
            } else {
                PartState::Ron
            };
            parts.push(DivisionPart::head(tile, state));
        }

        Ok(vec![Division::new(parts, WaitType::SingleWait)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shanten_tiles::t;
    use shanten_tiles::tile_count::TileCount;

    fn hand_from_str(concealed: &str) -> HandInfo {
        HandInfo::from_concealed(TileCount::from_tiles(tiles_from_str(concealed)))
    }

    fn tiles_from_str(s: &str) -> Vec<Tile> {
        let mut out = Vec::new();
        let mut digits = String::new();
        for ch in s.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else {
                for d in digits.drain(..) {
                    out.push(format!("{d}{ch}").parse().unwrap());
                }
            }
        }
        out
    }

    #[test]
    fn thirteen_tiles_six_pairs_plus_one_is_complete_with_winning_tile() {
        let hand = hand_from_str("1122334455667m").with_winning_tile(t!("7m"), true);
        assert_eq!(SevenPairsChecker::new().shanten(&hand).unwrap(), -1);
    }

    #[test]
    fn five_pairs_three_kinds_short_is_ready() {
        let hand = hand_from_str("1122334455667m");
        assert_eq!(SevenPairsChecker::new().shanten(&hand).unwrap(), 0);
    }

    #[test]
    fn rejects_non_thirteen_tile_concealed_count() {
        let hand = hand_from_str("112233m");
        assert!(matches!(
            SevenPairsChecker::new().shanten(&hand),
            Err(ShantenError::InvalidHandSize(_))
        ));
    }

    #[test]
    fn decompose_yields_seven_head_parts_single_wait() {
        let hand = hand_from_str("1122334455667m").with_winning_tile(t!("7m"), true);
        let divisions = SevenPairsChecker::new().decompose(&hand).unwrap();
        assert_eq!(divisions.len(), 1);
        let division = &divisions[0];
        assert_eq!(division.parts().len(), 7);
        assert_eq!(division.wait_type(), WaitType::SingleWait);
        assert_eq!(division.tile_count().total(), 14);
    }
}
