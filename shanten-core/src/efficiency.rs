//! The tile-efficiency (ukeire) layer shared by all three checkers.
//!
//! For each discard that preserves the hand's shanten, finds every tile
//! that would advance it by exactly one.

use shanten_tiles::tile::Tile;

use crate::checker::Checker;
use crate::error::ShantenError;
use crate::hand::HandInfo;

/// One candidate discard and the tiles that would advance the hand if
/// drawn afterward.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EfficiencyEntry {
    pub discard: Tile,
    pub ukeire: Vec<Tile>,
    pub num_ukeire: u32,
}

/// Computes [`EfficiencyEntry`] for every concealed tile that can be
/// discarded without worsening shanten.
///
/// Requires `hand.concealed().num_tiles() % 3 == 1` and a winning tile to
/// be present (the hand, with its candidate tile absorbed, is `3n+2`);
/// otherwise fails with [`ShantenError::InvalidHandSize`].
pub fn compute_efficiency<C: Checker>(
    checker: &mut C,
    hand: &HandInfo,
) -> Result<Vec<EfficiencyEntry>, ShantenError> {
    let num_concealed = hand.concealed().total();
    if num_concealed % 3 != 1 || hand.winning_tile().is_none() {
        return Err(ShantenError::InvalidHandSize(num_concealed));
    }

    let baseline_shanten = checker.shanten(hand)?;

    let absorbed = hand.concealed_with_winning_tile();
    let working = HandInfo::from_concealed(absorbed).with_calls(hand.calls().to_vec());

    let mut entries = Vec::new();
    for index in 0u8..34 {
        let discard = match Tile::from_index(index) {
            Some(tile) if absorbed[tile] > 0 => tile,
            _ => continue,
        };

        let mut after_discard = working.clone();
        after_discard.remove_one_concealed(discard);

        if checker.shanten(&after_discard)? != baseline_shanten {
            continue;
        }

        let total_after_discard = after_discard.total_count();
        let mut ukeire = Vec::new();
        let mut num_ukeire = 0u32;
        for draw_index in 0u8..34 {
            let draw_tile = Tile::from_index(draw_index).expect("index < 34");
            let remaining = 4 - total_after_discard[draw_tile] as u32;
            if remaining == 0 {
                continue;
            }
            let candidate = after_discard.clone().with_winning_tile(draw_tile, true);
            if checker.shanten(&candidate)? == baseline_shanten - 1 {
                ukeire.push(draw_tile);
                num_ukeire += remaining;
            }
        }

        entries.push(EfficiencyEntry { discard, ukeire, num_ukeire });
    }

    entries.sort_by(|a, b| {
        b.num_ukeire.cmp(&a.num_ukeire).then(a.discard.index().cmp(&b.discard.index()))
    });

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shanten_tiles::call::{Call, CallSource};
    use shanten_tiles::t;
    use shanten_tiles::tile_count::TileCount;

    use crate::standard::StandardChecker;

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
    fn discarding_9m_is_the_top_ukeire_row_with_its_full_wait_set() {
        let hand = hand_from_str("69m5678p2789s344z").with_winning_tile(t!("7p"), true);
        let entries = compute_efficiency(&mut StandardChecker::new(), &hand).unwrap();

        let top = &entries[0];
        assert_eq!(top.discard, t!("9m"));
        assert_eq!(top.num_ukeire, 46);

        let expected_ukeire: Vec<Tile> = [
            "4m", "5m", "6m", "7m", "8m", "6p", "9p", "1s", "2s", "3s", "4s", "3z", "4z",
        ]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();
        let mut actual = top.ukeire.clone();
        actual.sort();
        let mut expected = expected_ukeire;
        expected.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn entries_are_sorted_by_descending_ukeire_then_ascending_discard() {
        let hand = hand_from_str("69m5678p2789s344z").with_winning_tile(t!("7p"), true);
        let entries = compute_efficiency(&mut StandardChecker::new(), &hand).unwrap();
        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.num_ukeire > b.num_ukeire
                    || (a.num_ukeire == b.num_ukeire && a.discard.index() < b.discard.index())
            );
        }
    }

    #[test]
    fn every_discard_came_from_the_absorbed_concealed_count() {
        let hand = hand_from_str("69m5678p2789s344z").with_winning_tile(t!("7p"), true);
        let absorbed = hand.concealed_with_winning_tile();
        let entries = compute_efficiency(&mut StandardChecker::new(), &hand).unwrap();
        for entry in &entries {
            assert!(absorbed[entry.discard] > 0);
        }
    }

    #[test]
    fn every_ukeire_tile_actually_advances_shanten_by_one() {
        let hand = hand_from_str("69m5678p2789s344z").with_winning_tile(t!("7p"), true);
        let mut checker = StandardChecker::new();
        let baseline = checker.shanten(&hand).unwrap();
        let entries = compute_efficiency(&mut checker, &hand).unwrap();

        let absorbed = HandInfo::from_concealed(hand.concealed_with_winning_tile())
            .with_calls(hand.calls().to_vec());
        for entry in &entries {
            let mut after_discard = absorbed.clone();
            after_discard.remove_one_concealed(entry.discard);
            for &draw in &entry.ukeire {
                let candidate = after_discard.clone().with_winning_tile(draw, true);
                assert_eq!(checker.shanten(&candidate).unwrap(), baseline - 1);
            }
        }
    }

    #[test]
    fn rejects_a_hand_missing_its_winning_tile() {
        let hand = hand_from_str("123m456p789s1112z");
        assert!(matches!(
            compute_efficiency(&mut StandardChecker::new(), &hand),
            Err(ShantenError::InvalidHandSize(_))
        ));
    }

    #[test]
    fn rejects_concealed_counts_not_shaped_3n_plus_1() {
        let hand = hand_from_str("123m456p789s123z").with_winning_tile(t!("1z"), true);
        assert!(matches!(
            compute_efficiency(&mut StandardChecker::new(), &hand),
            Err(ShantenError::InvalidHandSize(_))
        ));
    }

    #[test]
    fn efficiency_respects_called_melds() {
        let call = Call::pon(t!("9s"), CallSource::Across).unwrap();
        let hand = hand_from_str("123m456p1112z")
            .with_calls(vec![call])
            .with_winning_tile(t!("2z"), true);
        let entries = compute_efficiency(&mut StandardChecker::new(), &hand).unwrap();
        assert!(!entries.is_empty());
        for entry in &entries {
            assert!(hand.concealed_with_winning_tile()[entry.discard] > 0);
        }
    }
}
