//! [`TileCount`]: how many of each of the 34 tile kinds a hand holds.

use core::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use derive_more::{Constructor, From, Into, IntoIterator};

use crate::tile::Tile;

/// A dense count vector over the 34-tile universe, the workhorse data
/// structure the checkers search over.
///
/// A fixed `[u8; 34]` array addressed by [`Tile`], with `derive_more`
/// supplying the conversions a plain newtype wrapper would otherwise need
/// boilerplate `impl`s for.
#[derive(Constructor, From, Into, IntoIterator, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCount(#[into_iterator(owned, ref, ref_mut)] pub [u8; 34]);

impl TileCount {
    pub const EMPTY: TileCount = TileCount([0; 34]);

    /// Builds a count vector from an iterator of tiles, incrementing once
    /// per occurrence (so duplicates are expected and counted).
    pub fn from_tiles<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut counts = [0u8; 34];
        for tile in tiles {
            counts[tile.index() as usize] += 1;
        }
        Self(counts)
    }

    /// Total number of tiles represented, i.e. the sum of all 34 counts.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }

    /// Iterates over `(Tile, count)` pairs for every nonzero entry.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (Tile::from_index(i as u8).expect("index < 34"), c))
    }

    /// The lowest index at or after `from` holding a nonzero count, or
    /// `34` (one past the last valid index) if every remaining slot is
    /// empty. The standard-form search calls this on every recursive
    /// step to pick the next tile to dispatch on, in ascending order;
    /// the sentinel lets that recursion terminate on a plain `== 34`
    /// check instead of unwrapping an `Option` at every call site.
    pub fn find_earliest_nonzero_index(&self, from: u8) -> u8 {
        (from..34).find(|&i| self.0[i as usize] > 0).unwrap_or(34)
    }

    /// Whether every nonzero count in `self` lives at one of the given
    /// indices, used by Thirteen Orphans to confirm a hand contains only
    /// terminal/honor tiles.
    pub fn is_containing_only(&self, indices: &[u8]) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, &c)| c == 0 || indices.contains(&(i as u8)))
    }

    /// Raw count at `index` (0..34), for callers iterating by index
    /// rather than by constructed [`Tile`] (e.g. the recursive search,
    /// which dispatches on bare indices throughout).
    pub fn get(&self, index: u8) -> u8 {
        self.0[index as usize]
    }

    /// Sets the raw count at `index` (0..34).
    pub fn set(&mut self, index: u8, value: u8) {
        self.0[index as usize] = value;
    }

    /// Removes `count` copies of `tile`, saturating at zero. The search
    /// mutates a scratch `TileCount` in place as it commits tentative
    /// groups; this is the "take" half of that bookkeeping.
    pub fn remove(&mut self, tile: Tile, count: u8) {
        let slot = &mut self.0[tile.index() as usize];
        *slot = slot.saturating_sub(count);
    }

    /// Adds `count` copies of `tile` back, the inverse of [`Self::remove`]
    /// used to backtrack a tentative group.
    pub fn add(&mut self, tile: Tile, count: u8) {
        self.0[tile.index() as usize] += count;
    }
}

impl Index<Tile> for TileCount {
    type Output = u8;
    fn index(&self, tile: Tile) -> &u8 {
        &self.0[tile.index() as usize]
    }
}

impl IndexMut<Tile> for TileCount {
    fn index_mut(&mut self, tile: Tile) -> &mut u8 {
        &mut self.0[tile.index() as usize]
    }
}

impl Add for TileCount {
    type Output = TileCount;
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.0;
        for (slot, rhs_count) in out.iter_mut().zip(rhs.0.iter()) {
            *slot += rhs_count;
        }
        TileCount(out)
    }
}

impl AddAssign for TileCount {
    fn add_assign(&mut self, rhs: Self) {
        for (slot, rhs_count) in self.0.iter_mut().zip(rhs.0.iter()) {
            *slot += rhs_count;
        }
    }
}

impl Sub for TileCount {
    type Output = TileCount;
    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.0;
        for (slot, rhs_count) in out.iter_mut().zip(rhs.0.iter()) {
            *slot = slot.saturating_sub(*rhs_count);
        }
        TileCount(out)
    }
}

impl SubAssign for TileCount {
    fn sub_assign(&mut self, rhs: Self) {
        for (slot, rhs_count) in self.0.iter_mut().zip(rhs.0.iter()) {
            *slot = slot.saturating_sub(*rhs_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::t;

    #[test]
    fn from_tiles_counts_duplicates() {
        let counts = TileCount::from_tiles([t!("1m"), t!("1m"), t!("2p")]);
        assert_eq!(counts[t!("1m")], 2);
        assert_eq!(counts[t!("2p")], 1);
        assert_eq!(counts[t!("3s")], 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn get_and_set_address_raw_indices() {
        let mut counts = TileCount::EMPTY;
        counts.set(10, 3);
        assert_eq!(counts.get(10), 3);
        assert_eq!(counts[t!("2p")], 3);
    }

    #[test]
    fn remove_and_add_are_inverses() {
        let mut counts = TileCount::from_tiles([t!("5s"), t!("5s"), t!("5s")]);
        counts.remove(t!("5s"), 2);
        assert_eq!(counts[t!("5s")], 1);
        counts.add(t!("5s"), 2);
        assert_eq!(counts[t!("5s")], 3);
    }

    #[test]
    fn remove_saturates_at_zero() {
        let mut counts = TileCount::from_tiles([t!("1z")]);
        counts.remove(t!("1z"), 5);
        assert_eq!(counts[t!("1z")], 0);
    }

    #[test]
    fn find_earliest_nonzero_index_skips_empty_slots() {
        let counts = TileCount::from_tiles([t!("3p"), t!("7s")]);
        assert_eq!(counts.find_earliest_nonzero_index(0), t!("3p").index());
        assert_eq!(
            counts.find_earliest_nonzero_index(t!("3p").index() + 1),
            t!("7s").index()
        );
        assert_eq!(counts.find_earliest_nonzero_index(t!("7s").index() + 1), 34);
    }

    #[test]
    fn is_containing_only_checks_every_nonzero_slot() {
        let counts = TileCount::from_tiles([t!("1m"), t!("9s"), t!("1z")]);
        assert!(counts.is_containing_only(&crate::sets::TERMINALS_AND_HONORS));
        let mixed = TileCount::from_tiles([t!("1m"), t!("5p")]);
        assert!(!mixed.is_containing_only(&crate::sets::TERMINALS_AND_HONORS));
    }

    #[test]
    fn addition_and_subtraction_are_elementwise() {
        let a = TileCount::from_tiles([t!("1m"), t!("1m")]);
        let b = TileCount::from_tiles([t!("1m"), t!("2m")]);
        let sum = a + b;
        assert_eq!(sum[t!("1m")], 3);
        assert_eq!(sum[t!("2m")], 1);
        let diff = sum - a;
        assert_eq!(diff[t!("1m")], 1);
        assert_eq!(diff[t!("2m")], 1);
    }
}
