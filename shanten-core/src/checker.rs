//! The shared contract all three winning-form checkers implement:
//! `shanten`, `is_complete`, `decompose`, `efficiency`.

use crate::division::Division;
use crate::error::ShantenError;
use crate::hand::HandInfo;
use crate::{efficiency, COMPLETE_SHANTEN};

/// One winning form's shanten/decomposition/efficiency surface.
///
/// Implementors carry mutable scratch state for the recursive search
/// (working counts, a best-shanten accumulator) as plain fields, so every
/// method here takes `&mut self`. A checker instance is not safe for
/// concurrent calls; callers needing concurrency should hold one checker
/// per logical task.
pub trait Checker {
    /// Minimum number of tile substitutions to reach ready. Range is
    /// `[-1, 13]`; `-1` means complete, `0` means ready (tenpai).
    fn shanten(&mut self, hand: &HandInfo) -> Result<i8, ShantenError>;

    /// Every way to decompose a complete hand into structural groups,
    /// each annotated with the wait shape the winning tile completed.
    /// Fails with [`ShantenError::NotComplete`] unless `shanten(hand) ==
    /// -1` and a winning tile is present.
    fn decompose(&mut self, hand: &HandInfo) -> Result<Vec<Division>, ShantenError>;

    /// Equivalent to `shanten(hand) == -1`.
    fn is_complete(&mut self, hand: &HandInfo) -> Result<bool, ShantenError> {
        Ok(self.shanten(hand)? == COMPLETE_SHANTEN)
    }

    /// For each discardable concealed tile that preserves shanten,
    /// the set of tiles that would reduce shanten by one if drawn next.
    /// See [`crate::efficiency::compute_efficiency`] for the algorithm;
    /// it is identical for every form, so this default suffices for all
    /// three checkers.
    fn efficiency(
        &mut self,
        hand: &HandInfo,
    ) -> Result<Vec<efficiency::EfficiencyEntry>, ShantenError>
    where
        Self: Sized,
    {
        efficiency::compute_efficiency(self, hand)
    }
}
