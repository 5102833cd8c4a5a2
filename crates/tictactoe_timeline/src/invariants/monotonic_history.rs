//! Monotonic history invariant: marks never change once placed.

use super::super::{GameState, Mark, Square};
use super::Invariant;

/// Invariant: every entry is its predecessor plus exactly one mark.
///
/// The placement recorded on entry `k` must land on a square that was empty
/// in entry `k - 1`, with the mark whose turn it was at step `k - 1`, and
/// nothing else may differ between the two boards.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let Some(placement) = *after.placement() else {
                    return false;
                };

                placement.mark == Mark::for_step(step)
                    && before.board().get(placement.position) == Square::Empty
                    && before.board().with_mark(placement.position, placement.mark)
                        == *after.board()
            })
    }

    fn description() -> &'static str {
        "History entries only ever add one mark"
    }
}
