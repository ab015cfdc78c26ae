//! Tie-breaking heuristic that avoids handing boxes to the opponent.
//!
//! When several moves share the best search value, the filter prefers one that leaves
//! no box stamped with the acting player's sign at three drawn edges: such a box is
//! one edge from completion and the opponent moves next.

use dotsbox_engine::{BoardState, Edge, Player};
use rand::{Rng, seq::IndexedRandom as _};

/// Mark of a box that `player` brought to three drawn edges.
fn exposed_mark(player: Player) -> i8 {
    3 * player.sign()
}

/// Returns whether drawing `edge` as `player` leaves no box at `3 * player.sign()`.
///
/// Every box on the board is scanned, not only the neighbours of `edge`. An edge that
/// cannot be drawn (out of bounds or already drawn) is reported as unsafe.
#[must_use]
pub fn is_safe(edge: Edge, board: &BoardState, player: Player) -> bool {
    let mut probe = board.clone();
    if probe.apply_move(edge, player).is_err() {
        return false;
    }
    let exposed = exposed_mark(player);
    probe.box_marks().all(|mark| mark != exposed)
}

/// Picks one of `candidates`, uniformly among the safe ones (see [`is_safe`]).
///
/// Falls back to a uniform choice among all candidates when none is safe, and
/// returns `None` only when `candidates` is empty.
pub fn avoid_sacrifice<R>(
    candidates: &[Edge],
    board: &BoardState,
    player: Player,
    rng: &mut R,
) -> Option<Edge>
where
    R: Rng + ?Sized,
{
    let safe: Vec<Edge> = candidates
        .iter()
        .copied()
        .filter(|edge| is_safe(*edge, board, player))
        .collect();

    if safe.is_empty() {
        if !candidates.is_empty() {
            log::debug!(
                "no safe move among {} candidates for {player}, choosing at random",
                candidates.len()
            );
        }
        return candidates.choose(rng).copied();
    }
    safe.choose(rng).copied()
}
