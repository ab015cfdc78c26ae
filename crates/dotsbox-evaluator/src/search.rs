//! Depth-limited minimax search with alpha-beta pruning.
//!
//! The search is split in two:
//!
//! - [`alpha_beta`] - Scalar search used below the root. Values are folded into a
//!   running max (player 2 to move) or min (player 1 to move), and a node stops
//!   expanding children as soon as `beta <= alpha`.
//! - [`search_root`] - Root driver that runs the scalar search once per top-level
//!   move and returns a [`RootEvaluation`] mapping every move to its value.
//!
//! After every move the player who moves next is decided by the extra-turn rule
//! ([`next_mover`]), identically at the root and at interior nodes. Leaves are scored
//! with [`evaluate`].
//!
//! # Root values
//!
//! Each top-level move is searched with a window that stops one step short of the
//! best value found so far. A move tied with the best value is therefore always
//! searched exactly, while a worse move may report a bound that is still worse than
//! the best. The extremum of the map is the full minimax value, and the moves that
//! reach it are exactly the moves that are optimal at this depth.
//!
//! # Example
//!
//! ```
//! use dotsbox_engine::{BoardState, Player};
//! use dotsbox_evaluator::search::{SearchConfig, minimax, search_root};
//!
//! let mut board = BoardState::new(2, 2).unwrap();
//! board.set_to_move(Player::Two);
//!
//! let evaluation = search_root(&board, &SearchConfig::with_depth(3)).unwrap();
//! assert_eq!(evaluation.values().len(), 12);
//! assert_eq!(evaluation.best_value(), minimax(&board, 3, Player::Two));
//! ```

use std::collections::BTreeMap;

use dotsbox_engine::{BoardState, Edge, Player};
use serde::{Deserialize, Serialize};

use crate::{
    objective::evaluate,
    successor::{next_mover, successors},
};

/// Magnitude of the initial alpha/beta window, safely outside any reachable score on
/// boards of fewer than 100 boxes. Larger boards widen the window to fit.
pub const SCORE_BOUND: i32 = 100;

/// Default search horizon in plies.
pub const DEFAULT_DEPTH: u32 = 5;

/// Cheaper horizon for quicker decisions.
pub const SHALLOW_DEPTH: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the current position, at least 1.
    pub depth: u32,
    /// Abort with [`SearchError::NodeLimitExceeded`] after visiting this many nodes.
    #[serde(default)]
    pub node_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            node_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    #[display("cannot search a terminal board")]
    TerminalBoard,
    #[display("search depth must be at least 1")]
    ZeroDepth,
    #[display("search visited more than {limit} nodes")]
    NodeLimitExceeded { limit: u64 },
}

/// Counters collected during one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions entered, including the root and the leaves.
    pub nodes: u64,
    /// Nodes that stopped expanding children because `beta <= alpha`.
    pub cutoffs: u64,
}

struct SearchContext {
    bound: i32,
    node_limit: Option<u64>,
    stats: SearchStats,
}

impl SearchContext {
    fn new(board: &BoardState, node_limit: Option<u64>) -> Self {
        let boxes = i32::try_from(board.box_count()).unwrap_or(i32::MAX - 1);
        Self {
            bound: SCORE_BOUND.max(boxes + 1),
            node_limit,
            stats: SearchStats::default(),
        }
    }

    fn enter(&mut self) -> Result<(), SearchError> {
        self.stats.nodes += 1;
        match self.node_limit {
            Some(limit) if self.stats.nodes > limit => Err(SearchError::NodeLimitExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// Fail-soft alpha-beta: a result `r` satisfies `v <= r <= alpha` when the true value
/// `v` is at most `alpha`, `r == v` inside the window, and `beta <= r <= v` above it.
fn alpha_beta_recurse(
    ctx: &mut SearchContext,
    board: &BoardState,
    depth_left: u32,
    mut alpha: i32,
    mut beta: i32,
    mover: Player,
) -> Result<i32, SearchError> {
    debug_assert!(alpha < beta, "empty window ({alpha}, {beta})");
    ctx.enter()?;

    if depth_left == 0 || board.is_terminal() {
        return Ok(evaluate(board));
    }

    let maximizing = mover.is_maximizing();
    let mut best = if maximizing { -ctx.bound } else { ctx.bound };

    for successor in successors(board, mover) {
        let next = next_mover(board, &successor.board, mover);
        let value = alpha_beta_recurse(ctx, &successor.board, depth_left - 1, alpha, beta, next)?;

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }
        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    Ok(best)
}

/// Alpha-beta value of `board` searched `depth` plies deep with `mover` to move.
///
/// Always equal to [`minimax`] for the same arguments.
#[must_use]
pub fn alpha_beta(board: &BoardState, depth: u32, mover: Player) -> i32 {
    let mut ctx = SearchContext::new(board, None);
    let bound = ctx.bound;
    match alpha_beta_recurse(&mut ctx, board, depth, -bound, bound, mover) {
        Ok(value) => value,
        Err(e) => unreachable!("search without node limit failed: {e}"),
    }
}

/// Plain minimax over the full tree, without pruning.
///
/// Reference implementation for checking [`alpha_beta`]; visits every node.
#[must_use]
pub fn minimax(board: &BoardState, depth: u32, mover: Player) -> i32 {
    if depth == 0 || board.is_terminal() {
        return evaluate(board);
    }
    let values = successors(board, mover).map(|successor| {
        let next = next_mover(board, &successor.board, mover);
        minimax(&successor.board, depth - 1, next)
    });
    let best = if mover.is_maximizing() {
        values.max()
    } else {
        values.min()
    };
    best.unwrap_or_else(|| evaluate(board))
}

/// Result of a root search: the value of every top-level move.
#[derive(Debug, Clone)]
pub struct RootEvaluation {
    player: Player,
    values: BTreeMap<Edge, i32>,
    best_value: i32,
    stats: SearchStats,
}

impl RootEvaluation {
    /// Player to move at the root.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Value of every undrawn edge at the root, in move generation order.
    ///
    /// Values equal to [`Self::best_value`] are exact; others may be bounds that are
    /// still strictly worse than the best value.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<Edge, i32> {
        &self.values
    }

    /// Maximum value if player 2 is to move, minimum if player 1 is.
    #[must_use]
    pub fn best_value(&self) -> i32 {
        self.best_value
    }

    /// All moves whose value equals [`Self::best_value`].
    #[must_use]
    pub fn best_moves(&self) -> Vec<Edge> {
        self.values
            .iter()
            .filter(|(_, value)| **value == self.best_value)
            .map(|(edge, _)| *edge)
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Searches every move of the player to move in `board`, `config.depth` plies deep.
pub fn search_root(
    board: &BoardState,
    config: &SearchConfig,
) -> Result<RootEvaluation, SearchError> {
    if config.depth == 0 {
        return Err(SearchError::ZeroDepth);
    }
    if board.is_terminal() {
        return Err(SearchError::TerminalBoard);
    }

    let player = board.to_move();
    let maximizing = player.is_maximizing();
    let mut ctx = SearchContext::new(board, config.node_limit);
    ctx.enter()?;

    let bound = ctx.bound;
    let mut best_value = if maximizing { -bound } else { bound };
    let mut values = BTreeMap::new();

    for successor in successors(board, player) {
        let next = next_mover(board, &successor.board, player);
        let (alpha, beta) = if maximizing {
            (best_value - 1, bound)
        } else {
            (-bound, best_value + 1)
        };
        let value =
            alpha_beta_recurse(&mut ctx, &successor.board, config.depth - 1, alpha, beta, next)?;
        log::trace!("{} => {value}", successor.edge);

        values.insert(successor.edge, value);
        if (maximizing && value > best_value) || (!maximizing && value < best_value) {
            best_value = value;
        }
    }

    log::debug!(
        "searched {} moves for {player} at depth {}: best {best_value}, {} nodes, {} cutoffs",
        values.len(),
        config.depth,
        ctx.stats.nodes,
        ctx.stats.cutoffs,
    );

    Ok(RootEvaluation {
        player,
        values,
        best_value,
        stats: ctx.stats,
    })
}

#[cfg(test)]
mod tests {
    use dotsbox_engine::EdgeKind;
    use rand::{SeedableRng as _, seq::IteratorRandom as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn random_position(rows: usize, cols: usize, moves: usize, seed: u64) -> BoardState {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut board = BoardState::new(rows, cols).unwrap();
        for _ in 0..moves {
            let Some(edge) = board.undrawn_edges().choose(&mut rng) else {
                break;
            };
            board.play(edge).unwrap();
        }
        board
    }

    #[test]
    fn test_depth_zero_is_static_value() {
        let board = random_position(2, 2, 9, 1);
        for mover in Player::ALL {
            assert_eq!(alpha_beta(&board, 0, mover), evaluate(&board));
            assert_eq!(minimax(&board, 0, mover), evaluate(&board));
        }
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        for seed in 0..12 {
            let moves = 2 + usize::try_from(seed % 6).unwrap();
            let board = random_position(2, 3, moves, seed);
            for depth in 1..=4 {
                for mover in Player::ALL {
                    assert_eq!(
                        alpha_beta(&board, depth, mover),
                        minimax(&board, depth, mover),
                        "seed {seed}, depth {depth}, mover {mover}\n{board}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_root_best_value_matches_minimax() {
        for seed in 0..16 {
            let board = random_position(2, 2, 3 + usize::try_from(seed % 5).unwrap(), seed);
            if board.is_terminal() {
                continue;
            }
            let evaluation = search_root(&board, &SearchConfig::with_depth(4)).unwrap();
            let player = board.to_move();
            assert_eq!(evaluation.player(), player);
            assert_eq!(evaluation.best_value(), minimax(&board, 4, player));

            // Tied moves carry exact values.
            for edge in evaluation.best_moves() {
                let mut child = board.clone();
                child.apply_move(edge, player).unwrap();
                let next = next_mover(&board, &child, player);
                assert_eq!(minimax(&child, 3, next), evaluation.best_value());
            }
            // Other moves are really worse.
            for (edge, value) in evaluation.values() {
                let mut child = board.clone();
                child.apply_move(*edge, player).unwrap();
                let exact = minimax(&child, 3, next_mover(&board, &child, player));
                if *value == evaluation.best_value() {
                    assert_eq!(exact, *value);
                } else if player.is_maximizing() {
                    assert!(exact < evaluation.best_value());
                } else {
                    assert!(exact > evaluation.best_value());
                }
            }
        }
    }

    #[test]
    fn test_root_covers_every_edge_of_empty_2x2() {
        let mut board = BoardState::new(2, 2).unwrap();
        board.set_to_move(Player::Two);
        let evaluation = search_root(&board, &SearchConfig::with_depth(DEFAULT_DEPTH)).unwrap();

        assert_eq!(evaluation.values().len(), 12);
        let rows = evaluation
            .values()
            .keys()
            .filter(|edge| edge.kind == EdgeKind::Row)
            .count();
        assert_eq!(rows, 6);

        let best = evaluation.values().values().copied().max().unwrap();
        assert_eq!(evaluation.best_value(), best);
        assert!(!evaluation.best_moves().is_empty());
        assert!(evaluation.stats().nodes > 12);
    }

    #[test]
    fn test_root_takes_free_box() {
        // Player 2 to move with a box waiting at three edges.
        let mut board = BoardState::new(1, 2).unwrap();
        for edge in [Edge::row(0, 0), Edge::row(0, 1), Edge::col(0, 0)] {
            board.apply_move(edge, Player::One).unwrap();
        }
        board.set_to_move(Player::Two);

        let evaluation = search_root(&board, &SearchConfig::with_depth(1)).unwrap();
        assert_eq!(evaluation.best_value(), 1);
        assert_eq!(evaluation.best_moves(), vec![Edge::col(1, 0)]);
    }

    #[test]
    fn test_extra_turn_is_followed_at_root() {
        // Closing the left box lets player 2 also finish the right one.
        let mut board = BoardState::new(1, 2).unwrap();
        for edge in [
            Edge::row(0, 0),
            Edge::row(0, 1),
            Edge::col(0, 0),
            Edge::row(1, 0),
            Edge::row(1, 1),
        ] {
            board.apply_move(edge, Player::One).unwrap();
        }
        board.set_to_move(Player::Two);

        let evaluation = search_root(&board, &SearchConfig::with_depth(2)).unwrap();
        assert_eq!(evaluation.best_value(), 2);
        assert_eq!(evaluation.values()[&Edge::col(1, 0)], 2);
        // Drawing the outer edge hands both boxes to player 1.
        assert!(evaluation.values()[&Edge::col(2, 0)] < 2);
    }

    #[test]
    fn test_minimizer_root() {
        let mut board = BoardState::new(1, 1).unwrap();
        for edge in [Edge::row(0, 0), Edge::row(0, 1), Edge::col(0, 0)] {
            board.apply_move(edge, Player::Two).unwrap();
        }
        let evaluation = search_root(&board, &SearchConfig::with_depth(3)).unwrap();
        assert_eq!(evaluation.player(), Player::One);
        assert_eq!(evaluation.best_value(), -1);
    }

    #[test]
    fn test_root_errors() {
        let mut board = BoardState::new(1, 1).unwrap();
        assert_eq!(
            search_root(&board, &SearchConfig::with_depth(0)).unwrap_err(),
            SearchError::ZeroDepth
        );
        for edge in board.undrawn_edges().collect::<Vec<_>>() {
            board.play(edge).unwrap();
        }
        assert_eq!(
            search_root(&board, &SearchConfig::default()).unwrap_err(),
            SearchError::TerminalBoard
        );
    }

    #[test]
    fn test_node_limit_aborts_search() {
        let board = BoardState::new(3, 3).unwrap();
        let config = SearchConfig {
            depth: DEFAULT_DEPTH,
            node_limit: Some(500),
        };
        assert_eq!(
            search_root(&board, &config).unwrap_err(),
            SearchError::NodeLimitExceeded { limit: 500 }
        );
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let board = random_position(2, 3, 4, 5);
        let config = SearchConfig::with_depth(4);
        let evaluation = search_root(&board, &config).unwrap();
        assert!(evaluation.stats().cutoffs > 0);

        // Unpruned tree size: 1 + n + n(n-1) + ... down to depth 4.
        let n = u64::try_from(board.undrawn_edges().count()).unwrap();
        let full = 1 + n + n * (n - 1) + n * (n - 1) * (n - 2) + n * (n - 1) * (n - 2) * (n - 3);
        assert!(evaluation.stats().nodes < full);
    }
}
