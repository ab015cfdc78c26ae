//! Move generation and the extra-turn rule.

use std::iter;

use dotsbox_engine::{BoardState, CLOSED_MARK, Edge, Player};

/// A child position reached by drawing one edge.
#[derive(Debug, Clone)]
pub struct Successor {
    pub edge: Edge,
    pub board: BoardState,
    /// Boxes closed by this move (0, 1 or 2).
    pub closed_boxes: u8,
}

/// Lazily yields one successor per undrawn edge, in [`BoardState::undrawn_edges`] order.
///
/// Every child is an independent clone of `board` with the edge drawn for `mover`.
/// A terminal board yields nothing.
pub fn successors(board: &BoardState, mover: Player) -> impl Iterator<Item = Successor> + '_ {
    board.undrawn_edges().map(move |edge| {
        let mut child = board.clone();
        let closed_boxes = child
            .apply_move(edge, mover)
            .expect("undrawn edges are always drawable");
        Successor {
            edge,
            board: child,
            closed_boxes,
        }
    })
}

/// Collects [`successors`] into a vector.
#[must_use]
pub fn generate_successors(board: &BoardState, mover: Player) -> Vec<Successor> {
    successors(board, mover).collect()
}

/// Returns whether some box went from fewer than four drawn edges to exactly four
/// between `before` and `after`.
///
/// Closing a box grants the mover another turn.
#[must_use]
pub fn closes_box(before: &BoardState, after: &BoardState) -> bool {
    iter::zip(before.box_marks(), after.box_marks())
        .any(|(b, a)| b.abs() < a.abs() && a.abs() == CLOSED_MARK)
}

/// Player to move in `child`, reached from `parent` by a move of `mover`.
#[must_use]
pub fn next_mover(parent: &BoardState, child: &BoardState, mover: Player) -> Player {
    if closes_box(parent, child) {
        mover
    } else {
        mover.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(rows: usize, cols: usize, edges: &[Edge]) -> BoardState {
        let mut board = BoardState::new(rows, cols).unwrap();
        for edge in edges {
            board.apply_move(*edge, Player::One).unwrap();
        }
        board
    }

    #[test]
    fn test_one_successor_per_undrawn_edge() {
        let board = board_with(2, 2, &[Edge::row(0, 0), Edge::col(2, 1)]);
        let children = generate_successors(&board, Player::Two);
        assert_eq!(children.len(), 10);

        let edges: Vec<Edge> = children.iter().map(|s| s.edge).collect();
        let expected: Vec<Edge> = board.undrawn_edges().collect();
        assert_eq!(edges, expected);

        for child in &children {
            assert_eq!(child.board.is_drawn(child.edge), Some(true));
            assert_eq!(board.is_drawn(child.edge), Some(false));
        }
    }

    #[test]
    fn test_interior_edge_updates_both_boxes_with_same_mover() {
        let board = BoardState::new(1, 2).unwrap();
        let child = successors(&board, Player::Two)
            .find(|s| s.edge == Edge::col(1, 0))
            .unwrap();
        assert_eq!(child.board.box_mark(0, 0), Some(1));
        assert_eq!(child.board.box_mark(1, 0), Some(1));
    }

    #[test]
    fn test_terminal_iff_no_successors() {
        let mut board = BoardState::new(1, 2).unwrap();
        loop {
            assert_eq!(
                board.is_terminal(),
                successors(&board, Player::One).next().is_none()
            );
            let Some(edge) = board.undrawn_edges().next() else {
                break;
            };
            board.play(edge).unwrap();
        }
        assert!(board.is_terminal());
    }

    #[test]
    fn test_closes_box_for_zero_one_and_two_boxes() {
        // Three sides of the left box and three of the right box, sharing col (1, 0) undrawn.
        let board = board_with(
            1,
            2,
            &[
                Edge::row(0, 0),
                Edge::row(1, 0),
                Edge::row(0, 1),
                Edge::row(1, 1),
                Edge::col(0, 0),
            ],
        );
        for child in successors(&board, Player::Two) {
            let expected = match child.edge {
                e if e == Edge::col(1, 0) => 1,
                e if e == Edge::col(2, 0) => 0,
                e => panic!("unexpected successor {e}"),
            };
            assert_eq!(child.closed_boxes, expected);
            assert_eq!(closes_box(&board, &child.board), expected > 0);
        }

        let both = board_with(
            1,
            2,
            &[
                Edge::row(0, 0),
                Edge::row(1, 0),
                Edge::row(0, 1),
                Edge::row(1, 1),
                Edge::col(0, 0),
                Edge::col(2, 0),
            ],
        );
        let child = successors(&both, Player::Two).next().unwrap();
        assert_eq!(child.closed_boxes, 2);
        assert!(closes_box(&both, &child.board));
    }

    #[test]
    fn test_closes_box_ignores_already_closed_boxes() {
        let mut before = BoardState::new(1, 2).unwrap();
        for edge in [
            Edge::row(0, 0),
            Edge::row(0, 1),
            Edge::col(0, 0),
            Edge::col(1, 0),
        ] {
            before.apply_move(edge, Player::One).unwrap();
        }
        let mut after = before.clone();
        after.apply_move(Edge::row(1, 0), Player::Two).unwrap();
        assert!(!closes_box(&before, &after));
        assert_eq!(next_mover(&before, &after, Player::Two), Player::One);
    }

    #[test]
    fn test_next_mover_keeps_turn_after_close() {
        let board = board_with(1, 1, &[Edge::row(0, 0), Edge::row(0, 1), Edge::col(0, 0)]);
        let child = successors(&board, Player::One).next().unwrap();
        assert_eq!(next_mover(&board, &child.board, Player::One), Player::One);
    }
}
