//! Exact material score of a position.

use dotsbox_engine::{BoardState, CLOSED_MARK};

/// Net closed boxes: `+1` per box closed by player 2 (maximizing), `-1` per box
/// closed by player 1 (minimizing), open boxes count for nothing.
///
/// Closed boxes never reopen, so this is an exact count rather than a positional
/// estimate. It is the leaf value of every search.
#[must_use]
pub fn evaluate(board: &BoardState) -> i32 {
    board
        .box_marks()
        .filter(|mark| mark.abs() == CLOSED_MARK)
        .map(|mark| i32::from(mark / CLOSED_MARK))
        .sum()
}

#[cfg(test)]
mod tests {
    use dotsbox_engine::{Edge, Player};

    use super::*;

    #[test]
    fn test_empty_board_is_zero() {
        let board = BoardState::new(3, 3).unwrap();
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_single_box_sign_follows_closer() {
        for closer in Player::ALL {
            let mut board = BoardState::new(1, 1).unwrap();
            for edge in [Edge::row(0, 0), Edge::row(0, 1), Edge::col(0, 0)] {
                board.apply_move(edge, closer.opponent()).unwrap();
            }
            assert_eq!(evaluate(&board), 0);
            board.apply_move(Edge::col(1, 0), closer).unwrap();
            assert_eq!(evaluate(&board), i32::from(closer.sign()));
        }
    }

    #[test]
    fn test_matches_closed_box_counts_along_a_game() {
        let mut board = BoardState::new(2, 3).unwrap();
        let edges: Vec<Edge> = board.undrawn_edges().collect();
        for (i, edge) in edges.into_iter().enumerate() {
            // Interleave the edge order so both players close boxes.
            let mover = if i % 3 == 0 { Player::One } else { Player::Two };
            board.apply_move(edge, mover).unwrap();

            let expected = i32::try_from(board.closed_boxes(Player::Two)).unwrap()
                - i32::try_from(board.closed_boxes(Player::One)).unwrap();
            assert_eq!(evaluate(&board), expected);
            assert_eq!(evaluate(&board), evaluate(&board));
        }
    }
}
