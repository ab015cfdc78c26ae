use serde::{Deserialize, Serialize};

use crate::{
    ApplyMoveError, BoardShapeError,
    core::{BoardState, Edge, Player},
};

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// One entry of a game's move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub player: Player,
    pub edge: Edge,
    pub closed_boxes: u8,
}

/// A single game, played move by move from the empty board.
#[derive(Debug, Clone)]
pub struct Game {
    board: BoardState,
    history: Vec<PlayedMove>,
}

impl Game {
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardShapeError> {
        Ok(Self {
            board: BoardState::new(rows, cols)?,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Boxes credited to `player` so far.
    #[must_use]
    pub fn score(&self, player: Player) -> usize {
        self.board.closed_boxes(player)
    }

    /// Player 2's score minus player 1's score.
    #[must_use]
    pub fn margin(&self) -> i64 {
        let two = i64::try_from(self.score(Player::Two)).unwrap_or(i64::MAX);
        let one = i64::try_from(self.score(Player::One)).unwrap_or(i64::MAX);
        two - one
    }

    /// Draws `edge` for the player to move and records it.
    ///
    /// Returns the number of boxes the move closed; if it is non-zero the same
    /// player moves again.
    pub fn play(&mut self, edge: Edge) -> Result<u8, ApplyMoveError> {
        let player = self.board.to_move();
        let closed_boxes = self.board.play(edge)?;
        self.history.push(PlayedMove {
            player,
            edge,
            closed_boxes,
        });
        Ok(closed_boxes)
    }

    /// Returns the result once every edge is drawn, `None` while the game is running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_over() {
            return None;
        }
        let outcome = match self.margin() {
            0 => Outcome::Draw,
            m if m > 0 => Outcome::WonBy(Player::Two),
            _ => Outcome::WonBy(Player::One),
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_tracks_extra_turns() {
        let mut game = Game::new(1, 1).unwrap();
        for edge in [Edge::row(0, 0), Edge::row(0, 1), Edge::col(0, 0)] {
            assert_eq!(game.play(edge).unwrap(), 0);
        }
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.play(Edge::col(1, 0)).unwrap(), 1);

        let players: Vec<_> = game.history().iter().map(|m| m.player).collect();
        assert_eq!(
            players,
            vec![Player::One, Player::Two, Player::One, Player::Two]
        );
        assert_eq!(game.history()[3].closed_boxes, 1);
        assert_eq!(game.outcome(), Some(Outcome::WonBy(Player::Two)));
        assert_eq!(game.margin(), 1);
    }

    #[test]
    fn test_outcome_is_none_while_running() {
        let mut game = Game::new(2, 2).unwrap();
        game.play(Edge::row(0, 0)).unwrap();
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_illegal_move_is_not_recorded() {
        let mut game = Game::new(1, 2).unwrap();
        game.play(Edge::col(1, 0)).unwrap();
        assert!(game.play(Edge::col(1, 0)).is_err());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.to_move(), Player::Two);
    }

    #[test]
    fn test_double_cross_takes_both_boxes() {
        let mut game = Game::new(1, 2).unwrap();
        for edge in [
            Edge::row(0, 0),
            Edge::row(0, 1),
            Edge::col(0, 0),
            Edge::row(1, 0),
            Edge::col(2, 0),
            Edge::row(1, 1),
        ] {
            assert_eq!(game.play(edge).unwrap(), 0);
        }
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.play(Edge::col(1, 0)).unwrap(), 2);
        assert!(game.is_over());
        assert_eq!(game.score(Player::One), 2);
        assert_eq!(game.outcome(), Some(Outcome::WonBy(Player::One)));
    }

    #[test]
    fn test_draw_on_even_split() {
        let mut game = Game::new(1, 2).unwrap();
        for edge in [
            Edge::col(1, 0),
            Edge::row(0, 0),
            Edge::row(1, 0),
            Edge::row(0, 1),
            Edge::col(0, 0), // player 1 closes the left box and moves again
            Edge::row(1, 1),
            Edge::col(2, 0), // player 2 closes the right box
        ] {
            game.play(edge).unwrap();
        }
        assert_eq!(game.score(Player::One), 1);
        assert_eq!(game.score(Player::Two), 1);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert!(game.outcome().unwrap().is_draw());
    }
}
