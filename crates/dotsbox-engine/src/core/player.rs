use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// [`Player::One`] moves first from the empty board and is the minimizing side
/// (box marks stamped with `-1`); [`Player::Two`] is the maximizing side (`+1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
pub enum Player {
    #[serde(rename = "player1")]
    One,
    #[serde(rename = "player2")]
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Sign stamped onto box marks when this player draws an adjacent edge.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::Two)
    }

    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("player 1"),
            Player::Two => f.write_str("player 2"),
        }
    }
}
