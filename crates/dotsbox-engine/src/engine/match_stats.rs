use serde::{Deserialize, Serialize};

use crate::{Game, Outcome, Player};

/// Tallies over a series of finished games.
///
/// # Example
///
/// ```
/// use dotsbox_engine::{MatchStats, Outcome, Player};
///
/// let mut stats = MatchStats::new();
/// stats.record(Outcome::WonBy(Player::Two), 3);
/// stats.record(Outcome::Draw, 0);
///
/// assert_eq!(stats.games(), 2);
/// assert_eq!(stats.wins(Player::Two), 1);
/// assert_eq!(stats.draws(), 1);
/// assert!((stats.mean_margin() - 1.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    games: usize,
    wins: [usize; 2],
    draws: usize,
    total_margin: i64,
}

impl MatchStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games: 0,
            wins: [0; 2],
            draws: 0,
            total_margin: 0,
        }
    }

    #[must_use]
    pub const fn games(&self) -> usize {
        self.games
    }

    #[must_use]
    pub const fn wins(&self, player: Player) -> usize {
        self.wins[player.index()]
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Mean of player 2's score minus player 1's score, 0.0 before any game.
    #[must_use]
    pub fn mean_margin(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        #[expect(clippy::cast_precision_loss)]
        let mean = self.total_margin as f64 / self.games as f64;
        mean
    }

    /// Adds one finished game with the given outcome and score margin.
    pub fn record(&mut self, outcome: Outcome, margin: i64) {
        self.games += 1;
        self.total_margin += margin;
        match outcome {
            Outcome::WonBy(player) => self.wins[player.index()] += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Records `game` if it is over; returns `false` and leaves the tallies alone otherwise.
    pub fn record_game(&mut self, game: &Game) -> bool {
        let Some(outcome) = game.outcome() else {
            return false;
        };
        self.record(outcome, game.margin());
        true
    }
}
