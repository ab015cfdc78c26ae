use chrono::{DateTime, Utc};
use dotsbox_engine::{Game, MatchStats, Outcome, PlayedMove, Player};
use dotsbox_evaluator::agent::AgentConfig;
use serde::{Deserialize, Serialize};

/// Result of a series of games between two agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Timestamp when the match finished (ISO 8601 format)
    pub played_at: DateTime<Utc>,
    pub rows: usize,
    pub cols: usize,
    /// Agent moving first (minimizing)
    pub player1: AgentConfig,
    /// Agent moving second (maximizing)
    pub player2: AgentConfig,
    pub stats: MatchStats,
    pub games: Vec<GameRecord>,
}

/// One finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub outcome: Outcome,
    /// Boxes closed by player 1 and player 2
    pub score: [usize; 2],
    pub moves: Vec<PlayedMove>,
}

impl GameRecord {
    pub fn from_game(game: &Game, outcome: Outcome) -> Self {
        Self {
            outcome,
            score: Player::ALL.map(|player| game.score(player)),
            moves: game.history().to_vec(),
        }
    }
}
