//! Move-choosing agents.
//!
//! - [`MinimaxAgent`] - Root search to a fixed depth, ties broken by the sacrifice filter
//! - [`HillClimbingAgent`] - One-ply greedy choice, ties broken by the sacrifice filter
//! - [`RandomAgent`] - Uniformly random undrawn edge
//!
//! Agents own their random source. [`AgentConfig::build`] seeds it from
//! [`AgentConfig::seed`], or from the thread-local generator when no seed is set.

use std::{fmt, str::FromStr};

use dotsbox_engine::{BoardState, Edge, Player};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::search::{DEFAULT_DEPTH, SearchConfig, SearchError};

pub use self::{hill_climbing::*, minimax::*, random::*};

mod hill_climbing;
mod minimax;
mod random;

/// Chooses one edge to draw for the player to move.
pub trait Agent: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Returns an undrawn, in-bounds edge of `board`. The board is not modified.
    fn get_action(&mut self, board: &BoardState) -> Result<Edge, AgentError>;
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AgentError {
    #[display("no move available on a terminal board")]
    TerminalBoard,
    #[display("search failed: {_0}")]
    Search(SearchError),
}

impl From<SearchError> for AgentError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::TerminalBoard => Self::TerminalBoard,
            e => Self::Search(e),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    #[default]
    Minimax,
    HillClimbing,
    Random,
}

impl AgentKind {
    pub const ALL: [Self; 3] = [Self::Minimax, Self::HillClimbing, Self::Random];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::HillClimbing => "hill-climbing",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown agent kind `{input}` (expected minimax, hill-climbing or random)")]
pub struct ParseAgentKindError {
    input: String,
}

impl FromStr for AgentKind {
    type Err = ParseAgentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAgentKindError {
                input: s.to_owned(),
            })
    }
}

/// Serializable description of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub kind: AgentKind,
    /// Search depth; only used by [`AgentKind::Minimax`].
    pub depth: u32,
    pub node_limit: Option<u64>,
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            kind: AgentKind::default(),
            depth: DEFAULT_DEPTH,
            node_limit: None,
            seed: None,
        }
    }
}

impl AgentConfig {
    #[must_use]
    pub const fn new(kind: AgentKind) -> Self {
        Self {
            kind,
            depth: DEFAULT_DEPTH,
            node_limit: None,
            seed: None,
        }
    }

    #[must_use]
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            node_limit: self.node_limit,
        }
    }

    /// Creates the configured agent with a fresh random source.
    #[must_use]
    pub fn build(&self) -> Box<dyn Agent> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::debug!("building {} agent with seed {seed}", self.kind);
        let rng = Pcg32::seed_from_u64(seed);
        match self.kind {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(self.search_config(), rng)),
            AgentKind::HillClimbing => Box::new(HillClimbingAgent::new(rng)),
            AgentKind::Random => Box::new(RandomAgent::new(rng)),
        }
    }
}

/// Best of `values` for `player`: the maximum for player 2, the minimum for player 1.
pub(crate) fn best_for<I>(player: Player, values: I) -> Option<i32>
where
    I: IntoIterator<Item = i32>,
{
    let values = values.into_iter();
    if player.is_maximizing() {
        values.max()
    } else {
        values.min()
    }
}
