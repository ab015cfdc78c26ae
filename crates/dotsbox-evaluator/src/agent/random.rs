use dotsbox_engine::{BoardState, Edge};
use rand::{Rng, seq::IteratorRandom as _};

use crate::agent::{Agent, AgentError};

/// Draws a uniformly random undrawn edge.
#[derive(Debug, Clone)]
pub struct RandomAgent<R> {
    rng: R,
}

impl<R> RandomAgent<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Agent for RandomAgent<R>
where
    R: Rng + std::fmt::Debug,
{
    fn name(&self) -> &'static str {
        "random"
    }

    fn get_action(&mut self, board: &BoardState) -> Result<Edge, AgentError> {
        board
            .undrawn_edges()
            .choose(&mut self.rng)
            .ok_or(AgentError::TerminalBoard)
    }
}
