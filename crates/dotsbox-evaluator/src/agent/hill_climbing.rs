use dotsbox_engine::{BoardState, Edge};
use rand::Rng;

use crate::{
    agent::{Agent, AgentError, best_for},
    objective::evaluate,
    sacrifice::avoid_sacrifice,
    successor::successors,
};

/// Greedy one-ply agent.
///
/// Scores every successor with [`evaluate`] and keeps the best ones for the player to
/// move. The sacrifice filter picks among the tied moves, so when no box can be
/// closed the agent prefers an edge that gives nothing away.
#[derive(Debug, Clone)]
pub struct HillClimbingAgent<R> {
    rng: R,
}

impl<R> HillClimbingAgent<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Agent for HillClimbingAgent<R>
where
    R: Rng + std::fmt::Debug,
{
    fn name(&self) -> &'static str {
        "hill-climbing"
    }

    fn get_action(&mut self, board: &BoardState) -> Result<Edge, AgentError> {
        let player = board.to_move();
        let scored: Vec<(Edge, i32)> = successors(board, player)
            .map(|successor| (successor.edge, evaluate(&successor.board)))
            .collect();
        let best = best_for(player, scored.iter().map(|(_, value)| *value))
            .ok_or(AgentError::TerminalBoard)?;

        let candidates: Vec<Edge> = scored
            .iter()
            .filter(|(_, value)| *value == best)
            .map(|(edge, _)| *edge)
            .collect();
        log::debug!(
            "{} of {} moves reach {best} for {player}",
            candidates.len(),
            scored.len()
        );

        avoid_sacrifice(&candidates, board, player, &mut self.rng).ok_or(AgentError::TerminalBoard)
    }
}
