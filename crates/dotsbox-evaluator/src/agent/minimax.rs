use dotsbox_engine::{BoardState, Edge};
use rand::Rng;

use crate::{
    agent::{Agent, AgentError},
    sacrifice::avoid_sacrifice,
    search::{RootEvaluation, SearchConfig, search_root},
};

/// Searches every move to a fixed depth and plays one of the best.
///
/// Among moves tied at the best value, the sacrifice filter picks one that does not
/// leave a box one edge from completion.
#[derive(Debug, Clone)]
pub struct MinimaxAgent<R> {
    config: SearchConfig,
    rng: R,
    last_evaluation: Option<RootEvaluation>,
}

impl<R> MinimaxAgent<R>
where
    R: Rng,
{
    pub fn new(config: SearchConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            last_evaluation: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Root evaluation behind the most recent successful decision.
    #[must_use]
    pub fn last_evaluation(&self) -> Option<&RootEvaluation> {
        self.last_evaluation.as_ref()
    }
}

impl<R> Agent for MinimaxAgent<R>
where
    R: Rng + std::fmt::Debug,
{
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn get_action(&mut self, board: &BoardState) -> Result<Edge, AgentError> {
        let evaluation = search_root(board, &self.config)?;
        let candidates = evaluation.best_moves();
        log::debug!(
            "{} best moves at value {} for {}",
            candidates.len(),
            evaluation.best_value(),
            evaluation.player(),
        );
        let edge = avoid_sacrifice(&candidates, board, evaluation.player(), &mut self.rng)
            .ok_or(AgentError::TerminalBoard)?;
        self.last_evaluation = Some(evaluation);
        Ok(edge)
    }
}
