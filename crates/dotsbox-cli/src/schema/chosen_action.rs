use dotsbox_engine::{Edge, Player};
use dotsbox_evaluator::agent::AgentConfig;
use serde::{Deserialize, Serialize};

/// Output of the `choose` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChosenAction {
    /// Player the move was chosen for
    pub player: Player,
    /// Agent that chose the move
    pub agent: AgentConfig,
    /// Edge to draw
    pub edge: Edge,
}
