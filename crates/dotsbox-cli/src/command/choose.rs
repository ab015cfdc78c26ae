use std::path::PathBuf;

use anyhow::Context as _;
use dotsbox_engine::BoardState;
use dotsbox_evaluator::agent::AgentKind;

use crate::{command::SearchArg, schema::chosen_action::ChosenAction, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ChooseArg {
    /// Board JSON document, `-` for standard input
    #[arg(long)]
    board: PathBuf,
    /// Agent to choose the move
    #[arg(long, default_value_t = AgentKind::Minimax)]
    agent: AgentKind,
    /// Agent configuration JSON file, replacing `--agent`, `--depth` and `--node-limit`
    #[arg(long)]
    config: Option<PathBuf>,
    #[clap(flatten)]
    search: SearchArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ChooseArg) -> anyhow::Result<()> {
    let ChooseArg {
        board,
        agent,
        config,
        search,
        output,
    } = arg;

    let state: BoardState = util::read_json_input("board", board)?;
    let config = search.agent_config(*agent, config.as_ref(), 0)?;
    log::info!(
        "{} agent choosing for {} on a {}x{} board",
        config.kind,
        state.to_move(),
        state.rows(),
        state.cols()
    );
    log::debug!("board:\n{state}");

    let mut agent = config.build();
    let edge = agent
        .get_action(&state)
        .with_context(|| format!("{} agent could not choose a move", agent.name()))?;
    log::info!("{} draws {edge}", state.to_move());

    let action = ChosenAction {
        player: state.to_move(),
        agent: config,
        edge,
    };
    util::Output::save_json(&action, output.clone())
}
