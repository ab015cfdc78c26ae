use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotsbox_evaluator::{
    agent::{AgentConfig, AgentKind},
    search::DEFAULT_DEPTH,
};
use flexi_logger::Logger;

use crate::util;

use self::{choose::ChooseArg, play::PlayArg};

mod choose;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log level, overridden by `RUST_LOG`
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Choose one move for the player to move on a board read as JSON
    Choose(#[clap(flatten)] ChooseArg),
    /// Play games between two agents
    Play(#[clap(flatten)] PlayArg),
}

/// Search settings shared by every agent built from the command line.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// Minimax search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,
    /// Abort a search after visiting this many nodes
    #[arg(long)]
    node_limit: Option<u64>,
    /// Seed for the agents' random tie-breaking
    #[arg(long)]
    seed: Option<u64>,
}

impl SearchArg {
    /// Agent configuration of `kind`, or the contents of `config_path` when given.
    ///
    /// `--seed` is applied on top of a loaded configuration, offset by `seed_offset`.
    fn agent_config(
        &self,
        kind: AgentKind,
        config_path: Option<&PathBuf>,
        seed_offset: u64,
    ) -> anyhow::Result<AgentConfig> {
        let mut config = match config_path {
            Some(path) => util::read_agent_config_file(path)?,
            None => AgentConfig {
                kind,
                depth: self.depth,
                node_limit: self.node_limit,
                seed: None,
            },
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed.wrapping_add(seed_offset));
        }
        Ok(config)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    let _logger = Logger::try_with_env_or_str(&args.log_level)?
        .format(flexi_logger::colored_default_format)
        .start()?;

    match args.mode {
        Mode::Choose(arg) => choose::run(&arg)?,
        Mode::Play(arg) => play::run(&arg)?,
    }
    Ok(())
}
