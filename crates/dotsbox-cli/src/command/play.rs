use std::path::PathBuf;

use anyhow::{Context as _, ensure};
use chrono::Utc;
use dotsbox_engine::{Game, MatchStats, Outcome, Player};
use dotsbox_evaluator::agent::{Agent, AgentConfig, AgentKind};

use crate::{
    command::SearchArg,
    schema::match_summary::{GameRecord, MatchSummary},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Number of box rows
    #[arg(long, default_value_t = 3)]
    rows: usize,
    /// Number of box columns
    #[arg(long, default_value_t = 3)]
    cols: usize,
    /// Agent playing first (minimizing)
    #[arg(long, default_value_t = AgentKind::Minimax)]
    player1: AgentKind,
    /// Agent playing second (maximizing)
    #[arg(long, default_value_t = AgentKind::HillClimbing)]
    player2: AgentKind,
    /// Agent configuration JSON file for player 1, replacing `--player1`
    #[arg(long)]
    player1_config: Option<PathBuf>,
    /// Agent configuration JSON file for player 2, replacing `--player2`
    #[arg(long)]
    player2_config: Option<PathBuf>,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[clap(flatten)]
    search: SearchArg,
    /// Output file path for the match summary
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        rows,
        cols,
        player1,
        player2,
        player1_config,
        player2_config,
        games,
        search,
        output,
    } = arg;
    ensure!(*games > 0, "--games must be at least 1");

    let configs = [
        search.agent_config(*player1, player1_config.as_ref(), 0)?,
        search.agent_config(*player2, player2_config.as_ref(), 1)?,
    ];
    log::info!(
        "playing {games} game(s) on a {rows}x{cols} board: {} vs {}",
        configs[0].kind,
        configs[1].kind
    );

    let mut stats = MatchStats::new();
    let mut records = Vec::with_capacity(*games);
    for index in 0..*games {
        let game_configs = configs.map(|config| per_game_config(config, index));
        let mut agents = game_configs.map(|config| config.build());
        let game = play_game(*rows, *cols, &mut agents)
            .with_context(|| format!("game {} failed", index + 1))?;

        let outcome = game
            .outcome()
            .context("game ended before every edge was drawn")?;
        stats.record(outcome, game.margin());
        log_result(index, &game, outcome);
        log::info!("final board:\n{}", game.board());

        records.push(GameRecord::from_game(&game, outcome));
    }

    log::info!(
        "{} games: player 1 won {}, player 2 won {}, {} draws, mean margin {:+.2}",
        stats.games(),
        stats.wins(Player::One),
        stats.wins(Player::Two),
        stats.draws(),
        stats.mean_margin()
    );

    let summary = MatchSummary {
        played_at: Utc::now(),
        rows: *rows,
        cols: *cols,
        player1: configs[0],
        player2: configs[1],
        stats,
        games: records,
    };
    Output::save_json(&summary, output.clone())
}

/// Offsets a fixed seed so that successive games differ but stay reproducible.
fn per_game_config(config: AgentConfig, index: usize) -> AgentConfig {
    let offset = u64::try_from(index).unwrap_or(u64::MAX).wrapping_mul(2);
    AgentConfig {
        seed: config.seed.map(|seed| seed.wrapping_add(offset)),
        ..config
    }
}

fn play_game(rows: usize, cols: usize, agents: &mut [Box<dyn Agent>; 2]) -> anyhow::Result<Game> {
    let mut game = Game::new(rows, cols)?;
    while !game.is_over() {
        let player = game.to_move();
        let agent = &mut agents[player.index()];
        let edge = agent
            .get_action(game.board())
            .with_context(|| format!("{} agent failed to move for {player}", agent.name()))?;
        let closed = game.play(edge)?;
        log::debug!("{player} ({}) draws {edge}, closing {closed}", agent.name());
    }
    Ok(game)
}

fn log_result(index: usize, game: &Game, outcome: Outcome) {
    let score = format!(
        "{}-{}",
        game.score(Player::One),
        game.score(Player::Two)
    );
    match outcome {
        Outcome::WonBy(player) => {
            log::info!("game {}: {player} wins {score}", index + 1);
        }
        Outcome::Draw => log::info!("game {}: draw {score}", index + 1),
    }
}
