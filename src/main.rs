use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use divercite_mcts::logging::setup_logging;
use divercite_mcts::{play_match, DecisionAgent, DiverciteRules, MatchOutcome, MCTSHyperparameters};

#[derive(Parser, Debug)]
#[command(
    name = "divercite_mcts",
    about = "Play MCTS vs MCTS matches on the reduced Divercite rules"
)]
struct Config {
    /// Number of matches to play
    #[arg(short = 'g', long, default_value_t = 1)]
    games: usize,

    /// Search time per move, in milliseconds
    #[arg(short = 't', long, default_value_t = 500)]
    time_ms: u64,

    /// Optional iteration cap per move
    #[arg(short = 'i', long)]
    iterations: Option<usize>,

    /// Board side length (odd, at least 3)
    #[arg(long, default_value_t = 7)]
    board_size: usize,

    /// Base seed for the rollout generators; each match and player derives its own
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with engine hyperparameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the record of the last match to this JSON file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Log spec used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files here instead of logging to stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

// ============================================================================
// FONCTION PRINCIPALE
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let rules = DiverciteRules::with_board_size(config.board_size)?;
    let base_params = match &config.config {
        Some(path) => {
            let params = MCTSHyperparameters::from_json_file(path)?;
            log::info!("⚙️ Hyperparameters loaded from {}", path.display());
            params
        }
        None => MCTSHyperparameters::default(),
    };
    base_params.validate()?;
    log::info!("🎯 {}", base_params.to_config_string());

    let per_move_budget = Duration::from_millis(config.time_ms);
    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    let mut last_record = None;

    for game in 0..config.games {
        let mut agents = [
            build_agent(&rules, &base_params, config.seed, game, 0, config.iterations)?,
            build_agent(&rules, &base_params, config.seed, game, 1, config.iterations)?,
        ];

        let record = play_match(&rules, &mut agents, per_move_budget)?;
        match record.outcome {
            MatchOutcome::Winner(player) => wins[player.index()] += 1,
            MatchOutcome::Draw => draws += 1,
        }
        log::info!(
            "🏁 Game {}/{}: {} - {} ({})",
            game + 1,
            config.games,
            record.final_scores[0],
            record.final_scores[1],
            record.outcome
        );
        last_record = Some(record);
    }

    log::info!(
        "📊 P1 wins: {} | P2 wins: {} | draws: {}",
        wins[0],
        wins[1],
        draws
    );

    if let (Some(path), Some(record)) = (&config.record, &last_record) {
        record.save_json(path)?;
        log::info!("💾 Match record written to {}", path.display());
    }

    Ok(())
}

fn build_agent(
    rules: &DiverciteRules,
    base_params: &MCTSHyperparameters,
    seed: Option<u64>,
    game: usize,
    seat: usize,
    iterations: Option<usize>,
) -> divercite_mcts::Result<DecisionAgent<DiverciteRules>> {
    let mut params = base_params.clone();
    if let Some(seed) = seed.or(base_params.seed) {
        params = params.with_seed(seed.wrapping_add((game * 2 + seat) as u64));
    }
    let agent = DecisionAgent::new(rules.clone(), params)?;
    Ok(match iterations {
        Some(cap) => agent.with_iteration_cap(cap),
        None => agent,
    })
}
