//! Agent vs agent matches on the reduced Divercite rules.

use crate::agent::DecisionAgent;
use crate::game::adapter::{GameState, GameStateAdapter};
use crate::game::divercite::DiverciteRules;
use crate::game::player::Player;
use crate::recording::{MatchRecord, MoveRecord};
use crate::Result;
use std::time::Duration;

/// Plays one match, `agents[0]` as player one and `agents[1]` as player two.
///
/// Every agent gets `per_move_budget` for each decision. The match ends on the
/// first terminal state; an error from either agent or from the rules aborts it.
pub fn play_match(
    rules: &DiverciteRules,
    agents: &mut [DecisionAgent<DiverciteRules>; 2],
    per_move_budget: Duration,
) -> Result<MatchRecord> {
    let players = [
        agents[0].engine().hyperparameters().to_config_string(),
        agents[1].engine().hyperparameters().to_config_string(),
    ];
    let mut record = MatchRecord::new(rules.board_size, players);
    let mut state = rules.initial_state();

    while !rules.is_terminal(&state) {
        let mover = state.next_player();
        let agent = &mut agents[mover.index()];
        let placement = agent.decide(&state, per_move_budget)?;

        let (iterations, root_visits, elapsed_ms, fallback) = match agent.last_result() {
            Some(result) => (
                result.iterations,
                result.root_visits,
                result.elapsed.as_millis() as u64,
                result.fallback,
            ),
            None => (0, 0, 0, true),
        };
        log::debug!(
            "Turn {}: {} plays {} ({} iterations, {} ms)",
            state.moves_played(),
            mover,
            placement,
            iterations,
            elapsed_ms
        );

        record.record_move(MoveRecord {
            turn: state.moves_played(),
            mover,
            placement,
            iterations,
            root_visits,
            elapsed_ms,
            fallback,
        });
        state = rules.apply_action(&state, &placement)?;
    }

    record.finalize([state.score(Player::One), state.score(Player::Two)]);
    log::info!(
        "Match over after {} moves: P1 {} - P2 {} ({})",
        record.moves.len(),
        record.final_scores[0],
        record.final_scores[1],
        record.outcome
    );
    log::debug!("Final position:\n{}", state);

    Ok(record)
}
