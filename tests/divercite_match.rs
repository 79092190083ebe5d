//! Full matches between two agents on the reduced Divercite rules.

use divercite_mcts::game::player::Player;
use divercite_mcts::{
    play_match, DecisionAgent, DiverciteRules, GameStateAdapter, MatchOutcome, MatchRecord,
    MCTSHyperparameters,
};
use std::time::Duration;

fn agents(rules: &DiverciteRules, iterations: usize) -> [DecisionAgent<DiverciteRules>; 2] {
    [
        DecisionAgent::new(rules.clone(), MCTSHyperparameters::default().with_seed(100))
            .unwrap()
            .with_iteration_cap(iterations),
        DecisionAgent::new(rules.clone(), MCTSHyperparameters::default().with_seed(200))
            .unwrap()
            .with_iteration_cap(iterations),
    ]
}

#[test]
fn test_default_match_replays_legally() {
    let rules = DiverciteRules::default();
    let mut agents = agents(&rules, 25);

    let record = play_match(&rules, &mut agents, Duration::from_secs(30)).unwrap();
    assert!(!record.moves.is_empty());
    assert!(record.moves.len() <= rules.max_moves);

    // Replaying the record only goes through legal moves and ends the game.
    let mut state = rules.initial_state();
    for mv in &record.moves {
        assert!(rules.legal_actions(&state).contains(&mv.placement));
        state = rules.apply_action(&state, &mv.placement).unwrap();
    }
    assert!(rules.is_terminal(&state));
    assert_eq!(record.final_scores, [state.score(Player::One), state.score(Player::Two)]);
}

#[test]
fn test_match_record_file_round_trip() {
    let rules = DiverciteRules::with_board_size(5).unwrap();
    let mut agents = agents(&rules, 15);
    let record = play_match(&rules, &mut agents, Duration::from_secs(30)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_match.json");
    record.save_json(&path).unwrap();

    let loaded = MatchRecord::load_json(&path).unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.board_size, 5);
    match loaded.outcome {
        MatchOutcome::Winner(player) => {
            assert!(loaded.score(player) > loaded.score(player.opponent()))
        }
        MatchOutcome::Draw => assert_eq!(loaded.final_scores[0], loaded.final_scores[1]),
    }
}
