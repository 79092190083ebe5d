//! Integration tests for the Divercite MCTS library public API

use divercite_mcts::{
    DecisionAgent, DiverciteError, DiverciteRules, FinalMoveCriterion, GameStateAdapter,
    MCTSHyperparameters, Result, SearchBudget, DESCRIPTION, NAME, VERSION,
};
use std::time::Duration;

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "divercite_mcts");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let invalid = DiverciteError::InvalidAction("red city @ (0, 0)".to_string());
    assert!(matches!(invalid, DiverciteError::InvalidAction(_)));
    assert!(invalid.to_string().contains("red city"));

    let none = DiverciteError::NoLegalAction;
    assert!(matches!(none, DiverciteError::NoLegalAction));

    let config = DiverciteError::Config("bad".to_string());
    assert_eq!(config.to_string(), "Configuration error: bad");

    let io: DiverciteError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(io, DiverciteError::Io(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert_eq!(success.unwrap(), 42);

    let failure: Result<i32> = Err(DiverciteError::NoLegalAction);
    assert!(failure.is_err());
}

#[test]
fn test_default_configuration() {
    let params = MCTSHyperparameters::default();
    assert!(params.validate().is_ok());
    assert_eq!(params.exploration_weight, std::f64::consts::SQRT_2);
    assert_eq!(params.depth_limit, 20);
    assert_eq!(params.final_move, FinalMoveCriterion::RobustChild);

    let budget = SearchBudget::time(Duration::from_millis(100));
    assert_eq!(budget.time_limit(), Some(Duration::from_millis(100)));
    assert_eq!(budget.max_iterations(), None);
}

#[test]
fn test_agent_on_default_board() {
    let rules = DiverciteRules::default();
    let state = rules.initial_state();
    let mut agent = DecisionAgent::new(rules.clone(), MCTSHyperparameters::default().with_seed(9))
        .unwrap()
        .with_iteration_cap(64);

    let action = agent.decide(&state, Duration::from_secs(10)).unwrap();
    assert!(rules.legal_actions(&state).contains(&action));
    assert_eq!(agent.last_result().unwrap().iterations, 64);
}
