//! # Divercite MCTS Library
//!
//! A Monte Carlo Tree Search decision engine for deterministic, perfect-information,
//! two-player color placement games in the style of Divercite.
//!
//! ## Features
//!
//! - **Game Adapter**: the [`GameStateAdapter`] trait through which the engine reaches the rules
//! - **AI Engine**: UCB1 tree search with knowledge-guided, depth-limited rollouts
//! - **Decision Agent**: time-boxed `decide(state, budget)` boundary for match players
//! - **Reference Game**: a reduced Divercite ruleset to exercise the engine end to end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use divercite_mcts::{DecisionAgent, DiverciteRules, MCTSHyperparameters};
//! use std::time::Duration;
//!
//! let rules = DiverciteRules::default();
//! let state = rules.initial_state();
//! let mut agent = DecisionAgent::new(rules, MCTSHyperparameters::default()).unwrap();
//! let action = agent.decide(&state, Duration::from_millis(200)).unwrap();
//! println!("{action}");
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Game adapter trait and the reduced Divercite rules
pub mod game;

/// Monte Carlo Tree Search engine
pub mod mcts;

/// Decision agent wrapping the engine for match play
pub mod agent;

/// City scoring for the reduced Divercite rules
pub mod scoring;

/// Agent vs agent matches on the reduced Divercite rules
pub mod arena;

/// Match records written by the CLI
pub mod recording;

/// Logger initialisation for binaries
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use agent::DecisionAgent;
pub use arena::play_match;
pub use game::adapter::{GameState, GameStateAdapter, PlayerOf};
pub use game::divercite::{DiverciteRules, DiverciteState, Placement};
pub use mcts::algorithm::MCTSEngine;
pub use mcts::budget::SearchBudget;
pub use mcts::hyperparameters::{FinalMoveCriterion, MCTSHyperparameters};
pub use mcts::mcts_result::{ChildStats, SearchResult};
pub use recording::{MatchOutcome, MatchRecord};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Divercite MCTS library
#[derive(Debug, thiserror::Error)]
pub enum DiverciteError {
    /// The adapter was asked to apply an action that is not legal in the given state.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// A decision was requested for a terminal state or a state without legal actions.
    #[error("No legal action available from this state")]
    NoLegalAction,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DiverciteError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
