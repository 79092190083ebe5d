//! MCTS Hyperparameters Configuration
//!
//! This module defines all tunable hyperparameters for the search: the UCB1
//! exploration constant, the rollout policy and its evaluation fallback, and
//! the final move criterion. Values can be loaded from a JSON file; missing
//! fields fall back to [`Default`].

use crate::{DiverciteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the decision is read off the root once the budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalMoveCriterion {
    /// Most visited root child. Stable under low sample counts.
    #[default]
    RobustChild,
    /// Root child with the highest mean value.
    MaxChild,
}

/// MCTS hyperparameters configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSHyperparameters {
    // ========== Selection ==========
    /// UCB1 exploration weight
    /// Higher values = more exploration
    /// Default: √2
    pub exploration_weight: f64,

    // ========== Rollouts ==========
    /// Maximum plies simulated before falling back to the static evaluation
    /// Default: 20
    pub depth_limit: usize,

    /// Probability of a knowledge-guided (greedy) step during a rollout;
    /// the remaining steps are uniformly random
    /// Default: 0.8
    pub greedy_probability: f64,

    /// Number of legal actions sampled and scored at each greedy step
    /// Default: 8
    pub rollout_candidates: usize,

    /// Score margin that maps to tanh(1) in the non-terminal evaluation
    /// Smaller values = evaluation saturates faster
    /// Default: 4.0
    pub evaluation_scale: f64,

    // ========== Decision ==========
    /// Default: robust child
    pub final_move: FinalMoveCriterion,

    /// Seed for the rollout RNG; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for MCTSHyperparameters {
    fn default() -> Self {
        Self {
            exploration_weight: std::f64::consts::SQRT_2,
            depth_limit: 20,
            greedy_probability: 0.8,
            rollout_candidates: 8,
            evaluation_scale: 4.0,
            final_move: FinalMoveCriterion::RobustChild,
            seed: None,
        }
    }
}

impl MCTSHyperparameters {
    /// Same parameters with a fixed rollout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load hyperparameters from a JSON file and validate them
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    /// Write hyperparameters as pretty JSON
    pub fn save_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.exploration_weight.is_finite() || self.exploration_weight < 0.0 {
            return Err(DiverciteError::Config(format!(
                "exploration_weight must be a non-negative number, got {}",
                self.exploration_weight
            )));
        }
        if self.depth_limit == 0 {
            return Err(DiverciteError::Config(
                "depth_limit must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.greedy_probability) {
            return Err(DiverciteError::Config(format!(
                "greedy_probability must lie in [0, 1], got {}",
                self.greedy_probability
            )));
        }
        if self.rollout_candidates == 0 {
            return Err(DiverciteError::Config(
                "rollout_candidates must be at least 1".to_string(),
            ));
        }
        if self.evaluation_scale.is_nan() || self.evaluation_scale <= 0.0 {
            return Err(DiverciteError::Config(format!(
                "evaluation_scale must be positive, got {}",
                self.evaluation_scale
            )));
        }
        Ok(())
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        format!(
            "c[{:.3}]_depth[{}]_greedy[{:.2}x{}]_scale[{:.2}]_final[{:?}]",
            self.exploration_weight,
            self.depth_limit,
            self.greedy_probability,
            self.rollout_candidates,
            self.evaluation_scale,
            self.final_move
        )
    }
}
