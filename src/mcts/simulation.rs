//! Knowledge-guided rollouts.
//!
//! Instead of pure random play, each rollout step is greedy most of the time:
//! a handful of legal actions is sampled, each one is applied, and the action
//! leaving the mover with the best score margin is played. The remaining steps
//! are uniformly random to keep some diversity between rollouts.
//!
//! Rollouts stop after `depth_limit` plies. A rollout that reaches a terminal
//! state returns the game outcome; one that is cut short returns a static
//! evaluation of the last position. Both are expressed in [0, 1] from the point
//! of view of the rollout's owner.

use crate::game::adapter::{score_margin, GameState, GameStateAdapter, PlayerOf};
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Value and shape of one finished rollout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RolloutOutcome {
    /// Result for the rollout owner, in [0, 1]
    pub value: f64,
    /// Plies actually played
    pub plies: usize,
    /// Whether the rollout ended on a terminal state
    pub reached_terminal: bool,
}

pub struct SimulationPolicy {
    greedy_probability: f64,
    rollout_candidates: usize,
    evaluation_scale: f64,
    rng: StdRng,
}

impl SimulationPolicy {
    /// Builds a policy from validated `params`.
    pub fn new(params: &MCTSHyperparameters) -> Result<Self> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(SimulationPolicy {
            greedy_probability: params.greedy_probability,
            rollout_candidates: params.rollout_candidates,
            evaluation_scale: params.evaluation_scale,
            rng,
        })
    }

    /// Plays at most `depth_limit` plies from a private copy of `from_state`.
    pub fn rollout<A: GameStateAdapter>(
        &mut self,
        adapter: &A,
        from_state: &A::State,
        owner: PlayerOf<A>,
        depth_limit: usize,
    ) -> Result<RolloutOutcome> {
        let mut state = from_state.clone();
        let mut plies = 0;

        while plies < depth_limit && !adapter.is_terminal(&state) {
            let actions = adapter.legal_actions(&state);
            if actions.is_empty() {
                break;
            }
            let index = self.choose_action(adapter, &state, &actions)?;
            state = adapter.apply_action(&state, &actions[index])?;
            plies += 1;
        }

        let reached_terminal = adapter.is_terminal(&state);
        let value = if reached_terminal {
            terminal_value(adapter, &state, owner)
        } else {
            self.evaluate(adapter, &state, owner)
        };

        Ok(RolloutOutcome {
            value,
            plies,
            reached_terminal,
        })
    }

    /// Index into `actions` of the move to play from `state`.
    pub fn choose_action<A: GameStateAdapter>(
        &mut self,
        adapter: &A,
        state: &A::State,
        actions: &[A::Action],
    ) -> Result<usize> {
        debug_assert!(!actions.is_empty(), "choose_action called without actions");
        if actions.len() <= 1 {
            return Ok(0);
        }
        if !self.rng.random_bool(self.greedy_probability) {
            return Ok(self.rng.random_range(0..actions.len()));
        }

        let mover = state.next_player();
        let mut best_index = None;
        let mut best_margin = f64::NEG_INFINITY;

        for i in self.sample_candidates(actions.len()) {
            let next = adapter.apply_action(state, &actions[i])?;
            let margin = score_margin(adapter, &next, mover);
            if best_index.is_none() || margin > best_margin {
                best_margin = margin;
                best_index = Some(i);
            }
        }

        Ok(best_index.unwrap_or(0))
    }

    /// Static evaluation of a non-terminal position for `owner`.
    ///
    /// Maps the score margin through tanh so that a margin of
    /// `evaluation_scale` is worth about 0.88.
    pub fn evaluate<A: GameStateAdapter>(
        &self,
        adapter: &A,
        state: &A::State,
        owner: PlayerOf<A>,
    ) -> f64 {
        let margin = score_margin(adapter, state, owner);
        (0.5 + 0.5 * (margin / self.evaluation_scale).tanh()).clamp(0.0, 1.0)
    }

    fn sample_candidates(&mut self, len: usize) -> Vec<usize> {
        if len <= self.rollout_candidates {
            (0..len).collect()
        } else {
            let mut sampled = rand::seq::index::sample(&mut self.rng, len, self.rollout_candidates).into_vec();
            sampled.sort_unstable();
            sampled
        }
    }
}

/// Outcome of a finished game for `owner`: 1 for a win, 0.5 for a draw, 0 for a loss.
pub fn terminal_value<A: GameStateAdapter>(adapter: &A, state: &A::State, owner: PlayerOf<A>) -> f64 {
    let margin = score_margin(adapter, state, owner);
    if margin > 0.0 {
        1.0
    } else if margin < 0.0 {
        0.0
    } else {
        0.5
    }
}
