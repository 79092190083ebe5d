//! Decision boundary used by match players.
//!
//! A [`DecisionAgent`] owns an [`MCTSEngine`] and turns a time allowance into a
//! search budget. Each call builds a fresh tree; nothing is carried over from
//! one decision to the next.

use crate::game::adapter::GameStateAdapter;
use crate::mcts::algorithm::MCTSEngine;
use crate::mcts::budget::SearchBudget;
use crate::mcts::hyperparameters::MCTSHyperparameters;
use crate::mcts::mcts_result::SearchResult;
use crate::{DiverciteError, Result};
use std::time::Duration;

/// Share of the remaining match clock spent on one move.
pub const DEFAULT_TIME_FRACTION: f64 = 1.0 / 20.0;

/// Floor of a move's budget when the match clock is used.
pub const DEFAULT_MIN_MOVE_TIME: Duration = Duration::from_millis(50);

pub struct DecisionAgent<A: GameStateAdapter> {
    engine: MCTSEngine<A>,
    iteration_cap: Option<usize>,
    time_fraction: f64,
    min_move_time: Duration,
    last_result: Option<SearchResult<A::Action>>,
}

impl<A: GameStateAdapter> DecisionAgent<A> {
    pub fn new(adapter: A, params: MCTSHyperparameters) -> Result<Self> {
        Ok(Self {
            engine: MCTSEngine::new(adapter, params)?,
            iteration_cap: None,
            time_fraction: DEFAULT_TIME_FRACTION,
            min_move_time: DEFAULT_MIN_MOVE_TIME,
            last_result: None,
        })
    }

    /// Also stops every search after `max_iterations` iterations.
    pub fn with_iteration_cap(mut self, max_iterations: usize) -> Self {
        self.iteration_cap = Some(max_iterations);
        self
    }

    /// Sets the share of the remaining clock spent per move and its floor.
    pub fn with_time_fraction(mut self, fraction: f64, min_move_time: Duration) -> Result<Self> {
        if fraction.is_nan() || fraction <= 0.0 || fraction > 1.0 {
            return Err(DiverciteError::Config(format!(
                "time fraction must be in (0, 1], got {fraction}"
            )));
        }
        self.time_fraction = fraction;
        self.min_move_time = min_move_time;
        Ok(self)
    }

    pub fn engine(&self) -> &MCTSEngine<A> {
        &self.engine
    }

    /// Picks an action for the mover of `state` within `time_budget`.
    ///
    /// Fails with [`DiverciteError::NoLegalAction`] when `state` is terminal
    /// or the mover cannot play.
    pub fn decide(&mut self, state: &A::State, time_budget: Duration) -> Result<A::Action> {
        let budget = match self.iteration_cap {
            Some(cap) => SearchBudget::time_and_iterations(time_budget, cap),
            None => SearchBudget::time(time_budget),
        };

        let result = self.engine.search_with_stats(state.clone(), budget)?;
        let action = result.best_action.clone();
        self.last_result = Some(result);
        Ok(action)
    }

    /// Same as [`decide`](Self::decide), budgeting from what is left on the
    /// match clock.
    pub fn decide_with_remaining_time(
        &mut self,
        state: &A::State,
        remaining: Duration,
    ) -> Result<A::Action> {
        let budget = self.move_budget(remaining);
        log::debug!("Remaining {:?}, spending {:?} on this move", remaining, budget);
        self.decide(state, budget)
    }

    /// Time spent on a move when `remaining` is left on the clock.
    pub fn move_budget(&self, remaining: Duration) -> Duration {
        remaining
            .mul_f64(self.time_fraction)
            .max(self.min_move_time)
            .min(remaining)
    }

    /// Statistics of the most recent successful decision.
    pub fn last_result(&self) -> Option<&SearchResult<A::Action>> {
        self.last_result.as_ref()
    }
}
