//! Search budget: a wall-clock deadline, an iteration cap, or both.
//!
//! The budget is only consulted between iterations; an iteration that starts
//! before the deadline always runs to completion.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    time_limit: Option<Duration>,
    max_iterations: Option<usize>,
}

impl SearchBudget {
    pub fn time(limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
            max_iterations: None,
        }
    }

    pub fn iterations(max_iterations: usize) -> Self {
        Self {
            time_limit: None,
            max_iterations: Some(max_iterations),
        }
    }

    /// Stops at whichever limit is reached first.
    pub fn time_and_iterations(limit: Duration, max_iterations: usize) -> Self {
        Self {
            time_limit: Some(limit),
            max_iterations: Some(max_iterations),
        }
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Starts the clock.
    pub fn start(&self) -> BudgetTracker {
        let started = Instant::now();
        BudgetTracker {
            started,
            time_limited: self.time_limit.is_some(),
            deadline: self
                .time_limit
                .and_then(|limit| started.checked_add(limit)),
            max_iterations: self.max_iterations,
        }
    }
}

/// A budget whose clock is running.
#[derive(Debug, Clone, Copy)]
pub struct BudgetTracker {
    started: Instant,
    time_limited: bool,
    /// `None` under a time limit means the deadline is too far away to be
    /// represented and never arrives.
    deadline: Option<Instant>,
    max_iterations: Option<usize>,
}

impl BudgetTracker {
    /// `true` once the deadline has passed or `completed` reached the cap.
    /// A budget with neither limit is exhausted immediately.
    pub fn is_exhausted(&self, completed: usize) -> bool {
        if !self.time_limited && self.max_iterations.is_none() {
            return true;
        }
        if let Some(max) = self.max_iterations {
            if completed >= max {
                return true;
            }
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
