//! Core Monte Carlo Tree Search loop.
//!
//! Each iteration walks down the tree with UCB1 while nodes are fully
//! expanded, adds one child, plays a knowledge-guided rollout from it and
//! backpropagates the result to the root. The budget is checked between
//! iterations only. The decision is the most visited root child (or the one
//! with the highest mean value, see [`FinalMoveCriterion`]).

use crate::game::adapter::{GameState, GameStateAdapter, PlayerOf};
use crate::mcts::budget::SearchBudget;
use crate::mcts::hyperparameters::{FinalMoveCriterion, MCTSHyperparameters};
use crate::mcts::mcts_result::{ChildStats, SearchResult};
use crate::mcts::node::{NodeId, SearchTree};
use crate::mcts::simulation::SimulationPolicy;
use crate::{DiverciteError, Result};

pub struct MCTSEngine<A: GameStateAdapter> {
    adapter: A,
    params: MCTSHyperparameters,
    simulation: SimulationPolicy,
}

impl<A: GameStateAdapter> MCTSEngine<A> {
    /// Creates an engine after validating `params`.
    pub fn new(adapter: A, params: MCTSHyperparameters) -> Result<Self> {
        let simulation = SimulationPolicy::new(&params)?;
        Ok(Self {
            adapter,
            params,
            simulation,
        })
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn hyperparameters(&self) -> &MCTSHyperparameters {
        &self.params
    }

    /// Runs a search from `root_state` and returns the chosen action.
    pub fn search(&mut self, root_state: A::State, budget: SearchBudget) -> Result<A::Action> {
        self.search_with_stats(root_state, budget)
            .map(|result| result.best_action)
    }

    /// Runs a search from `root_state` and returns the decision with its statistics.
    ///
    /// Fails with [`DiverciteError::NoLegalAction`] when the root is terminal
    /// or has no legal action. Errors raised by the adapter propagate.
    pub fn search_with_stats(
        &mut self,
        root_state: A::State,
        budget: SearchBudget,
    ) -> Result<SearchResult<A::Action>> {
        if self.adapter.is_terminal(&root_state) {
            return Err(DiverciteError::NoLegalAction);
        }

        let perspective = root_state.next_player();
        let mut tree = SearchTree::new(&self.adapter, root_state);
        let root = tree.root();
        if tree.get(root).untried_actions().is_empty() {
            return Err(DiverciteError::NoLegalAction);
        }

        let tracker = budget.start();
        let mut iterations = 0;
        while !tracker.is_exhausted(iterations) {
            run_iteration(&mut tree, &mut self.simulation, &self.params, perspective)?;
            iterations += 1;
        }

        let root_node = tree.get(root);
        let children: Vec<ChildStats<A::Action>> = root_node
            .children()
            .iter()
            .filter_map(|&id| {
                let child = tree.get(id);
                child.incoming_action().map(|action| ChildStats {
                    action: action.clone(),
                    visits: child.visit_count(),
                    mean_value: child.mean_value(),
                })
            })
            .collect();

        let (best_action, fallback) = match best_child(&tree, self.params.final_move) {
            Some(id) => {
                let action = tree
                    .get(id)
                    .incoming_action()
                    .cloned()
                    .ok_or(DiverciteError::NoLegalAction)?;
                (action, false)
            }
            None => {
                // Same action the first expansion would have taken.
                let action = root_node
                    .untried_actions()
                    .last()
                    .cloned()
                    .ok_or(DiverciteError::NoLegalAction)?;
                log::warn!(
                    "MCTS budget exhausted before the first iteration, falling back to {:?}",
                    action
                );
                (action, true)
            }
        };

        let result = SearchResult {
            best_action,
            iterations,
            elapsed: tracker.elapsed(),
            root_visits: root_node.visit_count(),
            tree_size: tree.len(),
            children,
            fallback,
        };

        log::debug!(
            "MCTS: {} iterations in {:?}, {} nodes, chose {:?} ({} root children) [{}]",
            result.iterations,
            result.elapsed,
            result.tree_size,
            result.best_action,
            result.children.len(),
            self.params.to_config_string()
        );

        Ok(result)
    }
}

/// One select/expand/simulate/backpropagate cycle.
fn run_iteration<A: GameStateAdapter>(
    tree: &mut SearchTree<'_, A>,
    simulation: &mut SimulationPolicy,
    params: &MCTSHyperparameters,
    perspective: PlayerOf<A>,
) -> Result<()> {
    // 1. Selection
    let mut node = tree.root();
    loop {
        let current = tree.get(node);
        if !current.is_fully_expanded() || current.is_terminal() || current.children().is_empty() {
            break;
        }
        match tree.select_child(node, params.exploration_weight) {
            Some(child) => node = child,
            None => break,
        }
    }

    // 2. Expansion
    let current = tree.get(node);
    if !current.is_terminal() && !current.is_fully_expanded() {
        node = tree.expand(node)?;
    }

    // 3. Simulation
    let outcome = simulation.rollout(
        tree.adapter(),
        tree.get(node).state(),
        perspective,
        params.depth_limit,
    )?;

    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "MCTS iteration: leaf depth {} | {} plies | terminal {} | value {:.3}",
            tree.depth(node),
            outcome.plies,
            outcome.reached_terminal,
            outcome.value
        );
    }

    // 4. Backpropagation
    tree.backpropagate(node, outcome.value, perspective);
    Ok(())
}

/// Root child picked by `criterion`; ties go to the earliest expanded child.
fn best_child<A: GameStateAdapter>(
    tree: &SearchTree<'_, A>,
    criterion: FinalMoveCriterion,
) -> Option<NodeId> {
    let mut best = None;
    let mut best_key = f64::NEG_INFINITY;

    for &id in tree.get(tree.root()).children() {
        let child = tree.get(id);
        let key = match criterion {
            FinalMoveCriterion::RobustChild => child.visit_count() as f64,
            FinalMoveCriterion::MaxChild => child.mean_value(),
        };
        if best.is_none() || key > best_key {
            best_key = key;
            best = Some(id);
        }
    }

    best
}
