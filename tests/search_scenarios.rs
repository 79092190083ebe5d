//! Engine behaviour on small hand-built game trees.

use assert_matches::assert_matches;
use divercite_mcts::{
    DecisionAgent, DiverciteError, GameState, GameStateAdapter, MCTSEngine, MCTSHyperparameters,
    Result, SearchBudget,
};
use std::collections::HashMap;
use std::time::Duration;

/// Position in an explicit game tree.
#[derive(Debug, Clone, PartialEq)]
struct TreeState {
    node: usize,
    mover: u8,
}

impl GameState for TreeState {
    type PlayerId = u8;

    fn next_player(&self) -> u8 {
        self.mover
    }
}

/// A game given as a list of successors per node and final scores per leaf.
#[derive(Default)]
struct TreeGame {
    successors: HashMap<usize, Vec<usize>>,
    leaf_scores: HashMap<usize, [f64; 2]>,
    reject_every_action: bool,
    never_terminal: bool,
}

impl TreeGame {
    fn new(edges: Vec<(usize, Vec<usize>)>, leaves: Vec<(usize, [f64; 2])>) -> Self {
        TreeGame {
            successors: edges.into_iter().collect(),
            leaf_scores: leaves.into_iter().collect(),
            ..Default::default()
        }
    }

    fn root(&self) -> TreeState {
        TreeState { node: 0, mover: 0 }
    }
}

impl GameStateAdapter for TreeGame {
    type State = TreeState;
    type Action = usize;

    fn legal_actions(&self, state: &TreeState) -> Vec<usize> {
        self.successors.get(&state.node).cloned().unwrap_or_default()
    }

    fn apply_action(&self, state: &TreeState, action: &usize) -> Result<TreeState> {
        if self.reject_every_action || !self.legal_actions(state).contains(action) {
            return Err(DiverciteError::InvalidAction(format!(
                "{} is not reachable from {}",
                action, state.node
            )));
        }
        Ok(TreeState {
            node: *action,
            mover: 1 - state.mover,
        })
    }

    fn is_terminal(&self, state: &TreeState) -> bool {
        !self.never_terminal && self.legal_actions(state).is_empty()
    }

    fn score_for_player(&self, state: &TreeState, player: u8) -> f64 {
        self.leaf_scores
            .get(&state.node)
            .map(|scores| scores[player as usize])
            .unwrap_or(0.0)
    }

    fn opponent(&self, player: u8) -> u8 {
        1 - player
    }
}

fn engine(game: TreeGame) -> MCTSEngine<TreeGame> {
    MCTSEngine::new(game, MCTSHyperparameters::default().with_seed(17)).unwrap()
}

#[test]
fn test_single_winning_action_is_returned() {
    let game = TreeGame::new(vec![(0, vec![1])], vec![(1, [1.0, 0.0])]);
    let root = game.root();
    let mut engine = engine(game);

    let result = engine
        .search_with_stats(root, SearchBudget::iterations(10))
        .unwrap();
    assert_eq!(result.best_action, 1);
    assert_eq!(result.root_visits, 10);
    assert_eq!(result.children.len(), 1);
    assert_eq!(result.children[0].visits, 10);
    assert_eq!(result.children[0].mean_value, 1.0);
}

#[test]
fn test_winning_action_gets_more_visits() {
    let game = TreeGame::new(vec![(0, vec![1, 2])], vec![(1, [3.0, 1.0]), (2, [0.0, 2.0])]);
    let root = game.root();
    let mut engine = engine(game);

    let result = engine
        .search_with_stats(root, SearchBudget::iterations(20))
        .unwrap();
    let win = result.children.iter().find(|c| c.action == 1).unwrap();
    let loss = result.children.iter().find(|c| c.action == 2).unwrap();

    assert!(win.visits >= loss.visits);
    assert_eq!(win.mean_value, 1.0);
    assert_eq!(loss.mean_value, 0.0);
    assert_eq!(result.best_action, 1);
}

#[test]
fn test_opponent_reply_is_taken_into_account() {
    // Node 1 looks good only if the opponent blunders into 3; node 2 is a safe draw.
    let game = TreeGame::new(
        vec![(0, vec![1, 2]), (1, vec![3, 4]), (2, vec![5])],
        vec![(3, [1.0, 0.0]), (4, [0.0, 1.0]), (5, [0.0, 0.0])],
    );
    let root = game.root();
    let mut engine = engine(game);

    let result = engine
        .search_with_stats(root, SearchBudget::iterations(200))
        .unwrap();
    assert_eq!(result.best_action, 2);
    // Root, two children and three grandchildren.
    assert_eq!(result.tree_size, 6);
}

#[test]
fn test_terminal_root_is_rejected() {
    let game = TreeGame::new(vec![], vec![(0, [1.0, 1.0])]);
    let root = game.root();
    let mut engine = engine(game);

    assert_matches!(
        engine.search(root, SearchBudget::iterations(10)),
        Err(DiverciteError::NoLegalAction)
    );
}

#[test]
fn test_moveless_root_is_rejected() {
    let game = TreeGame {
        never_terminal: true,
        ..Default::default()
    };
    let root = game.root();
    let mut agent = DecisionAgent::new(game, MCTSHyperparameters::default()).unwrap();

    assert_matches!(
        agent.decide(&root, Duration::from_millis(10)),
        Err(DiverciteError::NoLegalAction)
    );
}

#[test]
fn test_adapter_errors_propagate() {
    let mut game = TreeGame::new(vec![(0, vec![1, 2])], vec![]);
    game.reject_every_action = true;
    let root = game.root();
    let mut engine = engine(game);

    assert_matches!(
        engine.search(root, SearchBudget::iterations(5)),
        Err(DiverciteError::InvalidAction(_))
    );
}

#[test]
fn test_time_budget_stops_the_search() {
    let game = TreeGame::new(vec![(0, vec![1, 2])], vec![(1, [1.0, 0.0]), (2, [0.0, 0.0])]);
    let root = game.root();
    let mut engine = engine(game);

    let result = engine
        .search_with_stats(root, SearchBudget::time(Duration::from_millis(20)))
        .unwrap();
    assert!(result.iterations > 0);
    assert!(result.elapsed >= Duration::from_millis(20));
    assert_eq!(result.best_action, 1);
}
