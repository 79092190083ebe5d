//! Search tree nodes.
//!
//! Nodes live in an arena owned by [`SearchTree`] and refer to each other by
//! [`NodeId`]. A node owns its children through the arena; the parent link is
//! a plain index used only to walk back to the root during backpropagation.
//! Dropping the tree frees every node.

use crate::game::adapter::{GameState, GameStateAdapter, PlayerOf};
use crate::mcts::selection::{select_ucb1, ChildStatistics};
use crate::Result;

/// Index of a node in its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the MCTS tree
pub struct TreeNode<A: GameStateAdapter> {
    /// Game state this node represents
    state: A::State,

    /// Parent node (None for the root)
    parent: Option<NodeId>,

    /// Action that produced this node from its parent (None for the root)
    incoming_action: Option<A::Action>,

    /// Children in expansion order
    children: Vec<NodeId>,

    visit_count: u32,

    /// Sum of the results credited to this node
    win_accumulator: f64,

    /// Legal actions not yet expanded into children
    untried_actions: Vec<A::Action>,

    /// Player who moved into this node
    owner: PlayerOf<A>,

    terminal: bool,
}

impl<A: GameStateAdapter> TreeNode<A> {
    fn new(
        adapter: &A,
        state: A::State,
        parent: Option<NodeId>,
        incoming_action: Option<A::Action>,
        owner: PlayerOf<A>,
    ) -> Self {
        let terminal = adapter.is_terminal(&state);
        let untried_actions = if terminal {
            Vec::new()
        } else {
            adapter.legal_actions(&state)
        };

        TreeNode {
            state,
            parent,
            incoming_action,
            children: Vec::new(),
            visit_count: 0,
            win_accumulator: 0.0,
            untried_actions,
            owner,
            terminal,
        }
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn incoming_action(&self) -> Option<&A::Action> {
        self.incoming_action.as_ref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn visit_count(&self) -> u32 {
        self.visit_count
    }

    pub fn win_accumulator(&self) -> f64 {
        self.win_accumulator
    }

    /// Returns the average credited result of this node
    pub fn mean_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.win_accumulator / self.visit_count as f64
        }
    }

    pub fn untried_actions(&self) -> &[A::Action] {
        &self.untried_actions
    }

    pub fn owner(&self) -> PlayerOf<A> {
        self.owner
    }

    /// Checks if every legal action has been expanded into a child
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty()
    }

    /// Checks if this is a terminal node (game over), as reported by the adapter
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Arena holding every node of one search.
pub struct SearchTree<'a, A: GameStateAdapter> {
    adapter: &'a A,
    nodes: Vec<TreeNode<A>>,
}

impl<'a, A: GameStateAdapter> SearchTree<'a, A> {
    /// Creates a tree holding only the root.
    ///
    /// Nobody moved into the root, so its owner is the opponent of the player
    /// to move; children of the root are owned by the root's mover.
    pub fn new(adapter: &'a A, root_state: A::State) -> Self {
        let owner = adapter.opponent(root_state.next_player());
        let root = TreeNode::new(adapter, root_state, None, None, owner);
        SearchTree {
            adapter,
            nodes: vec![root],
        }
    }

    pub fn adapter(&self) -> &'a A {
        self.adapter
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &TreeNode<A> {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root exists from construction on.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a child of `parent` for `state`, reached by `action`.
    ///
    /// `action` is removed from the parent's untried actions when present;
    /// an absent action is not an error.
    pub fn add_child(&mut self, parent: NodeId, state: A::State, action: A::Action) -> NodeId {
        let owner = self.nodes[parent.0].state.next_player();

        let untried = &mut self.nodes[parent.0].untried_actions;
        if let Some(position) = untried.iter().position(|a| *a == action) {
            untried.remove(position);
        }

        let child = TreeNode::new(self.adapter, state, Some(parent), Some(action), owner);
        let id = NodeId(self.nodes.len());
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Expands `id` by one child, using its last untried action.
    ///
    /// Returns `id` itself when the node is terminal or has nothing left to
    /// expand. Errors from the adapter propagate and leave the node unchanged.
    pub fn expand(&mut self, id: NodeId) -> Result<NodeId> {
        let node = &mut self.nodes[id.0];
        if node.terminal {
            return Ok(id);
        }
        let Some(action) = node.untried_actions.pop() else {
            return Ok(id);
        };

        let next_state = match self.adapter.apply_action(&node.state, &action) {
            Ok(state) => state,
            Err(e) => {
                node.untried_actions.push(action);
                return Err(e);
            }
        };

        Ok(self.add_child(id, next_state, action))
    }

    /// UCB1 choice among the children of `id`.
    ///
    /// Callers must only select from nodes that have children.
    pub fn select_child(&self, id: NodeId, exploration_weight: f64) -> Option<NodeId> {
        let node = self.get(id);
        debug_assert!(
            !node.children.is_empty(),
            "select_child called on a node without children"
        );

        let statistics = node.children.iter().map(|&child| {
            let child = self.get(child);
            ChildStatistics {
                visits: child.visit_count,
                wins: child.win_accumulator,
            }
        });

        select_ucb1(statistics, node.visit_count, exploration_weight).map(|i| node.children[i])
    }

    /// Credits `result` (seen from `perspective`) to `id` and all its ancestors.
    ///
    /// Nodes owned by `perspective` receive `result`, the others `1 - result`.
    pub fn backpropagate(&mut self, id: NodeId, result: f64, perspective: PlayerOf<A>) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.nodes[node_id.0];
            node.visit_count += 1;
            node.win_accumulator += if node.owner == perspective {
                result
            } else {
                1.0 - result
            };
            current = node.parent;
        }
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent).parent;
        }
        depth
    }
}
