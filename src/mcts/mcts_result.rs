use std::time::Duration;

/// Statistics of one root child at the end of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats<M> {
    pub action: M,
    pub visits: u32,
    pub mean_value: f64,
}

/// Decision of one search together with how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub best_action: M,
    /// Completed select/expand/simulate/backpropagate cycles
    pub iterations: usize,
    pub elapsed: Duration,
    pub root_visits: u32,
    /// Nodes allocated in the tree, root included
    pub tree_size: usize,
    /// Root children in expansion order
    pub children: Vec<ChildStats<M>>,
    /// True when the budget ran out before the first iteration and the
    /// action was taken from the root's untried actions
    pub fallback: bool,
}

impl<M> SearchResult<M> {
    /// Statistics of the chosen root child, if it was expanded.
    pub fn best_child(&self) -> Option<&ChildStats<M>>
    where
        M: PartialEq,
    {
        self.children.iter().find(|c| c.action == self.best_action)
    }
}
