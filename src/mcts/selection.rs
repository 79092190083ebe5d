//! UCB1 selection policy.
//!
//! Formula: wins / visits + c × sqrt(ln(N_parent) / visits)
//!
//! A child that has never been visited is selected before any visited one, so
//! every child gets one sample before exploitation can dominate.

/// Statistics of one child as seen by the selection policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildStatistics {
    pub visits: u32,
    pub wins: f64,
}

/// UCB1 value of a child that has been visited at least once.
pub fn ucb1_score(child: ChildStatistics, parent_visits: u32, exploration_weight: f64) -> f64 {
    let visits = child.visits as f64;
    let exploitation = child.wins / visits;
    let exploration = exploration_weight * ((parent_visits.max(1) as f64).ln() / visits).sqrt();
    exploitation + exploration
}

/// Selects the child to descend into.
///
/// # Returns
/// Index of the first unvisited child if there is one, otherwise the index of
/// the first child with the highest UCB1 value; `None` when there are no children
pub fn select_ucb1<I>(children: I, parent_visits: u32, exploration_weight: f64) -> Option<usize>
where
    I: IntoIterator<Item = ChildStatistics>,
{
    let mut best_index = None;
    let mut best_ucb = f64::NEG_INFINITY;

    for (i, child) in children.into_iter().enumerate() {
        if child.visits == 0 {
            return Some(i);
        }

        let ucb = ucb1_score(child, parent_visits, exploration_weight);
        if best_index.is_none() || ucb > best_ucb {
            best_ucb = ucb;
            best_index = Some(i);
        }
    }

    best_index
}
