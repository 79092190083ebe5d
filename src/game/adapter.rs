//! Capability interface between the search engine and a game's rules.
//!
//! The engine never inspects a state or an action; everything it knows about
//! the game goes through [`GameStateAdapter`]. States are values: applying an
//! action yields a new state and leaves the original untouched, which keeps
//! tree branches independent of each other.

use crate::Result;
use std::fmt::Debug;

/// A snapshot of a game position.
pub trait GameState: Clone {
    /// Identity of a player.
    type PlayerId: Copy + Eq + Debug;

    /// The player whose turn it is in this state.
    fn next_player(&self) -> Self::PlayerId;
}

/// Rules of a two-player, perfect-information, turn-based game.
pub trait GameStateAdapter {
    type State: GameState;
    type Action: Clone + PartialEq + Debug;

    /// Legal actions for the player to move. The content must be deterministic
    /// for a given state; an empty list means the mover cannot play.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Returns the successor state. Fails with
    /// [`DiverciteError::InvalidAction`](crate::DiverciteError::InvalidAction)
    /// when `action` is not legal in `state`.
    fn apply_action(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Raw score of `player` in `state`, terminal or not. Higher is better.
    fn score_for_player(&self, state: &Self::State, player: PlayerOf<Self>) -> f64;

    /// The other player.
    fn opponent(&self, player: PlayerOf<Self>) -> PlayerOf<Self>;
}

/// Player identity type of an adapter's states.
pub type PlayerOf<A> = <<A as GameStateAdapter>::State as GameState>::PlayerId;

/// Score of `player` minus the score of its opponent.
pub fn score_margin<A: GameStateAdapter + ?Sized>(
    adapter: &A,
    state: &A::State,
    player: PlayerOf<A>,
) -> f64 {
    adapter.score_for_player(state, player) - adapter.score_for_player(state, adapter.opponent(player))
}
