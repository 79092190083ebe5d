//! Reduced Divercite ruleset.
//!
//! Two players alternately place one piece from their own inventory: cities on
//! city slots, resources on resource slots. A city scores for the player who
//! placed it (see [`crate::scoring::city_score`]). The game ends when the board
//! is full, when the move limit is reached, or when the mover has nothing left
//! to place.

use crate::game::adapter::{GameState, GameStateAdapter};
use crate::game::board::{Board, Cell, Occupant};
use crate::game::inventory::Inventory;
use crate::game::piece::Piece;
use crate::game::player::Player;
use crate::scoring::city_score::player_score;
use crate::{DiverciteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Put `piece` on `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub piece: Piece,
    pub cell: Cell,
}

impl Placement {
    pub fn new(piece: Piece, cell: Cell) -> Self {
        Placement { piece, cell }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.piece, self.cell)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiverciteState {
    board: Board,
    inventories: [Inventory; 2],
    next: Player,
    moves_played: usize,
}

impl DiverciteState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn inventory(&self, player: Player) -> &Inventory {
        &self.inventories[player.index()]
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn score(&self, player: Player) -> u32 {
        player_score(&self.board, player)
    }
}

impl GameState for DiverciteState {
    type PlayerId = Player;

    fn next_player(&self) -> Player {
        self.next
    }
}

impl fmt::Display for DiverciteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(
            f,
            "move {} | {} to play | score P1 {} - P2 {} | pieces left P1 {} / P2 {}",
            self.moves_played,
            self.next,
            self.score(Player::One),
            self.score(Player::Two),
            self.inventory(Player::One).total(),
            self.inventory(Player::Two).total(),
        )
    }
}

/// Board dimensions, inventories and move limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiverciteRules {
    pub board_size: usize,
    pub cities_per_color: u8,
    pub resources_per_color: u8,
    pub max_moves: usize,
}

impl Default for DiverciteRules {
    fn default() -> Self {
        Self {
            board_size: 7,
            cities_per_color: 2,
            resources_per_color: 3,
            max_moves: 40,
        }
    }
}

impl DiverciteRules {
    /// Default inventories and move limit on a `board_size` board.
    pub fn with_board_size(board_size: usize) -> Result<Self> {
        let rules = Self {
            board_size,
            ..Self::default()
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        if self.board_size < 3 || self.board_size % 2 == 0 {
            return Err(DiverciteError::Config(format!(
                "board size must be odd and at least 3, got {}",
                self.board_size
            )));
        }
        if self.max_moves == 0 {
            return Err(DiverciteError::Config("max_moves must be positive".to_string()));
        }
        Ok(())
    }

    /// Empty board, full inventories, player one to move.
    pub fn initial_state(&self) -> DiverciteState {
        let inventory = Inventory::new(self.cities_per_color, self.resources_per_color);
        DiverciteState {
            board: Board::new(self.board_size),
            inventories: [inventory.clone(), inventory],
            next: Player::One,
            moves_played: 0,
        }
    }

    fn check_placement(&self, state: &DiverciteState, placement: &Placement) -> Result<()> {
        let cell = placement.cell;
        let slot = state.board.slot_kind(cell);
        if slot.accepts() != Some(placement.piece.kind) {
            return Err(DiverciteError::InvalidAction(format!(
                "{placement}: slot does not accept this piece"
            )));
        }
        if !state.board.is_empty_at(cell) {
            return Err(DiverciteError::InvalidAction(format!(
                "{placement}: cell is occupied"
            )));
        }
        if !state.inventory(state.next).has(placement.piece) {
            return Err(DiverciteError::InvalidAction(format!(
                "{placement}: {} has no such piece left",
                state.next
            )));
        }
        Ok(())
    }

    fn placements_for_cell<'a>(
        &self,
        state: &'a DiverciteState,
        cell: Cell,
    ) -> impl Iterator<Item = Placement> + 'a {
        let inventory = state.inventory(state.next);
        state
            .board
            .slot_kind(cell)
            .accepts()
            .into_iter()
            .flat_map(move |kind| inventory.available(kind))
            .map(move |piece| Placement::new(piece, cell))
    }

    fn has_legal_action(&self, state: &DiverciteState) -> bool {
        state
            .board
            .empty_slots()
            .any(|cell| self.placements_for_cell(state, cell).next().is_some())
    }
}

impl GameStateAdapter for DiverciteRules {
    type State = DiverciteState;
    type Action = Placement;

    fn legal_actions(&self, state: &DiverciteState) -> Vec<Placement> {
        if state.moves_played >= self.max_moves {
            return Vec::new();
        }
        state
            .board
            .empty_slots()
            .flat_map(|cell| self.placements_for_cell(state, cell))
            .collect()
    }

    fn apply_action(&self, state: &DiverciteState, action: &Placement) -> Result<DiverciteState> {
        if state.moves_played >= self.max_moves {
            return Err(DiverciteError::InvalidAction(format!(
                "{action}: move limit of {} reached",
                self.max_moves
            )));
        }
        self.check_placement(state, action)?;

        let mover = state.next;
        let mut next = state.clone();
        next.inventories[mover.index()].take(action.piece);
        next.board.place(
            action.cell,
            Occupant {
                piece: action.piece,
                owner: mover,
            },
        );
        next.next = mover.opponent();
        next.moves_played += 1;
        Ok(next)
    }

    fn is_terminal(&self, state: &DiverciteState) -> bool {
        state.moves_played >= self.max_moves
            || state.board.is_full()
            || !self.has_legal_action(state)
    }

    fn score_for_player(&self, state: &DiverciteState, player: Player) -> f64 {
        state.score(player) as f64
    }

    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }
}
