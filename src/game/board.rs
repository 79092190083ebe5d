//! Square Divercite board.
//!
//! Cells whose row and column are both odd are city slots; cells whose
//! coordinates sum to an odd number are resource slots; the remaining cells
//! are void. On an odd-sized board every city slot has four orthogonal
//! resource neighbours.
//!
//! ```text
//!     0 1 2 3 4
//!  0  . r . r .
//!  1  r C r C r
//!  2  . r . r .
//!  3  r C r C r
//!  4  . r . r .
//! ```

use crate::game::piece::{Piece, PieceKind};
use crate::game::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    City,
    Resource,
    Void,
}

impl SlotKind {
    /// Kind of piece that may occupy this slot.
    pub fn accepts(self) -> Option<PieceKind> {
        match self {
            SlotKind::City => Some(PieceKind::City),
            SlotKind::Resource => Some(PieceKind::Resource),
            SlotKind::Void => None,
        }
    }
}

/// A placed piece and the player who placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub piece: Piece,
    pub owner: Player,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Occupant>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    pub fn slot_kind(&self, cell: Cell) -> SlotKind {
        if !self.contains(cell) {
            SlotKind::Void
        } else if cell.row % 2 == 1 && cell.col % 2 == 1 {
            SlotKind::City
        } else if (cell.row + cell.col) % 2 == 1 {
            SlotKind::Resource
        } else {
            SlotKind::Void
        }
    }

    pub fn get(&self, cell: Cell) -> Option<&Occupant> {
        if !self.contains(cell) {
            return None;
        }
        self.cells[cell.row * self.size + cell.col].as_ref()
    }

    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.contains(cell) && self.get(cell).is_none()
    }

    /// Writes `occupant` into `cell`. Callers validate the placement first.
    pub(crate) fn place(&mut self, cell: Cell, occupant: Occupant) {
        let index = cell.row * self.size + cell.col;
        self.cells[index] = Some(occupant);
    }

    /// All non-void cells in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size)
            .flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
            .filter(move |&cell| self.slot_kind(cell) != SlotKind::Void)
    }

    pub fn empty_slots(&self) -> impl Iterator<Item = Cell> + '_ {
        self.slots().filter(move |&cell| self.get(cell).is_none())
    }

    pub fn is_full(&self) -> bool {
        self.empty_slots().next().is_none()
    }

    /// Orthogonal neighbours inside the board.
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let Cell { row, col } = cell;
        [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            Some(Cell::new(row + 1, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            Some(Cell::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |&n| self.contains(n))
    }

    /// Placed cities with their cells.
    pub fn cities(&self) -> impl Iterator<Item = (Cell, &Occupant)> + '_ {
        self.slots().filter_map(move |cell| match self.get(cell) {
            Some(occupant) if occupant.piece.kind == PieceKind::City => Some((cell, occupant)),
            _ => None,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>3}", row)?;
            for col in 0..self.size {
                let cell = Cell::new(row, col);
                let text = match (self.slot_kind(cell), self.get(cell)) {
                    (SlotKind::Void, _) => "   ".to_string(),
                    (SlotKind::City, None) => "  o".to_string(),
                    (SlotKind::Resource, None) => "  .".to_string(),
                    (_, Some(occupant)) => match occupant.piece.kind {
                        PieceKind::City => format!(
                            " {}{}",
                            occupant.piece.color.symbol(),
                            occupant.owner.index() + 1
                        ),
                        PieceKind::Resource => format!(
                            "  {}",
                            occupant.piece.color.symbol().to_ascii_lowercase()
                        ),
                    },
                };
                f.write_str(&text)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
