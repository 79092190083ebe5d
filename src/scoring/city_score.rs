use crate::game::board::{Board, Cell};
use crate::game::piece::{Color, PieceKind};
use crate::game::player::Player;

/// Points for a city surrounded by four resources of four distinct colors.
pub const DIVERCITE_POINTS: u32 = 5;

/// Score of a single city: a divercite is worth [`DIVERCITE_POINTS`], otherwise
/// every neighbouring resource of the city's color is worth one point.
pub fn city_score(board: &Board, cell: Cell, city_color: Color) -> u32 {
    let mut seen = [false; 4];
    let mut resources = 0;
    let mut matching = 0;

    for neighbour in board.neighbours(cell) {
        if let Some(occupant) = board.get(neighbour) {
            if occupant.piece.kind != PieceKind::Resource {
                continue;
            }
            resources += 1;
            seen[occupant.piece.color.index()] = true;
            if occupant.piece.color == city_color {
                matching += 1;
            }
        }
    }

    if resources == 4 && seen.iter().all(|&s| s) {
        DIVERCITE_POINTS
    } else {
        matching
    }
}

/// Sum of the scores of every city `player` placed.
pub fn player_score(board: &Board, player: Player) -> u32 {
    board
        .cities()
        .filter(|(_, occupant)| occupant.owner == player)
        .map(|(cell, occupant)| city_score(board, cell, occupant.piece.color))
        .sum()
}
