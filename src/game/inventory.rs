use crate::game::piece::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// Pieces a player still holds, counted per kind and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    cities: [u8; 4],
    resources: [u8; 4],
}

impl Inventory {
    pub fn new(cities_per_color: u8, resources_per_color: u8) -> Self {
        Inventory {
            cities: [cities_per_color; 4],
            resources: [resources_per_color; 4],
        }
    }

    pub fn count(&self, piece: Piece) -> u8 {
        match piece.kind {
            PieceKind::City => self.cities[piece.color.index()],
            PieceKind::Resource => self.resources[piece.color.index()],
        }
    }

    pub fn has(&self, piece: Piece) -> bool {
        self.count(piece) > 0
    }

    /// Removes one `piece`; returns `false` when none is left.
    pub fn take(&mut self, piece: Piece) -> bool {
        let slot = match piece.kind {
            PieceKind::City => &mut self.cities[piece.color.index()],
            PieceKind::Resource => &mut self.resources[piece.color.index()],
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Pieces of `kind` still available, in [`Color::ALL`] order.
    pub fn available(&self, kind: PieceKind) -> impl Iterator<Item = Piece> + '_ {
        Color::ALL
            .into_iter()
            .map(move |color| Piece { kind, color })
            .filter(move |&piece| self.has(piece))
    }

    pub fn total(&self) -> u32 {
        self.cities
            .iter()
            .chain(self.resources.iter())
            .map(|&n| n as u32)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_until_exhausted() {
        let mut inventory = Inventory::new(1, 2);
        let red_city = Piece::city(Color::Red);

        assert!(inventory.take(red_city));
        assert!(!inventory.has(red_city));
        assert!(!inventory.take(red_city));
        assert_eq!(inventory.total(), 3 + 8);
    }

    #[test]
    fn test_available_skips_missing_colors() {
        let mut inventory = Inventory::new(1, 0);
        inventory.take(Piece::city(Color::Green));

        let cities: Vec<Piece> = inventory.available(PieceKind::City).collect();
        assert_eq!(
            cities,
            vec![
                Piece::city(Color::Red),
                Piece::city(Color::Blue),
                Piece::city(Color::Yellow)
            ]
        );
        assert_eq!(inventory.available(PieceKind::Resource).count(), 0);
    }
}
