//! Match record data structures.

use crate::game::divercite::Placement;
use crate::game::player::Player;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Record of a single decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number, starting at 0
    pub turn: usize,
    pub mover: Player,
    pub placement: Placement,
    /// Search iterations behind the decision
    pub iterations: usize,
    pub root_visits: u32,
    pub elapsed_ms: u64,
    /// Decision taken without completing a single iteration
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Winner(Player),
    Draw,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Winner(player) => write!(f, "{player} wins"),
            MatchOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Complete record of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Match start timestamp (Unix seconds)
    pub timestamp: i64,
    pub board_size: usize,
    /// Hyperparameter summaries of player one and player two
    pub players: [String; 2],
    pub moves: Vec<MoveRecord>,
    /// Final scores of player one and player two
    pub final_scores: [u32; 2],
    pub outcome: MatchOutcome,
}

impl MatchRecord {
    /// Create a new record with no moves yet
    pub fn new(board_size: usize, players: [String; 2]) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp(),
            board_size,
            players,
            moves: Vec::new(),
            final_scores: [0, 0],
            outcome: MatchOutcome::Draw,
        }
    }

    pub fn record_move(&mut self, move_record: MoveRecord) {
        self.moves.push(move_record);
    }

    /// Stores the final scores and derives the outcome from them.
    pub fn finalize(&mut self, final_scores: [u32; 2]) {
        self.final_scores = final_scores;
        self.outcome = match final_scores[0].cmp(&final_scores[1]) {
            std::cmp::Ordering::Greater => MatchOutcome::Winner(Player::One),
            std::cmp::Ordering::Less => MatchOutcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        };
    }

    pub fn score(&self, player: Player) -> u32 {
        self.final_scores[player.index()]
    }

    /// Writes the record as pretty JSON, creating parent directories.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;
    use crate::game::piece::{Color, Piece};

    fn sample_record() -> MatchRecord {
        let mut record = MatchRecord::new(3, ["a".to_string(), "b".to_string()]);
        record.record_move(MoveRecord {
            turn: 0,
            mover: Player::One,
            placement: Placement::new(Piece::city(Color::Red), Cell::new(1, 1)),
            iterations: 120,
            root_visits: 120,
            elapsed_ms: 15,
            fallback: false,
        });
        record
    }

    #[test]
    fn test_finalize_outcome() {
        let mut record = sample_record();
        record.finalize([5, 2]);
        assert_eq!(record.outcome, MatchOutcome::Winner(Player::One));
        assert_eq!(record.score(Player::Two), 2);

        record.finalize([1, 3]);
        assert_eq!(record.outcome, MatchOutcome::Winner(Player::Two));

        record.finalize([4, 4]);
        assert_eq!(record.outcome, MatchOutcome::Draw);
        assert_eq!(record.outcome.to_string(), "draw");
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records").join("match.json");

        let mut record = sample_record();
        record.finalize([0, 5]);
        record.save_json(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"winner\": \"Two\""));

        let loaded = MatchRecord::load_json(&path).unwrap();
        assert_eq!(loaded, record);
    }
}
