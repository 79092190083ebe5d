//! Match records written by the CLI.
//!
//! A [`MatchRecord`] captures every decision of a finished match together
//! with the search statistics behind it, and serialises to pretty JSON.

pub mod match_record;

pub use match_record::{MatchOutcome, MatchRecord, MoveRecord};
