//! Derived game outcome and status line.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// Outcome of the current snapshot. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Winner, if a line is complete.
    pub winner: Option<Player>,
    /// The completed line, if any.
    pub line: Option<[Position; 3]>,
    /// Full board without a winner.
    pub is_draw: bool,
}

impl Outcome {
    /// True once no further move can be accepted from this snapshot.
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// True when `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

/// The status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board filled with no line.
    #[display("Draw")]
    Draw,
    /// The game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}
