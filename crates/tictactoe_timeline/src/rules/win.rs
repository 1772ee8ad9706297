//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// The player holding a complete line, if any.
    pub winner: Option<Player>,
    /// The completed line, if any.
    pub line: Option<[Position; 3]>,
}

/// Evaluates the board, returning the first completed line in [`LINES`] order.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(player) = board.get(a).player()
            && board.get(b) == board.get(a)
            && board.get(c) == board.get(a)
        {
            return Evaluation {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    Evaluation::default()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner
}
