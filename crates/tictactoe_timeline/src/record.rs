//! A single snapshot in the move history.

use crate::{Board, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One entry of the timeline: the board after a ply and the cell that ply filled.
///
/// The root record holds the empty board and no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveRecord {
    /// Board snapshot at this step.
    pub(crate) board: Board,
    /// Cell filled by the ply that produced this snapshot.
    #[getter(skip)]
    pub(crate) position: Option<Position>,
}

impl MoveRecord {
    /// The empty-board record every timeline starts from.
    pub fn root() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Cell filled by the ply that produced this snapshot.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Derives the next record by writing `square` at `position`.
    pub(crate) fn successor(&self, position: Position, square: Square) -> Self {
        let mut board = self.board.clone();
        board.set(position, square);
        Self {
            board,
            position: Some(position),
        }
    }
}
