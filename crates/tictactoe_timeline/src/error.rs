//! Errors reported by the checked timeline operations.

use crate::Position;

/// Why a move was rejected.
///
/// Rejected moves never change the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current snapshot already has a winner or is a draw.
    #[display("Game is already over")]
    GameOver,
}

/// Why a jump through history was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested step is past the end of history.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Length of history at the time of the request.
        len: usize,
    },
}

/// Why a serialized timeline was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TimelineError {
    /// One or more timeline invariants do not hold.
    #[display("Invalid timeline: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
