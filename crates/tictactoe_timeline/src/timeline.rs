//! The game state machine: an ordered history of snapshots and a cursor into it.
//!
//! Moves truncate any history past the cursor before appending, so jumping
//! back and playing discards the abandoned branch. Jumps only move the
//! cursor. Turn, outcome and move-list text are all derived on read.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules;
use crate::{
    Board, JumpError, MoveError, MoveRecord, Outcome, Player, Position, Square, Status,
    TimelineError,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }

    /// Label for the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            HistoryOrder::Ascending => "Sort descending",
            HistoryOrder::Descending => "Sort ascending",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this row jumps to.
    pub step: usize,
    /// Cell played at this step (`None` for the game start).
    pub position: Option<Position>,
    /// Human-readable label.
    pub description: String,
    /// Whether the cursor currently sits on this step.
    pub is_current: bool,
}

/// Describes a history step for the move list.
pub fn describe_step(step: usize, position: Option<Position>) -> String {
    match position {
        Some(pos) if step > 0 => {
            format!("Go to move #{} (row {}, col {})", step, pos.row(), pos.column())
        }
        _ => "Go to game start".to_string(),
    }
}

/// Tic-tac-toe game with navigable history.
///
/// Deserialization checks the timeline invariants, so a decoded timeline
/// always has a root record and a cursor inside history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct Timeline {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) step: usize,
    order: HistoryOrder,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::default())
    }

    /// Creates a timeline whose move list starts in the given order.
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: vec![MoveRecord::root()],
            step: 0,
            order,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the root record is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the snapshot being viewed.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step]
    }

    /// Board of the snapshot being viewed.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Current move-list order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Player to move from the current snapshot: X on even steps, O on odd.
    pub fn next_player(&self) -> Player {
        if self.step % 2 == 0 { Player::X } else { Player::O }
    }

    /// Evaluates the current snapshot.
    pub fn current_outcome(&self) -> Outcome {
        let board = self.current_board();
        let eval = rules::evaluate(board);
        Outcome {
            winner: eval.winner,
            line: eval.line,
            is_draw: rules::is_draw(board),
        }
    }

    /// Status line for the current snapshot.
    pub fn status(&self) -> Status {
        let outcome = self.current_outcome();
        match outcome.winner {
            Some(player) => Status::Winner(player),
            None if outcome.is_draw => Status::Draw,
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Plays `pos` for the player to move, reporting why a move was rejected.
    ///
    /// On success any history past the cursor is discarded, the new snapshot
    /// is appended and the cursor moves onto it. Returns the new step.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current snapshot is won or drawn.
    /// - [`MoveError::SquareOccupied`] if `pos` is already taken.
    ///
    /// The timeline is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn try_move(&mut self, pos: Position) -> Result<usize, MoveError> {
        if self.current_outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.current_board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let record = self
            .current()
            .successor(pos, Square::Occupied(self.next_player()));
        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history.push(record);
        self.step = self.history.len() - 1;

        debug!(new_step = self.step, discarded, "Move accepted");
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "timeline invariants violated after move"
        );

        Ok(self.step)
    }

    /// Plays `pos` for the player to move. Rejected moves are silent no-ops.
    pub fn apply_move(&mut self, pos: Position) {
        if let Err(e) = self.try_move(pos) {
            debug!(position = %pos, error = %e, "Move ignored");
        }
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into history. Use
    /// [`Timeline::try_jump_to`] for unchecked input.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump target {step} outside history of length {}",
            self.history.len()
        );
        self.step = step;
    }

    /// Moves the cursor to `step`, rejecting out-of-range targets.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step >= len()`; the cursor
    /// is left where it was.
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.jump_to(step);
        Ok(())
    }

    /// Flips the move-list order. History and cursor are untouched.
    pub fn toggle_history_order(&mut self) {
        self.order = self.order.toggled();
        debug!(order = ?self.order, "History order toggled");
    }

    /// The move list in display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(step, record)| MoveListEntry {
                step,
                position: record.position(),
                description: describe_step(step, record.position()),
                is_current: step == self.step,
            });

        match self.order {
            HistoryOrder::Ascending => entries.collect(),
            HistoryOrder::Descending => entries.rev().collect(),
        }
    }
}

/// Unchecked wire form of [`Timeline`].
#[derive(Deserialize)]
struct RawTimeline {
    history: Vec<MoveRecord>,
    step: usize,
    order: HistoryOrder,
}

impl TryFrom<RawTimeline> for Timeline {
    type Error = TimelineError;

    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let timeline = Timeline {
            history: raw.history,
            step: raw.step,
            order: raw.order,
        };
        TimelineInvariants::check_all(&timeline).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            TimelineError::InvariantViolation(descriptions)
        })?;
        Ok(timeline)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
