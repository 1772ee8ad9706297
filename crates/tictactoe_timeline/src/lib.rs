//! Tic-tac-toe with move history and time-travel navigation.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation over a board snapshot
//! - **Timeline**: ordered snapshots plus a cursor; moves truncate any
//!   abandoned future before appending, jumps only move the cursor
//! - **Invariants**: properties of the timeline checked in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Player, Position, Status, Timeline};
//!
//! let mut game = Timeline::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::BottomCenter, Position::TopRight] {
//!     game.apply_move(pos);
//! }
//! assert_eq!(game.status(), Status::Winner(Player::X));
//!
//! game.jump_to(2);
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod outcome;
mod position;
mod record;
pub mod rules;
mod timeline;
mod types;

pub use error::{JumpError, MoveError, TimelineError};
pub use outcome::{Outcome, Status};
pub use position::Position;
pub use record::MoveRecord;
pub use rules::{Evaluation, evaluate};
pub use timeline::{HistoryOrder, MoveListEntry, Timeline, describe_step};
pub use types::{Board, Player, Square};
