//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. The timeline calls
//! these on every read so derived values never go stale.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Evaluation, LINES, check_winner, evaluate};
