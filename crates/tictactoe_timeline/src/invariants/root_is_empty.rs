//! Root invariant: history starts from the empty board.

use super::Invariant;
use crate::{Board, Timeline};

/// Invariant: history[0] is the empty board with no position played.
pub struct RootIsEmptyInvariant;

impl Invariant<Timeline> for RootIsEmptyInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .first()
            .is_some_and(|root| root.position().is_none() && *root.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveRecord, Player, Position, Square};

    #[test]
    fn test_new_timeline_holds() {
        assert!(RootIsEmptyInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_missing_root_violates() {
        let mut timeline = Timeline::new();
        timeline.history.clear();
        assert!(!RootIsEmptyInvariant::holds(&timeline));
    }

    #[test]
    fn test_root_with_position_violates() {
        let mut timeline = Timeline::new();
        timeline.history[0] = MoveRecord::root().successor(Position::Center, Square::Occupied(Player::X));
        assert!(!RootIsEmptyInvariant::holds(&timeline));
    }
}
