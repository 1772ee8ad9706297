//! Cursor invariant: the cursor always names a recorded snapshot.

use super::Invariant;
use crate::Timeline;

/// Invariant: 0 <= step < history length.
pub struct CursorInRangeInvariant;

impl Invariant<Timeline> for CursorInRangeInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.step < timeline.history.len()
    }

    fn description() -> &'static str {
        "Cursor points into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_jumps() {
        let mut timeline = Timeline::new();
        timeline.apply_move(Position::Center);
        timeline.jump_to(0);
        assert!(CursorInRangeInvariant::holds(&timeline));
        timeline.jump_to(1);
        assert!(CursorInRangeInvariant::holds(&timeline));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut timeline = Timeline::new();
        timeline.step = 1;
        assert!(!CursorInRangeInvariant::holds(&timeline));
    }
}
