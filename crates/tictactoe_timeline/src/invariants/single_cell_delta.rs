//! Delta invariant: each ply fills exactly one empty cell for the right player.

use super::Invariant;
use crate::{Player, Square, Timeline};

/// Invariant: record k differs from record k-1 only at `position`, which
/// went from empty to the mark of the player due at step k-1.
pub struct SingleCellDeltaInvariant;

impl Invariant<Timeline> for SingleCellDeltaInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let Some(pos) = after.position() else {
                    return false;
                };
                let mover = if prev_step % 2 == 0 { Player::X } else { Player::O };

                let changed = before
                    .board()
                    .squares()
                    .iter()
                    .zip(after.board().squares())
                    .filter(|(a, b)| a != b)
                    .count();

                changed == 1
                    && before.board().get(pos) == Square::Empty
                    && after.board().get(pos) == Square::Occupied(mover)
            })
    }

    fn description() -> &'static str {
        "Each step fills exactly one empty cell for the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_played_game_holds() {
        let mut timeline = Timeline::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            timeline.apply_move(pos);
        }
        assert!(SingleCellDeltaInvariant::holds(&timeline));
    }

    #[test]
    fn test_extra_cell_violates() {
        let mut timeline = Timeline::new();
        timeline.apply_move(Position::Center);
        timeline.history[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!SingleCellDeltaInvariant::holds(&timeline));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let mut timeline = Timeline::new();
        timeline.apply_move(Position::Center);
        timeline.history[1]
            .board
            .set(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleCellDeltaInvariant::holds(&timeline));
    }
}
