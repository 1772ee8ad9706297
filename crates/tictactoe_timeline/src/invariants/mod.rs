//! First-class invariants over the timeline.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds and tested independently.

pub mod cursor_in_range;
pub mod root_is_empty;
pub mod single_cell_delta;

pub use cursor_in_range::CursorInRangeInvariant;
pub use root_is_empty::RootIsEmptyInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    RootIsEmptyInvariant,
    SingleCellDeltaInvariant,
    CursorInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square, Timeline};

    #[test]
    fn test_invariant_set_holds_for_new_timeline() {
        assert!(TimelineInvariants::check_all(&Timeline::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut timeline = Timeline::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            timeline.apply_move(pos);
        }
        timeline.jump_to(1);
        timeline.apply_move(Position::BottomRight);
        assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut timeline = Timeline::new();
        timeline.apply_move(Position::Center);
        timeline.history[0]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));
        timeline.step = 5;

        let violations = TimelineInvariants::check_all(&timeline).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (RootIsEmptyInvariant, CursorInRangeInvariant);
        assert!(TwoInvariants::check_all(&Timeline::new()).is_ok());
    }
}
