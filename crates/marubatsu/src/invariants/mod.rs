//! First-class invariants for the game's history model.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. Each is testable on its own and serves as documentation
//! of what the history model guarantees.

mod seeded_root;
mod single_cell_delta;
mod turn_parity;

pub use seeded_root::SeededRootInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use turn_parity::TurnParityInvariant;

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
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All history-model invariants as a composable set.
pub type HistoryInvariants = (
    SeededRootInvariant,
    SingleCellDeltaInvariant,
    TurnParityInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_play_and_jumps() {
        let mut game = Game::new();
        for pos in [
            Position::Center,
            Position::TopLeft,
            Position::BottomRight,
            Position::TopRight,
        ] {
            game.place(pos).unwrap();
            assert!(HistoryInvariants::check_all(&game).is_ok());
        }

        game.jump_to(2);
        assert!(HistoryInvariants::check_all(&game).is_ok());

        // Branch off the earlier step; truncation must not break anything.
        game.place(Position::MiddleLeft).unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();
        type TwoInvariants = (SeededRootInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
