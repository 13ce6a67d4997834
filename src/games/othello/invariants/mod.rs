//! First-class invariants for Othello boards.
//!
//! Invariants are properties every reachable board satisfies. They are
//! checked after each committed move in debug builds and tested on their own.

pub mod center_occupied;
pub mod disc_total;

pub use center_occupied::CenterOccupiedInvariant;
pub use disc_total::DiscTotalInvariant;

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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
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

/// All board invariants as a composable set.
pub type BoardInvariants = (DiscTotalInvariant, CenterOccupiedInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::rules::play;
    use crate::games::othello::{Board, Cell, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_opening() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = Board::new();
        for (r, c, player) in [(2, 3, Player::Dark), (2, 2, Player::Light), (2, 1, Player::Dark)] {
            play(&mut board, Position::new(r, c).unwrap(), player).unwrap();
        }
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_violations() {
        let mut board = Board::new();
        board.set(Position::new(3, 3).unwrap(), Cell::Empty);

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            CenterOccupiedInvariant::description()
        );
    }
}
