//! Contract-based validation for Othello moves.
//!
//! A contract pairs a precondition on `(state, action)` with a
//! postcondition on `(before, after)`: {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{BoardInvariants, InvariantSet};
use super::rules::is_legal;
use super::Board;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::invalid(mov.position))
        }
    }
}

/// Precondition: the move captures at least one disc.
pub struct CapturesDiscs;

impl CapturesDiscs {
    /// Rejects moves that flip nothing.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if is_legal(board, mov.position, mov.player) {
            Ok(())
        } else {
            Err(MoveError::invalid(mov.position))
        }
    }
}

/// Contract for placing a disc.
///
/// Preconditions:
/// - Target cell is empty
/// - At least one run is captured
///
/// Postconditions:
/// - Exactly one more cell is occupied
/// - Board invariants that held before still hold
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        CellIsEmpty::check(action, board)?;
        CapturesDiscs::check(action, board)?;
        Ok(())
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        let grown = after.disc_count().occupied() as i64 - before.disc_count().occupied() as i64;
        if grown != 1 {
            warn!(grown, "Occupied cell count changed unexpectedly");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: occupied cells changed by {grown}"
            )));
        }

        // Positions set up by hand may start outside an invariant; only
        // regressions are violations.
        if BoardInvariants::check_all(before).is_err() {
            return Ok(());
        }
        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::rules::play;
    use crate::games::othello::{Cell, Player, Position};

    fn mov(player: Player, row: usize, col: usize) -> Move {
        Move::new(player, Position::new(row, col).unwrap())
    }

    #[test]
    fn test_precondition_legal_move() {
        let board = Board::new();
        assert!(MoveContract::pre(&board, &mov(Player::Dark, 2, 3)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let board = Board::new();
        assert_eq!(
            MoveContract::pre(&board, &mov(Player::Dark, 3, 3)),
            Err(MoveError::InvalidMove { row: 3, col: 3 })
        );
    }

    #[test]
    fn test_precondition_no_capture() {
        let board = Board::new();
        assert!(matches!(
            MoveContract::pre(&board, &mov(Player::Light, 2, 3)),
            Err(MoveError::InvalidMove { .. })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::new();
        let mut after = before.clone();
        play(&mut after, Position::new(2, 3).unwrap(), Player::Dark).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::new();
        let mut after = before.clone();
        play(&mut after, Position::new(2, 3).unwrap(), Player::Dark).unwrap();
        after.set(Position::new(0, 0).unwrap(), Cell::Light);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
