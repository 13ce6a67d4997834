//! First-class action types for Othello.
//!
//! A move is a domain event: a player's intent to place a disc. It can be
//! validated against a board before it is applied.

use super::{Phase, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing a disc at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the disc is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable; the board is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell occupied, off the board, or capturing nothing.
    #[display("Invalid move at ({}, {})", row, col)]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Operation not allowed in the current phase.
    #[display("Not allowed while {}", phase)]
    WrongPhase {
        /// Phase at the time of the request.
        phase: Phase,
    },

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl MoveError {
    /// Invalid-move error for a position.
    pub fn invalid(position: Position) -> Self {
        MoveError::InvalidMove {
            row: position.row(),
            col: position.col(),
        }
    }
}
