//! Othello: board, rules, search, and the turn controller.

mod action;
mod contracts;
mod controller;
mod eval;
mod invariants;
mod phases;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CapturesDiscs, CellIsEmpty, Contract, MoveContract};
pub use controller::{AutomatedPly, GameController, AUTOMATED, HUMAN};
pub use eval::score;
pub use invariants::{
    BoardInvariants, CenterOccupiedInvariant, DiscTotalInvariant, Invariant, InvariantSet,
    InvariantViolation,
};
pub use phases::{Outcome, Phase};
pub use search::{minimax, Difficulty, SearchResult, Searcher, INF};
pub use types::{
    Board, BoardParseError, Cell, DiscCount, GameState, Player, Position, PositionError, BOARD_SIZE,
    CELL_COUNT,
};
