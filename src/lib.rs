//! Strictly Othello library - Othello rules with an alpha-beta opponent
//!
//! This library provides an Othello (Reversi) rules engine, a bounded-depth
//! minimax search, and a turn controller that sequences a human side against
//! the engine.
//!
//! # Architecture
//!
//! - **Rules**: legality across eight directions, all-or-nothing flipping,
//!   exact undo, game-end detection
//! - **Search**: minimax with alpha-beta pruning over material count
//! - **Controller**: turn state machine with automatic passes
//! - **Config**: TOML settings for difficulty and logging
//!
//! The controller exposes operations only; rendering, input, and the timing
//! of the engine's reply belong to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_othello::{Difficulty, GameController, Phase};
//!
//! let mut game = GameController::with_difficulty(Difficulty::Weak);
//! assert_eq!(game.submit_move(2, 3)?, Phase::AutomatedPending);
//!
//! let ply = game.trigger_automated_move()?;
//! assert!(ply.played.is_some());
//! assert_eq!(game.phase(), Phase::HumanToMove);
//! # Ok::<(), strictly_othello::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Rules engine
pub use games::othello::rules;

// Crate-level exports - Game types (othello)
pub use games::othello::{
    minimax, score, AutomatedPly, Board, BoardInvariants, BoardParseError, CapturesDiscs, Cell,
    CellIsEmpty, CenterOccupiedInvariant, Contract, Difficulty, DiscCount, DiscTotalInvariant,
    GameController, GameState, Invariant, InvariantSet, InvariantViolation, Move, MoveContract,
    MoveError, Outcome, Phase, Player, Position, PositionError, SearchResult, Searcher, AUTOMATED,
    BOARD_SIZE, CELL_COUNT, HUMAN, INF,
};
