//! Othello rules.
//!
//! Pure functions over a [`Board`](super::Board): move legality, disc
//! flipping with an exact undo, and game-end detection. Rules are kept
//! apart from board storage so the search and the controller share them.

pub mod end;
pub mod flip;
pub mod legal;

pub use end::{is_game_over, outcome};
pub use flip::{apply, play, undo, Flips};
pub use legal::{has_legal_move, is_legal, legal_moves, DIRECTIONS};
