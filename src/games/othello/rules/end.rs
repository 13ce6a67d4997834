//! Game-end detection.

use super::super::{Board, Outcome, Player};
use super::legal::has_legal_move;
use std::cmp::Ordering;
use tracing::instrument;

/// The game is over when neither side has a legal move.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Player::Dark) && !has_legal_move(board, Player::Light)
}

/// Outcome by majority disc count. Only meaningful once the game is over.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    let count = board.disc_count();
    match count.dark.cmp(&count.light) {
        Ordering::Greater => Outcome::Winner(Player::Dark),
        Ordering::Less => Outcome::Winner(Player::Light),
        Ordering::Equal => Outcome::Draw,
    }
}
