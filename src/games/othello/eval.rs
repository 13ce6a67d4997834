//! Static evaluation.

use super::{Board, Cell};

/// Material balance: Light discs minus Dark discs.
///
/// Positive favors Light (the maximizer), negative favors Dark.
pub fn score(board: &Board) -> i32 {
    board.count(Cell::Light) as i32 - board.count(Cell::Dark) as i32
}
