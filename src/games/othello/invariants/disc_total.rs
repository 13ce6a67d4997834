//! Disc total invariant: every cell is Dark, Light, or Empty.

use super::super::{Board, CELL_COUNT};
use super::Invariant;

/// Invariant: `dark + light + empty == 64`.
///
/// Holds by construction for any [`Board`], whose grid is a fixed 8x8 array.
/// The check pins down [`Board::disc_count`]: each cell is counted exactly
/// once. Growth of the occupied count per move is checked by the move
/// contract instead.
pub struct DiscTotalInvariant;

impl Invariant<Board> for DiscTotalInvariant {
    fn holds(board: &Board) -> bool {
        board.disc_count().total() == CELL_COUNT
    }

    fn description() -> &'static str {
        "Dark, Light and Empty cells total 64"
    }
}
