//! Center invariant: the four starting cells never empty.

use super::super::{Board, Position};
use super::Invariant;

const CENTER: [(usize, usize); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// Invariant: cells (3,3), (3,4), (4,3) and (4,4) always hold a disc.
///
/// They start occupied and flips only recolor discs, so they stay occupied
/// for the whole game.
pub struct CenterOccupiedInvariant;

impl Invariant<Board> for CenterOccupiedInvariant {
    fn holds(board: &Board) -> bool {
        CENTER
            .iter()
            .filter_map(|&(r, c)| Position::new(r, c))
            .all(|pos| !board.is_empty(pos))
    }

    fn description() -> &'static str {
        "The four center cells are occupied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::othello::Cell;

    #[test]
    fn test_opening_holds() {
        assert!(CenterOccupiedInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_emptied_center_violates() {
        let mut board = Board::new();
        board.set(Position::new(4, 4).unwrap(), Cell::Empty);
        assert!(!CenterOccupiedInvariant::holds(&board));
    }
}
