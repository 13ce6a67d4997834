//! Move legality.

use super::super::{Board, Player, Position};

/// The eight compass directions as `(row, col)` deltas.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Length of the opponent run captured by placing at `pos` in direction
/// `(dr, dc)`, or 0 when the run is empty or not closed by `player`'s disc.
pub(crate) fn capture_run(
    board: &Board,
    pos: Position,
    player: Player,
    (dr, dc): (i8, i8),
) -> usize {
    let own = player.cell();
    let opponent = player.opponent().cell();

    let mut run = 0;
    let mut cursor = pos.step(dr, dc);
    while let Some(p) = cursor {
        let cell = board.get(p);
        if cell == opponent {
            run += 1;
            cursor = p.step(dr, dc);
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
    }
    0
}

/// Checks if `player` may place a disc at `pos`.
///
/// The cell must be empty and at least one direction must hold a run of
/// one or more opponent discs closed by one of `player`'s discs.
pub fn is_legal(board: &Board, pos: Position, player: Player) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| capture_run(board, pos, player, dir) > 0)
}

/// All legal moves for `player` in row-major order.
///
/// Recomputed on every call. The order is also the search's tie-break order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    Position::all()
        .filter(|&pos| is_legal(board, pos, player))
        .collect()
}

/// Checks if `player` has any legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Position::all().any(|pos| is_legal(board, pos, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_opening_moves_for_dark() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::Dark);
        assert_eq!(moves, vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]);
    }

    #[test]
    fn test_opening_moves_for_light() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::Light);
        assert_eq!(moves, vec![pos(2, 4), pos(3, 5), pos(4, 2), pos(5, 3)]);
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::new();
        assert!(!is_legal(&board, pos(3, 3), Player::Dark));
        assert!(!is_legal(&board, pos(3, 4), Player::Dark));
    }

    #[test]
    fn test_adjacent_without_capture_is_illegal() {
        let board = Board::new();
        // Touches a Light disc but nothing closes the run.
        assert!(!is_legal(&board, pos(2, 2), Player::Dark));
        assert!(!is_legal(&board, pos(0, 0), Player::Dark));
    }

    #[test]
    fn test_run_reaching_edge_does_not_capture() {
        let board: Board = "\
            .OO.....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!is_legal(&board, pos(0, 3), Player::Dark));
        assert!(!is_legal(&board, pos(0, 0), Player::Dark));
        assert!(!has_legal_move(&board, Player::Dark));
    }

    #[test]
    fn test_long_diagonal_capture() {
        let board: Board = "\
            ........
            .O......
            ..O.....
            ...O....
            ....O...
            .....O..
            ......X.
            ........"
            .parse()
            .unwrap();
        assert_eq!(capture_run(&board, pos(0, 0), Player::Dark, (1, 1)), 5);
        assert!(is_legal(&board, pos(0, 0), Player::Dark));
        assert!(!is_legal(&board, pos(0, 0), Player::Light));
    }
}
