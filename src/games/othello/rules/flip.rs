//! Disc placement, flipping, and exact undo.

use super::super::{Board, Cell, Player, Position};
use super::legal::{capture_run, DIRECTIONS};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Record of one applied move: the placed disc and every disc it flipped.
///
/// Passing it to [`undo`] restores the board exactly as it was before
/// [`play`], in time proportional to the number of flips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flips {
    placed: Position,
    player: Player,
    flipped: Vec<Position>,
}

impl Flips {
    /// Where the disc was placed.
    pub fn placed(&self) -> Position {
        self.placed
    }

    /// Who moved.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Discs converted to the mover's color.
    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }
}

/// Places `player`'s disc at `pos` and flips every captured run.
///
/// Returns `None` without touching the board when the move is illegal.
pub fn play(board: &mut Board, pos: Position, player: Player) -> Option<Flips> {
    if !board.is_empty(pos) {
        return None;
    }

    // Collect first so an illegal move never mutates the board.
    let mut flipped = Vec::new();
    for &(dr, dc) in DIRECTIONS.iter() {
        let run = capture_run(board, pos, player, (dr, dc));
        let mut cursor = pos;
        for _ in 0..run {
            if let Some(next) = cursor.step(dr, dc) {
                flipped.push(next);
                cursor = next;
            }
        }
    }
    if flipped.is_empty() {
        return None;
    }

    let own = player.cell();
    board.set(pos, own);
    for &p in &flipped {
        board.set(p, own);
    }
    trace!(%pos, ?player, flips = flipped.len(), "Disc placed");

    Some(Flips {
        placed: pos,
        player,
        flipped,
    })
}

/// Reverts a move recorded by [`play`].
///
/// Must be called on the board `play` returned the record for, with no
/// other mutation in between.
pub fn undo(board: &mut Board, flips: &Flips) {
    let previous = flips.player.opponent().cell();
    for &p in &flips.flipped {
        board.set(p, previous);
    }
    board.set(flips.placed, Cell::Empty);
}

/// Applies a move if legal. All-or-nothing: returns `false` and leaves the
/// board unchanged when the move is illegal.
#[instrument(skip(board))]
pub fn apply(board: &mut Board, pos: Position, player: Player) -> bool {
    play(board, pos, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::super::is_legal;
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_opening_move_flips_one_disc() {
        let mut board = Board::new();
        let flips = play(&mut board, pos(2, 3), Player::Dark).unwrap();
        assert_eq!(flips.flipped(), &[pos(3, 3)]);
        assert_eq!(board.get(pos(2, 3)), Cell::Dark);
        assert_eq!(board.get(pos(3, 3)), Cell::Dark);
        assert_eq!(board.get(pos(4, 4)), Cell::Light);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(!apply(&mut board, pos(0, 0), Player::Dark));
        assert!(!apply(&mut board, pos(3, 3), Player::Dark));
        assert_eq!(board, before);
    }

    #[test]
    fn test_flips_in_several_directions() {
        let mut board: Board = "\
            X.X.X...
            .OOO....
            XO.OX...
            .OOO....
            X.X.X...
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let flips = play(&mut board, pos(2, 2), Player::Dark).unwrap();
        assert_eq!(flips.flipped().len(), 8);
        for r in 1..=3 {
            for c in 1..=3 {
                assert_eq!(board.get(pos(r, c)), Cell::Dark, "({r}, {c})");
            }
        }
    }

    #[test]
    fn test_only_closed_runs_flip() {
        let mut board: Board = "\
            ........
            ........
            .OO.OOX.
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let flips = play(&mut board, pos(2, 3), Player::Dark).unwrap();
        assert_eq!(flips.flipped(), &[pos(2, 4), pos(2, 5)]);
        assert_eq!(board.get(pos(2, 1)), Cell::Light);
        assert_eq!(board.get(pos(2, 2)), Cell::Light);
    }

    #[test]
    fn test_undo_restores_exact_board() {
        let mut board = Board::new();
        let before = board.clone();
        let flips = play(&mut board, pos(4, 5), Player::Dark).unwrap();
        assert_ne!(board, before);
        undo(&mut board, &flips);
        assert_eq!(board, before);
    }

    #[test]
    fn test_legality_matches_flipping() {
        let board = Board::new();
        for p in Position::all() {
            for player in [Player::Dark, Player::Light] {
                let mut copy = board.clone();
                let flipped = play(&mut copy, p, player).map_or(0, |f| f.flipped().len());
                assert_eq!(is_legal(&board, p, player), flipped > 0);
            }
        }
    }
}
