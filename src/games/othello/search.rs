//! Minimax search with alpha-beta pruning.
//!
//! Light is always the maximizing side and Dark the minimizing side; the
//! `maximizing` flag selects whose moves are generated at a ply. Trial moves
//! are made and unmade on one working board with [`play`]/[`undo`], so a
//! search leaves its board exactly as it found it.
//!
//! # Example
//!
//! ```
//! use strictly_othello::{Board, Difficulty, Searcher};
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.best_move(&Board::new(), Difficulty::Normal.depth());
//! assert!(result.best_move.is_some());
//! ```

use super::eval::score;
use super::rules::{legal_moves, play, undo};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bound wider than any reachable score (scores lie in `[-64, 64]`).
pub const INF: i32 = 1_000;

/// Engine strength, mapped to a fixed search depth.
///
/// Node count grows roughly with branching factor to the power of depth,
/// so each step up is strictly more expensive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// One ply.
    Weak,
    /// Three plies.
    #[default]
    Normal,
    /// Five plies.
    Strong,
}

impl Difficulty {
    /// Search depth in plies.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Weak => 1,
            Difficulty::Normal => 3,
            Difficulty::Strong => 5,
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value of the position (Light minus Dark at the horizon).
    pub value: i32,
    /// Chosen move; `None` means the side to move must pass (or depth 0).
    pub best_move: Option<Position>,
    /// Nodes visited.
    pub nodes: u64,
}

/// Side whose moves are generated at a ply.
fn side(maximizing: bool) -> Player {
    if maximizing {
        Player::Light
    } else {
        Player::Dark
    }
}

/// Depth-first alpha-beta searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    /// Creates a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best move for Light from `board` at `depth`, searched on a scratch copy.
    #[instrument(skip(self, board))]
    pub fn best_move(&mut self, board: &Board, depth: u8) -> SearchResult {
        let mut scratch = board.clone();
        let result = self.search(&mut scratch, depth, true, -INF, INF);
        debug_assert_eq!(&scratch, board, "search must restore its board");
        debug!(
            value = result.value,
            best_move = ?result.best_move,
            nodes = result.nodes,
            "Search complete"
        );
        result
    }

    /// Searches `board` to `depth` inside the window `(alpha, beta)`.
    ///
    /// The board is mutated while searching and restored before returning.
    /// With the full window `(-INF, INF)` the value equals plain minimax at
    /// the same depth. Ties keep the earliest move in row-major order.
    #[instrument(skip(self, board))]
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> SearchResult {
        self.nodes = 0;
        let (value, best_move) = self.alpha_beta(board, depth, maximizing, alpha, beta);
        SearchResult {
            value,
            best_move,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Position>) {
        self.nodes += 1;

        if depth == 0 {
            return (score(board), None);
        }

        let player = side(maximizing);
        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return (score(board), None);
        }

        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            let Some(flips) = play(board, mov, player) else {
                continue;
            };
            let (value, _) = self.alpha_beta(board, depth - 1, !maximizing, alpha, beta);
            undo(board, &flips);

            if maximizing {
                if value > best {
                    best = value;
                    best_move = Some(mov);
                }
                alpha = alpha.max(value);
            } else {
                if value < best {
                    best = value;
                    best_move = Some(mov);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        (best, best_move)
    }
}

/// Plain minimax without pruning, the reference the pruned search must match.
///
/// Visits every node; use [`Searcher`] for play.
pub fn minimax(board: &mut Board, depth: u8, maximizing: bool) -> (i32, Option<Position>) {
    if depth == 0 {
        return (score(board), None);
    }

    let player = side(maximizing);
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return (score(board), None);
    }

    let mut best = if maximizing { -INF } else { INF };
    let mut best_move = None;
    for mov in moves {
        let Some(flips) = play(board, mov, player) else {
            continue;
        };
        let (value, _) = minimax(board, depth - 1, !maximizing);
        undo(board, &flips);

        let better = if maximizing { value > best } else { value < best };
        if better {
            best = value;
            best_move = Some(mov);
        }
    }
    (best, best_move)
}
