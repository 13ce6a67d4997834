//! Tests for the alpha-beta search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_othello::rules::{apply, legal_moves};
use strictly_othello::{minimax, score, Board, Player, Searcher, INF};

fn random_position(rng: &mut StdRng, plies: usize) -> Board {
    let mut board = Board::new();
    let mut turn = Player::Dark;
    for _ in 0..plies {
        let moves = legal_moves(&board, turn);
        if !moves.is_empty() {
            let choice = moves[rng.gen_range(0..moves.len())];
            apply(&mut board, choice, turn);
        }
        turn = turn.opponent();
    }
    board
}

#[test]
fn test_pruned_search_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(42);
    for plies in [4, 12, 24, 40, 54] {
        let mut board = random_position(&mut rng, plies);
        for depth in 1..=4 {
            for maximizing in [true, false] {
                let pruned = Searcher::new().search(&mut board, depth, maximizing, -INF, INF);
                let full = minimax(&mut board, depth, maximizing);
                assert_eq!(
                    (pruned.value, pruned.best_move),
                    full,
                    "plies {plies}, depth {depth}, maximizing {maximizing}"
                );
            }
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes_than_full_tree() {
    fn count_nodes(board: &mut Board, depth: u8, maximizing: bool) -> u64 {
        let player = if maximizing { Player::Light } else { Player::Dark };
        let moves = legal_moves(board, player);
        if depth == 0 || moves.is_empty() {
            return 1;
        }
        let mut nodes = 1;
        for mov in moves {
            let mut child = board.clone();
            apply(&mut child, mov, player);
            nodes += count_nodes(&mut child, depth - 1, !maximizing);
        }
        nodes
    }

    // Depth 1 from the root has no sibling to cut, so both counts agree.
    let mut board = random_position(&mut StdRng::seed_from_u64(5), 10);
    let shallow = Searcher::new().search(&mut board, 1, true, -INF, INF);
    assert_eq!(shallow.nodes, count_nodes(&mut board, 1, true));

    let mut rng = StdRng::seed_from_u64(5);
    for plies in [0, 10, 20] {
        let mut board = random_position(&mut rng, plies);
        for maximizing in [true, false] {
            let full = count_nodes(&mut board, 4, maximizing);
            let pruned = Searcher::new().search(&mut board, 4, maximizing, -INF, INF);
            assert!(
                pruned.nodes < full,
                "plies {plies}, maximizing {maximizing}: {} >= {}",
                pruned.nodes,
                full
            );
        }
    }
}

#[test]
fn test_depth_zero_returns_score_and_no_move() {
    let mut rng = StdRng::seed_from_u64(9);
    for plies in [0, 10, 30] {
        let mut board = random_position(&mut rng, plies);
        for maximizing in [true, false] {
            let result = Searcher::new().search(&mut board, 0, maximizing, -INF, INF);
            assert_eq!(result.value, score(&board));
            assert_eq!(result.best_move, None);
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let board = random_position(&mut StdRng::seed_from_u64(21), 16);
    let mut searcher = Searcher::new();
    let first = searcher.best_move(&board, 4);
    let second = searcher.best_move(&board, 4);
    assert_eq!(first, second);
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut board = random_position(&mut StdRng::seed_from_u64(33), 20);
    let before = board.clone();
    Searcher::new().search(&mut board, 5, true, -INF, INF);
    assert_eq!(board, before);
}
