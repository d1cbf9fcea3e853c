//! Alpha-beta search tests.
//!
//! Results are checked against an unpruned minimax written here with the
//! same conventions: White maximizes, ties keep the first move, and nodes
//! without legal moves are scored by material.

use super::{mv, random_playout};
use crate::board::{find_best_move, search, Board, Color, Move, SearchConfig, INFINITY};

fn minimax(board: &Board, depth: u32, maximizing: bool) -> (i32, Option<Move>, u64) {
    if depth == 0 {
        return (board.evaluate(), None, 1);
    }
    let side = if maximizing { Color::White } else { Color::Black };
    let moves = board.generate_moves(side);
    if moves.is_empty() {
        return (board.evaluate(), None, 1);
    }
    let mut best: Option<(i32, Move)> = None;
    let mut nodes = 1;
    for m in moves {
        let (score, _, child_nodes) = minimax(&board.apply_move(m), depth - 1, !maximizing);
        nodes += child_nodes;
        let better = match best {
            None => true,
            Some((best_score, _)) if maximizing => score > best_score,
            Some((best_score, _)) => score < best_score,
        };
        if better {
            best = Some((score, m));
        }
    }
    let (score, m) = best.expect("non-empty move list");
    (score, Some(m), nodes)
}

#[test]
fn depth_zero_returns_static_evaluation() {
    for seed in 0..6 {
        let (board, side) = random_playout(seed, 20);
        let result = search(&board, 0, -INFINITY, INFINITY, side == Color::White);
        assert_eq!(result.score, board.evaluate());
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }
}

#[test]
fn depth_one_maximizes_over_white_replies() {
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/3PP3/5N2/PPP2PPP/RNBQKB1R");
    let result = search(&board, 1, -INFINITY, INFINITY, true);
    let expected = board
        .generate_moves(Color::White)
        .iter()
        .map(|&m| board.apply_move(m).evaluate())
        .max()
        .unwrap();
    assert_eq!(result.score, expected);
    assert_eq!(expected, 1, "d4xe5 wins a pawn");
}

#[test]
fn alphabeta_matches_minimax() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR",
        "4k3/8/8/3q4/8/2N5/8/3RK3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    ];
    for fen in fens {
        let board = Board::from_fen(fen);
        for depth in 1..=3 {
            for maximizing in [true, false] {
                let pruned = search(&board, depth, -INFINITY, INFINITY, maximizing);
                let (score, best_move, nodes) = minimax(&board, depth, maximizing);
                assert_eq!(pruned.score, score, "{fen} depth {depth} max {maximizing}");
                assert_eq!(pruned.best_move, best_move, "{fen} depth {depth}");
                assert!(pruned.nodes <= nodes);
            }
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    let board = Board::new();
    let pruned = search(&board, 3, -INFINITY, INFINITY, true);
    let (_, _, nodes) = minimax(&board, 3, true);
    assert_eq!(nodes, 1 + 20 + 400 + 8902);
    assert!(pruned.nodes < nodes);
}

#[test]
fn captures_undefended_queen() {
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3");
    for depth in 1..=3 {
        let result = find_best_move(&board, Color::White, &SearchConfig::depth(depth));
        assert_eq!(result.best_move, Some(mv("d1d5")), "depth {depth}");
    }
}

#[test]
fn black_minimizes() {
    // Black to move can take the white rook for free.
    let board = Board::from_fen("4k3/8/8/3r4/8/8/8/3RK3");
    let result = find_best_move(&board, Color::Black, &SearchConfig::depth(1));
    assert_eq!(result.best_move, Some(mv("d5d1")));
    assert_eq!(result.score, -5);
}

#[test]
fn no_legal_moves_returns_static_evaluation() {
    let mated = Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR");
    let result = search(&mated, 3, -INFINITY, INFINITY, false);
    assert_eq!(result.score, mated.evaluate());
    assert_eq!(result.best_move, None);

    let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8");
    let result = search(&stalemate, 2, -INFINITY, INFINITY, false);
    assert_eq!(result.score, 9);
    assert_eq!(result.best_move, None);
}

#[test]
fn search_is_deterministic() {
    let (board, side) = random_playout(7, 16);
    let config = SearchConfig::depth(2);
    let first = find_best_move(&board, side, &config);
    let second = find_best_move(&board, side, &config);
    assert_eq!(first, second);
}

#[test]
fn default_depth_is_two() {
    assert_eq!(SearchConfig::default().depth, 2);
}
