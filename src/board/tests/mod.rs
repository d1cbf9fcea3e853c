//! Board module tests.
//!
//! - `movegen.rs` - pseudo-legal move patterns
//! - `legality.rs` - self-check filtering, checkmate and stalemate
//! - `make_unmake.rs` - make/unmake and apply correctness
//! - `perft.rs` - node counts against known reference values
//! - `search.rs` - alpha-beta against plain minimax
//! - `proptest.rs` - property-based tests over random playouts

mod movegen;
mod perft;
mod search;

use crate::board::{Board, Color, Move};
use rand::prelude::*;

/// Play up to `plies` random legal moves from the initial position,
/// returning the board and the side to move.
pub(super) fn random_playout(seed: u64, plies: usize) -> (Board, Color) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut side = Color::White;
    for _ in 0..plies {
        let moves = board.generate_moves(side);
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        board.make_move(mv);
        side = side.opponent();
    }
    (board, side)
}

pub(super) fn mv(text: &str) -> Move {
    text.parse().expect("test move notation")
}
