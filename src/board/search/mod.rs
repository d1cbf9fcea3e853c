//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White is the maximizing
//! side, Black the minimizing one. Leaves are scored with the material
//! evaluator, including positions where the side to move has no legal
//! move, so checkmate and stalemate are not distinguished from an
//! ordinary material count.

mod alphabeta;
mod constants;
mod params;

use log::debug;

use super::{Board, Color, Move};
use alphabeta::Searcher;
pub use constants::{DEFAULT_DEPTH, INFINITY};
pub use params::SearchConfig;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value of the root, from White's perspective
    pub score: i32,
    /// First move achieving `score`; `None` at depth 0 or with no legal moves
    pub best_move: Option<Move>,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Search `board` to `depth` plies with the window `(alpha, beta)`.
///
/// `maximizing` selects the side to move: White when true, Black when
/// false. The caller's board is never modified or retained.
#[must_use]
pub fn search(board: &Board, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> SearchResult {
    let mut searcher = Searcher::new(board);
    let (score, best_move) = searcher.alphabeta(depth, alpha, beta, maximizing);
    SearchResult {
        score,
        best_move,
        nodes: searcher.nodes(),
    }
}

/// Full-window search for `side` using `config`.
#[must_use]
pub fn find_best_move(board: &Board, side: Color, config: &SearchConfig) -> SearchResult {
    board.warn_missing_kings();
    let result = search(board, config.depth, -INFINITY, INFINITY, side == Color::White);
    debug!(
        "search {side} depth {}: score {} move {} nodes {}",
        config.depth,
        result.score,
        result
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        result.nodes
    );
    result
}
