//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_ai::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status(Color::White), GameStatus::Ongoing);
//! ```

pub use super::{
    evaluate_move_quality, find_best_move, search, Board, BoardBuilder, Color, FenError,
    GameStatus, Move, MoveList, MoveQuality, Piece, SearchConfig, SearchResult, Square, INFINITY,
};
