//! Board representation and game rules.
//!
//! An 8x8 mailbox of optional pieces. Move generation, check detection,
//! legality filtering, material evaluation and alpha-beta search all take
//! the side to move explicitly; the board itself stores only placement.
//!
//! # Example
//! ```
//! use chess_ai::board::{find_best_move, Board, Color, SearchConfig};
//!
//! let board = Board::new();
//! let moves = board.generate_moves(Color::White);
//! assert_eq!(moves.len(), 20);
//!
//! let result = find_best_move(&board, Color::White, &SearchConfig::depth(1));
//! assert!(result.best_move.is_some());
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod legality;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use eval::{evaluate_move_quality, MoveQuality, QUALITY_SWING};
pub use legality::GameStatus;
pub use make_unmake::UnmakeInfo;
pub use search::{
    find_best_move, search, SearchConfig, SearchResult, DEFAULT_DEPTH, INFINITY,
};
pub use state::{is_white, Board, Occupant};
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square};
