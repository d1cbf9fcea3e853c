//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_ai::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(Color::White), 2);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new builder over an empty board.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder { board: Board::new() }
    }

    /// Place a piece, replacing anything already on the square.
    ///
    /// # Panics
    /// Panics if `square` lies off the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Remove whatever stands on a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_places_and_clears() {
        let board = BoardBuilder::starting_position()
            .clear(Square(6, 4))
            .piece(Square(4, 4), Color::White, Piece::Pawn)
            .build();
        assert!(board.is_empty(Square(6, 4)));
        assert_eq!(board.piece_at(Square(4, 4)), Some((Color::White, Piece::Pawn)));
        assert_eq!(board.piece_count(Color::White), 16);
    }

    #[test]
    fn piece_replaces_occupant() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Rook)
            .piece(Square(3, 3), Color::Black, Piece::Knight)
            .build();
        assert_eq!(board.piece_at(Square(3, 3)), Some((Color::Black, Piece::Knight)));
        assert_eq!(board.occupied().count(), 1);
    }
}
