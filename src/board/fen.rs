//! Piece-placement serialization in the FEN convention.
//!
//! Only the placement field carries board information; a side-to-move
//! field is accepted and validated, and the remaining FEN fields are
//! ignored on input and written as `- - 0 1` on output.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse a FEN string (or a bare placement field) into a board and the
    /// side to move. The side defaults to White when the field is absent.
    pub fn parse_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square(row, col), color, piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        let side = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok((board, side))
    }

    /// Parse the placement of a FEN string, discarding the side to move.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Self::parse_fen(fen).map(|(board, _)| board)
    }

    /// Parse a FEN string.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// The placement field: ranks 8 to 1 separated by `/`, uppercase for
    /// White, digits for runs of empty squares.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }
        rows.join("/")
    }

    /// Full FEN with the given side to move and no castling or en passant.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let active = match side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!("{} {} - - 0 1", self.placement(), active)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
