use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

/// Contents of a single square: empty, or a piece of some color.
pub type Occupant = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Piece placement on an 8x8 grid.
///
/// The board carries no side-to-move: every operation that depends on it
/// takes the color explicitly.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Occupant; 8]; 8],
}

impl Board {
    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(Color::Black.back_row(), col), Color::Black, *piece);
            board.set_piece(Square(Color::White.back_row(), col), Color::White, *piece);
            board.set_piece(Square(Color::Black.pawn_start_row(), col), Color::Black, Piece::Pawn);
            board.set_piece(Square(Color::White.pawn_start_row(), col), Color::White, Piece::Pawn);
        }
        board
    }

    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// What stands on `sq`.
    ///
    /// # Panics
    /// Panics if `sq` lies off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Occupant {
        assert!(sq.is_valid(), "square {sq:?} is off the board");
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        assert!(sq.is_valid(), "square {sq:?} is off the board");
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    pub(crate) fn clear(&mut self, sq: Square) -> Occupant {
        assert!(sq.is_valid(), "square {sq:?} is off the board");
        self.squares[sq.0][sq.1].take()
    }

    /// Every occupied square with its occupant, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Squares holding a piece of `color`, with the piece kind.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |&(_, c, _)| c == color)
            .map(|(sq, _, piece)| (sq, piece))
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// True if the occupant is a White piece. Empty squares are not White.
#[inline]
#[must_use]
pub fn is_white(occupant: Occupant) -> bool {
    matches!(occupant, Some((Color::White, _)))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let occupant = self.piece_at(Square(row, col));
                let c = match occupant {
                    None => '.',
                    Some((_, piece)) if is_white(occupant) => piece.to_char().to_ascii_uppercase(),
                    Some((_, piece)) => piece.to_char(),
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}
