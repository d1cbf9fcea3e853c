//! Pseudo-legal move generation.
//!
//! Moves produced here follow each piece's movement pattern but ignore
//! whether the mover's king is left attacked; see `legality.rs` for the
//! filtered variants.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONALS, ORTHOGONALS};
use super::{Board, Color, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for whatever stands on `from`. Empty squares
    /// yield an empty list.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> MoveList {
        let Some((color, piece)) = self.piece_at(from) else {
            return MoveList::new();
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color),
            Piece::Knight => self.generate_knight_moves(from, color),
            Piece::Bishop => self.generate_sliding_moves(from, color, &DIAGONALS),
            Piece::Rook => self.generate_sliding_moves(from, color, &ORTHOGONALS),
            Piece::Queen => {
                let mut moves = self.generate_sliding_moves(from, color, &ORTHOGONALS);
                moves.extend_from(&self.generate_sliding_moves(from, color, &DIAGONALS));
                moves
            }
            Piece::King => self.generate_king_moves(from, color),
        }
    }

    /// Pseudo-legal moves for every piece of `color`, scanning row by row.
    #[must_use]
    pub fn pseudo_moves_for_side(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.pieces(color) {
            moves.extend_from(&self.pseudo_moves(from));
        }
        moves
    }

    /// True if `sq` is empty or holds an enemy of `color`.
    #[inline]
    pub(crate) fn can_land_on(&self, sq: Square, color: Color) -> bool {
        self.color_at(sq) != Some(color)
    }
}
