//! Check detection.

use log::{trace, warn};

use super::attack_tables::{DIAGONALS, KING_TARGETS, KNIGHT_TARGETS, ORTHOGONALS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Square of `color`'s king, or `None` if the board has no such king.
    /// With several kings the first one in row-major order wins.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// True if any piece of `by` could capture on `sq`.
    ///
    /// Equivalent to asking whether one of `by`'s pseudo-legal moves lands
    /// on `sq` when `sq` holds a piece of the other color, but scans
    /// outward from `sq` instead of generating every enemy move.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let holds = |target: Square, kinds: &[Piece]| {
            matches!(self.piece_at(target), Some((c, p)) if c == by && kinds.contains(&p))
        };

        if KNIGHT_TARGETS[sq.as_index()]
            .iter()
            .any(|&from| holds(from, &[Piece::Knight]))
        {
            return true;
        }
        if KING_TARGETS[sq.as_index()]
            .iter()
            .any(|&from| holds(from, &[Piece::King]))
        {
            return true;
        }

        // A pawn of `by` captures one row in its direction of travel.
        let behind = -by.pawn_direction();
        if [-1, 1]
            .into_iter()
            .filter_map(|dc| sq.offset(behind, dc))
            .any(|from| holds(from, &[Piece::Pawn]))
        {
            return true;
        }

        self.ray_hits(sq, &ORTHOGONALS, by, &[Piece::Rook, Piece::Queen])
            || self.ray_hits(sq, &DIAGONALS, by, &[Piece::Bishop, Piece::Queen])
    }

    /// First piece met along any of `directions` is one of `kinds` owned by `by`.
    fn ray_hits(
        &self,
        sq: Square,
        directions: &[(isize, isize)],
        by: Color,
        kinds: &[Piece],
    ) -> bool {
        directions.iter().any(|&(dr, dc)| {
            let mut cursor = sq.offset(dr, dc);
            while let Some(at) = cursor {
                if let Some((color, piece)) = self.piece_at(at) {
                    return color == by && kinds.contains(&piece);
                }
                cursor = at.offset(dr, dc);
            }
            false
        })
    }

    /// True if `color`'s king is attacked by the opposing side.
    ///
    /// A board without a king for `color` is reported as not in check.
    /// The warning for that lives in `find_best_move` and `status`.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => {
                trace!("no {color} king; treating as not in check");
                false
            }
        }
    }

    /// Colors with no king on the board.
    pub fn missing_kings(&self) -> impl Iterator<Item = Color> + '_ {
        Color::BOTH
            .into_iter()
            .filter(move |&color| self.king_square(color).is_none())
    }

    /// Log one warning per missing king. Returns true if any were missing.
    pub(crate) fn warn_missing_kings(&self) -> bool {
        let mut any = false;
        for color in self.missing_kings() {
            warn!("no {color} king on board {}; it is never in check", self.placement());
            any = true;
        }
        any
    }
}
