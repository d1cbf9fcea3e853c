use super::{Board, Move, Occupant, Piece};

/// What `make_move` overwrote, so `unmake_move` can restore it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured: Occupant,
    pub(crate) promoted: bool,
}

impl UnmakeInfo {
    /// The piece removed from the destination square, if any.
    #[must_use]
    pub fn captured(&self) -> Occupant {
        self.captured
    }
}

impl Board {
    /// Move the piece on `mv.from()` to `mv.to()`, replacing whatever stood
    /// there. A pawn reaching its promotion row becomes a queen.
    ///
    /// No legality checks are made.
    ///
    /// # Panics
    /// Panics if the origin square is empty.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let Some((color, piece)) = self.clear(mv.from()) else {
            panic!("make_move {mv}: origin square is empty");
        };
        let captured = self.clear(mv.to());
        let promoted = piece == Piece::Pawn && mv.to().row() == color.promotion_row();
        let placed = if promoted { Piece::Queen } else { piece };
        self.set_piece(mv.to(), color, placed);
        UnmakeInfo { captured, promoted }
    }

    /// Undo `mv`, which must be the last move made with `make_move`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let moved = self.clear(mv.to());
        debug_assert!(moved.is_some(), "unmake_move {mv}: destination is empty");
        if let Some((color, piece)) = moved {
            let original = if info.promoted { Piece::Pawn } else { piece };
            self.set_piece(mv.from(), color, original);
        }
        if let Some((color, piece)) = info.captured {
            self.set_piece(mv.to(), color, piece);
        }
    }

    /// Copy of this board with `mv` applied.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}
