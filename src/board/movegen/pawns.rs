use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Single push, double push from the start row, diagonal captures.
    /// No en passant.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(Move::new(from, forward));
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.color_at(target) == Some(color.opponent()) {
                    moves.push(Move::new(from, target));
                }
            }
        }
        moves
    }
}
