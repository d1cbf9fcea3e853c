use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// One step in any direction. No castling.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for &to in &KING_TARGETS[from.as_index()] {
            if self.can_land_on(to, color) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
