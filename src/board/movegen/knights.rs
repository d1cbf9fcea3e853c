use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            if self.can_land_on(to, color) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}
