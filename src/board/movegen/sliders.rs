use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Walk each ray until the edge or the first occupied square; that
    /// square is included only when it holds an enemy piece.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, dc) in directions {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.color_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(occupant) => {
                        if occupant != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
        moves
    }
}
