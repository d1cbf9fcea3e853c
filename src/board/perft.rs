use super::{Board, Color};

impl Board {
    /// Count leaf positions `depth` plies below this one, `side` to move.
    #[must_use]
    pub fn perft(&self, side: Color, depth: usize) -> u64 {
        let mut scratch = self.clone();
        scratch.perft_inner(side, depth)
    }

    fn perft_inner(&mut self, side: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft_inner(side.opponent(), depth - 1);
            self.unmake_move(mv, info);
        }

        nodes
    }
}
