use log::trace;

use crate::board::{Board, Color, Move};

/// Owns the scratch board the tree is explored on. Moves are made and
/// unmade in place, so a whole search clones the caller's board once.
pub(super) struct Searcher {
    board: Board,
    nodes: u64,
}

impl Searcher {
    pub(super) fn new(board: &Board) -> Self {
        Searcher {
            board: board.clone(),
            nodes: 0,
        }
    }

    pub(super) fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value and best move of the current position.
    ///
    /// Ties keep the first move found. A maximizing node stops once
    /// `alpha >= beta`, a minimizing node once `beta <= alpha`.
    pub(super) fn alphabeta(
        &mut self,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        if depth == 0 {
            return (self.board.evaluate(), None);
        }

        let side = if maximizing { Color::White } else { Color::Black };
        let moves = self.board.generate_moves(side);
        if moves.is_empty() {
            return (self.board.evaluate(), None);
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in moves {
            let info = self.board.make_move(mv);
            let (score, _) = self.alphabeta(depth - 1, alpha, beta, !maximizing);
            self.board.unmake_move(mv, info);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if alpha >= beta {
                    trace!("cutoff after {mv} at depth {depth} (alpha {alpha} >= beta {beta})");
                    break;
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    trace!("cutoff after {mv} at depth {depth} (beta {beta} <= alpha {alpha})");
                    break;
                }
            }
        }

        (best_score, best_move)
    }
}
