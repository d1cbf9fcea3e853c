//! Optional move suggestions.
//!
//! An advisor offers a move for a position but has no say in legality or
//! in what the engine plays; callers may show its hint or ignore it.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{find_best_move, Board, Color, Move, SearchConfig};

/// Something that can propose a move for `side` on `board`.
pub trait MoveAdvisor {
    /// A suggested move, or `None` when the advisor has nothing to offer.
    fn suggest_move(&self, board: &Board, side: Color) -> Option<Move>;
}

/// Suggests the engine's own choice at a fixed depth.
#[derive(Clone, Debug, Default)]
pub struct SearchAdvisor {
    config: SearchConfig,
}

impl SearchAdvisor {
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        SearchAdvisor { config }
    }
}

impl MoveAdvisor for SearchAdvisor {
    fn suggest_move(&self, board: &Board, side: Color) -> Option<Move> {
        find_best_move(board, side, &self.config).best_move
    }
}

/// Suggests a uniformly random legal move.
pub struct RandomAdvisor {
    rng: Mutex<StdRng>,
}

impl RandomAdvisor {
    /// Reproducible suggestions from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomAdvisor {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        RandomAdvisor {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl MoveAdvisor for RandomAdvisor {
    fn suggest_move(&self, board: &Board, side: Color) -> Option<Move> {
        let moves = board.generate_moves(side);
        moves.as_slice().choose(&mut *self.rng.lock()).copied()
    }
}

impl<A: MoveAdvisor + ?Sized> MoveAdvisor for Box<A> {
    fn suggest_move(&self, board: &Board, side: Color) -> Option<Move> {
        (**self).suggest_move(board, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_advisor_suggests_legal_moves() {
        let advisor = RandomAdvisor::with_seed(42);
        let board = Board::new();
        for _ in 0..16 {
            let mv = advisor.suggest_move(&board, Color::Black).unwrap();
            assert!(board.generate_moves(Color::Black).contains(mv));
        }
    }

    #[test]
    fn random_advisor_is_reproducible() {
        let board = Board::new();
        let a = RandomAdvisor::with_seed(7);
        let b = RandomAdvisor::with_seed(7);
        for _ in 0..8 {
            assert_eq!(
                a.suggest_move(&board, Color::White),
                b.suggest_move(&board, Color::White)
            );
        }
    }

    #[test]
    fn no_suggestion_without_legal_moves() {
        let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8");
        assert_eq!(RandomAdvisor::with_seed(1).suggest_move(&stalemate, Color::Black), None);
        assert_eq!(SearchAdvisor::default().suggest_move(&stalemate, Color::Black), None);
    }

    #[test]
    fn search_advisor_matches_engine() {
        let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3");
        let advisor: Box<dyn MoveAdvisor> = Box::new(SearchAdvisor::new(SearchConfig::depth(1)));
        assert_eq!(
            advisor.suggest_move(&board, Color::White),
            Some("d1d5".parse().unwrap())
        );
    }
}
