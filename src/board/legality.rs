//! Legal move filtering and terminal-state predicates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, MoveList, Square};

/// Outcome of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The contained color is in check with no legal move.
    Checkmate(Color),
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "Ongoing"),
            GameStatus::Checkmate(loser) => {
                write!(f, "Checkmate! {} wins", loser.opponent())
            }
            GameStatus::Stalemate => write!(f, "Stalemate!"),
        }
    }
}

impl Board {
    /// Keep the pseudo-legal moves in `candidates` that do not leave
    /// `color`'s king attacked. Works on a single scratch copy.
    fn filter_legal(&self, candidates: &MoveList, color: Color) -> MoveList {
        let mut legal = MoveList::new();
        let mut scratch = self.clone();
        for &mv in candidates {
            let info = scratch.make_move(mv);
            if !scratch.is_in_check(color) {
                legal.push(mv);
            }
            scratch.unmake_move(mv, info);
        }
        legal
    }

    /// Legal moves for the piece on `from`. Empty squares yield nothing.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        match self.color_at(from) {
            Some(color) => self.filter_legal(&self.pseudo_moves(from), color),
            None => MoveList::new(),
        }
    }

    /// Every legal move for `color`, in row-major origin order.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        self.filter_legal(&self.pseudo_moves_for_side(color), color)
    }

    /// True if `mv` is legal for the piece standing on its origin.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.from().is_valid() && mv.to().is_valid() && self.legal_moves(mv.from()).contains(mv)
    }

    /// True if some piece of `color` has a legal move. Stops at the first one.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        let mut scratch = self.clone();
        self.pieces(color).any(|(from, _)| {
            self.pseudo_moves(from).iter().any(|&mv| {
                let info = scratch.make_move(mv);
                let safe = !scratch.is_in_check(color);
                scratch.unmake_move(mv, info);
                safe
            })
        })
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Classify the position with `side_to_move` on turn.
    #[must_use]
    pub fn status(&self, side_to_move: Color) -> GameStatus {
        self.warn_missing_kings();
        if self.has_any_legal_move(side_to_move) {
            GameStatus::Ongoing
        } else if self.is_in_check(side_to_move) {
            GameStatus::Checkmate(side_to_move)
        } else {
            GameStatus::Stalemate
        }
    }
}
