//! Static material evaluation and move-quality feedback.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Material swing, in pawns, at which a move counts as brilliant or a blunder.
pub const QUALITY_SWING: i32 = 2;

impl Board {
    /// Material balance in pawn units, positive when White is ahead.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.occupied()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum()
    }

    /// Material of one side, kings excluded.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color).map(|(_, piece)| piece.value()).sum()
    }
}

/// Human-facing verdict on a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveQuality {
    Brilliant,
    Good,
    Inaccuracy,
    Blunder,
}

impl fmt::Display for MoveQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveQuality::Brilliant => "Brilliant Move!",
            MoveQuality::Good => "Good Move",
            MoveQuality::Inaccuracy => "Inaccuracy",
            MoveQuality::Blunder => "Blunder!",
        };
        f.write_str(text)
    }
}

impl MoveQuality {
    /// Classify a change in material seen from the mover's side.
    #[must_use]
    pub const fn from_delta(delta: i32) -> Self {
        if delta >= QUALITY_SWING {
            MoveQuality::Brilliant
        } else if delta <= -QUALITY_SWING {
            MoveQuality::Blunder
        } else if delta < 0 {
            MoveQuality::Inaccuracy
        } else {
            MoveQuality::Good
        }
    }
}

/// Grade the move that turned `before` into `after`, from `mover`'s side.
#[must_use]
pub fn evaluate_move_quality(before: &Board, after: &Board, mover: Color) -> MoveQuality {
    let sign = mover.sign();
    let delta = sign * after.evaluate() - sign * before.evaluate();
    MoveQuality::from_delta(delta)
}
