//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, column) coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
