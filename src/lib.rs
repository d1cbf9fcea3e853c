pub mod advisor;
pub mod board;
pub mod game;

pub use advisor::{MoveAdvisor, RandomAdvisor, SearchAdvisor};
pub use board::{Board, Color, GameStatus, Move, MoveQuality, Piece, SearchConfig, Square};
pub use game::{Game, PlayedMove};
