//! Game driver: owns the live board and whose turn it is.
//!
//! Every hypothetical the engine explores runs on copies; only moves that
//! pass the legality filter ever reach the board held here.

use log::{debug, info};

use crate::board::{
    evaluate_move_quality, find_best_move, Board, Color, FenError, GameStatus, Move, MoveError,
    MoveQuality, SearchConfig, Square,
};

/// A move as it was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub side: Color,
    pub mv: Move,
    pub quality: MoveQuality,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<PlayedMove>,
    config: SearchConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move, default search depth.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Board::new(), Color::White)
    }

    #[must_use]
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
            config: SearchConfig::default(),
        }
    }

    /// Start from a FEN string; the side to move defaults to White.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, side) = Board::parse_fen(fen)?;
        Ok(Game::from_position(board, side))
    }

    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status(self.side_to_move)
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen(self.side_to_move)
    }

    /// Legal destinations for the piece on `from`, if it belongs to the
    /// side to move. Selecting an empty square or an enemy piece yields
    /// nothing.
    #[must_use]
    pub fn destinations(&self, from: Square) -> Vec<Square> {
        if self.board.color_at(from) != Some(self.side_to_move) {
            return Vec::new();
        }
        self.board.legal_moves(from).destinations().collect()
    }

    /// Validate and play `mv` for the side to move, returning its grade.
    pub fn play(&mut self, mv: Move) -> Result<MoveQuality, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !mv.from().is_valid() || !mv.to().is_valid() {
            return Err(MoveError::IllegalMove { mv });
        }
        match self.board.color_at(mv.from()) {
            None => return Err(MoveError::EmptyOrigin { square: mv.from() }),
            Some(color) if color != self.side_to_move => {
                return Err(MoveError::NotYourPiece {
                    square: mv.from(),
                    side: self.side_to_move,
                })
            }
            Some(_) => {}
        }
        if !self.board.legal_moves(mv.from()).contains(mv) {
            return Err(MoveError::IllegalMove { mv });
        }
        Ok(self.commit(mv))
    }

    /// Parse long algebraic notation (`e2e4`) and play it.
    pub fn play_uci(&mut self, text: &str) -> Result<MoveQuality, MoveError> {
        let mv: Move = text.parse()?;
        self.play(mv)
    }

    /// Search for the side to move and play the result.
    ///
    /// A configured depth of 0 searches one ply, since a depth-0 search
    /// never names a move.
    pub fn engine_move(&mut self) -> Result<PlayedMove, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        let config = SearchConfig::depth(self.config.depth.max(1));
        let result = find_best_move(&self.board, self.side_to_move, &config);
        let mv = result.best_move.ok_or(MoveError::GameOver)?;
        let side = self.side_to_move;
        let quality = self.commit(mv);
        Ok(PlayedMove { side, mv, quality })
    }

    fn commit(&mut self, mv: Move) -> MoveQuality {
        let side = self.side_to_move;
        let before = self.board.clone();
        self.board.make_move(mv);
        let quality = evaluate_move_quality(&before, &self.board, side);
        debug!("{side} plays {mv}: {quality}");

        self.history.push(PlayedMove { side, mv, quality });
        self.side_to_move = side.opponent();

        let status = self.status();
        if status.is_over() {
            info!("game over after {} plies: {status}", self.history.len());
        }
        quality
    }
}
