//! Turn orchestration.
//!
//! `Game` owns the live board, the random source for obstacle placement and
//! the side to move. Every completed move, human or engine, goes through
//! `Game::play`, which validates it against the current playable set,
//! applies it, re-samples obstacles exactly once and hands the turn over.
//! A side to move with no playable move has lost.

use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    find_best_move, Board, Move, MoveList, Player, SearchParams, SearchResult, Square,
    DEFAULT_DEPTH, DEFAULT_OBSTACLE_COUNT,
};

/// Settings for a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Search depth in plies for the engine side
    pub ai_depth: u32,
    /// Obstacles placed at the start; also the baseline for refreshes
    pub obstacle_count: usize,
    /// Seed for obstacle placement; `None` draws one from the OS
    pub seed: Option<u64>,
    /// Side played by the engine
    pub ai_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ai_depth: DEFAULT_DEPTH,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            seed: None,
            ai_player: Player::Two,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

/// Error type for moves rejected by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already been decided
    GameOver { winner: Player },
    /// The move is not among the side to move's playable moves
    IllegalMove { notation: String },
    /// The engine was asked to move on the other side's turn
    NotEngineTurn { to_move: Player },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver { winner } => write!(f, "Game is over, {winner} won"),
            GameError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            GameError::NotEngineTurn { to_move } => {
                write!(f, "Engine cannot move, it is {to_move}'s turn")
            }
        }
    }
}

impl std::error::Error for GameError {}

pub struct Game {
    config: GameConfig,
    board: Board,
    rng: StdRng,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::new(config.obstacle_count, &mut rng);
        Self::from_parts(config, board, rng, Player::One)
    }

    /// Continue from an arbitrary position with `to_move` on move.
    #[must_use]
    pub fn from_position(config: GameConfig, board: Board, to_move: Player) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_parts(config, board, rng, to_move)
    }

    fn from_parts(config: GameConfig, board: Board, rng: StdRng, to_move: Player) -> Self {
        let mut game = Game {
            config,
            board,
            rng,
            to_move,
            status: GameStatus::InProgress,
        };
        game.update_status();
        game
    }

    /// Start over with the same configuration.
    ///
    /// With a fixed seed the new game repeats the first one's obstacle layout.
    pub fn reset(&mut self) {
        *self = Game::new(self.config.clone());
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_engine_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.to_move == self.config.ai_player
    }

    /// Everything the side to move may play, captures only if any exist.
    #[must_use]
    pub fn playable_moves(&self) -> MoveList {
        self.board.playable_moves(self.to_move)
    }

    /// Playable moves of the piece on `square` (selection of a single piece).
    #[must_use]
    pub fn moves_from(&self, square: Square) -> MoveList {
        self.playable_moves()
            .into_iter()
            .filter(|mv| mv.start() == square)
            .collect()
    }

    /// Play a move for the side to move.
    pub fn play(&mut self, mv: &Move) -> Result<(), GameError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(GameError::GameOver { winner });
        }
        if !self.playable_moves().contains(mv) {
            return Err(GameError::IllegalMove {
                notation: mv.to_string(),
            });
        }

        debug!("{} plays {mv}", self.to_move);
        self.board.apply_move(mv);
        self.board.refresh_obstacles(&mut self.rng);
        self.to_move = self.to_move.opponent();
        self.update_status();
        Ok(())
    }

    /// Search for the engine's move and play it.
    ///
    /// Returns the search result; its `best_move` has already been played.
    pub fn play_engine(&mut self) -> Result<SearchResult, GameError> {
        if let GameStatus::Won(winner) = self.status {
            return Err(GameError::GameOver { winner });
        }
        if self.to_move != self.config.ai_player {
            return Err(GameError::NotEngineTurn {
                to_move: self.to_move,
            });
        }
        let result = self.search_for(self.to_move);
        if let Some(mv) = &result.best_move {
            self.play(mv)?;
        }
        Ok(result)
    }

    /// Search on behalf of `player` without playing anything.
    #[must_use]
    pub fn search_for(&self, player: Player) -> SearchResult {
        let params = SearchParams {
            depth: self.config.ai_depth,
            ai_player: player,
            ..SearchParams::default()
        };
        find_best_move(&self.board, &params)
    }

    fn update_status(&mut self) {
        if !self.board.has_moves(self.to_move) {
            let winner = self.to_move.opponent();
            info!("{} has no moves, {winner} wins", self.to_move);
            self.status = GameStatus::Won(winner);
        }
    }
}
