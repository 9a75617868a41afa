//! Board representation and game logic for 6x6 checkers with obstacles.
//!
//! Pieces play on the dark squares only. Men step and jump diagonally
//! forward, kings in all four directions, captures are mandatory and chain
//! into multi-jump sequences. A set of obstacles covers some empty dark
//! squares and is re-sampled after every turn, growing as pieces come off
//! the board.
//!
//! # Example
//! ```
//! use obstacle_checkers::board::{choose_move, Board, Player};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut board = Board::new(2, &mut rng);
//! println!("Player 1 has {} moves", board.playable_moves(Player::One).len());
//!
//! let reply = choose_move(&board, 2).expect("player two can move");
//! board.apply_move(&reply);
//! board.refresh_obstacles(&mut rng);
//! ```

mod builder;
mod diagram;
mod error;
mod eval;
mod make_move;
mod movegen;
mod obstacles;
mod search;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{CaptureError, DiagramError, SquareError};
pub use eval::{EvalTerms, EvalWeights};
pub use state::{Board, DEFAULT_OBSTACLE_COUNT, INITIAL_PIECE_COUNT};
pub use types::{
    Bitboard, BitboardIter, CaptureSequence, Cell, Direction, Move, MoveList, Piece, PieceKind,
    Player, Square, BOARD_SIZE, NUM_SQUARES,
};

pub use search::{
    choose_move, find_best_move, search, SearchParams, SearchResult, DEFAULT_DEPTH,
    SCORE_INFINITY,
};
