pub mod board;
pub mod game;

pub use board::{choose_move, Board, Move, Piece, Player, Square};
pub use game::{Game, GameConfig, GameError, GameStatus};
