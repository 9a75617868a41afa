//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Player`, `Piece` and `Cell` - sides, pieces and query results
//! - `Square` and `Direction` - board coordinates and diagonals
//! - `Bitboard` - 36-bit cell set used for obstacles and masks
//! - `Move`, `CaptureSequence` and `MoveList` - move representation

mod bitboard;
mod direction;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use direction::Direction;
pub use moves::{CaptureSequence, Move, MoveList};
pub use piece::{Cell, Piece, PieceKind, Player};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};
