//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing diagrams.
//!
//! # Example
//! ```
//! use obstacle_checkers::board::{BoardBuilder, Player, Square};
//!
//! let board = BoardBuilder::new()
//!     .man(Square(0, 1), Player::Two)
//!     .king(Square(3, 2), Player::One)
//!     .obstacle(Square(2, 3))
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::{Bitboard, Board, Piece, Player, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    obstacles: Bitboard,
    initial_obstacle_count: Option<usize>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the initial piece placement.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::starting_position(0);
        let mut builder = Self::new();
        for player in Player::BOTH {
            builder.pieces.extend(board.pieces(player));
        }
        builder
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.obstacles.remove(square);
        self.pieces.push((square, piece));
        self
    }

    #[must_use]
    pub fn man(self, square: Square, player: Player) -> Self {
        self.piece(square, Piece::man(player))
    }

    #[must_use]
    pub fn king(self, square: Square, player: Player) -> Self {
        self.piece(square, Piece::king(player))
    }

    /// Cover a square with an obstacle, removing any piece on it.
    #[must_use]
    pub fn obstacle(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.obstacles.insert(square);
        self
    }

    /// Remove a piece or obstacle from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.obstacles.remove(square);
        self
    }

    /// Baseline obstacle count used by later refreshes.
    ///
    /// Defaults to the number of obstacles placed on the builder.
    #[must_use]
    pub const fn initial_obstacle_count(mut self, count: usize) -> Self {
        self.initial_obstacle_count = Some(count);
        self
    }

    /// Build the board.
    ///
    /// Pieces and obstacles must be on dark squares; this is checked in
    /// debug builds.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            debug_assert!(square.is_dark(), "piece on light square {square}");
            board.set_piece(square, Some(piece));
        }
        board.set_obstacles(self.obstacles);
        board.initial_obstacle_count = self
            .initial_obstacle_count
            .unwrap_or(self.obstacles.popcount() as usize);
        board
    }
}
