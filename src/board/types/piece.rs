//! Player, piece and cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::square::BOARD_SIZE;

/// The two sides.
///
/// Player one starts on the bottom rows and advances toward row 0; player
/// two starts on the top rows and advances toward the last row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Diagonals a man of this player may move and capture along
    #[inline]
    #[must_use]
    pub fn forward_directions(self) -> &'static [Direction] {
        match self {
            Player::One => &Direction::UP,
            Player::Two => &Direction::DOWN,
        }
    }

    /// Row on which a man of this player is crowned
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board: its owner and whether it has been crowned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub player: Player,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn man(player: Player) -> Self {
        Piece {
            player,
            kind: PieceKind::Man,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king(player: Player) -> Self {
        Piece {
            player,
            kind: PieceKind::King,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_man(self) -> bool {
        matches!(self.kind, PieceKind::Man)
    }

    /// Crowned copy of this piece
    #[inline]
    #[must_use]
    pub const fn crowned(self) -> Self {
        Piece::king(self.player)
    }

    /// Directions this piece may step or jump along
    #[inline]
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self.kind {
            PieceKind::King => &Direction::ALL,
            PieceKind::Man => self.player.forward_directions(),
        }
    }

    /// Material value: 1 per man, 2 per king.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self.kind {
            PieceKind::Man => 1,
            PieceKind::King => 2,
        }
    }

    /// Parse a diagram character (`w`/`W` for player one, `b`/`B` for player two)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::man(Player::One)),
            'W' => Some(Piece::king(Player::One)),
            'b' => Some(Piece::man(Player::Two)),
            'B' => Some(Piece::king(Player::Two)),
            _ => None,
        }
    }

    /// Diagram character, uppercase for kings
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.player, self.kind) {
            (Player::One, PieceKind::Man) => 'w',
            (Player::One, PieceKind::King) => 'W',
            (Player::Two, PieceKind::Man) => 'b',
            (Player::Two, PieceKind::King) => 'B',
        }
    }
}

/// Result of querying a coordinate.
///
/// Off-board coordinates and obstacle-covered cells are both `Invalid`:
/// an obstacle is not a kind of occupant, it removes the cell from play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Invalid,
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }
}
