//! Diagonal directions.

/// One of the four diagonal directions a piece can travel.
///
/// `ALL` is the enumeration order used everywhere moves are generated, and
/// that order is observable through search tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Directions toward row 0
    pub const UP: [Direction; 2] = [Direction::UpLeft, Direction::UpRight];

    /// Directions toward the last row
    pub const DOWN: [Direction; 2] = [Direction::DownLeft, Direction::DownRight];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::UpLeft => 0,
            Direction::UpRight => 1,
            Direction::DownLeft => 2,
            Direction::DownRight => 3,
        }
    }

    /// Row and column deltas of a single step
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Direction::UpLeft | Direction::UpRight)
    }
}
