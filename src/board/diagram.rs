//! Text diagrams of positions.
//!
//! Six rows from top (row 0) to bottom, separated by `/`. Cells:
//! `.` empty, `#` obstacle, `w`/`W` player one man/king, `b`/`B` player two
//! man/king. Whitespace is ignored, so diagrams may also be written one row
//! per line.

use std::fmt;
use std::str::FromStr;

use super::error::DiagramError;
use super::{BoardBuilder, Board, Cell, Piece, Square, BOARD_SIZE};

const OBSTACLE_CHAR: char = '#';
const EMPTY_CHAR: char = '.';

impl Board {
    /// Parse a position diagram.
    ///
    /// The initial obstacle count is taken to be the number of obstacles in
    /// the diagram.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(DiagramError::RowCount { found: rows.len() });
        }

        let mut builder = BoardBuilder::new();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(DiagramError::RowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                let square = Square(row, col);
                if c == EMPTY_CHAR {
                    continue;
                }
                if !square.is_dark() {
                    return Err(DiagramError::LightSquare { row, col });
                }
                builder = if c == OBSTACLE_CHAR {
                    builder.obstacle(square)
                } else {
                    let piece = Piece::from_char(c).ok_or(DiagramError::InvalidChar { char: c })?;
                    builder.piece(square, piece)
                };
            }
        }
        Ok(builder.build())
    }

    /// Diagram of this position, rows separated by `/`.
    #[must_use]
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            for col in 0..BOARD_SIZE {
                out.push(self.diagram_char(Square(row, col)));
            }
        }
        out
    }

    fn diagram_char(&self, sq: Square) -> char {
        if self.is_obstacle_square(sq) {
            return OBSTACLE_CHAR;
        }
        match self.cell(sq) {
            Cell::Occupied(piece) => piece.to_char(),
            Cell::Empty | Cell::Invalid => EMPTY_CHAR,
        }
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

/// Grid with row and column labels, for terminal play.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row} ")?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.diagram_char(Square(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Player};

    const START: &str = ".b.b.b/b.b.b./....../....../.w.w.w/w.w.w.";

    #[test]
    fn start_diagram_matches_starting_position() {
        let board = Board::from_diagram(START).unwrap();
        assert_eq!(board, Board::starting_position(0));
        assert_eq!(Board::starting_position(0).to_diagram(), START);
    }

    #[test]
    fn multiline_diagram_with_obstacles_and_kings() {
        let board: Board = "
            . B . . . .
            . . . . # .
            . . . w . .
            . . . . . .
            . . . . . .
            W . . . . .
        "
        .parse()
        .unwrap();
        assert_eq!(board.count(Player::Two, PieceKind::King), 1);
        assert_eq!(board.count(Player::One, PieceKind::King), 1);
        assert!(board.is_obstacle(1, 4));
        assert_eq!(board.initial_obstacle_count(), 1);
        assert_eq!(board.to_diagram(), ".B..../....#./...w../....../....../W.....");
    }

    #[test]
    fn rejects_bad_diagrams() {
        assert_eq!(
            Board::from_diagram("....../......"),
            Err(DiagramError::RowCount { found: 2 })
        );
        assert_eq!(
            Board::from_diagram("...../....../....../....../....../......"),
            Err(DiagramError::RowLength { row: 0, found: 5 })
        );
        assert_eq!(
            Board::from_diagram(".x..../....../....../....../....../......"),
            Err(DiagramError::InvalidChar { char: 'x' })
        );
        assert_eq!(
            Board::from_diagram("w...../....../....../....../....../......"),
            Err(DiagramError::LightSquare { row: 0, col: 0 })
        );
    }

    #[test]
    fn display_has_labels() {
        let text = Board::starting_position(0).to_string();
        assert!(text.starts_with("   0 1 2 3 4 5"));
        assert!(text.contains("0  . b . b . b"));
    }
}
