//! Error types for board construction and move parsing.

use std::fmt;

use super::types::Square;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-5)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-5)
    ColOutOfBounds { col: usize },
    /// Not of the form `r,c`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-5)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-5)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for hand-built capture sequences that break the path/captures invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// A sequence needs an origin and at least one landing square
    PathTooShort { len: usize },
    /// Exactly one capture per path segment
    LengthMismatch { path: usize, captures: usize },
    /// A segment is not a two-step diagonal jump
    NotAJump { from: Square, to: Square },
    /// The captured square is not the midpoint of its segment
    CaptureOffPath {
        from: Square,
        to: Square,
        captured: Square,
    },
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PathTooShort { len } => {
                write!(f, "Capture path needs at least 2 squares, found {len}")
            }
            CaptureError::LengthMismatch { path, captures } => {
                write!(
                    f,
                    "Capture path of {path} squares needs {} captures, found {captures}",
                    path.saturating_sub(1)
                )
            }
            CaptureError::NotAJump { from, to } => {
                write!(f, "Segment {from}->{to} is not a diagonal jump")
            }
            CaptureError::CaptureOffPath { from, to, captured } => {
                write!(f, "Captured square {captured} is not jumped by {from}->{to}")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Wrong number of rows
    RowCount { found: usize },
    /// Wrong number of cells in a row
    RowLength { row: usize, found: usize },
    /// Unknown cell character
    InvalidChar { char: char },
    /// Pieces and obstacles may only stand on dark squares
    LightSquare { row: usize, col: usize },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::RowCount { found } => {
                write!(f, "Diagram must have 6 rows, found {found}")
            }
            DiagramError::RowLength { row, found } => {
                write!(f, "Diagram row {row} must have 6 cells, found {found}")
            }
            DiagramError::InvalidChar { char } => {
                write!(f, "Invalid diagram character '{char}'")
            }
            DiagramError::LightSquare { row, col } => {
                write!(f, "Cell ({row},{col}) is a light square and must be empty")
            }
        }
    }
}

impl std::error::Error for DiagramError {}
