//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::CaptureError;

/// An ordered chain of jumps made by one piece in a single turn.
///
/// `path` holds the origin followed by each landing square; `captures` holds
/// the jumped square of each segment, so `captures.len() == path.len() - 1`
/// always holds for a constructed value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCaptureSequence"))]
pub struct CaptureSequence {
    path: Vec<Square>,
    captures: Vec<Square>,
}

/// Unchecked wire form; deserialized sequences go through `CaptureSequence::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCaptureSequence {
    path: Vec<Square>,
    captures: Vec<Square>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCaptureSequence> for CaptureSequence {
    type Error = CaptureError;

    fn try_from(raw: RawCaptureSequence) -> Result<Self, Self::Error> {
        CaptureSequence::new(raw.path, raw.captures)
    }
}

impl CaptureSequence {
    /// Build a capture sequence, rejecting any shape that is not a chain of
    /// diagonal jumps over the listed squares.
    pub fn new(path: Vec<Square>, captures: Vec<Square>) -> Result<Self, CaptureError> {
        if path.len() < 2 {
            return Err(CaptureError::PathTooShort { len: path.len() });
        }
        if captures.len() != path.len() - 1 {
            return Err(CaptureError::LengthMismatch {
                path: path.len(),
                captures: captures.len(),
            });
        }
        for (segment, &captured) in path.windows(2).zip(&captures) {
            let (from, to) = (segment[0], segment[1]);
            let dr = to.row() as isize - from.row() as isize;
            let dc = to.col() as isize - from.col() as isize;
            if dr.abs() != 2 || dc.abs() != 2 {
                return Err(CaptureError::NotAJump { from, to });
            }
            if from.offset(dr / 2, dc / 2) != Some(captured) {
                return Err(CaptureError::CaptureOffPath { from, to, captured });
            }
        }
        Ok(CaptureSequence { path, captures })
    }

    /// Generator-side constructor; the DFS only ever extends by whole jumps.
    pub(crate) fn from_parts(path: Vec<Square>, captures: Vec<Square>) -> Self {
        debug_assert!(path.len() >= 2 && captures.len() == path.len() - 1);
        CaptureSequence { path, captures }
    }

    #[must_use]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    #[must_use]
    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    /// Number of jumps in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Always false for a constructed sequence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> Square {
        self.path[0]
    }

    #[must_use]
    pub fn end(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// Segments as `(from, to, captured)` triples, in path order
    pub fn jumps(&self) -> impl Iterator<Item = (Square, Square, Square)> + '_ {
        self.path
            .windows(2)
            .zip(&self.captures)
            .map(|(segment, &captured)| (segment[0], segment[1], captured))
    }
}

/// A playable move: either a single diagonal step or a full capture chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Simple { from: Square, to: Square },
    Capture(CaptureSequence),
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn simple(from: Square, to: Square) -> Self {
        Move::Simple { from, to }
    }

    /// Square the moving piece starts on
    #[must_use]
    pub fn start(&self) -> Square {
        match self {
            Move::Simple { from, .. } => *from,
            Move::Capture(seq) => seq.start(),
        }
    }

    /// Square the moving piece ends on
    #[must_use]
    pub fn end(&self) -> Square {
        match self {
            Move::Simple { to, .. } => *to,
            Move::Capture(seq) => seq.end(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Capture(_))
    }

    /// Captured squares, empty for a simple move
    #[must_use]
    pub fn captures(&self) -> &[Square] {
        match self {
            Move::Simple { .. } => &[],
            Move::Capture(seq) => seq.captures(),
        }
    }
}

impl From<CaptureSequence> for Move {
    fn from(seq: CaptureSequence) -> Self {
        Move::Capture(seq)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Simple { from, to } => write!(f, "{from}-{to}"),
            Move::Capture(seq) => {
                for (i, sq) in seq.path().iter().enumerate() {
                    if i > 0 {
                        write!(f, "x")?;
                    }
                    write!(f, "{sq}")?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered list of moves, in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Move> {
        self.moves.get(idx)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
