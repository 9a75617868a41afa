//! Capture sequence generation.
//!
//! Depth-first search over jumps from every friendly piece. The board is
//! never mutated during the search: jumped pieces stay where they are and
//! the moving piece still occupies its origin. Loops are cut by refusing to
//! reuse a jump edge, keyed by (jumped square, landing square), within one
//! sequence. A sequence is recorded only at a dead end after at least one
//! jump, so every result is maximal and no strict prefix is ever emitted.

use super::super::tables::{self, Jump};
use super::super::{Board, CaptureSequence, Cell, Direction, Move, MoveList, Piece, Player, Square};

struct CaptureSearch<'a> {
    board: &'a Board,
    piece: Piece,
    path: Vec<Square>,
    captures: Vec<Square>,
    used: Vec<Jump>,
    found: MoveList,
}

impl CaptureSearch<'_> {
    /// A jump is available when the man may travel that way, the jumped
    /// cell holds an opposing piece and the landing cell is empty.
    /// Obstacles block the jumped and landing cells like the board edge.
    fn available_jump(&self, from: Square, dir: Direction) -> Option<Jump> {
        if self.piece.is_man() && !self.piece.directions().contains(&dir) {
            return None;
        }
        let jump = tables::jump(from, dir)?;
        let opposing = match self.board.cell(jump.over) {
            Cell::Occupied(other) => other.player != self.piece.player,
            Cell::Empty | Cell::Invalid => false,
        };
        if !opposing || !self.board.is_empty_square(jump.land) {
            return None;
        }
        if self.used.contains(&jump) {
            return None;
        }
        Some(jump)
    }

    fn extend(&mut self) {
        let from = self.path[self.path.len() - 1];
        let mut extended = false;

        for dir in Direction::ALL {
            let Some(jump) = self.available_jump(from, dir) else {
                continue;
            };
            extended = true;

            self.path.push(jump.land);
            self.captures.push(jump.over);
            self.used.push(jump);
            self.extend();
            self.used.pop();
            self.captures.pop();
            self.path.pop();
        }

        if !extended && !self.captures.is_empty() {
            let seq = CaptureSequence::from_parts(self.path.clone(), self.captures.clone());
            self.found.push(Move::Capture(seq));
        }
    }
}

impl Board {
    /// Every maximal capture sequence for `player`, pieces in row-major order
    /// and branches in `Direction::ALL` order.
    #[must_use]
    pub fn capture_moves(&self, player: Player) -> MoveList {
        let mut found = MoveList::new();
        for (origin, piece) in self.pieces(player) {
            let mut search = CaptureSearch {
                board: self,
                piece,
                path: vec![origin],
                captures: Vec::new(),
                used: Vec::new(),
                found,
            };
            search.extend();
            found = search.found;
        }
        found
    }
}
