//! Move generation.
//!
//! Simple moves and capture sequences are generated separately. Capture is
//! mandatory: `playable_moves` is what a side may actually play, and it
//! discards simple moves whenever any capture exists.

mod captures;

use super::tables;
use super::{Board, Move, MoveList, Player};

impl Board {
    /// Single diagonal steps for every piece of `player`, ignoring captures.
    ///
    /// Pieces are visited in row-major order and each piece's directions in
    /// `Direction::ALL` order (forward pair only for men).
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces(player) {
            for &dir in piece.directions() {
                if let Some(to) = tables::step(from, dir) {
                    if self.is_empty_square(to) {
                        moves.push(Move::simple(from, to));
                    }
                }
            }
        }
        moves
    }

    /// Moves `player` may play this turn: every maximal capture sequence if
    /// there is at least one, otherwise the simple moves.
    #[must_use]
    pub fn playable_moves(&self, player: Player) -> MoveList {
        let captures = self.capture_moves(player);
        if captures.is_empty() {
            self.legal_moves(player)
        } else {
            captures
        }
    }

    #[must_use]
    pub fn has_moves(&self, player: Player) -> bool {
        !self.legal_moves(player).is_empty() || !self.capture_moves(player).is_empty()
    }

    /// `simple moves + 2 * capture sequences`, both counted in full.
    pub(crate) fn mobility(&self, player: Player) -> i32 {
        let simple = self.legal_moves(player).len() as i32;
        let captures = self.capture_moves(player).len() as i32;
        simple + 2 * captures
    }
}
