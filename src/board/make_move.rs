use super::{Board, Move};

impl Board {
    /// Apply a move produced by the generator for the side to move.
    ///
    /// A capture sequence is played segment by segment: the piece hops to the
    /// next landing square, then that segment's jumped piece is removed.
    /// Crowning happens inside `move_piece`, so a man crowned mid-chain
    /// finishes the chain as a king. Obstacles are not refreshed here.
    pub fn apply_move(&mut self, mv: &Move) {
        match mv {
            Move::Simple { from, to } => self.move_piece(*from, *to),
            Move::Capture(seq) => {
                for (from, to, captured) in seq.jumps() {
                    self.move_piece(from, to);
                    self.remove_piece(captured);
                }
            }
        }
    }

    /// Copy of the board with `mv` applied.
    #[must_use]
    pub fn with_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }
}
