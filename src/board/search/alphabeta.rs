use super::SCORE_INFINITY;
use crate::board::{Board, EvalWeights, Player};

/// State carried through one search: who the engine is, and a node counter.
pub(crate) struct SearchContext {
    ai_player: Player,
    weights: EvalWeights,
    pub(crate) nodes: u64,
}

impl SearchContext {
    pub(crate) fn new(ai_player: Player, weights: EvalWeights) -> Self {
        SearchContext {
            ai_player,
            weights,
            nodes: 0,
        }
    }

    /// Minimax with alpha-beta pruning; the engine's nodes maximise.
    ///
    /// Leaves are scored from the point of view of `player`, the side to move
    /// at that leaf, not from the engine's point of view. This is not negamax:
    /// the leaf perspective alternates with depth parity and move choice
    /// depends on it.
    pub(crate) fn alphabeta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        player: Player,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return board.evaluate_with(player, &self.weights);
        }
        let moves = board.playable_moves(player);
        if moves.is_empty() {
            return board.evaluate_with(player, &self.weights);
        }

        if player == self.ai_player {
            let mut value = -SCORE_INFINITY;
            for mv in &moves {
                let child = board.with_move(mv);
                let score = self.alphabeta(&child, depth - 1, alpha, beta, player.opponent());
                value = value.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = SCORE_INFINITY;
            for mv in &moves {
                let child = board.with_move(mv);
                let score = self.alphabeta(&child, depth - 1, alpha, beta, player.opponent());
                value = value.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

/// Score `board` with `player` to move, searching `depth` plies below it.
///
/// `ai_player` decides which nodes maximise. Uses the default evaluation
/// weights.
#[must_use]
pub fn search(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    player: Player,
    ai_player: Player,
) -> i32 {
    let mut ctx = SearchContext::new(ai_player, EvalWeights::default());
    ctx.alphabeta(board, depth, alpha, beta, player)
}
