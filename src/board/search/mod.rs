//! Search module implementing fixed-depth minimax with alpha-beta pruning.
//!
//! Every child position is an owned clone of its parent, so sibling
//! branches never see each other's mutations and nothing needs undoing.
//! There is no transposition table and no move reordering: moves are tried
//! in generation order, which also fixes how ties at the root are broken.

mod alphabeta;
mod params;

use log::{debug, trace};

use super::{Board, Move};
use alphabeta::SearchContext;

pub use alphabeta::search;
pub use params::{SearchParams, DEFAULT_DEPTH};

/// Bound used for the full-width alpha-beta window.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Result of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the engine's side cannot move
    pub best_move: Option<Move>,
    /// Score of `best_move`, or the static score when there is no move
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
}

/// Pick the engine's move.
///
/// Each root candidate is searched with its own full window at
/// `depth - 1`, and the first candidate with the strictly greatest score
/// wins, so equal scores keep generation order.
#[must_use]
pub fn find_best_move(board: &Board, params: &SearchParams) -> SearchResult {
    let ai = params.ai_player;
    let mut ctx = SearchContext::new(ai, params.weights);
    let child_depth = params.depth.saturating_sub(1);

    let mut best: Option<(Move, i32)> = None;
    for mv in board.playable_moves(ai) {
        let child = board.with_move(&mv);
        let score = ctx.alphabeta(
            &child,
            child_depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            ai.opponent(),
        );
        trace!("candidate {mv}: {score}");
        if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
            best = Some((mv, score));
        }
    }

    let result = match best {
        Some((mv, score)) => SearchResult {
            best_move: Some(mv),
            score,
            nodes: ctx.nodes,
        },
        None => SearchResult {
            best_move: None,
            score: board.evaluate_with(ai, &params.weights),
            nodes: ctx.nodes,
        },
    };
    match &result.best_move {
        Some(mv) => debug!(
            "{ai} depth {} best {mv} score {} nodes {}",
            params.depth, result.score, result.nodes
        ),
        None => debug!("{ai} has no legal move"),
    }
    result
}

/// Best move for the default engine side (player two) at `depth` plies.
#[must_use]
pub fn choose_move(board: &Board, depth: u32) -> Option<Move> {
    find_best_move(board, &SearchParams::with_depth(depth)).best_move
}
