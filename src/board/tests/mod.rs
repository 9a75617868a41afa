//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Simple moves and the mandatory-capture filter
//! - `captures.rs` - Multi-jump capture sequences
//! - `obstacles.rs` - Obstacle sampling and refresh
//! - `eval.rs` - Evaluation terms
//! - `search.rs` - Alpha-beta search and root move choice
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;

use rand::prelude::*;

use crate::board::{Board, Player};

/// Play `plies` random playable moves from a fresh seeded board, refreshing
/// obstacles after each one. Returns the board and the side to move.
pub(super) fn random_playout(seed: u64, obstacles: usize, plies: usize) -> (Board, Player) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(obstacles, &mut rng);
    let mut to_move = Player::One;

    for _ in 0..plies {
        let moves = board.playable_moves(to_move);
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        board.apply_move(&moves[idx]);
        board.refresh_obstacles(&mut rng);
        to_move = to_move.opponent();
    }
    (board, to_move)
}

pub(super) fn diagram(text: &str) -> Board {
    Board::from_diagram(text).expect("valid test diagram")
}
