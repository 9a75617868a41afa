//! Obstacle placement.
//!
//! Obstacles are never moved one by one: the whole set is re-sampled after
//! each completed turn, growing by one for every two pieces captured.

use log::debug;
use rand::seq::index;
use rand::Rng;

use super::{Bitboard, Board};

impl Board {
    /// Obstacles the board should carry given how many pieces have been captured:
    /// `initial + floor(removed / 2)`, before clipping to the free squares.
    #[must_use]
    pub fn target_obstacle_count(&self) -> usize {
        self.initial_obstacle_count + self.pieces_removed() / 2
    }

    /// Draw `count` distinct dark squares that hold no piece, uniformly.
    ///
    /// Pure with respect to the board: the current obstacle set is ignored
    /// (it is about to be replaced) and nothing is mutated. Candidates are
    /// taken in row-major order, so a seeded `rng` gives a reproducible set.
    /// If fewer than `count` squares are free, all of them are returned.
    pub fn sample_obstacles<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Bitboard {
        let candidates: Vec<_> = Bitboard::DARK_SQUARES
            .and(self.occupied().not())
            .iter()
            .collect();
        let amount = count.min(candidates.len());
        index::sample(rng, candidates.len(), amount)
            .into_iter()
            .map(|i| candidates[i])
            .collect()
    }

    /// Replace the obstacle set with a fresh sample sized by `target_obstacle_count`.
    ///
    /// The caller invokes this once per completed move; mutators never do.
    pub fn refresh_obstacles<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let target = self.target_obstacle_count();
        let obstacles = self.sample_obstacles(target, rng);
        debug!(
            "refreshing obstacles: {} -> {} (target {target}, {} pieces removed)",
            self.obstacle_count(),
            obstacles.popcount(),
            self.pieces_removed()
        );
        self.set_obstacles(obstacles);
    }

    pub(crate) fn set_obstacles(&mut self, obstacles: Bitboard) {
        debug_assert!(
            obstacles.and(self.occupied()).is_empty(),
            "obstacle placed on an occupied square"
        );
        debug_assert!(
            obstacles.and(Bitboard::DARK_SQUARES.not()).is_empty(),
            "obstacle placed on a light square"
        );
        self.obstacles = obstacles;
    }
}
