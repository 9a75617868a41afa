//! Static evaluation.
//!
//! Three terms, each already oriented so that positive favours `player`:
//! material (man 1, king 2), mobility (simple moves + 2 x capture
//! sequences) and obstacles on the promotion diagonals of each side's men.

use super::tables;
use super::{Board, Player};

/// Weights applied to each evaluation term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    pub material: i32,
    pub mobility: i32,
    pub obstacle: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            material: 10,
            mobility: 1,
            obstacle: 1,
        }
    }
}

/// Unweighted term differences from one player's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalTerms {
    pub material: i32,
    pub mobility: i32,
    pub obstacle: i32,
}

impl EvalTerms {
    #[must_use]
    pub fn weighted(self, weights: &EvalWeights) -> i32 {
        weights.material * self.material
            + weights.mobility * self.mobility
            + weights.obstacle * self.obstacle
    }
}

impl Board {
    /// Heuristic score of the position for `player`; higher is better.
    #[must_use]
    pub fn evaluate(&self, player: Player) -> i32 {
        self.evaluate_with(player, &EvalWeights::default())
    }

    #[must_use]
    pub fn evaluate_with(&self, player: Player, weights: &EvalWeights) -> i32 {
        self.eval_terms(player).weighted(weights)
    }

    #[must_use]
    pub fn eval_terms(&self, player: Player) -> EvalTerms {
        let opponent = player.opponent();
        EvalTerms {
            material: self.material(player) - self.material(opponent),
            mobility: self.mobility(player) - self.mobility(opponent),
            // Obstacles in the opponent's way are good for us.
            obstacle: self.promotion_path_obstacles(opponent)
                - self.promotion_path_obstacles(player),
        }
    }

    /// Men count 1, kings 2.
    #[must_use]
    pub fn material(&self, player: Player) -> i32 {
        self.pieces(player).map(|(_, piece)| piece.value()).sum()
    }

    /// Obstacles lying anywhere on the two forward diagonal rays of each of
    /// `player`'s men. Kings are not counted.
    #[must_use]
    pub fn promotion_path_obstacles(&self, player: Player) -> i32 {
        let obstacles = self.obstacles();
        self.pieces(player)
            .filter(|(_, piece)| piece.is_man())
            .map(|(sq, piece)| {
                piece
                    .directions()
                    .iter()
                    .map(|&dir| tables::ray(sq, dir).and(obstacles).popcount() as i32)
                    .sum::<i32>()
            })
            .sum()
    }
}
