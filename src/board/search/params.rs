use crate::board::{EvalWeights, Player};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched below the root, counting the root move itself
    pub depth: u32,
    /// Side the engine plays; its nodes maximise, the other side's minimise
    pub ai_player: Player,
    pub weights: EvalWeights,
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..SearchParams::default()
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            ai_player: Player::Two,
            weights: EvalWeights::default(),
        }
    }
}
