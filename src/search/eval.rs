//! Static state evaluation.
//!
//! Evaluators are trait-based so search can be pointed at a stronger
//! heuristic without touching the search loop.

use crate::cards::Card;
use crate::core::GameState;

/// Scores a state from my point of view. Higher is better.
pub trait Evaluator: Send + Sync {
    /// Score `state`.
    fn evaluate(&self, state: &GameState) -> i32;
}

/// Life differential plus board presence plus stat totals.
///
/// `my_health - enemy_health + |my_board| + |passive| + Σ(att+def) mine - Σ(att+def) theirs`
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardEvaluator;

fn stat_sum(cards: &[Card]) -> i32 {
    cards.iter().map(Card::stat_total).sum()
}

impl Evaluator for BoardEvaluator {
    fn evaluate(&self, state: &GameState) -> i32 {
        state.my_player.health - state.enemy_player.health
            + state.my_board.len() as i32
            + state.passive_cards.len() as i32
            + stat_sum(&state.my_board)
            - stat_sum(&state.enemy_board)
    }
}
