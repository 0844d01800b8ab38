//! Rules engine trait.
//!
//! Search calls into `RulesEngine` to expand nodes but never interprets
//! card rules directly. `BattleRules` is the battle-phase implementation.

use crate::core::{GameAction, GameState, MAX_BOARD_SIZE};

use super::{legal, simulator};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: must start with `NoAction` and never be empty
/// - `apply_action`: must be deterministic and leave `state` unchanged
pub trait RulesEngine {
    /// Enumerate the legal actions from `state`.
    fn legal_actions(&self, state: &GameState) -> Vec<GameAction>;

    /// Produce the successor of `state` under `action`.
    fn apply_action(&self, state: &GameState, action: &GameAction) -> GameState;

    /// Check if `state` is a win for me.
    fn is_won(&self, state: &GameState) -> bool {
        state.is_won()
    }
}

/// Battle-phase rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleRules {
    /// Creatures allowed on my side (active plus passive).
    pub max_board_size: usize,
}

impl BattleRules {
    /// Create rules with the standard board limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a different board limit.
    #[must_use]
    pub fn with_max_board_size(mut self, max_board_size: usize) -> Self {
        self.max_board_size = max_board_size;
        self
    }
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            max_board_size: MAX_BOARD_SIZE,
        }
    }
}

impl RulesEngine for BattleRules {
    fn legal_actions(&self, state: &GameState) -> Vec<GameAction> {
        legal::legal_actions(state, self.max_board_size)
    }

    fn apply_action(&self, state: &GameState, action: &GameAction) -> GameState {
        simulator::simulate(state, action)
    }
}
