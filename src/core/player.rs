//! Player vitals.
//!
//! A `GameState` holds exactly two `Gambler`s: "my player" (the one the bot
//! decides for) and "enemy player". Health is allowed to go negative during
//! simulation; a state with `enemy.health <= 0` is a won state.

use serde::{Deserialize, Serialize};

/// Vitals of one player as reported at the start of a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gambler {
    /// Remaining health. May be negative transiently in simulated states.
    pub health: i32,

    /// Mana available this turn.
    pub mana: i32,

    /// Cards left in the deck.
    pub deck_size: i32,

    /// Health threshold at which the next rune breaks.
    pub next_rune_threshold: i32,
}

impl Gambler {
    /// Create player vitals.
    #[must_use]
    pub const fn new(health: i32, mana: i32, deck_size: i32, next_rune_threshold: i32) -> Self {
        Self {
            health,
            mana,
            deck_size,
            next_rune_threshold,
        }
    }

    /// Check if this player is dead.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Check if this player can pay `cost`.
    #[must_use]
    pub const fn can_afford(&self, cost: i32) -> bool {
        cost <= self.mana
    }

    /// Restore health by a non-negative amount. Negative amounts are ignored.
    pub fn heal(&mut self, amount: i32) {
        self.health += amount.max(0);
    }
}
