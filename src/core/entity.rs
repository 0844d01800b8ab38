//! Instance identification.
//!
//! Every card in play carries an `InstanceId` assigned by the game server.
//! Ids are unique within one turn's input but are not guaranteed to stay
//! attached to the same physical card across turns.
//!
//! ## Targets
//!
//! Actions that target "the opposing player" (or no creature at all) use
//! the reserved id `-1`:
//!
//! ```
//! use ccg_bot::core::InstanceId;
//!
//! let face = InstanceId::ENEMY_PLAYER;
//! assert!(face.is_enemy_player());
//! assert_eq!(face.raw(), -1);
//!
//! let creature = InstanceId::new(17);
//! assert!(!creature.is_enemy_player());
//! ```

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a card instance, or the enemy player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub i32);

impl InstanceId {
    /// Target id denoting the opposing player.
    pub const ENEMY_PLAYER: InstanceId = InstanceId(-1);

    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw ID value as sent over the protocol.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this id refers to the opposing player rather than a card.
    #[must_use]
    pub const fn is_enemy_player(self) -> bool {
        self.0 == Self::ENEMY_PLAYER.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for InstanceId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}
