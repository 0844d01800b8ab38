//! Battle actions and per-turn action sequences.
//!
//! A `GameAction` is one command the player can submit. An `ActionSequence`
//! is the ordered list of commands for one turn, serialized to the protocol
//! as `;`-separated commands:
//!
//! ```
//! use ccg_bot::core::{ActionSequence, GameAction, InstanceId};
//!
//! let empty = ActionSequence::new();
//! assert_eq!(empty.to_string(), "PASS");
//!
//! let seq = empty
//!     .extended(GameAction::summon(InstanceId::new(3)))
//!     .extended(GameAction::attack_player(InstanceId::new(7)));
//! assert_eq!(seq.to_string(), "SUMMON 3;ATTACK 7 -1");
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entity::InstanceId;

/// A single battle command.
///
/// `target_id == InstanceId::ENEMY_PLAYER` means "the opposing player" for
/// attacks and "no creature target" for items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Stop taking actions this turn.
    NoAction,
    /// Attack with a creature on my board.
    CreatureAttack { id: InstanceId, target_id: InstanceId },
    /// Summon a creature from my hand.
    SummonCreature { id: InstanceId },
    /// Use an item from my hand.
    UseItem { id: InstanceId, target_id: InstanceId },
}

impl GameAction {
    /// Attack `target_id` with creature `id`.
    #[must_use]
    pub const fn attack(id: InstanceId, target_id: InstanceId) -> Self {
        GameAction::CreatureAttack { id, target_id }
    }

    /// Attack the opposing player with creature `id`.
    #[must_use]
    pub const fn attack_player(id: InstanceId) -> Self {
        Self::attack(id, InstanceId::ENEMY_PLAYER)
    }

    /// Summon creature `id` from hand.
    #[must_use]
    pub const fn summon(id: InstanceId) -> Self {
        GameAction::SummonCreature { id }
    }

    /// Use item `id` on `target_id`.
    #[must_use]
    pub const fn use_item(id: InstanceId, target_id: InstanceId) -> Self {
        GameAction::UseItem { id, target_id }
    }

    /// The acting card, if any.
    #[must_use]
    pub const fn actor(&self) -> Option<InstanceId> {
        match *self {
            GameAction::NoAction => None,
            GameAction::CreatureAttack { id, .. }
            | GameAction::SummonCreature { id }
            | GameAction::UseItem { id, .. } => Some(id),
        }
    }

    /// Check if this is an attack.
    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self, GameAction::CreatureAttack { .. })
    }
}

impl std::fmt::Display for GameAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameAction::NoAction => write!(f, "PASS"),
            GameAction::CreatureAttack { id, target_id } => write!(f, "ATTACK {} {}", id, target_id),
            GameAction::SummonCreature { id } => write!(f, "SUMMON {}", id),
            GameAction::UseItem { id, target_id } => write!(f, "USE {} {}", id, target_id),
        }
    }
}

/// Ordered actions to submit for the current turn.
///
/// Backed by a persistent vector: `extended` shares the unaffected prefix
/// with the parent sequence, so many frontier entries can branch from the
/// same parent without copying it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSequence {
    actions: Vector<GameAction>,
}

impl ActionSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new sequence with `action` appended. `self` is unchanged.
    #[must_use]
    pub fn extended(&self, action: GameAction) -> Self {
        let mut actions = self.actions.clone();
        actions.push_back(action);
        Self { actions }
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if no actions were chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over actions in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &GameAction> {
        self.actions.iter()
    }

    /// Get the action at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GameAction> {
        self.actions.get(index)
    }

    /// Collect into a plain `Vec` (handy for assertions).
    #[must_use]
    pub fn to_vec(&self) -> Vec<GameAction> {
        self.actions.iter().copied().collect()
    }
}

impl FromIterator<GameAction> for ActionSequence {
    fn from_iter<I: IntoIterator<Item = GameAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ActionSequence {
    /// Protocol command line. An empty sequence is `PASS`, never empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.actions.is_empty() {
            return write!(f, "PASS");
        }
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}
