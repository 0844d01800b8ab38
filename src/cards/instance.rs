//! Card instances - one physical card as seen this turn.
//!
//! `Card` is a plain value: copying a `GameState` copies every card, so no
//! two states ever share a card record. Only the simulator mutates cards,
//! and only on its own copy of the state.
//!
//! ## Stats
//!
//! For creatures, `attack`/`defense` are the creature's stats and `defense`
//! is its remaining health. For items they are the deltas the item applies
//! to its target.

use serde::{Deserialize, Serialize};

use super::attributes::{Abilities, Ability};
use super::definition::{CardNumber, CardType, Location};
use crate::core::entity::InstanceId;

/// A card in hand, on a board, or summoned this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Template number.
    pub card_number: CardNumber,

    /// Server-assigned instance id.
    pub instance_id: InstanceId,

    /// Current location.
    pub location: Location,

    /// Creature or item colour.
    pub card_type: CardType,

    /// Mana cost.
    pub cost: i32,

    /// Attack (creatures) or attack delta (items).
    pub attack: i32,

    /// Health (creatures) or defense delta (items).
    pub defense: i32,

    /// Keyword abilities (creatures) or abilities granted/stripped (items).
    pub abilities: Abilities,

    /// Health change applied to my player when played.
    pub my_health_change: i32,

    /// Health change applied to the enemy player when played.
    pub enemy_health_change: i32,

    /// Cards drawn when played.
    pub card_draw: i32,

    /// Set once this creature has attacked (or retaliated) this turn.
    #[serde(default)]
    pub did_attack: bool,
}

impl Card {
    /// Create a creature in hand with the given stats.
    #[must_use]
    pub fn creature(instance_id: InstanceId, cost: i32, attack: i32, defense: i32) -> Self {
        Self {
            instance_id,
            card_type: CardType::Creature,
            cost,
            attack,
            defense,
            ..Self::default()
        }
    }

    /// Create an item in hand with the given stat deltas.
    #[must_use]
    pub fn item(
        instance_id: InstanceId,
        card_type: CardType,
        cost: i32,
        attack: i32,
        defense: i32,
    ) -> Self {
        Self {
            instance_id,
            card_type,
            cost,
            attack,
            defense,
            ..Self::default()
        }
    }

    /// Set the location.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Set the template number.
    #[must_use]
    pub fn with_number(mut self, card_number: CardNumber) -> Self {
        self.card_number = card_number;
        self
    }

    /// Set the ability set.
    #[must_use]
    pub fn with_abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    /// Set the health changes applied when played.
    #[must_use]
    pub fn with_health_changes(mut self, my_health_change: i32, enemy_health_change: i32) -> Self {
        self.my_health_change = my_health_change;
        self.enemy_health_change = enemy_health_change;
        self
    }

    /// Set the card draw.
    #[must_use]
    pub fn with_card_draw(mut self, card_draw: i32) -> Self {
        self.card_draw = card_draw;
        self
    }

    /// Check for an ability.
    #[must_use]
    pub const fn has(&self, ability: Ability) -> bool {
        self.abilities.contains(ability)
    }

    /// Check if this is a creature.
    #[must_use]
    pub const fn is_creature(&self) -> bool {
        matches!(self.card_type, CardType::Creature)
    }

    /// Check if a creature with this health must leave the board.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.defense <= 0
    }

    /// Attack plus defense, as used by board evaluation.
    #[must_use]
    pub const fn stat_total(&self) -> i32 {
        self.attack + self.defense
    }

    /// Check if this creature may still be ordered to attack this turn.
    #[must_use]
    pub const fn can_attack(&self) -> bool {
        !self.did_attack
    }
}
