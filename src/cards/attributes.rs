//! Keyword abilities.
//!
//! Cards carry any subset of six keywords. The set is stored as a bit mask
//! keyed by the closed `Ability` enum; the fixed-width `B C D G L W` text
//! form exists only at the protocol boundary (see `protocol::token`).
//!
//! ```
//! use ccg_bot::cards::{Abilities, Ability};
//!
//! let mut abilities = Abilities::from(Ability::Guard);
//! abilities.insert(Ability::Ward);
//! assert!(abilities.contains(Ability::Guard));
//! assert_eq!(abilities.len(), 2);
//!
//! abilities.remove(Ability::Ward);
//! assert!(!abilities.contains(Ability::Ward));
//! ```

use serde::{Deserialize, Serialize};

/// A single keyword ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Excess damage to a killed creature carries to the defending player.
    Breakthrough,
    /// Can attack the turn it is summoned.
    Charge,
    /// Heals its owner by the damage it actually deals.
    Drain,
    /// Must be attacked before anything else on its side.
    Guard,
    /// Any damage it deals to a creature is fatal.
    Lethal,
    /// Absorbs the next instance of damage, then is consumed.
    Ward,
}

impl Ability {
    /// All abilities in protocol token order.
    pub const ALL: [Ability; 6] = [
        Ability::Breakthrough,
        Ability::Charge,
        Ability::Drain,
        Ability::Guard,
        Ability::Lethal,
        Ability::Ward,
    ];

    /// Bit for this ability within an `Abilities` mask.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Protocol letter for this ability.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Ability::Breakthrough => 'B',
            Ability::Charge => 'C',
            Ability::Drain => 'D',
            Ability::Guard => 'G',
            Ability::Lethal => 'L',
            Ability::Ward => 'W',
        }
    }
}

/// Set of abilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Abilities(u8);

impl Abilities {
    /// No abilities.
    pub const NONE: Abilities = Abilities(0);

    /// Every ability.
    pub const ALL: Abilities = Abilities(0x3F);

    /// Build a set from a list of abilities.
    #[must_use]
    pub fn of(abilities: &[Ability]) -> Self {
        abilities.iter().copied().collect()
    }

    /// Raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(self, ability: Ability) -> bool {
        self.0 & ability.bit() != 0
    }

    /// Check if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of abilities in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Add one ability.
    pub fn insert(&mut self, ability: Ability) {
        self.0 |= ability.bit();
    }

    /// Remove one ability.
    pub fn remove(&mut self, ability: Ability) {
        self.0 &= !ability.bit();
    }

    /// Add every ability of `other`.
    pub fn insert_all(&mut self, other: Abilities) {
        self.0 |= other.0;
    }

    /// Remove every ability of `other`.
    pub fn remove_all(&mut self, other: Abilities) {
        self.0 &= !other.0 & Self::ALL.0;
    }

    /// Iterate in protocol order.
    pub fn iter(self) -> impl Iterator<Item = Ability> {
        Ability::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl From<Ability> for Abilities {
    fn from(ability: Ability) -> Self {
        Abilities(ability.bit())
    }
}

impl FromIterator<Ability> for Abilities {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        let mut set = Abilities::NONE;
        for ability in iter {
            set.insert(ability);
        }
        set
    }
}
