//! Static card classification: template number, card type, location.
//!
//! These mirror the integer codes of the turn input. Conversion from the
//! raw codes is fallible and happens only while parsing.

use serde::{Deserialize, Serialize};

/// Card template number (which card this is, not which copy).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardNumber(pub i32);

impl CardNumber {
    /// Create a new card number.
    #[must_use]
    pub const fn new(number: i32) -> Self {
        Self(number)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[default]
    Creature,
    /// Buffs a friendly creature.
    GreenItem,
    /// Debuffs an enemy creature.
    RedItem,
    /// Direct effect, optionally debuffing an enemy creature.
    BlueItem,
}

impl CardType {
    /// Protocol code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            CardType::Creature => 0,
            CardType::GreenItem => 1,
            CardType::RedItem => 2,
            CardType::BlueItem => 3,
        }
    }

    /// Parse a protocol code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CardType::Creature),
            1 => Some(CardType::GreenItem),
            2 => Some(CardType::RedItem),
            3 => Some(CardType::BlueItem),
            _ => None,
        }
    }

    /// Check if this is any kind of item.
    #[must_use]
    pub const fn is_item(self) -> bool {
        !matches!(self, CardType::Creature)
    }
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Opponent's board.
    EnemySide,
    /// My hand.
    #[default]
    InHand,
    /// My board, able to act.
    PlayerSide,
    /// My board, summoned this turn without Charge.
    PlayerSidePassive,
}

impl Location {
    /// Protocol code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Location::EnemySide => -1,
            Location::InHand => 0,
            Location::PlayerSide => 1,
            Location::PlayerSidePassive => 2,
        }
    }

    /// Parse a protocol code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Location::EnemySide),
            0 => Some(Location::InHand),
            1 => Some(Location::PlayerSide),
            2 => Some(Location::PlayerSidePassive),
            _ => None,
        }
    }

    /// Check if a card here belongs to me (counted in `card_count`).
    #[must_use]
    pub const fn is_mine(self) -> bool {
        !matches!(self, Location::EnemySide)
    }
}
