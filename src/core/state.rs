//! Game state for one battle turn.
//!
//! ## Ownership
//!
//! A `GameState` exclusively owns its card lists. Cloning a state copies
//! every card, so successor states produced by the simulator never alias
//! their parent. Lists are `SmallVec`s sized for the game's hand and board
//! limits, so cloning stays allocation-free.
//!
//! ## Card count
//!
//! `card_count` tracks the cards I own: `my_hand + my_board + passive_cards`.
//! Enemy board cards are not counted. Every transition keeps this in sync;
//! `is_card_count_consistent` exists to catch simulator bugs in tests.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MAX_HAND_SIZE;
use super::entity::InstanceId;
use super::player::Gambler;
use crate::cards::{Ability, Card, Location};
use crate::error::Result;

/// Inline list of cards for a hand or a board side.
pub type CardList = SmallVec<[Card; MAX_HAND_SIZE]>;

/// Visible state at the start of (or during) my battle turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The player the bot decides for.
    pub my_player: Gambler,

    /// The opponent.
    pub enemy_player: Gambler,

    /// Opponent hand size (contents are hidden).
    pub enemy_hand_count: i32,

    /// Cards in my hand, on my board, and in my passive row.
    pub card_count: i32,

    /// Cards in my hand.
    pub my_hand: CardList,

    /// My creatures able to act this turn.
    pub my_board: CardList,

    /// Opponent creatures.
    pub enemy_board: CardList,

    /// My creatures summoned this turn without Charge.
    pub passive_cards: CardList,
}

impl GameState {
    /// Create a state with empty hand and boards.
    #[must_use]
    pub fn new(my_player: Gambler, enemy_player: Gambler, enemy_hand_count: i32) -> Self {
        Self {
            my_player,
            enemy_player,
            enemy_hand_count,
            ..Self::default()
        }
    }

    /// Place a card according to its `location`.
    ///
    /// Cards I own bump `card_count`; enemy board cards do not.
    pub fn add_card(&mut self, card: Card) {
        if card.location.is_mine() {
            self.card_count += 1;
        }
        self.cards_at_mut(card.location).push(card);
    }

    /// Builder form of `add_card`.
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.add_card(card);
        self
    }

    /// Builder form of `add_card` for several cards.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        for card in cards {
            self.add_card(card);
        }
        self
    }

    /// Cards at a location.
    #[must_use]
    pub fn cards_at(&self, location: Location) -> &[Card] {
        match location {
            Location::EnemySide => &self.enemy_board,
            Location::InHand => &self.my_hand,
            Location::PlayerSide => &self.my_board,
            Location::PlayerSidePassive => &self.passive_cards,
        }
    }

    fn cards_at_mut(&mut self, location: Location) -> &mut CardList {
        match location {
            Location::EnemySide => &mut self.enemy_board,
            Location::InHand => &mut self.my_hand,
            Location::PlayerSide => &mut self.my_board,
            Location::PlayerSidePassive => &mut self.passive_cards,
        }
    }

    /// Iterate over every card in the state.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.my_hand
            .iter()
            .chain(self.my_board.iter())
            .chain(self.passive_cards.iter())
            .chain(self.enemy_board.iter())
    }

    /// Find a card by instance id anywhere in the state.
    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<&Card> {
        self.all_cards().find(|c| c.instance_id == id)
    }

    /// Creatures I have on board, active or passive.
    #[must_use]
    pub fn my_creature_count(&self) -> usize {
        self.my_board.len() + self.passive_cards.len()
    }

    /// Recount the cards `card_count` is meant to track.
    #[must_use]
    pub fn counted_cards(&self) -> i32 {
        (self.my_hand.len() + self.my_board.len() + self.passive_cards.len()) as i32
    }

    /// Check the `card_count` invariant.
    #[must_use]
    pub fn is_card_count_consistent(&self) -> bool {
        self.card_count == self.counted_cards()
    }

    /// Check if any enemy creature has Guard.
    #[must_use]
    pub fn enemy_has_guard(&self) -> bool {
        self.enemy_board.iter().any(|c| c.has(Ability::Guard))
    }

    /// Check if the opponent is dead in this state.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.enemy_player.is_dead()
    }

    /// Structural signature for duplicate detection.
    ///
    /// Two states reached by different action orders (e.g. the same two
    /// summons in either order) share a signature.
    #[must_use]
    pub fn signature(&self) -> StateKey {
        StateKey {
            my_player: self.my_player,
            enemy_player: self.enemy_player,
            my_hand: sorted(&self.my_hand),
            my_board: sorted(&self.my_board),
            enemy_board: sorted(&self.enemy_board),
            passive_cards: sorted(&self.passive_cards),
        }
    }

    /// Encode the state for offline replay.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state written by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

fn sorted(cards: &[Card]) -> CardList {
    let mut list = CardList::from_slice(cards);
    list.sort_unstable_by_key(|c| c.instance_id);
    list
}

/// Order-independent state signature (see `GameState::signature`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    my_player: Gambler,
    enemy_player: Gambler,
    my_hand: CardList,
    my_board: CardList,
    enemy_board: CardList,
    passive_cards: CardList,
}
