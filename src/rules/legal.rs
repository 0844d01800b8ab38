//! Legal-action enumeration.
//!
//! Produces every action the player can submit right now, as a flat list
//! without duplicates. Order is deterministic:
//!
//! 1. `NoAction`
//! 2. attacks, per attacker in board order (player first, then creatures)
//! 3. summons, in hand order
//! 4. item uses, in hand order
//!
//! While any enemy creature has Guard, only Guard creatures may be attacked.
//! Without Guard the enemy player is always a legal target, so every ready
//! attacker has at least one legal attack.

use crate::cards::{Ability, Card, CardType};
use crate::core::{GameAction, GameState, InstanceId};

/// Enumerate legal actions. `max_board_size` caps active plus passive creatures.
#[must_use]
pub fn legal_actions(state: &GameState, max_board_size: usize) -> Vec<GameAction> {
    let mut actions = vec![GameAction::NoAction];
    push_attacks(state, &mut actions);
    push_summons(state, max_board_size, &mut actions);
    push_item_uses(state, &mut actions);
    actions
}

fn push_attacks(state: &GameState, out: &mut Vec<GameAction>) {
    let guarded = state.enemy_has_guard();

    for attacker in state.my_board.iter().filter(|c| c.can_attack()) {
        let id = attacker.instance_id;
        if guarded {
            out.extend(
                state
                    .enemy_board
                    .iter()
                    .filter(|e| e.has(Ability::Guard))
                    .map(|e| GameAction::attack(id, e.instance_id)),
            );
        } else {
            out.push(GameAction::attack_player(id));
            out.extend(
                state
                    .enemy_board
                    .iter()
                    .map(|e| GameAction::attack(id, e.instance_id)),
            );
        }
    }
}

fn affordable<'a>(state: &'a GameState) -> impl Iterator<Item = &'a Card> {
    state
        .my_hand
        .iter()
        .filter(move |c| state.my_player.can_afford(c.cost))
}

fn push_summons(state: &GameState, max_board_size: usize, out: &mut Vec<GameAction>) {
    if state.my_creature_count() >= max_board_size {
        return;
    }
    out.extend(
        affordable(state)
            .filter(|c| c.is_creature())
            .map(|c| GameAction::summon(c.instance_id)),
    );
}

fn push_item_uses(state: &GameState, out: &mut Vec<GameAction>) {
    for item in affordable(state) {
        let id = item.instance_id;
        match item.card_type {
            CardType::Creature => {}
            CardType::GreenItem => out.extend(
                state
                    .my_board
                    .iter()
                    .map(|target| GameAction::use_item(id, target.instance_id)),
            ),
            CardType::RedItem => out.extend(
                state
                    .enemy_board
                    .iter()
                    .map(|target| GameAction::use_item(id, target.instance_id)),
            ),
            CardType::BlueItem => {
                if item.defense != 0 {
                    out.extend(
                        state
                            .enemy_board
                            .iter()
                            .map(|target| GameAction::use_item(id, target.instance_id)),
                    );
                }
                out.push(GameAction::use_item(id, InstanceId::ENEMY_PLAYER));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Abilities, Location};
    use crate::core::{Gambler, MAX_BOARD_SIZE};

    fn id(n: i32) -> InstanceId {
        InstanceId::new(n)
    }

    fn state_with_mana(mana: i32) -> GameState {
        GameState::new(Gambler::new(30, mana, 24, 25), Gambler::new(30, mana, 24, 25), 6)
    }

    #[test]
    fn test_only_no_action() {
        let state = state_with_mana(2).with_card(Card::creature(id(3), 3, 4, 4));
        assert_eq!(legal_actions(&state, MAX_BOARD_SIZE), vec![GameAction::NoAction]);
    }

    #[test]
    fn test_attack_player_then_creatures() {
        let state = state_with_mana(2)
            .with_card(Card::creature(id(3), 3, 4, 4).at(Location::PlayerSide))
            .with_card(Card::creature(id(2), 3, 2, 2).at(Location::EnemySide));

        assert_eq!(
            legal_actions(&state, MAX_BOARD_SIZE),
            vec![
                GameAction::NoAction,
                GameAction::attack_player(id(3)),
                GameAction::attack(id(3), id(2)),
            ]
        );
    }

    #[test]
    fn test_spent_attacker_is_skipped() {
        let mut state = state_with_mana(0)
            .with_card(Card::creature(id(3), 3, 4, 4).at(Location::PlayerSide))
            .with_card(Card::creature(id(4), 3, 4, 4).at(Location::PlayerSide));
        state.my_board[0].did_attack = true;

        assert_eq!(
            legal_actions(&state, MAX_BOARD_SIZE),
            vec![GameAction::NoAction, GameAction::attack_player(id(4))]
        );
    }

    #[test]
    fn test_guard_restricts_targets() {
        let guard = Abilities::from(Ability::Guard);
        let state = state_with_mana(0)
            .with_card(Card::creature(id(1), 1, 2, 2).at(Location::PlayerSide))
            .with_card(Card::creature(id(5), 1, 1, 1).at(Location::EnemySide))
            .with_card(Card::creature(id(6), 1, 1, 3).at(Location::EnemySide).with_abilities(guard));

        assert_eq!(
            legal_actions(&state, MAX_BOARD_SIZE),
            vec![GameAction::NoAction, GameAction::attack(id(1), id(6))]
        );
    }

    #[test]
    fn test_summons_respect_mana_and_board_space() {
        let state = state_with_mana(3)
            .with_card(Card::creature(id(1), 3, 4, 4))
            .with_card(Card::creature(id(2), 4, 2, 2))
            .with_card(Card::creature(id(3), 0, 1, 1));

        assert_eq!(
            legal_actions(&state, MAX_BOARD_SIZE),
            vec![GameAction::NoAction, GameAction::summon(id(1)), GameAction::summon(id(3))]
        );
        assert_eq!(legal_actions(&state, 0), vec![GameAction::NoAction]);
    }

    #[test]
    fn test_green_item_needs_friendly_creature() {
        let green = Card::item(id(9), CardType::GreenItem, 1, 1, 1);
        let state = state_with_mana(5).with_card(green);
        assert_eq!(legal_actions(&state, MAX_BOARD_SIZE), vec![GameAction::NoAction]);

        let state = state.with_card(Card::creature(id(1), 1, 1, 1).at(Location::PlayerSide));
        assert!(legal_actions(&state, MAX_BOARD_SIZE).contains(&GameAction::use_item(id(9), id(1))));
    }

    #[test]
    fn test_red_item_needs_enemy_creature() {
        let red = Card::item(id(9), CardType::RedItem, 1, 0, -2);
        let state = state_with_mana(5).with_card(red);
        assert_eq!(legal_actions(&state, MAX_BOARD_SIZE), vec![GameAction::NoAction]);

        let state = state.with_card(Card::creature(id(4), 1, 1, 1).at(Location::EnemySide));
        assert_eq!(
            legal_actions(&state, MAX_BOARD_SIZE),
            vec![GameAction::NoAction, GameAction::use_item(id(9), id(4))]
        );
    }

    #[test]
    fn test_blue_item_always_offers_player_target() {
        let plain = Card::item(id(8), CardType::BlueItem, 1, 0, 0).with_health_changes(2, 0);
        let debuff = Card::item(id(9), CardType::BlueItem, 1, 0, -1);
        let state = state_with_mana(5)
            .with_card(plain)
            .with_card(debuff)
            .with_card(Card::creature(id(4), 1, 1, 3).at(Location::EnemySide));

        assert_eq!(
            legal_actions(&state, MAX_BOARD_SIZE),
            vec![
                GameAction::NoAction,
                GameAction::use_item(id(8), InstanceId::ENEMY_PLAYER),
                GameAction::use_item(id(9), id(4)),
                GameAction::use_item(id(9), InstanceId::ENEMY_PLAYER),
            ]
        );
    }
}
