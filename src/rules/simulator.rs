//! Forward model: apply one action to a state.
//!
//! `simulate` never touches its input; it clones the state and applies the
//! action to the clone. Dead creatures (health `<= 0`) are removed before
//! the transition returns, so no successor ever holds a dead creature.
//!
//! Actions that reference a card missing from the expected list are a
//! contract violation between the enumerator and the simulator and panic.

use crate::cards::{Ability, Card, CardType, Location};
use crate::core::{CardList, GameAction, GameState, InstanceId};

use super::combat;

/// Produce the state that results from `action`. `state` is unchanged.
#[must_use]
pub fn simulate(state: &GameState, action: &GameAction) -> GameState {
    let mut next = state.clone();
    apply(&mut next, action);
    next
}

/// Apply `action` in place to a state the caller owns.
pub fn apply(state: &mut GameState, action: &GameAction) {
    match *action {
        GameAction::NoAction => {}
        GameAction::CreatureAttack { id, target_id } => attack(state, id, target_id),
        GameAction::SummonCreature { id } => summon(state, id),
        GameAction::UseItem { id, target_id } => use_item(state, id, target_id),
    }
}

fn position(cards: &[Card], id: InstanceId, role: &str) -> usize {
    cards
        .iter()
        .position(|c| c.instance_id == id)
        .unwrap_or_else(|| panic!("{} {} is not where the action expects it", role, id))
}

fn attack(state: &mut GameState, attacker_id: InstanceId, target_id: InstanceId) {
    let a = position(&state.my_board, attacker_id, "attacker");

    if target_id.is_enemy_player() {
        let attacker = &mut state.my_board[a];
        state.enemy_player.health -= attacker.attack;
        if attacker.has(Ability::Drain) {
            state.my_player.heal(attacker.attack);
        }
        attacker.did_attack = true;
        return;
    }

    let d = position(&state.enemy_board, target_id, "defender");
    let mut attacker = state.my_board[a];
    let mut defender = state.enemy_board[d];

    let exchange = combat::fight(&mut attacker, &mut defender);
    if attacker.has(Ability::Drain) {
        state.my_player.heal(exchange.dealt_by_attacker);
    }
    if defender.has(Ability::Drain) {
        state.enemy_player.heal(exchange.dealt_by_defender);
    }

    state.my_board[a] = attacker;
    state.enemy_board[d] = defender;

    if defender.is_dead() {
        state.enemy_board.remove(d);
        if attacker.has(Ability::Breakthrough) {
            state.enemy_player.health += defender.defense;
        }
    }
    if attacker.is_dead() {
        state.my_board.remove(a);
        state.card_count -= 1;
    }
}

fn summon(state: &mut GameState, id: InstanceId) {
    let h = position(&state.my_hand, id, "summoned creature");
    let mut card = state.my_hand.remove(h);
    assert!(card.is_creature(), "summoned card {} is not a creature", id);

    state.my_player.mana -= card.cost;
    if card.has(Ability::Charge) {
        card.location = Location::PlayerSide;
        state.my_board.push(card);
    } else {
        card.location = Location::PlayerSidePassive;
        state.passive_cards.push(card);
    }
}

fn use_item(state: &mut GameState, id: InstanceId, target_id: InstanceId) {
    let h = position(&state.my_hand, id, "item");
    let item = state.my_hand.remove(h);

    state.my_player.mana -= item.cost;
    state.card_count -= 1;
    state.my_player.health += item.my_health_change;
    state.enemy_player.health += item.enemy_health_change;

    match item.card_type {
        CardType::GreenItem => {
            buff(&mut state.my_board, &item, target_id);
            state.card_count -= remove_dead(&mut state.my_board);
        }
        CardType::RedItem => {
            debuff(&mut state.enemy_board, &item, target_id);
            remove_dead(&mut state.enemy_board);
        }
        CardType::BlueItem if !target_id.is_enemy_player() => {
            if state.enemy_board.iter().any(|c| c.instance_id == target_id) {
                debuff(&mut state.enemy_board, &item, target_id);
                remove_dead(&mut state.enemy_board);
            } else {
                buff(&mut state.my_board, &item, target_id);
                state.card_count -= remove_dead(&mut state.my_board);
            }
        }
        CardType::BlueItem => {}
        CardType::Creature => panic!("card {} used as an item is a creature", id),
    }
}

fn buff(board: &mut CardList, item: &Card, target_id: InstanceId) {
    let t = position(board, target_id, "item target");
    let target = &mut board[t];
    target.abilities.insert_all(item.abilities);
    target.attack += item.attack;
    target.defense += item.defense;
}

fn debuff(board: &mut CardList, item: &Card, target_id: InstanceId) {
    let t = position(board, target_id, "item target");
    let target = &mut board[t];
    target.abilities.remove_all(item.abilities);
    target.attack += item.attack;
    target.defense += item.defense;
}

/// Drop dead creatures, returning how many were removed.
fn remove_dead(board: &mut CardList) -> i32 {
    let before = board.len();
    board.retain(|c| !c.is_dead());
    (before - board.len()) as i32
}
