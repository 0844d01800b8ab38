//! Property tests over generated states and random action walks.

use std::collections::HashSet;

use proptest::prelude::*;

use ccg_bot::cards::{Abilities, Ability, Card, CardType, Location};
use ccg_bot::core::{Gambler, GameAction, GameState, InstanceId, MAX_BOARD_SIZE};
use ccg_bot::rules::{legal_actions, simulate};

fn abilities() -> impl Strategy<Value = Abilities> {
    (0u8..64).prop_map(|bits| Ability::ALL.into_iter().filter(|a| bits & a.bit() != 0).collect())
}

fn card_type() -> impl Strategy<Value = CardType> {
    prop_oneof![
        4 => Just(CardType::Creature),
        1 => Just(CardType::GreenItem),
        1 => Just(CardType::RedItem),
        1 => Just(CardType::BlueItem),
    ]
}

/// Card body without id or location.
fn card() -> impl Strategy<Value = Card> {
    (card_type(), 0..8i32, -3..9i32, -4..9i32, abilities(), -3..4i32, -3..4i32).prop_map(
        |(card_type, cost, attack, defense, abilities, my_hp, enemy_hp)| {
            let card = Card::item(InstanceId::new(0), card_type, cost, attack, defense)
                .with_abilities(abilities)
                .with_health_changes(my_hp, enemy_hp);
            if card.is_creature() {
                Card { attack: attack.max(0), defense: defense.max(1), ..card }
            } else {
                card
            }
        },
    )
}

fn creature() -> impl Strategy<Value = Card> {
    (0..8i32, 0..9i32, 1..9i32, abilities())
        .prop_map(|(cost, attack, defense, abilities)| {
            Card::creature(InstanceId::new(0), cost, attack, defense).with_abilities(abilities)
        })
}

fn state() -> impl Strategy<Value = GameState> {
    (
        1..13i32,
        1..31i32,
        prop::collection::vec(card(), 0..6),
        prop::collection::vec(creature(), 0..4),
        prop::collection::vec(creature(), 0..5),
        prop::collection::vec(creature(), 0..3),
    )
        .prop_map(|(mana, enemy_health, hand, board, enemy, passive)| {
            let placed = hand
                .into_iter()
                .map(|c| c.at(Location::InHand))
                .chain(board.into_iter().map(|c| c.at(Location::PlayerSide)))
                .chain(enemy.into_iter().map(|c| c.at(Location::EnemySide)))
                .chain(passive.into_iter().map(|c| c.at(Location::PlayerSidePassive)));

            let mut state = GameState::new(Gambler::new(30, mana, 20, 25), Gambler::new(enemy_health, mana, 20, 25), 4);
            for (n, card) in placed.enumerate() {
                state.add_card(Card { instance_id: InstanceId::new(n as i32 + 1), ..card });
            }
            state
        })
}

fn attackers(actions: &[GameAction]) -> Vec<InstanceId> {
    actions
        .iter()
        .filter_map(|a| match *a {
            GameAction::CreatureAttack { id, .. } => Some(id),
            _ => None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_card_count_survives_random_walks(
        initial in state(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..12),
    ) {
        prop_assert!(initial.is_card_count_consistent());

        let mut current = initial;
        for pick in picks {
            if current.is_won() {
                break;
            }
            let actions = legal_actions(&current, MAX_BOARD_SIZE);
            let action = *pick.get(&actions);
            current = simulate(&current, &action);

            prop_assert!(current.is_card_count_consistent(), "after {}", action);
            prop_assert!(current
                .all_cards()
                .filter(|c| c.location != Location::InHand)
                .all(|c| !c.is_dead()));
        }
    }

    #[test]
    fn prop_spent_creatures_never_attack(
        initial in state(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..12),
    ) {
        let mut current = initial;
        for pick in picks {
            if current.is_won() {
                break;
            }
            let actions = legal_actions(&current, MAX_BOARD_SIZE);

            for id in attackers(&actions) {
                let card = current.my_board.iter().find(|c| c.instance_id == id);
                prop_assert!(card.is_some_and(|c| !c.did_attack));
            }

            current = simulate(&current, pick.get(&actions));
        }
    }

    #[test]
    fn prop_enumeration_has_no_duplicates(initial in state()) {
        let actions = legal_actions(&initial, MAX_BOARD_SIZE);
        let unique: HashSet<_> = actions.iter().collect();

        prop_assert_eq!(unique.len(), actions.len());
        prop_assert_eq!(actions[0], GameAction::NoAction);
    }

    #[test]
    fn prop_guard_blocks_other_targets(initial in state()) {
        let actions = legal_actions(&initial, MAX_BOARD_SIZE);

        if initial.enemy_has_guard() {
            for action in actions {
                if let GameAction::CreatureAttack { target_id, .. } = action {
                    prop_assert!(!target_id.is_enemy_player());
                    prop_assert!(initial.find(target_id).is_some_and(|c| c.has(Ability::Guard)));
                }
            }
        }
    }

    #[test]
    fn prop_simulation_leaves_parent_untouched(initial in state(), pick in any::<prop::sample::Index>()) {
        let before = initial.clone();
        let actions = legal_actions(&initial, MAX_BOARD_SIZE);
        let _ = simulate(&initial, pick.get(&actions));
        prop_assert_eq!(initial, before);
    }
}
