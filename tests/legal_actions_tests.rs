//! Legal-action enumeration tests, driven from protocol text.

use ccg_bot::cards::Ability;
use ccg_bot::core::{GameAction, GameState, InstanceId, MAX_BOARD_SIZE};
use ccg_bot::protocol::parse_state_lines;
use ccg_bot::rules::{legal_actions, simulate, BattleRules, RulesEngine};

fn id(n: i32) -> InstanceId {
    InstanceId::new(n)
}

fn turn(mana: i32, cards: &[&str]) -> GameState {
    let player = format!("30 {} 24 25", mana);
    let count = cards.len().to_string();
    let mut lines = vec![player.as_str(), player.as_str(), "6", count.as_str()];
    lines.extend_from_slice(cards);
    parse_state_lines(&lines).unwrap()
}

fn actions(state: &GameState) -> Vec<GameAction> {
    legal_actions(state, MAX_BOARD_SIZE)
}

// =============================================================================
// Baseline
// =============================================================================

#[test]
fn test_unaffordable_hand_only_passes() {
    let state = turn(2, &["69 3 0 0 3 4 4 ------ 0 0 0"]);
    assert_eq!(actions(&state), vec![GameAction::NoAction]);
}

#[test]
fn test_no_action_is_always_first() {
    let state = turn(10, &[
        "69 3 1 0 3 4 4 ------ 0 0 0",
        "70 2 0 0 2 2 2 ------ 0 0 0",
        "71 5 -1 0 2 2 2 ------ 0 0 0",
    ]);
    assert_eq!(actions(&state)[0], GameAction::NoAction);
}

// =============================================================================
// Attacks
// =============================================================================

#[test]
fn test_single_attacker() {
    let state = turn(2, &["69 3 1 0 3 4 4 ------ 0 0 0"]);
    assert_eq!(
        actions(&state),
        vec![GameAction::NoAction, GameAction::attack_player(id(3))]
    );
}

#[test]
fn test_two_attackers() {
    let state = turn(2, &[
        "69 3 1 0 3 4 4 ------ 0 0 0",
        "70 2 1 0 3 2 2 ------ 0 0 0",
    ]);
    assert_eq!(
        actions(&state),
        vec![
            GameAction::NoAction,
            GameAction::attack_player(id(3)),
            GameAction::attack_player(id(2)),
        ]
    );
}

#[test]
fn test_attacker_with_two_targets() {
    let state = turn(2, &[
        "69 3 1 0 3 4 4 ------ 0 0 0",
        "70 2 -1 0 3 2 2 ------ 0 0 0",
    ]);
    assert_eq!(
        actions(&state),
        vec![
            GameAction::NoAction,
            GameAction::attack(id(3), InstanceId::ENEMY_PLAYER),
            GameAction::attack(id(3), id(2)),
        ]
    );
}

#[test]
fn test_guard_exclusivity() {
    let state = turn(0, &[
        "1 1 1 0 3 4 4 ------ 0 0 0",
        "2 2 1 0 3 2 2 ------ 0 0 0",
        "3 10 -1 0 3 2 2 ------ 0 0 0",
        "4 11 -1 0 3 1 5 ---G-- 0 0 0",
        "5 12 -1 0 3 1 1 ---G-- 0 0 0",
    ]);

    let attacks: Vec<GameAction> = actions(&state).into_iter().filter(GameAction::is_attack).collect();

    assert_eq!(attacks.len(), 4);
    for action in &attacks {
        let GameAction::CreatureAttack { target_id, .. } = *action else {
            unreachable!()
        };
        assert!(!target_id.is_enemy_player());
        assert!(state.find(target_id).is_some_and(|c| c.has(Ability::Guard)));
    }
}

#[test]
fn test_killing_last_guard_opens_face() {
    let state = turn(0, &[
        "1 1 1 0 3 4 4 ------ 0 0 0",
        "2 2 1 0 3 2 2 ------ 0 0 0",
        "4 11 -1 0 3 1 3 ---G-- 0 0 0",
    ]);
    assert!(!actions(&state).contains(&GameAction::attack_player(id(2))));

    let next = simulate(&state, &GameAction::attack(id(1), id(11)));
    assert!(next.enemy_board.is_empty());
    assert_eq!(
        actions(&next),
        vec![GameAction::NoAction, GameAction::attack_player(id(2))]
    );
}

#[test]
fn test_passive_creatures_cannot_attack() {
    let state = turn(0, &["69 3 2 0 3 4 4 ------ 0 0 0"]);
    assert_eq!(actions(&state), vec![GameAction::NoAction]);
}

#[test]
fn test_each_creature_attacks_once() {
    let state = turn(0, &["69 3 1 0 3 4 9 ------ 0 0 0"]);
    let next = simulate(&state, &GameAction::attack_player(id(3)));
    assert_eq!(actions(&next), vec![GameAction::NoAction]);
}

// =============================================================================
// Card plays
// =============================================================================

#[test]
fn test_summon_one() {
    let state = turn(4, &["69 3 0 0 3 4 4 ------ 0 0 0"]);
    assert_eq!(actions(&state), vec![GameAction::NoAction, GameAction::summon(id(3))]);
}

#[test]
fn test_summon_several_in_hand_order() {
    let state = turn(4, &[
        "69 3 0 0 3 4 4 ------ 0 0 0",
        "70 2 0 0 2 2 2 ------ 0 0 0",
    ]);
    assert_eq!(
        actions(&state),
        vec![GameAction::NoAction, GameAction::summon(id(3)), GameAction::summon(id(2))]
    );
}

#[test]
fn test_full_board_blocks_summons() {
    let mut cards = vec!["70 2 0 0 1 2 2 ------ 0 0 0"];
    let board = [
        "1 11 2 0 1 1 1 ------ 0 0 0",
        "1 12 2 0 1 1 1 ------ 0 0 0",
        "1 13 2 0 1 1 1 ------ 0 0 0",
        "1 14 2 0 1 1 1 ------ 0 0 0",
        "1 15 2 0 1 1 1 ------ 0 0 0",
        "1 16 2 0 1 1 1 ------ 0 0 0",
    ];
    cards.extend_from_slice(&board);
    let state = turn(5, &cards);

    assert_eq!(actions(&state), vec![GameAction::NoAction]);
    assert!(BattleRules::new()
        .with_max_board_size(7)
        .legal_actions(&state)
        .contains(&GameAction::summon(id(2))));
}

#[test]
fn test_attacks_come_before_plays() {
    let state = turn(5, &[
        "70 2 0 0 2 2 2 ------ 0 0 0",
        "117 7 0 1 1 1 1 B----- 0 0 0",
        "69 3 1 0 3 4 4 ------ 0 0 0",
    ]);
    assert_eq!(
        actions(&state),
        vec![
            GameAction::NoAction,
            GameAction::attack_player(id(3)),
            GameAction::summon(id(2)),
            GameAction::use_item(id(7), id(3)),
        ]
    );
}

#[test]
fn test_items_and_targets() {
    let state = turn(5, &[
        "117 7 0 1 1 1 1 B----- 0 0 0",
        "148 11 0 2 2 0 -2 BCDGLW 0 0 0",
        "151 12 0 3 3 0 -3 ------ 0 -1 0",
        "160 13 0 3 2 0 0 ------ 2 -2 1",
        "56 5 -1 0 4 2 7 ------ 0 0 0",
    ]);

    assert_eq!(
        actions(&state),
        vec![
            GameAction::NoAction,
            GameAction::use_item(id(11), id(5)),
            GameAction::use_item(id(12), id(5)),
            GameAction::use_item(id(12), InstanceId::ENEMY_PLAYER),
            GameAction::use_item(id(13), InstanceId::ENEMY_PLAYER),
        ]
    );
}

#[test]
fn test_every_legal_action_simulates() {
    let state = turn(6, &[
        "69 3 1 0 3 4 4 --D--- 0 0 0",
        "70 4 1 0 3 2 2 B---L- 0 0 0",
        "10 2 0 0 2 2 2 -C---- 0 0 0",
        "117 7 0 1 1 1 1 B----- 0 0 0",
        "148 11 0 2 2 0 -2 BCDGLW 0 0 0",
        "160 13 0 3 2 0 -1 ------ 2 -2 1",
        "56 5 -1 0 4 2 7 -----W 0 0 0",
        "57 6 -1 0 4 1 1 ------ 0 0 0",
    ]);

    for action in actions(&state) {
        let next = simulate(&state, &action);
        assert!(next.is_card_count_consistent(), "{} broke card count", action);
    }
}
