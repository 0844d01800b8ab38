//! Creature-versus-creature combat.
//!
//! One exchange has two halves. The attacker strikes first; the defender
//! then strikes back if it survived and has not already struck this turn.
//! Each strike is resolved independently:
//!
//! - attack `<= 0`: nothing happens (Ward is not consumed)
//! - target has Ward: Ward is removed, health unchanged
//! - striker has Lethal: target health becomes exactly 0
//! - otherwise: target health drops by the striker's attack
//!
//! Removal of dead creatures, Drain healing, and Breakthrough overkill are
//! applied by the simulator, which owns the boards and players.

use crate::cards::{Ability, Card};

/// Damage actually dealt in each direction of an exchange.
///
/// Damage is capped at the target's remaining health, so this is what Drain
/// heals for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exchange {
    /// Health the defender lost.
    pub dealt_by_attacker: i32,
    /// Health the attacker lost.
    pub dealt_by_defender: i32,
}

/// Resolve one strike of `striker` against `target`.
///
/// Marks `striker` as having attacked.
pub fn strike(striker: &mut Card, target: &mut Card) {
    if striker.attack > 0 {
        if target.has(Ability::Ward) {
            target.abilities.remove(Ability::Ward);
        } else if striker.has(Ability::Lethal) {
            target.defense = 0;
        } else {
            target.defense -= striker.attack;
        }
    }
    striker.did_attack = true;
}

/// Resolve a full exchange between `attacker` and `defender`.
pub fn fight(attacker: &mut Card, defender: &mut Card) -> Exchange {
    let attacker_before = attacker.defense;
    let defender_before = defender.defense;

    strike(attacker, defender);
    if !defender.is_dead() && !defender.did_attack {
        strike(defender, attacker);
    }

    Exchange {
        dealt_by_attacker: damage_taken(defender_before, defender.defense),
        dealt_by_defender: damage_taken(attacker_before, attacker.defense),
    }
}

fn damage_taken(before: i32, after: i32) -> i32 {
    (before - after.max(0)).max(0)
}
