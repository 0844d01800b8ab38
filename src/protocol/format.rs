//! Rendering states back into the turn input format.
//!
//! Used for debug traces and for inspecting recorded snapshots. Parsing the
//! output of `GameState`'s `Display` yields an equal state, except that
//! `did_attack` flags are not part of the format.

use std::fmt;

use crate::cards::Card;
use crate::core::{Gambler, GameState};

use super::token::format_abilities;

/// A player line.
pub struct GamblerLine<'a>(pub &'a Gambler);

impl fmt::Display for GamblerLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.0;
        write!(f, "{} {} {} {}", g.health, g.mana, g.deck_size, g.next_rune_threshold)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {}",
            self.card_number,
            self.instance_id,
            self.location.code(),
            self.card_type.code(),
            self.cost,
            self.attack,
            self.defense,
            format_abilities(self.abilities),
            self.my_health_change,
            self.enemy_health_change,
            self.card_draw
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", GamblerLine(&self.my_player))?;
        writeln!(f, "{}", GamblerLine(&self.enemy_player))?;
        writeln!(f, "{}", self.enemy_hand_count)?;
        writeln!(f, "{}", self.all_cards().count())?;
        for card in self.all_cards() {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}
