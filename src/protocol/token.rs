//! Fixed-width ability token.
//!
//! Six characters, one per ability in `B C D G L W` order. Each position is
//! either that ability's letter or `-`.

use crate::cards::{Abilities, Ability};
use crate::error::{Error, Result};

/// Width of an ability token.
pub const TOKEN_WIDTH: usize = 6;

/// Parse a token such as `B---L-`.
pub fn parse_abilities(token: &str) -> Result<Abilities> {
    let invalid = || Error::InvalidAbilities(token.to_string());

    if token.chars().count() != TOKEN_WIDTH {
        return Err(invalid());
    }

    let mut abilities = Abilities::NONE;
    for (ability, ch) in Ability::ALL.into_iter().zip(token.chars()) {
        if ch == ability.letter() {
            abilities.insert(ability);
        } else if ch != '-' {
            return Err(invalid());
        }
    }
    Ok(abilities)
}

/// Format abilities as a fixed-width token.
#[must_use]
pub fn format_abilities(abilities: Abilities) -> String {
    Ability::ALL
        .into_iter()
        .map(|a| if abilities.contains(a) { a.letter() } else { '-' })
        .collect()
}
