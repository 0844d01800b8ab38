//! Text protocol with the game server.
//!
//! - `parse`: turn input into `GameState`
//! - `format`: `GameState` back into turn input
//! - `token`: the fixed-width ability token
//!
//! Output commands are produced by `GameAction`'s and `ActionSequence`'s
//! `Display` implementations.

pub mod format;
pub mod parse;
pub mod token;

pub use format::GamblerLine;
pub use parse::{parse_card, parse_count, parse_gambler, parse_state_lines, TurnReader};
pub use token::{format_abilities, parse_abilities, TOKEN_WIDTH};
