//! Turn input parsing.
//!
//! One turn is:
//!
//! ```text
//! health mana deck_size next_rune_threshold      (me)
//! health mana deck_size next_rune_threshold      (opponent)
//! opponent_hand_count
//! card_count
//! card_number instance_id location card_type cost attack defense abilities my_hp enemy_hp draw
//! ...                                            (card_count lines)
//! ```
//!
//! `card_count` on the wire counts every listed card, enemy board included.
//! `GameState::card_count` only counts my cards, so it is rebuilt from the
//! parsed locations rather than copied.

use std::io::BufRead;
use std::str::SplitWhitespace;

use crate::cards::{Card, CardNumber, CardType, Location};
use crate::core::{Gambler, GameState, InstanceId};
use crate::error::{Error, Result};

use super::token::parse_abilities;

/// Whitespace-separated fields of one input line.
struct Fields<'a> {
    what: &'static str,
    line: &'a str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(what: &'static str, line: &'a str) -> Self {
        Self {
            what,
            line,
            tokens: line.split_whitespace(),
        }
    }

    fn error(&self, message: String) -> Error {
        Error::Parse {
            what: self.what,
            line: self.line.trim_end().to_string(),
            message,
        }
    }

    fn next_str(&mut self, field: &str) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or_else(|| self.error(format!("missing {}", field)))
    }

    fn next_int(&mut self, field: &str) -> Result<i32> {
        let token = self.next_str(field)?;
        token
            .parse()
            .map_err(|_| self.error(format!("{} '{}' is not an integer", field, token)))
    }

    fn finish(mut self) -> Result<()> {
        match self.tokens.next() {
            None => Ok(()),
            Some(extra) => Err(self.error(format!("unexpected trailing field '{}'", extra))),
        }
    }
}

/// Parse a `health mana deck_size next_rune_threshold` line.
pub fn parse_gambler(line: &str) -> Result<Gambler> {
    let mut fields = Fields::new("player line", line);
    let gambler = Gambler::new(
        fields.next_int("health")?,
        fields.next_int("mana")?,
        fields.next_int("deck size")?,
        fields.next_int("rune threshold")?,
    );
    fields.finish()?;
    Ok(gambler)
}

/// Parse a line holding a single non-negative count.
pub fn parse_count(line: &str, what: &'static str) -> Result<usize> {
    let mut fields = Fields::new(what, line);
    let value = fields.next_int("count")?;
    let count = usize::try_from(value).map_err(|_| fields.error(format!("negative count {}", value)))?;
    fields.finish()?;
    Ok(count)
}

/// Parse one card line.
pub fn parse_card(line: &str) -> Result<Card> {
    let mut fields = Fields::new("card line", line);

    let card_number = CardNumber::new(fields.next_int("card number")?);
    let instance_id = InstanceId::new(fields.next_int("instance id")?);
    let location_code = fields.next_int("location")?;
    let location = Location::from_code(location_code).ok_or(Error::InvalidLocation(location_code))?;
    let type_code = fields.next_int("card type")?;
    let card_type = CardType::from_code(type_code).ok_or(Error::InvalidCardType(type_code))?;
    let cost = fields.next_int("cost")?;
    let attack = fields.next_int("attack")?;
    let defense = fields.next_int("defense")?;
    let abilities = parse_abilities(fields.next_str("abilities")?)?;
    let my_health_change = fields.next_int("my health change")?;
    let enemy_health_change = fields.next_int("enemy health change")?;
    let card_draw = fields.next_int("card draw")?;
    fields.finish()?;

    Ok(Card::item(instance_id, card_type, cost, attack, defense)
        .with_number(card_number)
        .at(location)
        .with_abilities(abilities)
        .with_health_changes(my_health_change, enemy_health_change)
        .with_card_draw(card_draw))
}

/// Parse one complete turn from already-split lines.
pub fn parse_state_lines(lines: &[&str]) -> Result<GameState> {
    let mut iter = lines.iter().copied();
    let mut next = |expected: &'static str| iter.next().ok_or(Error::UnexpectedEof { expected });

    let me = parse_gambler(next("my player line")?)?;
    let enemy = parse_gambler(next("opponent player line")?)?;
    let enemy_hand = parse_count(next("opponent hand count")?, "opponent hand count")?;
    let card_count = parse_count(next("card count")?, "card count")?;

    let mut state = GameState::new(me, enemy, enemy_hand as i32);
    for _ in 0..card_count {
        state.add_card(parse_card(next("card line")?)?);
    }
    Ok(state)
}

/// Reads turns from a line-oriented stream.
pub struct TurnReader<R> {
    input: R,
    buffer: String,
    lines_read: u64,
}

impl<R: BufRead> TurnReader<R> {
    /// Wrap an input stream.
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: String::new(),
            lines_read: 0,
        }
    }

    /// Lines consumed so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Read the next non-blank line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<&str>> {
        loop {
            self.buffer.clear();
            let n = self
                .input
                .read_line(&mut self.buffer)
                .map_err(|e| Error::io("read turn input", e))?;
            if n == 0 {
                return Ok(None);
            }
            self.lines_read += 1;
            if !self.buffer.trim().is_empty() {
                return Ok(Some(self.buffer.trim_end()));
            }
        }
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<&str> {
        self.read_line()?.ok_or(Error::UnexpectedEof { expected })
    }

    /// Read one turn.
    ///
    /// Returns `Ok(None)` when the input ends cleanly between turns. Input
    /// that ends part-way through a turn is an error.
    pub fn read_state(&mut self) -> Result<Option<GameState>> {
        let me = match self.read_line()? {
            Some(line) => parse_gambler(line)?,
            None => return Ok(None),
        };
        let enemy = parse_gambler(self.expect_line("opponent player line")?)?;
        let enemy_hand = parse_count(self.expect_line("opponent hand count")?, "opponent hand count")?;
        let card_count = parse_count(self.expect_line("card count")?, "card count")?;

        let mut state = GameState::new(me, enemy, enemy_hand as i32);
        for _ in 0..card_count {
            let card = parse_card(self.expect_line("card line")?)?;
            state.add_card(card);
        }
        Ok(Some(state))
    }
}
