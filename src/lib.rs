//! # ccg-bot
//!
//! Turn-by-turn bot for a two-player collectible card game played over a
//! line-based text protocol.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: A `GameState` owns its cards outright. Every
//!    transition works on a fresh copy, so search branches never alias.
//!
//! 2. **Rules Behind a Trait**: Search only talks to `RulesEngine`. Combat,
//!    items, and keyword abilities stay inside `rules`.
//!
//! 3. **Boundary Errors Only**: Malformed input is an `Error`. An action the
//!    simulator cannot resolve is a bug and panics.
//!
//! ## Architecture
//!
//! - **Breadth-First Turn Search**: Every action sequence reachable this turn
//!   is explored shallowest first under a soft time budget; the best-scoring
//!   final state wins and a lethal sequence short-circuits the search.
//!
//! - **Persistent Sequences**: `ActionSequence` is backed by `im-rs`, so
//!   frontier entries share their common prefix.
//!
//! - **Inline Card Lists**: Hands and boards are `SmallVec`s sized to the
//!   game limits; cloning a state does not allocate.
//!
//! ## Modules
//!
//! - `core`: Instance ids, players, actions, state, game limits
//! - `cards`: Card instances, types, locations, keyword abilities
//! - `rules`: Combat, simulator, legal actions, `RulesEngine`
//! - `search`: Breadth-first turn search and evaluation
//! - `protocol`: Parsing and formatting of the text protocol
//! - `draft`: Draft-phase pick heuristic
//! - `driver`: Per-turn orchestration
//!
//! ## Example
//!
//! ```rust
//! use ccg_bot::driver::{DriverConfig, TurnDriver};
//!
//! let input = "30 1 20 25\n30 1 20 25\n4\n0\n";
//! let mut output = Vec::new();
//!
//! let mut driver = TurnDriver::new(DriverConfig::default());
//! driver.run(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "PASS\n");
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod search;
pub mod protocol;
pub mod draft;
pub mod driver;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ActionSequence, Gambler, GameAction, GameState, InstanceId,
    MAX_BOARD_SIZE, MAX_HAND_SIZE,
};

pub use crate::cards::{Abilities, Ability, Card, CardNumber, CardType, Location};

pub use crate::rules::{BattleRules, RulesEngine};

pub use crate::search::{BoardEvaluator, BreadthFirstSearch, Evaluator, SearchConfig, SearchStats};

pub use crate::protocol::TurnReader;

pub use crate::draft::ManaCurve;

pub use crate::driver::{DriverConfig, Phase, TurnDriver};

pub use crate::error::{Error, Result};
