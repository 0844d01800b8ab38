//! Core battle types: instance ids, players, actions, state, limits.
//!
//! This module holds plain values only. Game rules that transform them live
//! in `rules`; the search that drives the rules lives in `search`.

pub mod entity;
pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use entity::InstanceId;
pub use player::Gambler;
pub use config::{DRAFT_CHOICES, MAX_BOARD_SIZE, MAX_HAND_SIZE, STARTING_HEALTH};
pub use action::{ActionSequence, GameAction};
pub use state::{CardList, GameState, StateKey};
