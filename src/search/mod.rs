//! Turn search for the battle phase.
//!
//! ## Overview
//!
//! `BreadthFirstSearch` explores every action sequence reachable this turn,
//! shallowest first, and returns the one whose final state scores best under
//! an `Evaluator`. A sequence that kills the enemy is returned as soon as it
//! is generated.
//!
//! ## Usage
//!
//! ```rust
//! use ccg_bot::core::{Gambler, GameState};
//! use ccg_bot::rules::BattleRules;
//! use ccg_bot::search::{BreadthFirstSearch, SearchConfig};
//!
//! let state = GameState::new(Gambler::new(30, 0, 20, 25), Gambler::new(30, 0, 20, 25), 4);
//! let mut search = BreadthFirstSearch::new(BattleRules::new(), SearchConfig::default());
//!
//! let sequence = search.search(&state);
//! assert_eq!(sequence.to_string(), "PASS");
//! ```

pub mod bfs;
pub mod config;
pub mod eval;
pub mod stats;

pub use bfs::BreadthFirstSearch;
pub use config::SearchConfig;
pub use eval::{BoardEvaluator, Evaluator};
pub use stats::SearchStats;
