//! Battle rules.
//!
//! - `combat`: one creature-versus-creature exchange
//! - `simulator`: the forward model, one action at a time
//! - `legal`: legal-action enumeration
//! - `engine`: the `RulesEngine` seam search is written against

pub mod combat;
pub mod engine;
pub mod legal;
pub mod simulator;

pub use combat::{fight, strike, Exchange};
pub use engine::{BattleRules, RulesEngine};
pub use legal::legal_actions;
pub use simulator::{apply, simulate};
