//! Card system: abilities, classification, and instances.
//!
//! ## Key Types
//!
//! - `Ability` / `Abilities`: Closed keyword set stored as a bit mask
//! - `CardNumber`: Template number
//! - `CardType`: Creature or item colour
//! - `Location`: Hand, my board, my passive row, or the enemy board
//! - `Card`: One card instance with its current stats

pub mod attributes;
pub mod definition;
pub mod instance;

pub use attributes::{Abilities, Ability};
pub use definition::{CardNumber, CardType, Location};
pub use instance::Card;
