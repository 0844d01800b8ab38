//! Fixed game limits.
//!
//! These are rules of the game rather than tuning knobs, so they are
//! constants. Search and driver tuning lives in `search::SearchConfig` and
//! `driver::DriverConfig`.

/// Creatures a player may have on board (active plus passive).
pub const MAX_BOARD_SIZE: usize = 6;

/// Cards a player may hold.
pub const MAX_HAND_SIZE: usize = 8;

/// Cards offered per draft pick.
pub const DRAFT_CHOICES: usize = 3;

/// Starting health of each player.
pub const STARTING_HEALTH: i32 = 30;
