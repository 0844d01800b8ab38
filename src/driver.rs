//! Turn driver: one decision per turn.
//!
//! The driver owns everything that lives across turns (turn counter, draft
//! curve, the search context) so no process-wide state is needed. The
//! binary feeds it states from stdin and writes its commands to stdout.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::GameState;
use crate::draft::{self, ManaCurve, CURVE_SLOTS};
use crate::error::{Error, Result};
use crate::protocol::TurnReader;
use crate::rules::BattleRules;
use crate::search::{BreadthFirstSearch, SearchConfig, SearchStats};

/// Turn driver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Battle search settings.
    pub search: SearchConfig,

    /// Wanted picks per mana-curve slot at the start of the draft.
    pub draft_curve: [i32; CURVE_SLOTS],

    /// Directory to record every battle state into, if any.
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            draft_curve: *ManaCurve::default().slots(),
            snapshot_dir: None,
        }
    }
}

impl DriverConfig {
    /// Create a new config with custom search settings.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Create a new config that records battle states into `dir`.
    #[must_use]
    pub fn with_snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = Some(dir.into());
        self
    }
}

/// Game phase a turn belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Picking cards; my mana is 0 and the offer is in my hand.
    Draft,
    /// Playing cards.
    Battle,
}

impl Phase {
    /// Detect the phase from a turn's state.
    ///
    /// Battle turns always grant mana, so a zero-mana turn with cards in hand
    /// is a draft pick. A zero-mana turn with nothing in hand is played as a
    /// battle turn and passes.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        if state.my_player.mana == 0 && !state.my_hand.is_empty() {
            Phase::Draft
        } else {
            Phase::Battle
        }
    }
}

/// Drives the bot one turn at a time.
pub struct TurnDriver {
    search: BreadthFirstSearch<BattleRules>,
    curve: ManaCurve,
    snapshot_dir: Option<PathBuf>,
    turn: u32,
}

impl TurnDriver {
    /// Create a driver.
    pub fn new(config: DriverConfig) -> Self {
        Self {
            search: BreadthFirstSearch::new(BattleRules::new(), config.search),
            curve: ManaCurve::new(config.draft_curve),
            snapshot_dir: config.snapshot_dir,
            turn: 0,
        }
    }

    /// Turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current draft curve.
    pub fn curve(&self) -> &ManaCurve {
        &self.curve
    }

    /// Statistics of the last battle search.
    pub fn last_search_stats(&self) -> &SearchStats {
        self.search.stats()
    }

    /// Decide one turn and return the command line to send.
    pub fn play_turn(&mut self, state: &GameState) -> Result<String> {
        self.turn += 1;
        debug!(turn = self.turn, "state:\n{}", state);

        let command = match Phase::of(state) {
            Phase::Draft => format!("PICK {}", draft::pick_card(&state.my_hand, &mut self.curve)),
            Phase::Battle => {
                if let Some(dir) = &self.snapshot_dir {
                    record_snapshot(dir, self.turn, state)?;
                }
                self.search.search(state).to_string()
            }
        };

        info!(turn = self.turn, "{}", command);
        Ok(command)
    }

    /// Play turns from `input` until it ends, writing one line per turn.
    ///
    /// Returns the number of turns played.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<u32> {
        let mut reader = TurnReader::new(input);
        let mut played = 0;

        while let Some(state) = reader.read_state()? {
            let command = self.play_turn(&state)?;
            writeln!(output, "{}", command).map_err(|e| Error::io("write command", e))?;
            output.flush().map_err(|e| Error::io("flush command", e))?;
            played += 1;
        }

        info!(turns = played, lines = reader.lines_read(), "input closed");
        Ok(played)
    }
}

/// Path of the snapshot for `turn` inside `dir`.
#[must_use]
pub fn snapshot_path(dir: &Path, turn: u32) -> PathBuf {
    dir.join(format!("turn-{:03}.bin", turn))
}

fn record_snapshot(dir: &Path, turn: u32, state: &GameState) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(format!("create {}", dir.display()), e))?;
    let path = snapshot_path(dir, turn);
    fs::write(&path, state.to_snapshot()?).map_err(|e| Error::io(format!("write {}", path.display()), e))?;
    debug!(path = %path.display(), "snapshot recorded");
    Ok(())
}

/// Load a recorded snapshot.
pub fn load_snapshot(path: &Path) -> Result<GameState> {
    let bytes = fs::read(path).map_err(|e| Error::io(format!("read {}", path.display()), e))?;
    GameState::from_snapshot(&bytes)
}
