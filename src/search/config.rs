//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Breadth-first search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget per search in milliseconds.
    /// Checked once per dequeued node, so it is a soft limit.
    pub time_budget_ms: u64,

    /// Maximum nodes to dequeue.
    /// Prevents memory exhaustion when the clock is generous.
    pub max_nodes: usize,

    /// Skip states already expanded during this search.
    /// Two action orders that reach the same board are expanded once.
    pub dedup_states: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: 95,
            max_nodes: 5_000_000,
            dedup_states: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom time budget.
    #[must_use]
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    /// Create a new config with a custom node cap.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Create a new config with duplicate-state skipping on or off.
    #[must_use]
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup_states = dedup;
        self
    }

    /// Time budget as a `Duration`.
    #[must_use]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }
}
