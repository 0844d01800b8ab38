//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes taken off the frontier.
    pub nodes_expanded: u64,

    /// Successor nodes pushed onto the frontier.
    pub nodes_enqueued: u64,

    /// Nodes dropped because their state was already expanded.
    pub duplicates_skipped: u64,

    /// Longest action sequence reached.
    pub max_depth: usize,

    /// Largest frontier size seen.
    pub frontier_peak: usize,

    /// Dequeue index at which the returned sequence was found.
    pub best_index: u64,

    /// Evaluation of the returned sequence's state.
    pub best_value: i32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// The time budget or node cap stopped the search early.
    pub timed_out: bool,

    /// The returned sequence wins the game outright.
    pub found_win: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes expanded per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.time_us as f64 / 1_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_expanded, 0);
        assert!(!stats.timed_out);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_expanded = 1_000;
        stats.time_us = 500_000;
        assert!((stats.nodes_per_second() - 2_000.0).abs() < 1e-9);
        assert!((stats.elapsed_ms() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_expanded = 3;
        stats.found_win = true;
        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
