//! Breadth-first search over one turn's action sequences.
//!
//! The frontier is a FIFO of `(state, sequence)` nodes rooted at the turn's
//! starting state. Each dequeued node is scored and expanded by every legal
//! action. The first node whose score strictly beats
//! the best so far becomes the answer, so shallower sequences win ties.
//!
//! ## Termination
//!
//! - A state with the enemy dead is returned immediately.
//! - `NoAction` is not expanded. Its successor equals the node itself, which
//!   has already been scored, so it could never strictly beat it. Sequences
//!   therefore never carry trailing `NoAction` runs.
//! - The time budget and node cap are checked once per dequeued node. Running
//!   out is not an error; the best sequence so far is returned.

use std::collections::VecDeque;
use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::core::{ActionSequence, GameAction, GameState, StateKey};
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::eval::{BoardEvaluator, Evaluator};
use super::stats::SearchStats;

/// One frontier entry.
#[derive(Clone, Debug)]
struct Node {
    state: GameState,
    sequence: ActionSequence,
}

impl Node {
    fn root(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            sequence: ActionSequence::new(),
        }
    }
}

/// Breadth-first search context.
///
/// Generic over the rules engine. Owns the configuration, the evaluator and
/// the statistics of the last search.
pub struct BreadthFirstSearch<E: RulesEngine> {
    /// The game rules.
    engine: E,

    /// Search configuration.
    config: SearchConfig,

    /// Static evaluation.
    evaluator: Box<dyn Evaluator>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl<E: RulesEngine> BreadthFirstSearch<E> {
    /// Create a new search context with the default evaluator.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            evaluator: Box::new(BoardEvaluator),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator.
    #[must_use]
    pub fn with_evaluator<V: Evaluator + 'static>(mut self, evaluator: V) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the rules engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get statistics from the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best action sequence from `state`.
    ///
    /// Returns an empty sequence when doing nothing scores best.
    pub fn search(&mut self, state: &GameState) -> ActionSequence {
        let start = Instant::now();
        let budget = self.config.time_budget();
        self.stats.reset();

        let root = Node::root(state);
        if self.engine.is_won(&root.state) {
            return self.finish_with_win(root, start);
        }

        let mut frontier = VecDeque::new();
        frontier.push_back(root);
        self.stats.frontier_peak = 1;

        let mut seen: FxHashSet<StateKey> = FxHashSet::default();
        let mut best_sequence = ActionSequence::new();
        let mut best_value = i32::MIN;

        while let Some(node) = frontier.pop_front() {
            if self.config.dedup_states && !seen.insert(node.state.signature()) {
                self.stats.duplicates_skipped += 1;
                continue;
            }

            let index = self.stats.nodes_expanded;
            self.stats.nodes_expanded += 1;

            let value = self.evaluator.evaluate(&node.state);
            if value > best_value {
                best_value = value;
                best_sequence = node.sequence.clone();
                self.stats.best_index = index;
            }

            if start.elapsed() >= budget || self.stats.nodes_expanded >= self.config.max_nodes as u64 {
                self.stats.timed_out = true;
                debug!(
                    nodes = self.stats.nodes_expanded,
                    frontier = frontier.len(),
                    "search stopped early"
                );
                break;
            }

            for action in self.engine.legal_actions(&node.state) {
                if action == GameAction::NoAction {
                    continue;
                }
                let child = Node {
                    state: self.engine.apply_action(&node.state, &action),
                    sequence: node.sequence.extended(action),
                };

                // FIFO order means the first winner enqueued is the first one
                // dequeued, so it can be returned straight away.
                if self.engine.is_won(&child.state) {
                    return self.finish_with_win(child, start);
                }

                self.stats.max_depth = self.stats.max_depth.max(child.sequence.len());
                self.stats.nodes_enqueued += 1;
                frontier.push_back(child);
            }
            self.stats.frontier_peak = self.stats.frontier_peak.max(frontier.len());
        }

        self.stats.best_value = best_value;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        info!(
            elapsed_ms = self.stats.elapsed_ms(),
            nodes = self.stats.nodes_expanded,
            frontier_peak = self.stats.frontier_peak,
            value = best_value,
            timed_out = self.stats.timed_out,
            "search finished: {}",
            best_sequence
        );
        best_sequence
    }

    fn finish_with_win(&mut self, node: Node, start: Instant) -> ActionSequence {
        self.stats.found_win = true;
        self.stats.best_index = self.stats.nodes_expanded;
        self.stats.best_value = self.evaluator.evaluate(&node.state);
        self.stats.max_depth = self.stats.max_depth.max(node.sequence.len());
        self.stats.time_us = start.elapsed().as_micros() as u64;
        info!(
            elapsed_ms = self.stats.elapsed_ms(),
            nodes = self.stats.nodes_expanded,
            "lethal found: {}",
            node.sequence
        );
        node.sequence
    }
}
