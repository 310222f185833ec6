//! Counters describing the work a solve performed.

use std::collections::HashMap;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Work attributed to a single inference rule across a whole solve.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RuleStats {
    /// How many passes applied the rule.
    pub applications: u64,
    /// Candidates pruned by the rule, summed over all passes.
    pub candidates_removed: u64,
}

/// Counters accumulated over one call to [`Solver::solve`].
///
/// [`Solver::solve`]: crate::solver::search::Solver::solve
#[derive(Debug, Default, Clone, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered, counting the root.
    pub nodes_visited: u64,
    /// Guesses that failed and were undone.
    pub backtracks: u64,
    /// Propagation passes executed across the whole search.
    pub passes: u64,
    /// Per-rule application and pruning counts.
    pub rule_stats: HashMap<&'static str, RuleStats>,
}

impl SearchStats {
    pub(crate) fn record_rule(&mut self, rule: &'static str, candidates_removed: usize) {
        let entry = self.rule_stats.entry(rule).or_default();
        entry.applications += 1;
        entry.candidates_removed += candidates_removed as u64;
    }
}

/// Renders the per-rule counters as a fixed-width table for terminal output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Rule"),
        Cell::new("Applications"),
        Cell::new("Candidates Removed"),
    ]));

    let mut sorted: Vec<(&'static str, &RuleStats)> = stats
        .rule_stats
        .iter()
        .map(|(rule, rule_stats)| (*rule, rule_stats))
        .collect();
    sorted.sort_by_key(|(rule, _)| *rule);

    for (rule, rule_stats) in sorted {
        table.add_row(Row::new(vec![
            Cell::new(rule),
            Cell::new(&rule_stats.applications.to_string()),
            Cell::new(&rule_stats.candidates_removed.to_string()),
        ]));
    }

    table.to_string()
}
