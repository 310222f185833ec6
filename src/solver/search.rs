//! Depth-first backtracking search over candidate grids.

use std::sync::Arc;

use tracing::debug;

use crate::solver::{
    grid::{Candidates, Grid},
    heuristics::{BranchHeuristic, MinimumRemainingValues},
    propagate,
    stats::SearchStats,
    topology::Topology,
};

/// Solves candidate grids by interleaving propagation with guessing.
///
/// The solver owns a shared [`Topology`] and is reusable across puzzles.
/// Every guess recurses on an independent copy of the grid, so no state leaks
/// between branches; the first branch to complete wins and its remaining
/// siblings are never explored.
pub struct Solver {
    topology: Arc<Topology>,
    heuristic: Box<dyn BranchHeuristic>,
    naked_twins: bool,
}

impl Solver {
    /// Creates a solver with the minimum-remaining-values branch heuristic
    /// and the eliminate/only-choice propagation rules.
    pub fn new(topology: Arc<Topology>) -> Self {
        Self {
            topology,
            heuristic: Box::new(MinimumRemainingValues),
            naked_twins: false,
        }
    }

    /// Layers the naked-twins rule into every propagation pass.
    pub fn with_naked_twins(mut self, enabled: bool) -> Self {
        self.naked_twins = enabled;
        self
    }

    /// Replaces the branch heuristic.
    pub fn with_heuristic(mut self, heuristic: Box<dyn BranchHeuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    /// Searches for a complete grid reachable from `grid`.
    ///
    /// Returns `None` when every branch ends in contradiction, meaning the
    /// puzzle has no solution under the active constraint set.
    pub fn solve(&self, grid: Grid) -> (Option<Grid>, SearchStats) {
        let mut stats = SearchStats::default();
        let solution = self.search(grid, &mut stats);
        (solution, stats)
    }

    fn search(&self, grid: Grid, stats: &mut SearchStats) -> Option<Grid> {
        stats.nodes_visited += 1;

        let reduced = propagate::reduce(&self.topology, grid, self.naked_twins, stats)?;
        if reduced.is_complete() {
            return Some(reduced);
        }

        let cell = self.heuristic.select_cell(&reduced)?;
        let choices = reduced.candidates(cell).clone();
        debug!(%cell, candidates = %choices, "branching");

        for digit in choices.iter() {
            let guess = reduced.with_candidates(cell, Candidates::single(digit));
            if let Some(solution) = self.search(guess, stats) {
                return Some(solution);
            }
            stats.backtracks += 1;
        }

        None
    }
}
