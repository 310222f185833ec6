//! Strategies for choosing which cell the search branches on next.

use crate::solver::{grid::Grid, topology::Cell};

/// A strategy for picking the next branch cell among the unsolved cells.
///
/// Implementations must be deterministic so that search traces are
/// reproducible run to run.
pub trait BranchHeuristic {
    /// Selects a cell with more than one remaining candidate, or `None` if
    /// every cell is solved.
    fn select_cell(&self, grid: &Grid) -> Option<Cell>;
}

/// Picks the first unsolved cell in row-major order.
///
/// A basic, deterministic baseline; mostly useful for comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFirst;

impl BranchHeuristic for SelectFirst {
    fn select_cell(&self, grid: &Grid) -> Option<Cell> {
        grid.iter()
            .filter(|(_, candidates)| candidates.len() > 1)
            .map(|(cell, _)| cell)
            .min()
    }
}

/// Picks the unsolved cell with the fewest remaining candidates, breaking
/// ties by row-major cell order.
///
/// A fail-first strategy: the most constrained cell has the fewest guesses
/// to refute, which prunes the search tree early.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimumRemainingValues;

impl BranchHeuristic for MinimumRemainingValues {
    fn select_cell(&self, grid: &Grid) -> Option<Cell> {
        grid.iter()
            .filter(|(_, candidates)| candidates.len() > 1)
            .min_by_key(|(cell, candidates)| (candidates.len(), *cell))
            .map(|(cell, _)| cell)
    }
}
