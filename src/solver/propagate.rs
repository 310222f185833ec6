//! Local inference rules and the fixed-point reduction driver.

use tracing::debug;

use crate::solver::{
    grid::{Candidates, Digit, Grid},
    stats::SearchStats,
    topology::Topology,
};

/// Removes every solved cell's digit from the candidate sets of its peers.
///
/// Solved cells are taken from a snapshot of the input grid: a cell that only
/// becomes solved part-way through the pass does not propagate until the next
/// pass.
pub fn eliminate(topology: &Topology, grid: &Grid) -> Grid {
    let mut out = grid.clone();
    for cell in topology.cells() {
        if let Some(digit) = grid.candidates(cell).singleton() {
            for &peer in topology.peers(cell) {
                out = out.remove_candidate(peer, digit);
            }
        }
    }
    out
}

/// Collapses every digit that fits in only one cell of a unit onto that cell.
///
/// Units are scanned in order and a collapse is visible to later checks
/// within the same pass.
pub fn only_choice(topology: &Topology, grid: Grid) -> Grid {
    let mut out = grid;
    for unit in topology.units() {
        for digit in Digit::ALL {
            let mut sole = None;
            let mut count = 0;
            for &cell in &unit.cells {
                if out.candidates(cell).contains(digit) {
                    sole = Some(cell);
                    count += 1;
                    if count > 1 {
                        break;
                    }
                }
            }
            if let (1, Some(cell)) = (count, sole) {
                out = out.with_candidates(cell, Candidates::single(digit));
            }
        }
    }
    out
}

/// Prunes naked twins: when two peer cells share an identical two-digit
/// candidate set, both digits are removed from every cell that is a peer of
/// both twins. Pairs are found on a snapshot of the input grid, like
/// [`eliminate`].
///
/// Correctness-preserving but not required; [`reduce`] only layers it in when
/// asked to.
pub fn naked_twins(topology: &Topology, grid: &Grid) -> Grid {
    let mut out = grid.clone();
    for cell in topology.cells() {
        let pair = grid.candidates(cell);
        if pair.len() != 2 {
            continue;
        }
        for &twin in topology.peers(cell) {
            if grid.candidates(twin) != pair {
                continue;
            }
            for shared in topology.common_peers(cell, twin) {
                for digit in pair.iter() {
                    out = out.remove_candidate(shared, digit);
                }
            }
        }
    }
    out
}

/// Applies the inference rules until the number of solved cells stops rising.
///
/// Returns `None` as soon as any cell runs out of candidates; the search
/// treats that as a dead branch. A returned grid may still contain unsolved
/// cells — propagation has stalled and the search must guess.
pub fn reduce(
    topology: &Topology,
    grid: Grid,
    use_naked_twins: bool,
    stats: &mut SearchStats,
) -> Option<Grid> {
    let mut current = grid;
    loop {
        stats.passes += 1;
        let solved_before = current.solved_count();

        let before = current.candidate_count();
        current = eliminate(topology, &current);
        stats.record_rule("eliminate", before - current.candidate_count());

        let before = current.candidate_count();
        current = only_choice(topology, current);
        stats.record_rule("only-choice", before - current.candidate_count());

        if use_naked_twins {
            let before = current.candidate_count();
            current = naked_twins(topology, &current);
            stats.record_rule("naked-twins", before - current.candidate_count());
        }

        if current.has_contradiction() {
            debug!("propagation emptied a candidate set, abandoning branch");
            return None;
        }
        if current.solved_count() == solved_before {
            debug!(solved = solved_before, "propagation stalled");
            return Some(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        codec,
        solver::topology::{Cell, Variant},
    };

    const EASY: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const HARD: &str =
        "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn eliminate_prunes_peers_of_solved_cells() {
        let topology = Topology::new(Variant::Standard);
        let a1 = Cell::new(0, 0);
        let grid = Grid::full(&topology).with_candidates(a1, Candidates::single(d(5)));

        let out = eliminate(&topology, &grid);

        assert_eq!(out.candidates(a1).singleton(), Some(d(5)));
        for &peer in topology.peers(a1) {
            assert!(!out.candidates(peer).contains(d(5)));
        }
        // E5 shares no unit with A1 and keeps all nine digits.
        assert!(out.candidates(Cell::new(4, 4)).contains(d(5)));
    }

    #[test]
    fn eliminate_reads_from_a_snapshot_of_the_input() {
        let topology = Topology::new(Variant::Standard);
        let a1 = Cell::new(0, 0);
        let a2 = Cell::new(0, 1);
        let a3 = Cell::new(0, 2);
        let grid = Grid::full(&topology)
            .with_candidates(a1, Candidates::single(d(5)))
            .with_candidates(a2, [d(5), d(6)].into_iter().collect())
            .with_candidates(a3, [d(6), d(7)].into_iter().collect());

        let out = eliminate(&topology, &grid);

        // A2 collapsed to 6 during the pass, but it was not solved in the
        // input, so its value must not reach A3 until the next pass.
        assert_eq!(out.candidates(a2).singleton(), Some(d(6)));
        assert!(out.candidates(a3).contains(d(6)));
    }

    #[test]
    fn only_choice_collapses_a_digit_with_one_remaining_home() {
        let topology = Topology::new(Variant::Standard);
        let mut grid = Grid::full(&topology);
        // Make A1 the only cell in row A that still admits a 7.
        for col in 1..9 {
            let cell = Cell::new(0, col);
            grid = grid.with_candidates(cell, grid.candidates(cell).without(d(7)));
        }

        let out = only_choice(&topology, grid);

        assert_eq!(out.candidates(Cell::new(0, 0)).singleton(), Some(d(7)));
    }

    #[test]
    fn naked_twins_prune_only_common_peers() {
        let topology = Topology::new(Variant::Standard);
        let a1 = Cell::new(0, 0);
        let a2 = Cell::new(0, 1);
        let pair: Candidates = [d(2), d(3)].into_iter().collect();
        let grid = Grid::full(&topology)
            .with_candidates(a1, pair.clone())
            .with_candidates(a2, pair.clone());

        let out = naked_twins(&topology, &grid);

        // Cells seeing both twins (rest of row A and of their box) lose both
        // digits.
        for cell in [Cell::new(0, 4), Cell::new(1, 1), Cell::new(2, 2)] {
            assert!(!out.candidates(cell).contains(d(2)));
            assert!(!out.candidates(cell).contains(d(3)));
        }
        // D1 only sees A1, so it keeps both digits.
        assert!(out.candidates(Cell::new(3, 0)).contains(d(2)));
        assert!(out.candidates(Cell::new(3, 0)).contains(d(3)));
        // The twins themselves are untouched.
        assert_eq!(*out.candidates(a1), pair);
        assert_eq!(*out.candidates(a2), pair);
    }

    #[test]
    fn reduce_finishes_the_classic_easy_puzzle_outright() {
        let topology = Topology::new(Variant::Standard);
        let grid = codec::parse(&topology, EASY).unwrap();

        let mut stats = SearchStats::default();
        let reduced = reduce(&topology, grid, false, &mut stats).unwrap();

        assert!(reduced.is_complete());
        assert!(stats.passes > 1);
    }

    #[test]
    fn reduce_reports_contradictions_instead_of_grids() {
        let topology = Topology::new(Variant::Standard);
        let empty: Candidates = std::iter::empty().collect();
        let grid = Grid::full(&topology).with_candidates(Cell::new(0, 0), empty);

        let mut stats = SearchStats::default();
        assert!(reduce(&topology, grid, false, &mut stats).is_none());
    }

    #[test]
    fn rules_are_idempotent_once_reduction_stalls() {
        let topology = Topology::new(Variant::Standard);
        let grid = codec::parse(&topology, HARD).unwrap();

        let mut stats = SearchStats::default();
        let stalled = reduce(&topology, grid, false, &mut stats).unwrap();
        assert!(!stalled.is_complete());

        let again = only_choice(&topology, eliminate(&topology, &stalled));
        assert_eq!(again, stalled);
    }
}
