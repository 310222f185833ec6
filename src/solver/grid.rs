//! The candidate grid: the mutable state of a solve.

use std::fmt;

use im::{HashMap, OrdSet};

use crate::solver::topology::{Cell, Topology};

/// A single Sudoku digit in the range 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Digit; 9] = [
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|value| Self::new(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of digits still possible for one cell.
///
/// Backed by a persistent ordered set: deriving a new set shares structure
/// with the old one, and iteration always yields digits in ascending order,
/// which fixes the order in which the search tries guesses.
///
/// An empty set marks a contradiction; a valid grid state never contains one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(OrdSet<Digit>);

impl Candidates {
    /// All nine digits.
    pub fn full() -> Self {
        Digit::ALL.into_iter().collect()
    }

    pub fn single(digit: Digit) -> Self {
        Self(OrdSet::unit(digit))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.len() == 1
    }

    /// If exactly one digit remains, returns it.
    pub fn singleton(&self) -> Option<Digit> {
        if self.is_singleton() {
            self.0.get_min().copied()
        } else {
            None
        }
    }

    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }

    /// A copy of this set with `digit` removed.
    pub fn without(&self, digit: Digit) -> Self {
        Self(self.0.without(&digit))
    }

    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Digit> for Candidates {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// A mapping from every cell to its remaining candidates.
///
/// Backed by a persistent map, so [`Grid::with_candidates`] returns a new
/// grid sharing structure with the old one. Search branches each own such a
/// copy and can never observe each other's updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: HashMap<Cell, Candidates>,
}

impl Grid {
    /// A grid where every cell can still hold any digit.
    pub fn full(topology: &Topology) -> Self {
        Self {
            cells: topology
                .cells()
                .map(|cell| (cell, Candidates::full()))
                .collect(),
        }
    }

    pub fn candidates(&self, cell: Cell) -> &Candidates {
        self.cells.get(&cell).unwrap()
    }

    /// A copy of this grid with `cell` set to `candidates`.
    pub fn with_candidates(&self, cell: Cell, candidates: Candidates) -> Self {
        Self {
            cells: self.cells.update(cell, candidates),
        }
    }

    /// A copy of this grid with `digit` removed from `cell`'s candidates.
    pub fn remove_candidate(&self, cell: Cell, digit: Digit) -> Self {
        let current = self.candidates(cell);
        if current.contains(digit) {
            self.with_candidates(cell, current.without(digit))
        } else {
            self.clone()
        }
    }

    /// True once every cell has exactly one candidate.
    pub fn is_complete(&self) -> bool {
        self.cells.values().all(Candidates::is_singleton)
    }

    /// True if any cell has run out of candidates.
    pub fn has_contradiction(&self) -> bool {
        self.cells.values().any(Candidates::is_empty)
    }

    pub fn solved_count(&self) -> usize {
        self.cells
            .values()
            .filter(|candidates| candidates.is_singleton())
            .count()
    }

    /// Total candidates across all cells; propagation only ever lowers it.
    pub fn candidate_count(&self) -> usize {
        self.cells.values().map(Candidates::len).sum()
    }

    /// All cells with their candidate sets, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &Candidates)> + '_ {
        self.cells.iter().map(|(cell, candidates)| (*cell, candidates))
    }
}
