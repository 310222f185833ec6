//! The fixed constraint structure of a 9x9 grid.
//!
//! Units and peer sets depend only on grid geometry, never on puzzle content,
//! so a [`Topology`] is built once per variant and shared read-only between
//! the propagation rules and the search.

use std::{
    collections::HashSet,
    fmt,
    sync::{Arc, OnceLock},
};

/// One of the 81 grid positions.
///
/// Rows and columns are numbered 0-8 internally; `Display` renders the
/// conventional row-letter/column-digit label (`A1` through `I9`). Cells
/// order row-major, which is what heuristic tie-breaking relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major position in the range `0..81`.
    pub fn index(self) -> usize {
        usize::from(self.row) * 9 + usize::from(self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'A' + self.row), self.col + 1)
    }
}

/// Which constraint set is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Rows, columns, and boxes.
    Standard,
    /// Rows, columns, boxes, and the two main diagonals.
    Diagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Row,
    Column,
    Box,
    Diagonal,
}

/// A group of nine cells that must collectively contain each digit once.
#[derive(Debug, Clone)]
pub struct Unit {
    pub kind: UnitKind,
    pub cells: [Cell; 9],
}

/// The complete unit and peer structure for one [`Variant`].
///
/// Immutable after construction. The solver and the propagation rules borrow
/// it; long-lived callers share it through an [`Arc`], either by wrapping
/// [`Topology::new`] themselves or via the memoized [`Topology::standard`] and
/// [`Topology::diagonal`] instances.
#[derive(Debug)]
pub struct Topology {
    variant: Variant,
    cells: Vec<Cell>,
    units: Vec<Unit>,
    units_of: Vec<Vec<usize>>,
    peers: Vec<HashSet<Cell>>,
}

impl Topology {
    pub fn new(variant: Variant) -> Self {
        let cells: Vec<Cell> = (0..9u8)
            .flat_map(|row| (0..9u8).map(move |col| Cell::new(row, col)))
            .collect();

        let mut units = Vec::new();
        for row in 0..9u8 {
            units.push(Unit {
                kind: UnitKind::Row,
                cells: std::array::from_fn(|col| Cell::new(row, col as u8)),
            });
        }
        for col in 0..9u8 {
            units.push(Unit {
                kind: UnitKind::Column,
                cells: std::array::from_fn(|row| Cell::new(row as u8, col)),
            });
        }
        for band in 0..3u8 {
            for stack in 0..3u8 {
                units.push(Unit {
                    kind: UnitKind::Box,
                    cells: std::array::from_fn(|i| {
                        Cell::new(band * 3 + (i / 3) as u8, stack * 3 + (i % 3) as u8)
                    }),
                });
            }
        }
        if variant == Variant::Diagonal {
            units.push(Unit {
                kind: UnitKind::Diagonal,
                cells: std::array::from_fn(|i| Cell::new(i as u8, i as u8)),
            });
            units.push(Unit {
                kind: UnitKind::Diagonal,
                cells: std::array::from_fn(|i| Cell::new(i as u8, 8 - i as u8)),
            });
        }

        let mut units_of = vec![Vec::new(); 81];
        for (unit_id, unit) in units.iter().enumerate() {
            for cell in unit.cells {
                units_of[cell.index()].push(unit_id);
            }
        }

        let mut peers = vec![HashSet::new(); 81];
        for &cell in &cells {
            for &unit_id in &units_of[cell.index()] {
                for other in units[unit_id].cells {
                    if other != cell {
                        peers[cell.index()].insert(other);
                    }
                }
            }
        }

        Self {
            variant,
            cells,
            units,
            units_of,
            peers,
        }
    }

    /// The shared topology for classic row/column/box Sudoku.
    pub fn standard() -> Arc<Self> {
        static STANDARD: OnceLock<Arc<Topology>> = OnceLock::new();
        STANDARD
            .get_or_init(|| Arc::new(Self::new(Variant::Standard)))
            .clone()
    }

    /// The shared topology with both main diagonals as additional units.
    pub fn diagonal() -> Arc<Self> {
        static DIAGONAL: OnceLock<Arc<Topology>> = OnceLock::new();
        DIAGONAL
            .get_or_init(|| Arc::new(Self::new(Variant::Diagonal)))
            .clone()
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// All 81 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The units containing `cell`: 3 in the standard variant, 4 or 5 for
    /// cells on a diagonal in the diagonal variant.
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> + '_ {
        self.units_of[cell.index()].iter().map(|&id| &self.units[id])
    }

    /// Every cell sharing at least one unit with `cell`.
    pub fn peers(&self, cell: Cell) -> &HashSet<Cell> {
        &self.peers[cell.index()]
    }

    /// Cells that are peers of both `a` and `b`.
    pub fn common_peers(&self, a: Cell, b: Cell) -> impl Iterator<Item = Cell> + '_ {
        let other = self.peers(b);
        self.peers(a)
            .iter()
            .copied()
            .filter(move |cell| other.contains(cell))
    }
}
