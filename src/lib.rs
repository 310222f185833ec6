//! Novem solves classic 9x9 Sudoku puzzles — and the diagonal variant — by
//! running constraint propagation to a fixed point and falling back to
//! depth-first backtracking search when propagation stalls.
//!
//! # Core Concepts
//!
//! - **[`Topology`]**: the immutable constraint structure — rows, columns,
//!   boxes, and optionally the two main diagonals — together with each cell's
//!   unit memberships and peer set. Built once per variant and shared by
//!   reference counting.
//! - **[`Grid`]**: a persistent map from every cell to its remaining
//!   candidate digits. Deriving a new grid shares structure with the old one,
//!   which keeps branching cheap and keeps search branches isolated from each
//!   other.
//! - **[`Solver`]**: reduces a grid with the eliminate and only-choice rules,
//!   then guesses on the most constrained cell and recurses.
//!
//! [`Topology`]: solver::topology::Topology
//! [`Grid`]: solver::grid::Grid
//! [`Solver`]: solver::search::Solver
//!
//! # Example
//!
//! ```
//! use novem::{codec, solver::search::Solver, solver::topology::Topology};
//!
//! let topology = Topology::standard();
//! let puzzle =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//! let grid = codec::parse(&topology, puzzle).unwrap();
//!
//! let (solution, stats) = Solver::new(topology.clone()).solve(grid);
//! let solution = solution.unwrap();
//!
//! assert!(solution.is_complete());
//! assert_eq!(stats.backtracks, 0);
//! println!("{}", codec::render(&topology, &solution));
//! ```
pub mod codec;
pub mod error;
pub mod solver;
