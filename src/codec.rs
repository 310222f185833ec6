//! Conversions between flat puzzle strings and candidate grids.

use crate::{
    error::{Error, Result},
    solver::{
        grid::{Candidates, Digit, Grid},
        topology::Topology,
    },
};

/// The input character standing for an unknown cell.
pub const PLACEHOLDER: char = '.';

/// Decodes a flat 81-character puzzle string, read left to right, top to
/// bottom. Digits `1`-`9` are given clues; [`PLACEHOLDER`] leaves all nine
/// digits open for the cell.
pub fn parse(topology: &Topology, input: &str) -> Result<Grid> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != 81 {
        return Err(Error::InvalidLength(chars.len()));
    }

    let mut grid = Grid::full(topology);
    for (position, (cell, c)) in topology.cells().zip(chars).enumerate() {
        if c == PLACEHOLDER {
            continue;
        }
        let digit = Digit::from_char(c).ok_or(Error::InvalidCharacter(c, position))?;
        grid = grid.with_candidates(cell, Candidates::single(digit));
    }
    Ok(grid)
}

/// Encodes a grid back to the flat 81-character form. Solved cells render as
/// their digit, anything else as [`PLACEHOLDER`].
pub fn encode(topology: &Topology, grid: &Grid) -> String {
    topology
        .cells()
        .map(|cell| {
            grid.candidates(cell)
                .singleton()
                .map_or(PLACEHOLDER, Digit::to_char)
        })
        .collect()
}

/// Renders a grid as a fixed-width 2-D block layout for diagnostics.
///
/// Every cell shows its full candidate set, centered in a column wide enough
/// for the largest set; columns and rows are grouped in threes by `|`
/// separators and `-` rules. Nothing in the solver consumes this output.
pub fn render(topology: &Topology, grid: &Grid) -> String {
    let width = 1 + topology
        .cells()
        .map(|cell| grid.candidates(cell).len())
        .max()
        .unwrap_or(1);
    let rule = vec!["-".repeat(width * 3); 3].join("+");

    let mut out = String::new();
    for cell in topology.cells() {
        let candidates = grid.candidates(cell).to_string();
        out.push_str(&format!("{candidates:^width$}"));
        if cell.col() == 2 || cell.col() == 5 {
            out.push('|');
        }
        if cell.col() == 8 {
            out.push('\n');
            if cell.row() == 2 || cell.row() == 5 {
                out.push_str(&rule);
                out.push('\n');
            }
        }
    }
    out
}
