pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised at the puzzle-string boundary.
///
/// A contradiction discovered while solving is not an error: propagation and
/// search report it as an absent grid (`None`), which the search absorbs by
/// backtracking.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("puzzle string must contain exactly 81 cells, found {0}")]
    InvalidLength(usize),
    #[error("unrecognized character {0:?} at cell {1}")]
    InvalidCharacter(char, usize),
}
