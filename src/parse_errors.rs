//! Errors that may be encountered when reading a puzzle from text

/// A structure representing an error caused when parsing the puzzle
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum GridParseError {
    /// Input ends with less than 9 rows. Contains the number of rows encountered.
    #[error("puzzle input ends after {0} of 9 rows")]
    NotEnoughRows(u8),
    /// A row describes fewer than 9 cells.
    #[error("row {row} contains only {len} of 9 cells")]
    RowTooShort {
        /// Row index from 0..=8, topmost row is 0
        row: u8,
        /// Number of characters found in the row
        len: u8,
    },
    /// Accepted cell characters are the digits 1..=9 and 'x' for empty cells.
    #[error("row {row}, column {col} contains invalid character {ch:?}")]
    InvalidCharacter {
        /// Row index from 0..=8, topmost row is 0
        row: u8,
        /// Column index from 0..=8, leftmost column is 0
        col: u8,
        /// The offending character
        ch: char,
    },
}
