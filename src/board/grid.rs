use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::board::positions::{self, HOUSE_CELLS};
use crate::board::{Cell, Digit};
use crate::consts::N_CELLS;
use crate::parse_errors::GridParseError;
use crate::solver::Solver;

/// A 9×9 sudoku board.
///
/// The grid is created from puzzle input and mutated in place while
/// solving; on success it holds the finished solution. Cells that were
/// given in the input keep their digit and clue marker throughout.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: [Cell; N_CELLS],
}

impl Grid {
    /// Creates a new grid based on a reader over the puzzle text.
    ///
    /// The expected format is 9 lines, each describing one row in its
    /// first 9 characters: `'1'..='9'` for a given clue, `'x'` for an
    /// empty cell. Anything past the 9th character of a line is ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Grid, GridParseError> {
        let mut cells = [Cell::empty(); N_CELLS];
        let mut lines = reader.lines();

        for row in 0..9 {
            let line = match lines.next() {
                Some(Ok(line)) => line,
                // a line that cannot be read counts as missing
                Some(Err(_)) | None => return Err(GridParseError::NotEnoughRows(row)),
            };

            let mut chars = line.chars();
            for col in 0..9 {
                let ch = chars
                    .next()
                    .ok_or(GridParseError::RowTooShort { row, len: col })?;
                if ch == 'x' {
                    continue;
                }
                match Digit::from_char(ch) {
                    Some(digit) => {
                        cells[positions::cell_at(row, col) as usize] = Cell::clue(digit)
                    }
                    None => return Err(GridParseError::InvalidCharacter { row, col, ch }),
                }
            }
        }

        Ok(Grid { cells })
    }

    /// Returns the cell at the given coordinates, both in `0..=8`.
    #[inline]
    pub fn cell(&self, row: u8, col: u8) -> Cell {
        self.cells[positions::cell_at(row, col) as usize]
    }

    /// Number of clues given in the puzzle.
    pub fn n_clues(&self) -> u8 {
        self.cells.iter().filter(|cell| cell.is_clue()).count() as u8
    }

    /// Checks whether `digit` may be placed at (`row`, `col`) in the
    /// current grid state.
    ///
    /// Returns false if the target cell is occupied, no matter by what,
    /// or if the digit already appears in the same row, column or 3×3
    /// block. A pure query: the grid is not touched.
    pub fn is_valid_move(&self, row: u8, col: u8, digit: Digit) -> bool {
        if !self.cell(row, col).is_empty() {
            return false;
        }

        let digit = Some(digit);
        for i in 0..9 {
            if self.digit_at(positions::cell_at(row, i)) == digit
                || self.digit_at(positions::cell_at(i, col)) == digit
            {
                return false;
            }
        }

        let block = positions::block(positions::cell_at(row, col));
        positions::block_cells(block)
            .iter()
            .all(|&cell| self.digit_at(cell) != digit)
    }

    /// Check whether the grid is completely and correctly filled: every
    /// row, column and block contains each of 1..=9 exactly once.
    pub fn is_solved(&self) -> bool {
        HOUSE_CELLS.iter().all(|house| {
            let mut seen = [false; 9];
            for digit in house.iter().filter_map(|&cell| self.digit_at(cell)) {
                seen[digit.as_index()] = true;
            }
            seen == [true; 9]
        })
    }

    /// Try to find a solution to the puzzle and fill it in. Returns true
    /// if a solution was found.
    ///
    /// This is a convenience interface. Use a [`Solver`] directly to also
    /// learn the search effort.
    pub fn solve(&mut self) -> bool {
        Solver::new().solve(self)
    }

    /// Returns a single-line rendition of the grid: 81 characters, row by
    /// row, digits for filled cells and `x` for empty ones.
    pub fn to_line_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.digit() {
                Some(digit) => char::from(b'0' + digit.get()),
                None => 'x',
            })
            .collect()
    }

    #[inline]
    fn digit_at(&self, cell: u8) -> Option<Digit> {
        self.cells[cell as usize].digit()
    }

    pub(crate) fn place(&mut self, row: u8, col: u8, digit: Digit) {
        self.cells[positions::cell_at(row, col) as usize].set(digit);
    }

    pub(crate) fn unplace(&mut self, row: u8, col: u8) {
        self.cells[positions::cell_at(row, col) as usize].clear();
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Grid, GridParseError> {
        Grid::from_reader(s.as_bytes())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, state) in self.cells.iter().enumerate() {
            let cell = cell as u8;
            match (positions::row(cell), positions::col(cell)) {
                (0, 0) => {}
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, "   ")?, // separate blocks in columns
                _ => write!(f, " ")?,
            }
            match state.digit() {
                Some(digit) => write!(f, "{:2}", digit.get())?,
                None => write!(f, " x")?,
            }
        }
        Ok(())
    }
}
