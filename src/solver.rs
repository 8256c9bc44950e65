//! Exhaustive backtracking search over the free cells of a grid.
//!
//! The search walks the 81 cells in row-major order. Clue cells are
//! skipped; for a free cell every digit is tried in ascending order and
//! the first one the grid accepts is placed before moving on to the next
//! cell. When no digit fits, the placement one level up is undone and its
//! successor digit is tried. The first complete assignment reached this
//! way is kept, which makes the result deterministic: the
//! lexicographically first solution in row-major, ascending-digit order.

use crate::board::{Digit, Grid};

/// Error for a search that exhausted all possibilities without finding a
/// solution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("puzzle has no solution")]
pub struct Unsolvable;

/// A backtracking solver with its own step counter.
///
/// The counter belongs to the solver value, so separate solves never
/// contaminate each other's numbers and concurrent solves need no shared
/// state.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    steps: u64,
}

impl Solver {
    /// Creates a solver with a zeroed step counter.
    pub fn new() -> Solver {
        Solver::default()
    }

    /// Number of recursive search steps taken so far, counting skips over
    /// clue cells and row advances as well as trial placements.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Fills the free cells of `grid` in place. Returns true if a full
    /// solution was found; its placements are retained. On failure every
    /// trial placement has been undone and the grid is back in its
    /// pre-solve state.
    pub fn solve(&mut self, grid: &mut Grid) -> bool {
        self.solve_cell(grid, 0, 0)
    }

    /// Like [`solve`](Self::solve), but expresses failure as an error value.
    pub fn try_solve(&mut self, grid: &mut Grid) -> Result<(), Unsolvable> {
        match self.solve(grid) {
            true => Ok(()),
            false => Err(Unsolvable),
        }
    }

    fn solve_cell(&mut self, grid: &mut Grid, row: u8, col: u8) -> bool {
        self.steps += 1;

        if col == 9 {
            // row finished: either the whole grid is filled or we move on
            return match row {
                8 => true,
                _ => self.solve_cell(grid, row + 1, 0),
            };
        }

        if grid.cell(row, col).is_clue() {
            return self.solve_cell(grid, row, col + 1);
        }

        for digit in Digit::all() {
            if grid.is_valid_move(row, col, digit) {
                grid.place(row, col, digit);
                if self.solve_cell(grid, row, col + 1) {
                    return true;
                }
                grid.unplace(row, col);
            }
        }

        false
    }
}
