#![warn(missing_docs)]
//! A backtracking sudoku solver
//!
//! ## Overview
//!
//! Sudokan fills the empty cells of a 9×9 puzzle so that every row,
//! column and 3×3 block contains the digits 1 through 9 exactly once. It
//! does so by plain exhaustive search: each candidate digit is tried in
//! turn and undone again when the search behind it dead-ends. There is no
//! puzzle generation and no grading, just backtracking with row, column
//! and block pruning.
//!
//! Puzzles are written as 9 lines of 9 characters, the digits `1`-`9`
//! for given clues and `x` for cells left to solve.
//!
//! ## Example
//!
//! ```
//! use sudokan::{Grid, Solver};
//!
//! let puzzle = "\
//! xx3x2x6xx
//! 9xx3x5xx1
//! xx18x64xx
//! xx81x29xx
//! 7xxxxxxx8
//! xx67x82xx
//! xx26x95xx
//! 8xx2x3xx9
//! xx5x1x3xx";
//!
//! let mut grid: Grid = puzzle.parse().unwrap();
//! let mut solver = Solver::new();
//!
//! assert!(solver.solve(&mut grid));
//! assert!(grid.is_solved());
//! println!("solved in {} steps:\n{}", solver.steps(), grid);
//! ```
mod board;
mod consts;
pub mod parse_errors;
mod solver;

pub use crate::board::{Cell, Digit, Grid};
pub use crate::solver::{Solver, Unsolvable};
