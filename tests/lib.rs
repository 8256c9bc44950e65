use sudokan::parse_errors::GridParseError;
use sudokan::{Digit, Grid, Solver};

fn read_grid(grid_str: &str) -> Grid {
    grid_str
        .parse()
        .unwrap_or_else(|err| panic!("{:?}", err))
}

#[test]
fn solve_easy() {
    let mut grid = read_grid(include_str!("../puzzles/easy.txt"));
    let mut solver = Solver::new();

    assert!(solver.solve(&mut grid));
    assert_eq!(solver.steps(), 310);

    let solution = read_grid(include_str!("../puzzles/easy_solved.txt"));
    assert_eq!(grid.to_line_string(), solution.to_line_string());
}

#[test]
fn solve_medium() {
    let mut grid = read_grid(include_str!("../puzzles/medium.txt"));
    let mut solver = Solver::new();

    assert!(solver.solve(&mut grid));
    assert_eq!(solver.steps(), 476);

    let solution = read_grid(include_str!("../puzzles/medium_solved.txt"));
    assert_eq!(grid.to_line_string(), solution.to_line_string());
}

#[test]
fn solutions_satisfy_all_houses() {
    for puzzle in [
        include_str!("../puzzles/easy.txt"),
        include_str!("../puzzles/medium.txt"),
    ] {
        let mut grid = read_grid(puzzle);
        assert!(grid.solve());
        assert!(grid.is_solved());

        // check the one-rule directly: every row, column and block holds
        // each digit exactly once
        for i in 0..9 {
            let mut row_seen = [false; 9];
            let mut col_seen = [false; 9];
            for j in 0..9 {
                row_seen[grid.cell(i, j).digit().unwrap().as_index()] = true;
                col_seen[grid.cell(j, i).digit().unwrap().as_index()] = true;
            }
            assert_eq!(row_seen, [true; 9]);
            assert_eq!(col_seen, [true; 9]);
        }
        for block in 0..3 {
            for stack in 0..3 {
                let mut seen = [false; 9];
                for r in 0..3 {
                    for c in 0..3 {
                        let cell = grid.cell(block * 3 + r, stack * 3 + c);
                        seen[cell.digit().unwrap().as_index()] = true;
                    }
                }
                assert_eq!(seen, [true; 9]);
            }
        }
    }
}

#[test]
fn solving_preserves_clues() {
    let puzzle = include_str!("../puzzles/easy.txt");
    let original = read_grid(puzzle);
    let mut grid = read_grid(puzzle);
    assert!(grid.solve());

    for row in 0..9 {
        for col in 0..9 {
            let before = original.cell(row, col);
            if before.is_clue() {
                let after = grid.cell(row, col);
                assert!(after.is_clue());
                assert_eq!(after.digit(), before.digit());
            }
        }
    }
}

#[test]
fn fully_given_grid_solves_trivially() {
    let solved_str = include_str!("../puzzles/easy_solved.txt");
    let mut grid = read_grid(solved_str);
    let mut solver = Solver::new();

    assert!(solver.solve(&mut grid));
    assert_eq!(grid, read_grid(solved_str));
    // every cell is a clue, so the sweep makes no placements at all
    assert_eq!(solver.steps(), 90);
}

#[test]
fn unsolvable_puzzle_fails_and_leaves_no_placements() {
    let mut grid = read_grid(include_str!("../puzzles/unsolvable.txt"));
    let mut solver = Solver::new();

    assert!(!solver.solve(&mut grid));
    // the search placed digits at (0, 0) before backing out of each
    assert_eq!(solver.steps(), 25);

    for row in 0..9 {
        for col in 0..9 {
            let cell = grid.cell(row, col);
            if !cell.is_clue() {
                assert!(cell.is_empty(), "leftover placement at ({row}, {col})");
            }
        }
    }
}

#[test]
fn solving_is_deterministic() {
    let puzzle = include_str!("../puzzles/medium.txt");
    let mut first = read_grid(puzzle);
    let mut second = read_grid(puzzle);
    let mut first_solver = Solver::new();
    let mut second_solver = Solver::new();

    assert!(first_solver.solve(&mut first));
    assert!(second_solver.solve(&mut second));
    assert_eq!(first, second);
    assert_eq!(first_solver.steps(), second_solver.steps());
}

#[test]
fn truncated_input_is_rejected_before_solving() {
    let eight_rows = include_str!("../puzzles/easy.txt")
        .lines()
        .take(8)
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(
        eight_rows.parse::<Grid>().unwrap_err(),
        GridParseError::NotEnoughRows(8)
    );
}

#[test]
fn validator_agrees_with_solution() {
    let grid = read_grid(include_str!("../puzzles/easy.txt"));
    let solution = read_grid(include_str!("../puzzles/easy_solved.txt"));

    // on the unsolved grid, the solution's digit is always legal in an
    // empty cell
    for row in 0..9 {
        for col in 0..9 {
            if grid.cell(row, col).is_empty() {
                let digit = solution.cell(row, col).digit().unwrap();
                assert!(grid.is_valid_move(row, col, digit));
            }
        }
    }
}

#[test]
fn display_of_a_solved_grid() {
    let mut grid = read_grid(include_str!("../puzzles/easy.txt"));
    assert!(grid.solve());

    let shown = grid.to_string();
    let mut lines = shown.lines();
    assert_eq!(lines.next(), Some(" 4  8  3    9  2  1    6  5  7"));
    assert_eq!(lines.next(), Some(" 9  6  7    3  4  5    8  2  1"));
    assert_eq!(shown.lines().count(), 11);
}

#[test]
fn digits_parse_and_print_round_trip() {
    for digit in Digit::all() {
        let ch = digit.to_string().chars().next().unwrap();
        assert_eq!(Digit::from_char(ch), Some(digit));
    }
    assert_eq!(Digit::from_char('x'), None);
    assert_eq!(Digit::from_char('0'), None);
}
