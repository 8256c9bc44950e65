use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{value_parser, Arg, Command};
use log::debug;
use sudokan::parse_errors::GridParseError;
use sudokan::{Grid, Solver, Unsolvable};

/// Everything that ends a run with a diagnostic instead of a solution.
#[derive(Debug, thiserror::Error)]
enum PuzzleError {
    #[error("could not open puzzle file {path}: {source}", path = .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path}: {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        source: GridParseError,
    },
    #[error("could not solve puzzle")]
    Unsolvable(#[from] Unsolvable),
}

fn make_args_parser() -> Command {
    Command::new("sudokan")
        .about("Solves 9x9 sudoku puzzles through exhaustive backtracking")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("puzzle")
                .value_name("FILE")
                .help("Puzzle file: 9 rows of the digits 1-9, with 'x' for empty cells")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
}

fn solve_puzzle(path: &Path) -> Result<(), PuzzleError> {
    let file = File::open(path).map_err(|source| PuzzleError::Open {
        path: path.to_owned(),
        source,
    })?;
    let mut grid =
        Grid::from_reader(BufReader::new(file)).map_err(|source| PuzzleError::Parse {
            path: path.to_owned(),
            source,
        })?;
    debug!("loaded puzzle with {} clues", grid.n_clues());

    let mut solver = Solver::new();
    let outcome = solver.try_solve(&mut grid);
    debug!("search finished after {} steps", solver.steps());
    outcome?;

    println!("Solution (found in {} steps):", solver.steps());
    println!("{grid}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = make_args_parser().get_matches();
    let path = matches
        .get_one::<PathBuf>("puzzle")
        .expect("puzzle argument is required");

    match solve_puzzle(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
