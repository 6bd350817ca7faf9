// vim: set ai et ts=4 sts=4 sw=4:
//! Line-logic solver for nonograms (picture-logic puzzles).
//!
//! Every row and column is solved on its own: all arrangements of its runs are
//! enumerated, those contradicting the grid are discarded, and cells on which the rest
//! agree are written back. Rows and columns take turns until nothing changes. Puzzles
//! that need guessing are left partially `Unknown`.
//!
//! ```
//! use piclogic::{solve, CellState::*};
//!
//! let grid = solve(1, 3, &["1 1"], &["", "", ""]);
//! assert_eq!(grid.cells[0], vec![Filled, Empty, Filled]);
//! ```
pub mod util;
pub mod grid;
pub mod hint;
pub mod row;
pub mod puzzle;

pub use self::grid::{CellState, Grid, Error};
pub use self::puzzle::{Puzzle, Solver, SolverOptions, SolveReport, PassResult};

/// Solves a `rows × cols` puzzle from raw hint strings and returns the resulting grid.
///
/// `row_hints` and `col_hints` are expected to hold `rows` and `cols` entries; checking
/// that is up to the caller. Contradictory hints leave cells `Unknown` instead of failing.
pub fn solve<S: AsRef<str>>(rows: usize, cols: usize, row_hints: &[S], col_hints: &[S]) -> Grid {
    debug_assert_eq!(row_hints.len(), rows);
    debug_assert_eq!(col_hints.len(), cols);

    let mut solver = Solver::new(Puzzle::from_hint_strings(row_hints, col_hints));
    if let Err(e) = solver.solve() {
        log::error!("{}", e);
    }
    solver.into_puzzle().grid
}
