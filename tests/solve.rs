// vim: set ai et ts=4 sts=4 sw=4:
use piclogic::{solve, Grid, Puzzle, Solver, CellState::*};
use piclogic::hint::min_length;
use piclogic::row::generate;

#[test]
fn square_of_full_lines_is_all_filled() {
    let grid = solve(2, 2, &["2", "2"], &["2", "2"]);
    assert_eq!(grid.cells, vec![vec![Filled, Filled], vec![Filled, Filled]]);
    assert!(grid.is_solved());
}

#[test]
fn exact_fit_row_is_fixed_in_one_pass() {
    let mut solver = Solver::new(Puzzle::from_hint_strings(&["1 1"], &["", "", ""]));
    let first = solver.next().unwrap().unwrap();
    assert_eq!(first.changes.len(), 3);
    assert_eq!(solver.puzzle.grid.cells[0], vec![Filled, Empty, Filled]);
}

#[test]
fn diagonal_needs_guessing_and_stays_unknown() {
    let mut solver = Solver::new(Puzzle::from_hint_strings(&["1", "1", "1"], &["1", "1", "1"]));
    let report = solver.solve().unwrap();
    assert!(report.iterations <= 9);
    assert!(!report.solved);
    assert!(!report.stopped_at_bound);
    assert_eq!(solver.puzzle.grid.unknown_count(), 9);
}

#[test]
fn exact_fit_hints_have_exactly_one_arrangement() {
    for runs in &[vec![4], vec![1, 1], vec![2, 3, 1], vec![1, 1, 1, 1, 1]] {
        let length = min_length(runs);
        assert_eq!(generate(runs, length).len(), 1, "runs {:?}", runs);
    }
}

#[test]
fn solving_a_solved_grid_again_changes_nothing() {
    let rows = ["5", "1 4", "1 1 1", "1 1 1 1", "1 1 1 1", "1 1 3 1", "1 1 1", "1 1 1", "3 4 1", "3 3"];
    let cols = ["8", "1 1", "1 1 5", "1 1", "1 2 2", "2 1 1", "5 1", "1 2", "1 1", "8"];

    let mut solver = Solver::new(Puzzle::from_hint_strings(&rows, &cols));
    solver.solve().unwrap();
    let solved: Grid = solver.puzzle.grid.clone();
    assert!(solved.is_solved());
    assert_eq!(solved.cells[8], vec![Filled, Filled, Filled, Empty, Filled, Filled, Filled, Filled, Empty, Filled]);

    let mut again = Solver::new(solver.into_puzzle());
    let report = again.solve().unwrap();
    assert_eq!(report.changes, 0);
    assert_eq!(report.iterations, 1);
    assert_eq!(again.puzzle.grid, solved);
}

#[test]
fn known_cells_survive_every_pass() {
    // hints that only partly determine each other, so some passes stall or contradict
    let rows = ["1", "3", "1", "1 1", "1 1"];
    let cols = ["1", "3", "1 2", "", "2"];
    let mut solver = Solver::new(Puzzle::from_hint_strings(&rows, &cols));

    let mut previous = solver.puzzle.grid.clone();
    while let Some(pass) = solver.next() {
        pass.unwrap();
        let current = &solver.puzzle.grid;
        for (old_row, new_row) in previous.cells.iter().zip(current.cells.iter()) {
            for (old, new) in old_row.iter().zip(new_row.iter()) {
                if *old != Unknown {
                    assert_eq!(old, new);
                }
            }
        }
        previous = current.clone();
    }
    assert!(solver.is_finished());
}

#[test]
fn recognized_text_feeds_the_solver() {
    let mut row_hints = vec![String::new(); 2];
    let mut col_hints = vec![String::new(); 2];
    piclogic::hint::apply_recognized_text(&mut row_hints, "2\n2,\n");
    piclogic::hint::apply_recognized_text(&mut col_hints, "2.\n 2\nextra line 7");

    let grid = solve(2, 2, &row_hints, &col_hints);
    assert!(grid.is_solved());
}
