// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::BTreeSet;

use super::Puzzle;
use super::super::row::PossibilityCache;
use super::super::util::{Direction, Direction::*};
use super::super::grid::{Changes, Error};

#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    /// Lowers the iteration bound; the bound never exceeds `rows × cols`.
    pub max_iterations: Option<usize>,
    /// Also propagate lines without any runs, as all-empty lines.
    pub blank_lines_empty: bool,
}

/// Outcome of a single row or column pass.
#[derive(Debug, Clone)]
pub struct PassResult {
    pub iteration: usize,
    pub direction: Direction,
    pub changes: Changes,
    /// Indices of lines for which no possibility was consistent with the grid.
    pub skipped: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub iterations: usize,
    pub changes: usize,
    /// The iteration bound ended the solve before an iteration without deductions could
    /// confirm convergence. A grid can be solved and still have this set.
    pub stopped_at_bound: bool,
    /// Lines that had no consistent possibility in at least one pass.
    pub stalled_lines: Vec<(Direction, usize)>,
    pub solved: bool,
}

/// Line-logic propagation over a puzzle's grid.
///
/// Each iteration is a row pass followed by a column pass; `next()` runs one pass at a
/// time, so the grid is always fully written between two calls. Iteration stops once an
/// iteration deduces nothing new or the iteration bound is reached.
#[derive(Debug)]
pub struct Solver {
    pub puzzle: Puzzle,
    pub iterations: usize,
    pub max_iterations: usize,
    options: SolverOptions,
    cache: PossibilityCache,
    next_direction: Direction,
    progress: bool,
    finished: bool,
    stalled: BTreeSet<(Direction, usize)>, // contradictions already reported
    total_changes: usize,
}

impl Solver {
    pub fn new(puzzle: Puzzle) -> Self {
        Self::with_options(puzzle, SolverOptions::default())
    }

    pub fn with_options(puzzle: Puzzle, options: SolverOptions) -> Self {
        let bound = puzzle.width() * puzzle.height();
        let max_iterations = match options.max_iterations {
            Some(n) => n.min(bound),
            None    => bound,
        };
        for row in puzzle.rows.iter().chain(puzzle.cols.iter()) {
            if !row.is_feasible() {
                log::warn!("hint {} [{}] does not fit in {} cells; it will yield no deductions",
                           row.describe(), row, row.length);
            }
        }
        Solver {
            puzzle,
            iterations: 0,
            max_iterations,
            options,
            cache: PossibilityCache::new(),
            next_direction: Horizontal,
            progress: false,
            finished: false,
            stalled: BTreeSet::new(),
            total_changes: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn _run_pass(&mut self, direction: Direction) -> Result<PassResult, Error> {
        let mut changes = Changes::new();
        let mut skipped = Vec::<usize>::new();
        let blank_lines_empty = self.options.blank_lines_empty;

        let lines = match direction {
            Horizontal => &self.puzzle.rows,
            Vertical   => &self.puzzle.cols,
        };
        for row in lines.iter().filter(|row| blank_lines_empty || !row.is_trivially_empty()) {
            match row.solve(&mut self.puzzle.grid, &mut self.cache)? {
                Some(line_changes) => changes.extend(line_changes),
                None => {
                    skipped.push(row.index);
                    if row.is_feasible() && self.stalled.insert((direction, row.index)) {
                        log::warn!("no arrangement of {} [{}] is consistent with the grid; skipping it",
                                   row.describe(), row);
                    }
                }
            }
        }

        log::debug!("iteration {} {} pass: {} cells deduced, {} lines skipped",
                    self.iterations + 1, direction.line_name(), changes.len(), skipped.len());
        Ok(PassResult {
            iteration: self.iterations + 1,
            direction,
            changes,
            skipped,
        })
    }

    /// Runs passes until convergence or the iteration bound and summarizes the outcome.
    pub fn solve(&mut self) -> Result<SolveReport, Error> {
        let mut stalled_lines = BTreeSet::<(Direction, usize)>::new();
        for pass in self.by_ref() {
            let pass = pass?;
            for &index in &pass.skipped {
                stalled_lines.insert((pass.direction, index));
            }
        }

        let report = SolveReport {
            iterations: self.iterations,
            changes: self.total_changes,
            stopped_at_bound: self.progress,
            stalled_lines: stalled_lines.into_iter().collect(),
            solved: self.puzzle.grid.is_solved(),
        };

        if !self.cache.is_empty() {
            log::debug!("possibility cache: {} signatures, {} hits, {} misses",
                        self.cache.len(), self.cache.hits, self.cache.misses);
        }
        match report.solved {
            true  => log::info!("solved after {} iterations", report.iterations),
            false => log::info!("stopped after {} iterations with {} cells unknown",
                                report.iterations, self.puzzle.grid.unknown_count()),
        }
        Ok(report)
    }

    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }
}

impl Iterator for Solver {
    type Item = Result<PassResult, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let direction = self.next_direction;
        if direction == Horizontal && self.iterations >= self.max_iterations {
            self.finished = true;
            return None;
        }

        let result = match self._run_pass(direction) {
            Ok(x)  => x,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };
        if !result.changes.is_empty() {
            self.progress = true;
            self.total_changes += result.changes.len();
        }

        match direction {
            Horizontal => {
                self.next_direction = Vertical;
            }
            Vertical => {
                self.next_direction = Horizontal;
                self.iterations += 1;
                if !self.progress {
                    self.finished = true;
                } else if self.iterations < self.max_iterations {
                    self.progress = false;
                }
            }
        }
        Some(Ok(result))
    }
}
