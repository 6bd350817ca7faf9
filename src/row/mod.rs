// vim: set ai et ts=4 sw=4 sts=4:
//! A single line of the puzzle (a row or a column) and its hint.
mod possibilities;
mod solver;

pub use self::possibilities::{generate, Possibility, PossibilityCache};
pub use self::solver::{common_cells, filter_possibilities};

use std::fmt;

use super::util::{Direction, Direction::*};
use super::grid::{Grid, CellState, StatusResult};
use super::hint::min_length;

pub trait DirectionalSequence
{
    fn get_row_index(&self) -> usize;
    fn get_direction(&self) -> Direction;

    /// Grid coordinates `(row, col)` of position `at` along this line.
    fn square_index(&self, at: usize) -> (usize, usize) {
        match self.get_direction() {
            Horizontal => (self.get_row_index(), at),
            Vertical   => (at, self.get_row_index()),
        }
    }
    fn get_cell(&self, grid: &Grid, at: usize) -> CellState {
        let (row, col) = self.square_index(at);
        grid.get(row, col)
    }
    fn set_cell(&self, grid: &mut Grid, at: usize, state: CellState) -> StatusResult {
        let (row, col) = self.square_index(at);
        grid.set_status(row, col, state)
    }
}

#[derive(Debug, Clone)]
pub struct Row {
    pub direction:  Direction,
    pub index:      usize,
    pub length:     usize,
    pub runs:       Vec<usize>,
}

impl Row {
    pub fn new(grid: &Grid,
               direction: Direction,
               row_index: usize,
               runs: &[usize]) -> Self
    {
        let row_length = match direction {
            Horizontal => grid.width(),
            Vertical   => grid.height(),
        };
        Row {
            direction: direction,
            index:     row_index,
            length:    row_length,
            runs:      runs.to_vec(),
        }
    }

    pub fn is_trivially_empty(&self) -> bool {
        self.runs.is_empty()
    }
    /// Whether the runs fit in the line at all; when they don't, the line never yields anything.
    pub fn is_feasible(&self) -> bool {
        min_length(&self.runs) <= self.length
    }
    pub fn cells(&self, grid: &Grid) -> Vec<CellState> {
        (0..self.length).map(|at| self.get_cell(grid, at))
                        .collect()
    }
    pub fn is_completed(&self, grid: &Grid) -> bool {
        (0..self.length).all(|at| self.get_cell(grid, at).is_known())
    }
    pub fn describe(&self) -> String {
        format!("{} {}", self.direction.line_name(), self.index)
    }
}
impl DirectionalSequence for Row {
    fn get_row_index(&self) -> usize { self.index }
    fn get_direction(&self) -> Direction { self.direction }
}
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let runs = self.runs.iter()
                            .map(|run| run.to_string())
                            .collect::<Vec<_>>();
        write!(f, "{}", runs.join(" "))
    }
}
