// vim: set ai et ts=4 sts=4:
use std::fmt;
use std::io;
use yaml_rust::ScanError;

pub trait HasGridLocation {
    fn get_row(&self) -> usize;
    fn get_col(&self) -> usize;
    fn fmt_location(&self) -> String {
        format!("(row={:-2}, col={:-2})", self.get_row(), self.get_col())
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum CellState {
    Unknown,
    Filled,
    Empty,
}
impl CellState {
    pub fn is_known(&self) -> bool {
        *self != CellState::Unknown
    }
    pub fn fmt_visual(&self) -> &'static str {
        match self {
            CellState::Empty   => " ",
            CellState::Filled  => "\u{25A0}", // filled in black square
            CellState::Unknown => ".",
        }
    }
}
impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            CellState::Filled  => "Filled",
            CellState::Empty   => "Empty",
            CellState::Unknown => "Unknown",
        })
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug, Clone)]
pub struct StatusChange {
    pub row: usize,
    pub col: usize,
    pub old: CellState,
    pub new: CellState,
}
impl StatusChange {
    pub fn new(row: usize, col: usize, old: CellState, new: CellState) -> Self {
        Self { row, col, old, new }
    }
}
impl HasGridLocation for StatusChange {
    fn get_row(&self) -> usize { self.row }
    fn get_col(&self) -> usize { self.col }
}
impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Change: in cell {}, state was changed from {} to {}",
            self.fmt_location(),
            self.old,
            self.new)
    }
}
pub type Changes = Vec<StatusChange>;

// ------------------------------------------------

#[derive(PartialEq, Debug)]
pub enum StatusError {
    WasAlreadySet(StatusChange),          // known cells cannot be reverted to unknown
    ChangeRejected(StatusChange, String), // new state conflicts with existing (non-unknown) state
}
impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "StatusError: {}", match self {
            StatusError::WasAlreadySet(change) =>
                format!("In {}, cannot reset state {} back to {}",
                    change.fmt_location(), change.old, change.new),
            StatusError::ChangeRejected(change, msg) =>
                format!("In {}, attempt to change state from {} to {} was rejected: {}",
                    change.fmt_location(), change.old, change.new, msg),
        })
    }
}

pub type StatusResult = Result<Option<StatusChange>, StatusError>; // if it worked: the change, if any; if it didn't, the change that was rejected

#[derive(Debug)]
pub enum Error {
    Status(StatusError),
    Yaml(ScanError),
    Io(io::Error),
    Input(String),
}
impl From<StatusError> for Error {
    fn from(other: StatusError) -> Self {
        Error::Status(other)
    }
}
impl From<ScanError> for Error {
    fn from(other: ScanError) -> Self {
        Error::Yaml(other)
    }
}
impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self {
        Error::Io(other)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Status(x) => write!(f, "{}", x),
            Error::Yaml(x)   => write!(f, "YAML error: {}", x),
            Error::Io(x)     => write!(f, "I/O error: {}", x),
            Error::Input(s)  => write!(f, "Invalid puzzle: {}", s),
        }
    }
}
impl std::error::Error for Error {}

// ------------------------------------------------

/// Cell states of a `rows × cols` board, indexed `[row][col]`.
#[derive(Clone, PartialEq)]
pub struct Grid {
    pub cells: Vec<Vec<CellState>>,
}
impl Grid {
    pub fn new(rows: usize, cols: usize)
        -> Self
    {
        Grid {
            cells: (0..rows).map(|_| vec![CellState::Unknown; cols])
                            .collect(),
        }
    }

    pub fn height(&self) -> usize { self.cells.len() }
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    /// Writes a known state into a cell. Known cells may be "set" again to the state they
    /// already have, which is not a change; anything else on a known cell is rejected.
    pub fn set_status(&mut self, row: usize, col: usize, new: CellState) -> StatusResult {
        let old = self.cells[row][col];
        let cand_change = StatusChange::new(row, col, old, new);

        if old != CellState::Unknown {
            if new == CellState::Unknown {
                return Err(StatusError::WasAlreadySet(cand_change));
            }
            if old != new {
                return Err(StatusError::ChangeRejected(cand_change, "conflicting information".to_string()));
            }
            return Ok(None);
        }
        if new == CellState::Unknown {
            return Ok(None);
        }
        self.cells[row][col] = new;
        Ok(Some(cand_change))
    }

    pub fn unknown_count(&self) -> usize {
        self.cells.iter()
                  .flat_map(|row| row.iter())
                  .filter(|s| !s.is_known())
                  .count()
    }
    pub fn is_solved(&self) -> bool {
        self.unknown_count() == 0
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(rows={}, cols={}, unknown={})", self.height(), self.width(), self.unknown_count())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line = row.iter().map(|s| s.fmt_visual()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::CellState::*;

    #[test]
    fn new_grid_is_all_unknown() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.unknown_count(), 6);
        assert!(!grid.is_solved());
    }

    #[test]
    fn set_status_reports_changes_once() {
        let mut grid = Grid::new(1, 2);
        assert_eq!(grid.set_status(0, 1, Filled), Ok(Some(StatusChange::new(0, 1, Unknown, Filled))));
        assert_eq!(grid.set_status(0, 1, Filled), Ok(None));
        assert_eq!(grid.get(0, 1), Filled);
    }

    #[test]
    fn known_cells_never_change() {
        let mut grid = Grid::new(1, 1);
        grid.set_status(0, 0, Empty).unwrap();

        match grid.set_status(0, 0, Filled) {
            Err(StatusError::ChangeRejected(change, _)) => assert_eq!(change.old, Empty),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(grid.set_status(0, 0, Unknown), Err(StatusError::WasAlreadySet(_))));
        assert_eq!(grid.get(0, 0), Empty);
        assert!(grid.is_solved());
    }

    #[test]
    fn display_uses_visual_symbols() {
        let mut grid = Grid::new(1, 3);
        grid.set_status(0, 0, Filled).unwrap();
        grid.set_status(0, 1, Empty).unwrap();
        assert_eq!(grid.to_string(), "\u{25A0} .\n");
    }
}
