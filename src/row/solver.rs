// vim: set ai et ts=4 sts=4 sw=4:
use super::{Row, DirectionalSequence, Possibility, PossibilityCache};
use super::super::grid::{Grid, CellState, CellState::Unknown, Changes, Error};

/// Keeps the possibilities that agree with every known cell of `cells`.
pub fn filter_possibilities<'a>(cells: &[CellState], possibilities: &'a [Possibility])
    -> Vec<&'a Possibility>
{
    possibilities.iter()
                 .filter(|p| cells.iter()
                                  .zip(p.iter())
                                  .all(|(&known, &candidate)| known == Unknown || known == candidate))
                 .collect()
}

/// For each position, the value every candidate agrees on (or `None` where they differ).
/// Returns `None` when there are no candidates at all.
pub fn common_cells(candidates: &[&Possibility], length: usize) -> Option<Vec<Option<CellState>>> {
    let (first, rest) = candidates.split_first()?;
    Some((0..length).map(|i| {
                        let value = first[i];
                        match rest.iter().all(|p| p[i] == value) {
                            true  => Some(value),
                            false => None,
                        }
                    })
                    .collect())
}

impl Row {
    /// Runs one deduction step for this line against the current grid.
    ///
    /// Returns `Ok(None)` if no possibility is consistent with the line (either the runs
    /// don't fit, or earlier deductions contradict them); the grid is left untouched then.
    /// Otherwise every deducible value is written into the line's `Unknown` cells and the
    /// resulting changes are returned.
    pub fn solve(&self, grid: &mut Grid, cache: &mut PossibilityCache)
        -> Result<Option<Changes>, Error>
    {
        let possibilities = cache.get_or_generate(&self.runs, self.length);
        let cells = self.cells(grid);
        let candidates = filter_possibilities(&cells, &possibilities);

        let common = match common_cells(&candidates, self.length) {
            Some(x) => x,
            None    => return Ok(None),
        };

        let mut changes = Changes::new();
        for (at, deduced) in common.into_iter().enumerate() {
            if let Some(state) = deduced {
                if cells[at] == Unknown {
                    if let Some(change) = self.set_cell(grid, at, state)? {
                        changes.push(change);
                    }
                }
            }
        }
        if !changes.is_empty() {
            log::trace!("{} [{}]: {} of {} possibilities survive, {} cells deduced",
                        self.describe(), self, candidates.len(), possibilities.len(), changes.len());
        }
        Ok(Some(changes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Empty as E, Filled as F, Unknown as U};
    use crate::row::generate;
    use crate::util::Direction::*;

    #[test]
    fn unknown_cells_do_not_constrain() {
        let possibilities = generate(&[2], 4);
        assert_eq!(filter_possibilities(&[U, U, U, U], &possibilities).len(), 3);
    }

    #[test]
    fn known_cells_rule_out_disagreeing_possibilities() {
        let possibilities = generate(&[2], 4);
        let filtered = filter_possibilities(&[U, U, U, F], &possibilities);
        assert_eq!(filtered, vec![&vec![E, E, F, F]]);

        let filtered = filter_possibilities(&[E, U, U, U], &possibilities);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn overlap_of_a_long_run_is_common() {
        let possibilities = generate(&[3], 4);
        let all = possibilities.iter().collect::<Vec<_>>();
        assert_eq!(common_cells(&all, 4), Some(vec![None, Some(F), Some(F), None]));
    }

    #[test]
    fn no_candidates_means_no_deductions() {
        assert_eq!(common_cells(&[], 4), None);
    }

    #[test]
    fn solve_writes_only_into_unknown_cells() {
        let mut grid = Grid::new(1, 5);
        let mut cache = PossibilityCache::new();
        let row = Row::new(&grid, Horizontal, 0, &[4]);

        let changes = row.solve(&mut grid, &mut cache).unwrap().unwrap();
        assert_eq!(changes.len(), 3);
        assert_eq!(row.cells(&grid), vec![U, F, F, F, U]);

        grid.set_status(0, 0, E).unwrap();
        let changes = row.solve(&mut grid, &mut cache).unwrap().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(row.cells(&grid), vec![E, F, F, F, F]);
        assert_eq!(cache.misses, 1);
    }

    #[test]
    fn contradicted_line_is_left_alone() {
        let mut grid = Grid::new(3, 1);
        grid.set_status(1, 0, E).unwrap();
        let mut cache = PossibilityCache::new();
        let col = Row::new(&grid, Vertical, 0, &[3]);

        assert_eq!(col.solve(&mut grid, &mut cache).unwrap(), None);
        assert_eq!(col.cells(&grid), vec![U, E, U]);
    }

    #[test]
    fn infeasible_line_yields_nothing() {
        let mut grid = Grid::new(1, 3);
        let mut cache = PossibilityCache::new();
        let row = Row::new(&grid, Horizontal, 0, &[2, 2]);
        assert_eq!(row.solve(&mut grid, &mut cache).unwrap(), None);
        assert_eq!(grid.unknown_count(), 3);
    }
}
