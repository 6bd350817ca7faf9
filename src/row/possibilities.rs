// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::HashMap;
use std::rc::Rc;

use super::super::grid::CellState::{self, Empty, Filled};

/// One complete arrangement of a line: every cell is either `Filled` or `Empty`.
pub type Possibility = Vec<CellState>;

/// Enumerates every placement of `runs` (in order, at least one empty cell between
/// consecutive runs) on a line of `length` cells.
pub fn generate(runs: &[usize], length: usize) -> Vec<Possibility> {
    let mut result = Vec::<Possibility>::new();
    let mut line = Vec::<CellState>::with_capacity(length);
    place_runs(runs, length, 0, &mut line, &mut result);
    result
}

fn place_runs(runs: &[usize],
              length: usize,
              run_index: usize,
              line: &mut Vec<CellState>,
              result: &mut Vec<Possibility>)
{
    if run_index == runs.len() {
        if line.len() <= length {
            let mut possibility = line.clone();
            possibility.resize(length, Empty);
            result.push(possibility);
        }
        return;
    }

    let run = runs[run_index];
    // every later run still needs its own length plus the gap in front of it
    let remaining: usize = runs[run_index+1..].iter().map(|r| r + 1).sum();
    let placed = line.len();
    let earliest = if run_index == 0 { 0 } else { placed + 1 };

    let mut offset = earliest;
    while offset + run + remaining <= length {
        line.resize(offset, Empty);
        line.resize(offset + run, Filled);
        place_runs(runs, length, run_index + 1, line, result);
        line.truncate(placed);
        offset += 1;
    }
}

/// Memoized possibility sets, keyed by `(runs, line length)`.
///
/// The sets depend only on the key, never on grid contents, so an entry stays valid for
/// as long as the cache lives.
#[derive(Debug, Default)]
pub struct PossibilityCache {
    entries: HashMap<(Vec<usize>, usize), Rc<Vec<Possibility>>>,
    pub hits: usize,
    pub misses: usize,
}

impl PossibilityCache {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get_or_generate(&mut self, runs: &[usize], length: usize) -> Rc<Vec<Possibility>> {
        let key = (runs.to_vec(), length);
        if let Some(possibilities) = self.entries.get(&key) {
            self.hits += 1;
            return Rc::clone(possibilities);
        }

        self.misses += 1;
        let possibilities = Rc::new(generate(runs, length));
        log::trace!("generated {} possibilities for runs {:?} over {} cells",
                    possibilities.len(), runs, length);
        self.entries.insert(key, Rc::clone(&possibilities));
        possibilities
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Empty as E, Filled as F};

    #[test]
    fn single_run_slides_across_the_line() {
        for length in 1..=12 {
            for run in 1..=length {
                assert_eq!(generate(&[run], length).len(), length - run + 1,
                           "run {} over {} cells", run, length);
            }
        }
        assert_eq!(generate(&[2], 4), vec![vec![F, F, E, E],
                                           vec![E, F, F, E],
                                           vec![E, E, F, F]]);
    }

    #[test]
    fn multiple_runs_keep_order_and_gaps() {
        assert_eq!(generate(&[1, 2], 5), vec![vec![F, E, F, F, E],
                                              vec![F, E, E, F, F],
                                              vec![E, F, E, F, F]]);
    }

    #[test]
    fn exact_fit_has_one_arrangement() {
        assert_eq!(generate(&[1, 1], 3), vec![vec![F, E, F]]);
        assert_eq!(generate(&[3, 1, 2], 8), vec![vec![F, F, F, E, F, E, F, F]]);
        assert_eq!(generate(&[30], 30).len(), 1);
    }

    #[test]
    fn runs_that_do_not_fit_have_no_arrangement() {
        assert!(generate(&[2, 2], 4).is_empty());
        assert!(generate(&[5], 3).is_empty());
    }

    #[test]
    fn no_runs_means_an_all_empty_line() {
        assert_eq!(generate(&[], 3), vec![vec![E, E, E]]);
    }

    #[test]
    fn counts_match_the_binomial_formula() {
        // k runs with slack s have C(s + k, k) arrangements
        assert_eq!(generate(&[1, 1, 1], 10).len(), 56);
        assert_eq!(generate(&[2, 3, 1, 1], 30).len(), 10626);
    }

    #[test]
    fn cache_generates_each_signature_once() {
        let mut cache = PossibilityCache::new();
        let first = cache.get_or_generate(&[1, 2], 5);
        let second = cache.get_or_generate(&[1, 2], 5);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!((cache.hits, cache.misses), (1, 1));

        cache.get_or_generate(&[1, 2], 6);
        cache.get_or_generate(&[2, 1], 5);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.misses, 3);
    }
}
