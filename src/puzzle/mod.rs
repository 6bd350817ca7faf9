// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

pub use self::solver::{Solver, SolverOptions, PassResult, SolveReport};

use std::fmt;
use std::convert::TryFrom;
use yaml_rust::{Yaml, YamlLoader};
use ansi_term::{Colour, Style, ANSIString};

use super::grid::{Grid, Error};
use super::hint::parse_hints;
use super::util::{ralign, lalign_colored, ralign_joined_coloreds, Direction::*};
use super::row::Row;

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub rows: Vec<Row>,
    pub cols: Vec<Row>,
    pub grid: Grid,
}

impl Puzzle {
    /// Builds an unsolved puzzle; the grid size follows from the number of hints.
    pub fn new(row_run_lengths: &[Vec<usize>],
               col_run_lengths: &[Vec<usize>]) -> Self
    {
        let grid = Grid::new(row_run_lengths.len(), col_run_lengths.len());
        let rows = row_run_lengths.iter()
                                  .enumerate()
                                  .map(|(y, runs)| Row::new(&grid, Horizontal, y, runs))
                                  .collect::<Vec<_>>();
        let cols = col_run_lengths.iter()
                                  .enumerate()
                                  .map(|(x, runs)| Row::new(&grid, Vertical, x, runs))
                                  .collect::<Vec<_>>();
        Puzzle {
            rows: rows,
            cols: cols,
            grid: grid,
        }
    }
    pub fn width(&self) -> usize { self.cols.len() }
    pub fn height(&self) -> usize { self.rows.len() }

    pub fn from_hint_strings<S: AsRef<str>>(row_hints: &[S], col_hints: &[S]) -> Self {
        Puzzle::new(&parse_hints(row_hints), &parse_hints(col_hints))
    }

    pub fn from_yaml_str(s: &str) -> Result<Puzzle, Error> {
        let docs: Vec<Yaml> = YamlLoader::load_from_str(s)?;
        match docs.first() {
            Some(doc) => Self::from_yaml(doc),
            None      => Err(Error::Input("empty puzzle document".to_string())),
        }
    }

    pub fn from_yaml(doc: &Yaml) -> Result<Puzzle, Error>
    {
        let row_hints = Self::_parse_hint_list(doc, "rows")?;
        let col_hints = Self::_parse_hint_list(doc, "cols")?;
        Ok(Puzzle::from_hint_strings(&row_hints, &col_hints))
    }

    /// Raw hint strings of the `rows` and `cols` lists, so they can still be resized or
    /// overwritten before parsing.
    pub fn hint_strings_from_yaml(doc: &Yaml) -> Result<(Vec<String>, Vec<String>), Error> {
        Ok((Self::_parse_hint_list(doc, "rows")?, Self::_parse_hint_list(doc, "cols")?))
    }

    fn _parse_hint_list(doc: &Yaml, key: &str) -> Result<Vec<String>, Error> {
        let list: &Vec<Yaml> = doc[key].as_vec()
                                       .ok_or_else(|| Error::Input(format!("missing '{}' list", key)))?;
        list.iter()
            .enumerate()
            .map(|(i, yaml_val)| Self::_parse_hint_entry(yaml_val)
                                     .ok_or_else(|| Error::Input(format!("unexpected value in {} #{}: {:?}", key, i+1, yaml_val))))
            .collect()
    }

    fn _parse_hint_entry(input: &Yaml) -> Option<String> {
        match input {
            Yaml::String(s)  => Some(s.clone()),
            Yaml::Integer(n) => match usize::try_from(*n) {
                                    Ok(x) if x > 0 => Some(x.to_string()),
                                    _              => Some(String::new()),
                                },
            Yaml::Null       => Some(String::new()),
            _                => None,
        }
    }

    pub fn row_runs(&self) -> Vec<Vec<usize>> {
        self.rows.iter().map(|row| row.runs.clone()).collect()
    }
    pub fn col_runs(&self) -> Vec<Vec<usize>> {
        self.cols.iter().map(|col| col.runs.clone()).collect()
    }
}

impl Puzzle {
    // helper functions for Puzzle::fmt
    fn _hint_style(&self, row: &Row) -> Style {
        match row.is_completed(&self.grid) {
            true  => Style::new().fg(Colour::Fixed(241)),
            false => Style::default(),
        }
    }

    /// Renders hints and board with box-drawing characters. With `subdivision` set, thin
    /// separator lines are drawn every that many cells.
    pub fn render(&self, subdivision: Option<usize>, emit_color: bool)
        -> String
    {
        let subdivision = subdivision.filter(|&n| n > 0);
        let row_prefixes: Vec<Vec<ANSIString>> =
            self.rows.iter()
                     .map(|row| { let style = self._hint_style(row);
                                  row.runs.iter()
                                          .map(|run| style.paint(run.to_string()))
                                          .collect::<Vec<_>>() })
                     .collect();

        let prefix_len = row_prefixes.iter()
                                     .map(|parts| parts.iter()
                                                       .map(|ansi_str| ansi_str.len() + 1) // note: .len() returns length WITHOUT ansi color escape sequences
                                                       .sum::<usize>()
                                                       .saturating_sub(1)) // minus one at the end to match the length of a join(" ")
                                     .max().unwrap_or(0);
        let max_col_runs = self.cols.iter()
                                    .map(|col| col.runs.len())
                                    .max().unwrap_or(0);

        let mut result = String::new();

        for i in (0..max_col_runs).rev() {
            result.push_str(&self._fmt_header(i, prefix_len, subdivision, emit_color));
        }

        let horizontal_border = (0..self.width()).map(|_| String::from("\u{2550}\u{2550}\u{2550}"))
                                                 .collect::<Vec<_>>();
        // top board line
        result.push_str(&Self::_fmt_line(
            &ralign("", prefix_len),
            "\u{2554}",
            "\u{2557}",
            "\u{2564}",
            subdivision,
            &horizontal_border
        ));

        for y in 0..self.height() {
            // board content line
            result.push_str(&Self::_fmt_line(
                &ralign_joined_coloreds(&row_prefixes[y], prefix_len, emit_color),
                "\u{2551}",
                "\u{2551}",
                "\u{2502}",
                subdivision,
                &self.grid.cells[y].iter()
                                   .map(|s| format!(" {} ", s.fmt_visual()))
                                   .collect::<Vec<_>>()
            ));

            // horizontal subdivisor line
            if let Some(subdiv) = subdivision {
                if ((y+1) % subdiv == 0) && (y != self.height()-1) {
                    result.push_str(&Self::_fmt_line(
                        &ralign("", prefix_len),
                        "\u{255F}",
                        "\u{2562}",
                        "\u{253C}",
                        subdivision,
                        &(0..self.width()).map(|_| String::from("\u{2500}\u{2500}\u{2500}"))
                                          .collect::<Vec<_>>()
                    ));
                }
            }
        }
        // bottom board line
        result.push_str(&Self::_fmt_line(
            &ralign("", prefix_len),
            "\u{255A}",
            "\u{255D}",
            "\u{2567}",
            subdivision,
            &horizontal_border
        ));

        result
    }

    fn _fmt_line(prefix: &str,
                 left_delim: &str,
                 right_delim: &str,
                 columnwise_separator: &str,
                 subdivision: Option<usize>,
                 content_parts: &[String])
        -> String
    {
        let mut result = format!("{} {}", prefix, left_delim);
        for (idx, s) in content_parts.iter().enumerate() {
            result.push_str(s);
            if let Some(subdiv) = subdivision {
                if ((idx+1) % subdiv == 0) && (idx < content_parts.len()-1) {
                    result.push_str(columnwise_separator);
                }
            }
        }
        result.push_str(&format!("{}\n", right_delim));
        result
    }

    fn _fmt_header(&self, line_idx: usize,
                          prefix_len: usize,
                          subdivision: Option<usize>,
                          emit_color: bool)
        -> String
    {
        let mut content_parts = Vec::<String>::new();
        for col in &self.cols {
            let part: String;
            if line_idx < col.runs.len() {
                let run = col.runs[col.runs.len()-1-line_idx];
                let colored = self._hint_style(col).paint(run.to_string());
                part = format!(" {}", lalign_colored(&colored, 2, emit_color));
            } else {
                part = format!(" {:-2}", " ");
            }

            content_parts.push(part);
        }

        Self::_fmt_line(
            &ralign("", prefix_len),
            " ",
            " ",
            " ",
            subdivision,
            &content_parts
        )
    }
}
impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(Some(5), false))
    }
}
