// vim: set ai et ts=4 sw=4 sts=4:
//! Turning raw hint text into run sequences.
//!
//! Hints arrive as free text, typed by hand or recognized from a photo, so parsing is
//! lenient: anything that doesn't read as a positive number is dropped rather than
//! reported.
use std::convert::TryFrom;

/// Reads one hint token. Tokens that are numbers count only as positive integers; any
/// other token keeps its digits when they form a single unsigned number (`"a3"` is 3).
fn parse_token(token: &str) -> Option<usize> {
    if let Ok(n) = token.parse::<i64>() {
        return usize::try_from(n).ok().filter(|&n| n > 0);
    }
    if token.parse::<f64>().is_ok() {
        return None;
    }

    let mut digit_runs = token.split(|c: char| !c.is_ascii_digit())
                              .filter(|run| !run.is_empty());
    let digits = digit_runs.next()?;
    if digit_runs.next().is_some() {
        return None;
    }
    let start = token.find(|c: char| c.is_ascii_digit())?;
    if token[..start].ends_with('-') {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&n| n > 0)
}

/// Parses a hint such as `"3 1"` or `"2,2"` into its ordered run lengths.
///
/// Tokens are separated by whitespace and commas. Negative, zero, fractional and
/// out-of-range numbers are dropped, as are tokens without a single clean number in them,
/// so `"a3,1 b"` reads as `[3, 1]`.
pub fn parse_hint(raw: &str) -> Vec<usize> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
       .filter(|token| !token.is_empty())
       .filter_map(parse_token)
       .collect()
}

pub fn parse_hints<S: AsRef<str>>(raws: &[S]) -> Vec<Vec<usize>> {
    raws.iter()
        .map(|raw| parse_hint(raw.as_ref()))
        .collect()
}

/// Keeps only digits, spaces and commas of one line of recognized text.
pub fn sanitize_line(line: &str) -> String {
    line.trim()
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == ' ' || c == ',')
        .collect()
}

/// Overwrites `hints[i]` with the sanitized `i`-th line of `text`.
///
/// Lines past the end of `hints` are ignored; hints past the last line keep their value.
/// Returns the number of hints that were overwritten.
pub fn apply_recognized_text(hints: &mut [String], text: &str) -> usize {
    let mut applied = 0;
    for (hint, line) in hints.iter_mut().zip(text.lines()) {
        *hint = sanitize_line(line);
        applied += 1;
    }
    applied
}

/// Truncates or pads a list of hint strings to `len` entries, padding with blank hints.
pub fn resized(hints: &[String], len: usize) -> Vec<String> {
    let mut result: Vec<String> = hints.iter().take(len).cloned().collect();
    result.resize(len, String::new());
    result
}

/// Smallest line length that can hold `runs`: the runs plus one gap between each pair.
pub fn min_length(runs: &[usize]) -> usize {
    runs.iter().sum::<usize>() + runs.len().saturating_sub(1)
}
