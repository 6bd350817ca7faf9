// vim: set ai et ts=4 sw=4 sts=4:
use std::os::unix::io::AsRawFd;
use ansi_term::ANSIString;

/// Orientation of a line within the grid: rows run horizontally, columns vertically.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
}
impl Direction {
    pub fn line_name(&self) -> &'static str {
        match self {
            Direction::Horizontal => "row",
            Direction::Vertical   => "col",
        }
    }
}

pub fn maybe_color(s: &ANSIString, emit_color: bool) -> String {
    match emit_color {
        true  => s.to_string(),
        false => (**s).to_string(), // deref once to get ANSIString, once more to get underlying str
    }
}
pub fn ralign(s: &str, width: usize) -> String {
    let visual_len = s.chars().count();
    if visual_len >= width {
        return String::from(s);
    }
    format!("{}{}", " ".repeat(width-visual_len), s)
}
pub fn lalign_colored(s: &ANSIString, width: usize, emit_color: bool)
    -> String
{
    let visual_len = s.len(); // ANSIString.len() returns length WITHOUT escape sequences
    if visual_len >= width {
        return maybe_color(s, emit_color);
    }
    format!("{}{}", maybe_color(s, emit_color), " ".repeat(width-visual_len))
}
pub fn ralign_joined_coloreds(strs: &[ANSIString], width: usize, emit_color: bool)
    -> String
{
    let mut visual_len: usize = strs.iter().map(|ansi_str| ansi_str.len()).sum();
    visual_len += strs.len().saturating_sub(1); // count the spaces that .join(" ") will add

    let joined_colored = strs.iter()
                             .map(|astr| maybe_color(astr, emit_color))
                             .collect::<Vec<_>>()
                             .join(" ");
    if visual_len >= width {
        return joined_colored;
    }
    format!("{}{}", " ".repeat(width-visual_len), joined_colored)
}

pub fn is_a_tty<T: AsRawFd>(handle: T) -> bool {
    let fd = handle.as_raw_fd();
    unsafe { libc::isatty(fd) != 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansi_term::{Colour, Style};

    #[test]
    fn ralign_pads_on_the_left() {
        assert_eq!(ralign("3 1", 5), "  3 1");
        assert_eq!(ralign("12 4", 2), "12 4");
    }

    #[test]
    fn colored_alignment_ignores_escape_sequences() {
        let parts = vec![Style::new().fg(Colour::Fixed(241)).paint("3"),
                         Style::default().paint("12")];
        assert_eq!(ralign_joined_coloreds(&parts, 6, false), "  3 12");
        assert!(ralign_joined_coloreds(&parts, 6, true).ends_with("12"));
        assert_eq!(lalign_colored(&parts[1], 3, false), "12 ");
    }

    #[test]
    fn joining_nothing_gives_padding_only() {
        assert_eq!(ralign_joined_coloreds(&[], 2, false), "  ");
    }
}
