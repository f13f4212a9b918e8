//! Configuration of the indentation encoding.
//!
//! An `IndentStyle` fixes the indentation unit `U` (the width difference
//! between a parent and its children) and the character used to indent.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How depth is encoded in leading whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndentStyle {
    /// Width of one indentation level (e.g., 2 = two characters per level).
    pub unit: usize,

    /// Character repeated to form the indentation run.
    pub indent_char: char,
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self {
            unit: 2,
            indent_char: ' ',
        }
    }
}

impl IndentStyle {
    /// Create a new style with default values (two spaces per level).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit.
    ///
    /// A unit of 0 would make every line a sibling of every other, so it is
    /// clamped to 1.
    pub fn unit(mut self, unit: usize) -> Self {
        self.unit = unit.max(1);
        self
    }

    /// Set the indentation character.
    pub fn indent_char(mut self, ch: char) -> Self {
        self.indent_char = ch;
        self
    }

    /// Tab-indented trees: one tab per level.
    pub fn tabs() -> Self {
        Self::new().unit(1).indent_char('\t')
    }

    /// Width of the leading indentation run of `line`.
    pub fn measure(&self, line: &str) -> usize {
        line.chars().take_while(|&c| c == self.indent_char).count()
    }

    /// The indentation prefix for `width` characters.
    pub fn prefix(&self, width: usize) -> String {
        std::iter::repeat(self.indent_char).take(width).collect()
    }

    /// Width of one level as used by every query.
    ///
    /// `unit` is a public field, so a zero can arrive without going through
    /// the builder; it counts as 1.
    pub fn level_width(&self) -> usize {
        self.unit.max(1)
    }

    /// Depth corresponding to an indentation width.
    pub fn depth_of(&self, width: usize) -> usize {
        width / self.level_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = IndentStyle::default();
        assert_eq!(style.unit, 2);
        assert_eq!(style.indent_char, ' ');
    }

    #[test]
    fn test_builder() {
        let style = IndentStyle::new().unit(4).indent_char('.');
        assert_eq!(style.unit, 4);
        assert_eq!(style.prefix(3), "...");
        assert_eq!(style.measure("....x"), 4);
        assert_eq!(style.depth_of(8), 2);

        assert_eq!(IndentStyle::new().unit(0).unit, 1);
    }

    #[test]
    fn test_zero_unit_literal_counts_as_one() {
        let style = IndentStyle {
            unit: 0,
            indent_char: ' ',
        };
        assert_eq!(style.level_width(), 1);
        assert_eq!(style.depth_of(3), 3);
    }

    #[test]
    fn test_measure_stops_at_other_whitespace() {
        let style = IndentStyle::default();
        assert_eq!(style.measure("  \t  x"), 2);
        assert_eq!(style.measure(""), 0);
        assert_eq!(IndentStyle::tabs().measure("\t\tx"), 2);
    }
}
