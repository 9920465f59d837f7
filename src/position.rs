use std::fmt;

/// A single character position in some text. Both line and column start at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextPosition {
    pub line: usize,
    pub col: usize,
}

impl TextPosition {
    pub fn new(line: usize, col: usize) -> Self {
        TextPosition { line, col }
    }

    /// The position of the first character of any input
    pub fn start() -> Self {
        TextPosition { line: 0, col: 0 }
    }

    /// Move one column to the right on the same line
    pub fn advance_col(self) -> Self {
        TextPosition {
            line: self.line,
            col: self.col + 1,
        }
    }

    /// Move to the first column of the next line
    pub fn advance_line(self) -> Self {
        TextPosition {
            line: self.line + 1,
            col: 0,
        }
    }

    /// Advance past the given character
    pub fn advance(self, c: char) -> Self {
        if c == '\n' {
            self.advance_line()
        } else {
            self.advance_col()
        }
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.col)
    }
}

/// An inclusive range between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    /// Start position (inclusive)
    pub start: TextPosition,
    /// End position (inclusive)
    pub end: TextPosition,
}

impl TextRange {
    pub fn new(start: TextPosition, end: TextPosition) -> Self {
        TextRange { start, end }
    }

    /// A range covering exactly one position
    pub fn single(pos: TextPosition) -> Self {
        TextRange {
            start: pos,
            end: pos,
        }
    }

    /// Check if the range starts and ends at the same position
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let pos = TextPosition::start();
        assert_eq!(pos.line, 0);
        assert_eq!(pos.col, 0);
        assert_eq!(pos, TextPosition::default());
    }

    #[test]
    fn test_advance_plain_char() {
        let pos = TextPosition::new(3, 7).advance('x');
        assert_eq!(pos, TextPosition::new(3, 8));
    }

    #[test]
    fn test_advance_newline() {
        let pos = TextPosition::new(3, 7).advance('\n');
        assert_eq!(pos, TextPosition::new(4, 0));
    }

    #[test]
    fn test_advance_carriage_return_is_a_column() {
        let pos = TextPosition::start().advance('\r');
        assert_eq!(pos, TextPosition::new(0, 1));
    }

    #[test]
    fn test_advance_multibyte_counts_one_column() {
        let pos = "☃é".chars().fold(TextPosition::start(), TextPosition::advance);
        assert_eq!(pos, TextPosition::new(0, 2));
    }

    #[test]
    fn test_advance_over_text() {
        let pos = "ab\ncd\n\ne"
            .chars()
            .fold(TextPosition::start(), TextPosition::advance);
        assert_eq!(pos, TextPosition::new(3, 1));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(TextPosition::new(2, 5).to_string(), "line 2, col 5");
    }

    #[test]
    fn test_range_single() {
        let pos = TextPosition::new(1, 1);
        let range = TextRange::single(pos);
        assert_eq!(range.start, pos);
        assert_eq!(range.end, pos);
        assert!(range.is_empty());
    }

    #[test]
    fn test_range_new() {
        let range = TextRange::new(TextPosition::new(0, 0), TextPosition::new(0, 4));
        assert!(!range.is_empty());
        assert_eq!(range.end.col, 4);
    }
}
