use crate::position::TextPosition;
use std::io;
use thiserror::Error;

/// The first unrecovered mismatch of a parse, positioned at the end of the
/// failing range. Lines and columns start at 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, col {col}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, at: TextPosition) -> Self {
        ParseError {
            message: message.into(),
            line: at.line,
            col: at.col,
        }
    }

    pub fn position(&self) -> TextPosition {
        TextPosition::new(self.line, self.col)
    }
}

/// Why a [`BacktrackingSource`](crate::source::BacktrackingSource) could not
/// supply another character
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Reached end of input")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl SourceError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, SourceError::EndOfInput)
    }
}

/// Everything a top-level parse can report to its caller
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to read input: {0}")]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new("no parser matched", TextPosition::new(2, 14));
        assert_eq!(error.to_string(), "no parser matched at line 2, col 14");
        assert_eq!(error.position(), TextPosition::new(2, 14));
    }

    #[test]
    fn test_end_of_input_display() {
        let error = SourceError::EndOfInput;
        assert_eq!(error.to_string(), "Reached end of input");
        assert!(error.is_end_of_input());
    }

    #[test]
    fn test_io_error_is_transparent() {
        let error = SourceError::from(io::Error::new(io::ErrorKind::InvalidData, "bad byte"));
        assert_eq!(error.to_string(), "bad byte");
        assert!(!error.is_end_of_input());
    }

    #[test]
    fn test_crate_error_wraps_both_kinds() {
        let parse: Error = ParseError::new("expected EOF, got 'x'", TextPosition::new(0, 1)).into();
        assert_eq!(parse.to_string(), "expected EOF, got 'x' at line 0, col 1");

        let source: Error = SourceError::Io(io::Error::other("disk on fire")).into();
        assert_eq!(source.to_string(), "failed to read input: disk on fire");
    }
}
