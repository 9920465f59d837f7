use crate::error::ParseError;
use crate::position::{TextPosition, TextRange};
use crate::value::Value;

/// The outcome of running a parser: the consumed range plus either the
/// matched value or a message describing the mismatch
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    Success { range: TextRange, value: Value },
    Failure { range: TextRange, message: String },
}

impl ParseResult {
    pub fn success(range: TextRange, value: impl Into<Value>) -> Self {
        ParseResult::Success {
            range,
            value: value.into(),
        }
    }

    pub fn failure(range: TextRange, message: impl Into<String>) -> Self {
        ParseResult::Failure {
            range,
            message: message.into(),
        }
    }

    /// A failure located at a single position
    pub fn fail_at(pos: TextPosition, message: impl Into<String>) -> Self {
        ParseResult::failure(TextRange::single(pos), message)
    }

    pub fn matched(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn range(&self) -> TextRange {
        match self {
            ParseResult::Success { range, .. } | ParseResult::Failure { range, .. } => *range,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure { .. } => None,
        }
    }

    /// The positioned error of a failure, reported at the end of its range
    pub fn error(&self) -> Option<ParseError> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { range, message } => {
                Some(ParseError::new(message.clone(), range.end))
            }
        }
    }

    pub fn into_result(self) -> Result<Value, ParseError> {
        match self {
            ParseResult::Success { value, .. } => Ok(value),
            ParseResult::Failure { range, message } => Err(ParseError::new(message, range.end)),
        }
    }
}
