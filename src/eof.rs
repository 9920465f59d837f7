use crate::parser::{Parser, ParserRef, shared};
use crate::position::TextRange;
use crate::result::ParseResult;
use crate::scanner::{ReadError, Scanner};
use crate::value::Value;

/// Parser that only succeeds once the input is exhausted
pub struct Eof;

impl Parser for Eof {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        match scanner.read() {
            Ok(c) => {
                ParseResult::fail_at(scanner.position(), format!("expected EOF, got '{}'", c))
            }
            Err(ReadError::EndOfInput) => {
                ParseResult::success(TextRange::single(scanner.position()), Value::empty())
            }
            Err(e) => ParseResult::fail_at(
                scanner.position(),
                format!("expected EOF, got error {}", e),
            ),
        }
    }
}

/// Match the end of the input
pub fn eof() -> ParserRef {
    shared(Eof)
}
