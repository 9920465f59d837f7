use crate::parser::{Parser, ParserRef, shared};
use crate::result::ParseResult;
use crate::scanner::Scanner;
use crate::value::Value;

/// Runs the inner parser and throws its value away, keeping the range.
/// Useful for delimiters that should not show up in a merged result.
pub struct Ignore {
    parser: ParserRef,
}

impl Ignore {
    pub fn new(parser: ParserRef) -> Self {
        Ignore { parser }
    }
}

impl Parser for Ignore {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        match self.parser.parse(scanner) {
            ParseResult::Success { range, .. } => ParseResult::Success {
                range,
                value: Value::empty(),
            },
            failure => failure,
        }
    }
}

pub fn ignore(parser: ParserRef) -> ParserRef {
    shared(Ignore::new(parser))
}

/// Extension trait to add .ignored() method support for parsers
pub trait IgnoreExt: Parser + Sized + 'static {
    fn ignored(self) -> ParserRef {
        ignore(shared(self))
    }
}

/// Implement IgnoreExt for all parsers
impl<P> IgnoreExt for P where P: Parser + 'static {}
