use crate::parser::{Parser, ParserRef, shared};
use crate::result::ParseResult;
use crate::scanner::Scanner;

/// Parser combinator that tries each parser in order and returns the first
/// success
///
/// Every candidate runs inside its own snapshot, so a failing candidate never
/// leaves input consumed. When all of them fail the individual failures are
/// dropped in favor of a single `no parser matched` at the starting position.
pub struct Or {
    parsers: Vec<ParserRef>,
}

impl Or {
    pub fn new(parsers: Vec<ParserRef>) -> Self {
        Or { parsers }
    }
}

impl Parser for Or {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        for parser in &self.parsers {
            scanner.start_snapshot();
            let result = parser.parse(scanner);
            if result.matched() {
                scanner.pop_snapshot();
                return result;
            }
            scanner.rewind_snapshot();
        }

        ParseResult::fail_at(scanner.position(), "no parser matched")
    }
}

/// Convenience function to create an Or parser
pub fn or(parsers: impl IntoIterator<Item = ParserRef>) -> ParserRef {
    shared(Or::new(parsers.into_iter().collect()))
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized + 'static {
    fn or(self, other: ParserRef) -> ParserRef {
        or([shared(self), other])
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser + 'static {}
