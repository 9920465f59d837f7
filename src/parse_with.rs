use crate::parser::{Parser, ParserRef, shared};
use crate::result::ParseResult;
use crate::scanner::Scanner;
use crate::value::Value;

/// Parser combinator that transforms the value of a successful parse using a
/// mapping function. Failures pass through untouched.
pub struct ParseWith<F> {
    parser: ParserRef,
    mapper: F,
}

impl<F> ParseWith<F> {
    pub fn new(parser: ParserRef, mapper: F) -> Self {
        ParseWith { parser, mapper }
    }
}

impl<F> Parser for ParseWith<F>
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        match self.parser.parse(scanner) {
            ParseResult::Success { range, value } => ParseResult::Success {
                range,
                value: (self.mapper)(value),
            },
            failure => failure,
        }
    }
}

/// Convenience function to create a ParseWith parser
pub fn parse_with<F>(parser: ParserRef, mapper: F) -> ParserRef
where
    F: Fn(Value) -> Value + Send + Sync + 'static,
{
    shared(ParseWith::new(parser, mapper))
}

/// Extension trait to add .with() method support for parsers
pub trait ParseWithExt: Parser + Sized + 'static {
    fn with<F>(self, mapper: F) -> ParserRef
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        parse_with(shared(self), mapper)
    }
}

/// Implement ParseWithExt for all parsers
impl<P> ParseWithExt for P where P: Parser + 'static {}
