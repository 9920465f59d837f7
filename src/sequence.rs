use crate::parser::{Parser, ParserRef, shared};
use crate::position::TextRange;
use crate::result::ParseResult;
use crate::scanner::Scanner;
use crate::value::Value;

/// Parser combinator that runs parsers one after the other
///
/// The first failure is returned as is. On success the range spans from where
/// the first parser started to where the last one ended, and the values are
/// combined with [`Value::merge`]: a run of strings becomes one string,
/// anything else becomes the list of every result.
///
/// Example:
/// ```
/// use runecomb::{char, digits, maybe, parse_str, sequence};
///
/// let number = sequence([digits(), maybe(sequence([char('.'), digits()]))]);
/// assert_eq!(parse_str(&number, "1234.567").unwrap(), "1234.567");
/// ```
pub struct Sequence {
    parsers: Vec<ParserRef>,
}

impl Sequence {
    pub fn new(parsers: Vec<ParserRef>) -> Self {
        Sequence { parsers }
    }
}

impl Parser for Sequence {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        let start = scanner.position();
        let mut end = start;
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(scanner) {
                ParseResult::Success { range, value } => {
                    end = range.end;
                    results.push(value);
                }
                failure => return failure,
            }
        }

        ParseResult::success(TextRange::new(start, end), Value::merge(results))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence(parsers: impl IntoIterator<Item = ParserRef>) -> ParserRef {
    shared(Sequence::new(parsers.into_iter().collect()))
}

/// Extension trait to add .then() method support for parsers
pub trait SequenceExt: Parser + Sized + 'static {
    fn then(self, other: ParserRef) -> ParserRef {
        sequence([shared(self), other])
    }
}

/// Implement SequenceExt for all parsers
impl<P> SequenceExt for P where P: Parser + 'static {}
