use crate::parser::{Parser, ParserRef, shared};
use crate::position::TextRange;
use crate::result::ParseResult;
use crate::scanner::Scanner;
use crate::value::Value;

/// Parser combinator that matches zero or one occurrence of the given parser
///
/// If the inner parser fails, its input is rewound and an empty success is
/// returned at the current position. `Maybe` never fails.
pub struct Maybe {
    parser: ParserRef,
}

impl Maybe {
    pub fn new(parser: ParserRef) -> Self {
        Maybe { parser }
    }
}

impl Parser for Maybe {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        scanner.start_snapshot();
        let result = self.parser.parse(scanner);
        if result.matched() {
            scanner.pop_snapshot();
            return result;
        }
        scanner.rewind_snapshot();
        ParseResult::success(TextRange::single(scanner.position()), Value::empty())
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe(parser: ParserRef) -> ParserRef {
    shared(Maybe::new(parser))
}

/// Extension trait to add .optional() method support for parsers
pub trait MaybeExt: Parser + Sized + 'static {
    fn optional(self) -> ParserRef {
        maybe(shared(self))
    }
}

/// Implement MaybeExt for all parsers
impl<P> MaybeExt for P where P: Parser + 'static {}
