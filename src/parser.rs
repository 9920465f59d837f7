use crate::result::ParseResult;
use crate::scanner::Scanner;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// Parsers hold only their construction-time configuration, so one grammar
/// can be shared between threads and reused for any number of parses, as long
/// as every parse gets its own [`Scanner`].
pub trait Parser: Send + Sync {
    /// Attempt to parse from the scanner's current position
    ///
    /// A parser that can fail after consuming input is free to leave the
    /// scanner wherever it stopped; callers that need to try something else
    /// wrap the call in a snapshot.
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult;
}

/// Shared handle to a parser, the unit combinators are built from
pub type ParserRef = Arc<dyn Parser>;

/// Turn any parser into a [`ParserRef`]
pub fn shared<P: Parser + 'static>(parser: P) -> ParserRef {
    Arc::new(parser)
}

/// A shared handle parses exactly like the parser it points to, so a
/// [`ParserRef`] can be passed wherever a `&dyn Parser` is expected.
impl<P: Parser + ?Sized> Parser for Arc<P> {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        (**self).parse(scanner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::char;
    use crate::position::TextRange;
    use crate::value::Value;

    struct Always;

    impl Parser for Always {
        fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
            ParseResult::success(TextRange::single(scanner.position()), "ok")
        }
    }

    #[test]
    fn test_shared_custom_parser() {
        let always = shared(Always);
        let mut sc = Scanner::from_text("");
        assert_eq!(always.parse(&mut sc).value().unwrap(), &Value::from("ok"));
    }

    fn run_dyn(parser: &dyn Parser, input: &str) -> ParseResult {
        parser.parse(&mut Scanner::from_text(input))
    }

    #[test]
    fn test_parser_ref_as_dyn_parser() {
        let parser: ParserRef = char('a');
        let result = run_dyn(&parser, "a");
        assert_eq!(result.into_result().unwrap(), "a");

        let result = run_dyn(&parser, "b");
        assert_eq!(result.error().unwrap().message, "expected 'a', got 'b'");
    }

    #[test]
    fn test_nested_handle_delegates() {
        let inner = shared(Always);
        let outer = shared(Arc::clone(&inner));
        let result = outer.parse(&mut Scanner::from_text(""));
        assert_eq!(result.value(), Some(&Value::from("ok")));
    }
}
