use crate::parser::{Parser, ParserRef, shared};
use crate::position::TextRange;
use crate::result::ParseResult;
use crate::scanner::Scanner;
use crate::value::Value;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Each attempt runs inside a snapshot. The first failing attempt is rewound
/// and ends the loop; it is never reported, so this parser always succeeds.
/// A success that consumes nothing also ends the loop, since repeating it
/// could never make progress.
pub struct Many {
    parser: ParserRef,
    merge: bool,
}

impl Many {
    /// Repeat `parser`, merging the results like a sequence
    pub fn new(parser: ParserRef) -> Self {
        Many {
            parser,
            merge: true,
        }
    }

    /// Repeat `parser`, always producing a list of the results
    pub fn list(parser: ParserRef) -> Self {
        Many {
            parser,
            merge: false,
        }
    }
}

impl Parser for Many {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        let start = scanner.position();
        let mut results = Vec::new();

        loop {
            let before = scanner.position();
            scanner.start_snapshot();
            match self.parser.parse(scanner) {
                ParseResult::Success { value, .. } => {
                    scanner.pop_snapshot();
                    results.push(value);
                    if scanner.position() == before {
                        break;
                    }
                }
                ParseResult::Failure { .. } => {
                    scanner.rewind_snapshot();
                    break;
                }
            }
        }

        let value = if self.merge {
            Value::merge(results)
        } else {
            Value::List(results)
        };
        ParseResult::success(TextRange::new(start, scanner.position()), value)
    }
}

/// Match zero or more times, merging the results
pub fn many(parser: ParserRef) -> ParserRef {
    shared(Many::new(parser))
}

/// Match zero or more times, collecting the results into a list
pub fn list_of(parser: ParserRef) -> ParserRef {
    shared(Many::list(parser))
}

/// Extension trait to add .repeated() and .repeated_list() method support
/// for parsers
pub trait ManyExt: Parser + Sized + 'static {
    fn repeated(self) -> ParserRef {
        many(shared(self))
    }

    fn repeated_list(self) -> ParserRef {
        list_of(shared(self))
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::char;
    use crate::helpers::digit;
    use crate::position::TextPosition;
    use crate::sequence::sequence;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        inner: ParserRef,
        attempts: Arc<AtomicUsize>,
    }

    impl Parser for Counting {
        fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            self.inner.parse(scanner)
        }
    }

    #[test]
    fn test_many_digits() {
        let mut sc = Scanner::from_text("1234x");
        let result = many(digit()).parse(&mut sc);
        assert_eq!(result.value(), Some(&Value::from("1234")));
        assert_eq!(sc.read().unwrap(), 'x');
    }

    #[test]
    fn test_list_of_digits() {
        let mut sc = Scanner::from_text("1234x");
        let result = list_of(digit()).parse(&mut sc);
        assert_eq!(
            result.into_result().unwrap(),
            Value::List(vec!["1".into(), "2".into(), "3".into(), "4".into()])
        );
    }

    #[test]
    fn test_zero_matches() {
        let mut sc = Scanner::from_text("abc");
        let result = many(digit()).parse(&mut sc);
        assert!(result.value().unwrap().is_empty_str());
        assert!(result.range().is_empty());

        let result = list_of(digit()).parse(&mut sc);
        assert_eq!(result.into_result().unwrap(), Value::List(vec![]));
        assert_eq!(sc.position(), TextPosition::start());
    }

    #[test]
    fn test_attempts_are_successes_plus_one() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counting = shared(Counting {
            inner: digit(),
            attempts: Arc::clone(&attempts),
        });

        let mut sc = Scanner::from_text("123ab");
        many(counting).parse(&mut sc);
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_final_probe_is_not_consumed() {
        // The last attempt reads "ab" before failing on 'c'
        let pair = sequence([char('a'), char('b'), char('!')]);
        let mut sc = Scanner::from_text("ab!ab!abc");
        let result = many(pair).parse(&mut sc);
        assert_eq!(result.into_result().unwrap(), "ab!ab!");
        assert_eq!(sc.position(), TextPosition::new(0, 6));
        assert_eq!(sc.read().unwrap(), 'a');
        assert_eq!(sc.depth(), 0);
    }

    #[test]
    fn test_consumes_to_end_of_input() {
        let mut sc = Scanner::from_text("aaaa");
        let result = many(char('a')).parse(&mut sc);
        assert_eq!(result.into_result().unwrap(), "aaaa");
        assert!(sc.read().is_err());
    }

    #[test]
    fn test_zero_width_success_stops() {
        let mut sc = Scanner::from_text("xyz");
        let result = many(crate::maybe::maybe(digit())).parse(&mut sc);
        assert!(result.into_result().unwrap().is_empty_str());
        assert_eq!(sc.position(), TextPosition::start());
    }

    #[test]
    fn test_repeated_methods() {
        let result = digit().repeated().parse(&mut Scanner::from_text("42!"));
        assert_eq!(result.into_result().unwrap(), "42");

        let result = digit().repeated_list().parse(&mut Scanner::from_text("42!"));
        assert_eq!(
            result.into_result().unwrap(),
            Value::List(vec!["4".into(), "2".into()])
        );
    }

    #[test]
    fn test_zero_width_success_is_not_retried() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counting = shared(Counting {
            inner: crate::maybe::maybe(digit()),
            attempts: Arc::clone(&attempts),
        });

        let mut sc = Scanner::from_text("12x");
        let result = many(counting).parse(&mut sc);
        assert_eq!(result.into_result().unwrap(), "12");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        assert_eq!(sc.read().unwrap(), 'x');
    }
}
