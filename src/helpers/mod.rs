//! Ready-made parsers built purely out of the core combinators.

pub mod separated;

use crate::character::{any_char_in, char_range};
use crate::many::many;
use crate::or::or;
use crate::parser::ParserRef;
use crate::sequence::sequence;

pub use separated::{many1_sep_by, many_sep_by, surround};

/// Parse a single ASCII digit
pub fn digit() -> ParserRef {
    char_range('0', '9')
}

/// Parse a single lower case ASCII letter
pub fn lower_letter() -> ParserRef {
    char_range('a', 'z')
}

/// Parse a single upper case ASCII letter
pub fn upper_letter() -> ParserRef {
    char_range('A', 'Z')
}

/// Parse a single ASCII letter of either case
pub fn letter() -> ParserRef {
    or([lower_letter(), upper_letter()])
}

/// Parse a single ASCII letter or digit
pub fn alpha_num() -> ParserRef {
    or([lower_letter(), upper_letter(), digit()])
}

/// Match one or more times, merging the results
pub fn many1(parser: ParserRef) -> ParserRef {
    sequence([parser.clone(), many(parser)])
}

/// Parse one or more ASCII digits
pub fn digits() -> ParserRef {
    many1(digit())
}

/// Parse zero or more spaces, tabs, carriage returns or newlines
pub fn whitespace() -> ParserRef {
    many(any_char_in(" \t\r\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::TextPosition;
    use crate::result::ParseResult;
    use crate::scanner::Scanner;
    use rstest::rstest;

    fn run(parser: ParserRef, input: &str) -> ParseResult {
        parser.parse(&mut Scanner::from_text(input))
    }

    #[rstest]
    #[case(digit(), "8", true)]
    #[case(digit(), "x", false)]
    #[case(lower_letter(), "x", true)]
    #[case(lower_letter(), "X", false)]
    #[case(upper_letter(), "X", true)]
    #[case(upper_letter(), "x", false)]
    #[case(letter(), "q", true)]
    #[case(letter(), "Q", true)]
    #[case(letter(), "1", false)]
    #[case(alpha_num(), "z", true)]
    #[case(alpha_num(), "Z", true)]
    #[case(alpha_num(), "0", true)]
    #[case(alpha_num(), "_", false)]
    fn test_character_classes(
        #[case] parser: ParserRef,
        #[case] input: &str,
        #[case] matches: bool,
    ) {
        assert_eq!(run(parser, input).matched(), matches);
    }

    #[test]
    fn test_many1() {
        let result = run(many1(digit()), "56789xxx");
        assert_eq!(result.into_result().unwrap(), "56789");

        assert!(!run(many1(digit()), "xxx").matched());
    }

    #[test]
    fn test_digits() {
        let mut sc = Scanner::from_text("007bond");
        let result = digits().parse(&mut sc);
        assert_eq!(result.into_result().unwrap(), "007");
        assert_eq!(sc.read().unwrap(), 'b');
    }

    #[test]
    fn test_whitespace() {
        let mut sc = Scanner::from_text(" \t\r\n  x");
        let result = whitespace().parse(&mut sc);
        assert_eq!(result.into_result().unwrap(), " \t\r\n  ");
        assert_eq!(sc.position(), TextPosition::new(1, 2));

        let result = run(whitespace(), "x");
        assert!(result.matched());
        assert!(result.range().is_empty());
    }
}
