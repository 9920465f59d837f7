use crate::parser::{Parser, ParserRef, shared};
use crate::position::TextRange;
use crate::result::ParseResult;
use crate::scanner::Scanner;
use crate::value::Value;
use std::borrow::Cow;

/// Parser that matches an exact string character by character.
///
/// Stops at the first character that does not match, leaving whatever it
/// read consumed; wrap it in [`maybe`](crate::maybe::maybe) or
/// [`or`](crate::or::or) to try it speculatively.
pub struct Token {
    expected: Cow<'static, str>,
}

impl Token {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Token {
            expected: expected.into(),
        }
    }
}

impl Parser for Token {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        let start = scanner.position();
        let mut seen = String::with_capacity(self.expected.len());

        for expected_char in self.expected.chars() {
            match scanner.read() {
                Ok(c) => {
                    seen.push(c);
                    if c != expected_char {
                        return ParseResult::fail_at(
                            scanner.position(),
                            format!("expected '{}', got '{}'", self.expected, seen),
                        );
                    }
                }
                Err(e) => {
                    return ParseResult::fail_at(
                        scanner.position(),
                        format!("expected '{}', got error {}", self.expected, e),
                    );
                }
            }
        }

        ParseResult::success(TextRange::new(start, scanner.position()), seen)
    }
}

/// Match the exact string given
pub fn token(expected: impl Into<Cow<'static, str>>) -> ParserRef {
    shared(Token::new(expected))
}

/// Match the exact string given, producing `value` instead of the text
pub fn token_as(expected: impl Into<Cow<'static, str>>, value: Value) -> ParserRef {
    crate::parse_with::parse_with(token(expected), move |_| value.clone())
}
