use crate::parser::{Parser, ParserRef, shared};
use crate::position::TextRange;
use crate::result::ParseResult;
use crate::scanner::Scanner;
use std::collections::BTreeSet;

/// Parser that matches a single character in an inclusive range
pub struct CharRange {
    min: char,
    max: char,
}

impl CharRange {
    pub fn new(min: char, max: char) -> Self {
        CharRange { min, max }
    }
}

impl Parser for CharRange {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        let start = scanner.position();
        let c = match scanner.read() {
            Ok(c) => c,
            Err(e) => {
                return ParseResult::fail_at(
                    scanner.position(),
                    format!("expected a character, got error {}", e),
                );
            }
        };
        if c < self.min || c > self.max {
            let message = if self.min == self.max {
                format!("expected '{}', got '{}'", self.min, c)
            } else {
                format!(
                    "expected a character in the range '{}' to '{}', got '{}'",
                    self.min, self.max, c
                )
            };
            return ParseResult::fail_at(scanner.position(), message);
        }
        ParseResult::success(TextRange::new(start, scanner.position()), c)
    }
}

/// Match exactly the given character
pub fn char(c: char) -> ParserRef {
    shared(CharRange::new(c, c))
}

/// Match any character from `min` to `max`, both inclusive
pub fn char_range(min: char, max: char) -> ParserRef {
    shared(CharRange::new(min, max))
}

/// Parser that matches a single character that is (or is not) in a set
pub struct CharSet {
    chars: BTreeSet<char>,
    invert: bool,
}

impl CharSet {
    pub fn new(chars: impl IntoIterator<Item = char>, invert: bool) -> Self {
        CharSet {
            chars: chars.into_iter().collect(),
            invert,
        }
    }

    fn describe(&self) -> String {
        let listed: String = self.chars.iter().collect();
        if self.invert {
            format!("none of {:?}", listed)
        } else {
            format!("one of {:?}", listed)
        }
    }
}

impl Parser for CharSet {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        let start = scanner.position();
        let c = match scanner.read() {
            Ok(c) => c,
            Err(e) => {
                return ParseResult::fail_at(
                    scanner.position(),
                    format!("expected a character, got error {}", e),
                );
            }
        };
        if self.chars.contains(&c) == self.invert {
            return ParseResult::fail_at(
                scanner.position(),
                format!("expected {}, got '{}'", self.describe(), c),
            );
        }
        ParseResult::success(TextRange::new(start, scanner.position()), c)
    }
}

/// Match any one of the given characters
pub fn any_char(chars: impl IntoIterator<Item = char>) -> ParserRef {
    shared(CharSet::new(chars, false))
}

/// Match any character except the given ones
pub fn none_of(chars: impl IntoIterator<Item = char>) -> ParserRef {
    shared(CharSet::new(chars, true))
}

/// Match any one of the characters in `chars`
pub fn any_char_in(chars: &str) -> ParserRef {
    any_char(chars.chars())
}

/// Match any character that does not appear in `chars`
pub fn any_char_not_in(chars: &str) -> ParserRef {
    none_of(chars.chars())
}
