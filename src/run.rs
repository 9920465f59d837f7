//! Top-level entry points that run a grammar over some input.

use crate::error::{Error, Result};
use crate::parser::Parser;
use crate::scanner::Scanner;
use crate::value::Value;
use log::debug;
use std::io::Read;

/// Run `parser` on a scanner the caller has set up.
///
/// A failing source wins over whatever the parser concluded, since the
/// parser only saw a truncated input.
pub fn parse_scanner(parser: &dyn Parser, scanner: &mut Scanner<'_>) -> Result<Value> {
    let result = parser.parse(scanner);
    if let Some(error) = scanner.take_source_error() {
        return Err(Error::Source(error));
    }
    match result.into_result() {
        Ok(value) => Ok(value),
        Err(error) => {
            debug!("parse failed: {}", error);
            Err(error.into())
        }
    }
}

/// Parse from the start of `text`. Trailing input is fine unless the
/// grammar ends in [`eof`](crate::eof::eof).
pub fn parse_str(parser: &dyn Parser, text: &str) -> Result<Value> {
    debug!("parsing {} bytes of text", text.len());
    parse_scanner(parser, &mut Scanner::from_text(text))
}

/// Parse UTF-8 text pulled from `reader` as it is needed.
///
/// Only characters read under an open snapshot are kept in memory.
pub fn parse_reader<R: Read>(parser: &dyn Parser, reader: R) -> Result<Value> {
    debug!("parsing from reader");
    parse_scanner(parser, &mut Scanner::from_reader(reader))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::char;
    use crate::eof::eof;
    use crate::error::{ParseError, SourceError};
    use crate::helpers::digits;
    use crate::or::or;
    use crate::sequence::sequence;
    use crate::token::token;
    use std::io::{self, Cursor};

    #[test]
    fn test_parse_str_success() {
        let value = parse_str(&digits(), "123abc").unwrap();
        assert_eq!(value, "123");
    }

    #[test]
    fn test_parse_str_requires_eof_only_when_asked() {
        let parser = sequence([digits(), eof()]);
        let error = parse_str(&parser, "123abc").unwrap_err();
        assert_eq!(error.to_string(), "expected EOF, got 'a' at line 0, col 4");
    }

    #[test]
    fn test_failure_reports_position() {
        let parser = sequence([token("let"), char(' '), digits()]);
        match parse_str(&parser, "let x") {
            Err(Error::Parse(error)) => {
                assert_eq!(error, ParseError {
                    message: "expected a character in the range '0' to '9', got 'x'".to_string(),
                    line: 0,
                    col: 5,
                });
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_or_failure_reports_start() {
        let parser = or([token("yes"), token("no")]);
        let error = parse_str(&parser, "\n  maybe").unwrap_err();
        assert_eq!(error.to_string(), "no parser matched at line 0, col 0");
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let parser = sequence([token("héllo"), char(' '), or([token("wörld"), token("wörd")])]);
        let from_reader = parse_reader(&parser, Cursor::new("héllo wörd".as_bytes())).unwrap();
        let from_str = parse_str(&parser, "héllo wörd").unwrap();
        assert_eq!(from_reader, from_str);
        assert_eq!(from_reader, "héllo wörd");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_source_error_wins() {
        let error = parse_reader(&digits(), FailingReader).unwrap_err();
        match error {
            Error::Source(SourceError::Io(inner)) => {
                assert_eq!(inner.to_string(), "disk on fire");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_a_source_error() {
        let error = parse_reader(&digits(), Cursor::new(vec![b'1', 0xff, b'2'])).unwrap_err();
        assert!(matches!(error, Error::Source(SourceError::Io(_))));
    }
}
