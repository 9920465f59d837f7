//! # runecomb - Parser Combinator Library
//!
//! A parser combinator library over a backtracking character scanner.
//!
//! Grammars are assembled from small parsers ([`char`], [`token`], [`eof`])
//! and combinators ([`sequence`], [`or`], [`many`], [`maybe`], [`map`],
//! [`parse_with`], [`lazy`]). Every parser produces a dynamically shaped
//! [`Value`]: merged text, a list, a map of named fields, or a custom value.
//!
//! Input is read through a [`Scanner`], which tracks line and column and lets
//! combinators take nested snapshots to rewind to. It can sit on in-memory
//! text or on a forward-only stream; in the latter case only the characters
//! read while a snapshot is open are kept around.
//!
//! ```
//! use runecomb::{MaybeExt, char, digits, parse_str, sequence};
//!
//! let number = sequence([char('-').optional(), digits()]);
//! assert_eq!(parse_str(&number, "-42").unwrap(), "-42");
//!
//! let error = parse_str(&number, "x").unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     "expected a character in the range '0' to '9', got 'x' at line 0, col 1"
//! );
//! ```

pub mod character;
pub mod eof;
pub mod error;
pub mod helpers;
pub mod ignore;
pub mod lazy;
pub mod many;
pub mod map;
pub mod maybe;
pub mod or;
pub mod parse_with;
pub mod parser;
pub mod position;
pub mod result;
pub mod run;
pub mod scanner;
pub mod sequence;
pub mod source;
pub mod sources;
pub mod token;
pub mod value;

pub use character::{
    CharRange, CharSet, any_char, any_char_in, any_char_not_in, char, char_range, none_of,
};
pub use eof::{Eof, eof};
pub use error::{Error, ParseError, Result, SourceError};
pub use helpers::{
    alpha_num, digit, digits, letter, lower_letter, many_sep_by, many1, many1_sep_by, surround,
    upper_letter, whitespace,
};
pub use ignore::{Ignore, IgnoreExt, ignore};
pub use lazy::{Lazy, lazy};
pub use many::{Many, ManyExt, list_of, many};
pub use map::{MapParser, Named, map};
pub use maybe::{Maybe, MaybeExt, maybe};
pub use or::{Or, OrExt, or};
pub use parse_with::{ParseWith, ParseWithExt, parse_with};
pub use parser::{Parser, ParserRef, shared};
pub use position::{TextPosition, TextRange};
pub use result::ParseResult;
pub use run::{parse_reader, parse_scanner, parse_str};
pub use scanner::{ReadError, Scanner};
pub use sequence::{Sequence, SequenceExt, sequence};
pub use source::BacktrackingSource;
pub use sources::{StreamSource, TextSource, Utf8Chars};
pub use token::{Token, token, token_as};
pub use value::{Fields, Value};
