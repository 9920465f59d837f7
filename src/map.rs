use crate::parser::{Parser, ParserRef, shared};
use crate::position::TextRange;
use crate::result::ParseResult;
use crate::scanner::Scanner;
use crate::value::{Fields, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// One step of a [`map`] parser. Steps with an empty name still have to
/// match, but their values are left out of the fields.
#[derive(Clone)]
pub struct Named {
    pub name: Cow<'static, str>,
    pub parser: ParserRef,
}

impl Named {
    pub fn new(name: impl Into<Cow<'static, str>>, parser: ParserRef) -> Self {
        Named {
            name: name.into(),
            parser,
        }
    }

    /// A step that must match but whose value is discarded
    pub fn skip(parser: ParserRef) -> Self {
        Named::new("", parser)
    }
}

impl<N: Into<Cow<'static, str>>> From<(N, ParserRef)> for Named {
    fn from((name, parser): (N, ParserRef)) -> Self {
        Named::new(name, parser)
    }
}

type Combine = Arc<dyn Fn(Fields) -> Value + Send + Sync>;

/// Parser combinator that runs named steps in sequence and hands their values,
/// keyed by name, to a combine function
pub struct MapParser {
    steps: Vec<Named>,
    combine: Combine,
}

impl MapParser {
    pub fn new<F>(steps: Vec<Named>, combine: F) -> Self
    where
        F: Fn(Fields) -> Value + Send + Sync + 'static,
    {
        MapParser {
            steps,
            combine: Arc::new(combine),
        }
    }
}

impl Parser for MapParser {
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        let start = scanner.position();
        let mut fields = Fields::new();

        for step in &self.steps {
            match step.parser.parse(scanner) {
                ParseResult::Success { value, .. } => {
                    if !step.name.is_empty() {
                        fields.insert(step.name.to_string(), value);
                    }
                }
                failure => return failure,
            }
        }

        ParseResult::success(
            TextRange::new(start, scanner.position()),
            (self.combine)(fields),
        )
    }
}

/// Convenience function to create a MapParser
///
/// Example:
/// ```
/// use runecomb::{Value, char, digits, map, parse_str};
///
/// let pair = map(
///     [("key", digits()), ("", char(':')), ("value", digits())],
///     |mut fields| {
///         let key = fields.remove("key").unwrap_or_default();
///         let value = fields.remove("value").unwrap_or_default();
///         Value::List(vec![key, value])
///     },
/// );
/// let parsed = parse_str(&pair, "12:34").unwrap();
/// assert_eq!(parsed, Value::List(vec!["12".into(), "34".into()]));
/// ```
pub fn map<S, F>(steps: impl IntoIterator<Item = S>, combine: F) -> ParserRef
where
    S: Into<Named>,
    F: Fn(Fields) -> Value + Send + Sync + 'static,
{
    shared(MapParser::new(
        steps.into_iter().map(Into::into).collect(),
        combine,
    ))
}
