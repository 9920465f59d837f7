use crate::many::list_of;
use crate::map::{Named, map};
use crate::maybe::maybe;
use crate::parse_with::parse_with;
use crate::parser::ParserRef;
use crate::sequence::sequence;
use crate::value::Value;

/// Parser that matches one or more items separated by a separator
///
/// Always produces a list of the item values; separators are dropped.
/// A trailing separator is left unconsumed.
///
/// # Examples
/// - `"a,b,c"` with separator `,` gives `["a", "b", "c"]`
/// - `"a,"` with separator `,` gives `["a"]`, with `","` left to read
pub fn many1_sep_by(item: ParserRef, separator: ParserRef) -> ParserRef {
    let rest = list_of(map(
        [Named::skip(separator), Named::new("item", item.clone())],
        |mut fields| fields.remove("item").unwrap_or_default(),
    ));
    parse_with(sequence([item, rest]), |value| match value {
        Value::List(mut parts) => {
            let rest = parts.pop().and_then(Value::into_list).unwrap_or_default();
            parts.extend(rest);
            Value::List(parts)
        }
        single => Value::List(vec![single]),
    })
}

/// Parser that matches zero or more items separated by a separator
///
/// Like [`many1_sep_by`], but an empty match still produces an (empty) list.
pub fn many_sep_by(item: ParserRef, separator: ParserRef) -> ParserRef {
    parse_with(maybe(many1_sep_by(item, separator)), |value| match value {
        Value::List(items) => Value::List(items),
        _ => Value::List(Vec::new()),
    })
}

/// Parser that matches content between opening and closing delimiters,
/// producing only the content's value
pub fn surround(open: ParserRef, content: ParserRef, close: ParserRef) -> ParserRef {
    map(
        [
            Named::skip(open),
            Named::new("content", content),
            Named::skip(close),
        ],
        |mut fields| fields.remove("content").unwrap_or_default(),
    )
}
