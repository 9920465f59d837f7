use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Named results collected by a [`map`](crate::map::map) parser
pub type Fields = BTreeMap<String, Value>;

/// The value produced by a successful parse.
///
/// Leaf parsers produce strings, repetition and sequencing produce strings or
/// lists, named mapping produces whatever its combine function returns, and
/// callers can stash any type of their own in [`Value::Custom`].
///
/// The empty string is the neutral value: it is what [`maybe`](crate::maybe::maybe)
/// and [`ignore`](crate::ignore::ignore) produce, and it disappears when a
/// sequence of strings is merged.
#[derive(Clone)]
pub enum Value {
    Str(String),
    List(Vec<Value>),
    Map(Fields),
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// The neutral value
    pub fn empty() -> Self {
        Value::Str(String::new())
    }

    /// Wrap a caller-defined value
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }

    pub fn is_empty_str(&self) -> bool {
        matches!(self, Value::Str(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            Value::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// Borrow a custom value as `T`, if that is what it holds
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(inner) => inner.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Merge the ordered results of a sequence.
    ///
    /// If every result is a string they are concatenated (empty strings
    /// contribute nothing); otherwise the results are returned unchanged as a
    /// list.
    pub fn merge(results: Vec<Value>) -> Value {
        if results.iter().all(|v| matches!(v, Value::Str(_))) {
            let joined = results
                .into_iter()
                .filter_map(Value::into_string)
                .collect::<String>();
            Value::Str(joined)
        } else {
            Value::List(results)
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::empty()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Value::Map(fields)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Map(fields) => f.debug_map().entries(fields).finish(),
            Value::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Custom values compare by identity since their type is opaque here
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
