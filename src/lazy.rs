use crate::parser::{Parser, ParserRef, shared};
use crate::result::ParseResult;
use crate::scanner::Scanner;
use once_cell::sync::OnceCell;

/// A lazy parser that defers the construction of the actual parser until it
/// is first used, then keeps it.
/// This is what makes self-referential grammars possible: building the
/// grammar eagerly would recurse forever.
pub struct Lazy<F> {
    factory: F,
    parser: OnceCell<ParserRef>,
}

impl<F> Lazy<F>
where
    F: Fn() -> ParserRef,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Lazy {
            factory,
            parser: OnceCell::new(),
        }
    }

    fn resolve(&self) -> &ParserRef {
        self.parser.get_or_init(|| (self.factory)())
    }
}

impl<F> Parser for Lazy<F>
where
    F: Fn() -> ParserRef + Send + Sync,
{
    fn parse(&self, scanner: &mut Scanner<'_>) -> ParseResult {
        self.resolve().parse(scanner)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F>(factory: F) -> ParserRef
where
    F: Fn() -> ParserRef + Send + Sync + 'static,
{
    shared(Lazy::new(factory))
}
