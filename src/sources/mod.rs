pub mod stream;
pub mod text;
pub mod utf8;

pub use stream::StreamSource;
pub use text::TextSource;
pub use utf8::Utf8Chars;
