use std::io::{self, Bytes, Read};

/// Decodes a byte reader into characters, one at a time, without reading
/// ahead of the character being produced.
///
/// Malformed input yields a single `InvalidData` error, after which the
/// iterator is exhausted.
pub struct Utf8Chars<R> {
    bytes: Bytes<R>,
    offset: usize,
    failed: bool,
}

impl<R: Read> Utf8Chars<R> {
    pub fn new(reader: R) -> Self {
        Utf8Chars {
            bytes: reader.bytes(),
            offset: 0,
            failed: false,
        }
    }

    fn invalid(&self, start: usize, message: &str) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} at byte offset {}", message, start),
        )
    }

    fn next_byte(&mut self) -> Option<io::Result<u8>> {
        let byte = self.bytes.next()?;
        if byte.is_ok() {
            self.offset += 1;
        }
        Some(byte)
    }

    fn continuation(&mut self, start: usize) -> io::Result<u32> {
        match self.next_byte() {
            Some(Ok(b)) if (b & 0xC0) == 0x80 => Ok(b as u32 & 0x3F),
            Some(Ok(_)) => Err(self.invalid(start, "invalid UTF-8 continuation byte")),
            Some(Err(e)) => Err(e),
            None => Err(self.invalid(start, "incomplete UTF-8 sequence")),
        }
    }

    fn decode(&mut self, b1: u8, start: usize) -> io::Result<char> {
        let codepoint = if b1 < 0x80 {
            return Ok(b1 as char);
        } else if b1 < 0xC0 {
            return Err(self.invalid(start, "invalid UTF-8 start byte"));
        } else if b1 < 0xE0 {
            // 110xxxxx 10xxxxxx
            let cp = ((b1 as u32 & 0x1F) << 6) | self.continuation(start)?;
            if cp < 0x80 {
                return Err(self.invalid(start, "overlong UTF-8 encoding"));
            }
            cp
        } else if b1 < 0xF0 {
            // 1110xxxx 10xxxxxx 10xxxxxx
            let b2 = self.continuation(start)?;
            let b3 = self.continuation(start)?;
            let cp = ((b1 as u32 & 0x0F) << 12) | (b2 << 6) | b3;
            if cp < 0x800 {
                return Err(self.invalid(start, "overlong UTF-8 encoding"));
            }
            if (0xD800..=0xDFFF).contains(&cp) {
                return Err(self.invalid(start, "UTF-16 surrogate in UTF-8"));
            }
            cp
        } else if b1 < 0xF8 {
            // 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
            let b2 = self.continuation(start)?;
            let b3 = self.continuation(start)?;
            let b4 = self.continuation(start)?;
            let cp = ((b1 as u32 & 0x07) << 18) | (b2 << 12) | (b3 << 6) | b4;
            if cp < 0x10000 {
                return Err(self.invalid(start, "overlong UTF-8 encoding"));
            }
            if cp > 0x10FFFF {
                return Err(self.invalid(start, "codepoint beyond Unicode range"));
            }
            cp
        } else {
            return Err(self.invalid(start, "invalid UTF-8 start byte"));
        };

        char::from_u32(codepoint).ok_or_else(|| {
            self.invalid(
                start,
                &format!("invalid Unicode codepoint: U+{:04X}", codepoint),
            )
        })
    }
}

impl<R: Read> Iterator for Utf8Chars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let start = self.offset;
        let decoded = match self.next_byte()? {
            Ok(b1) => self.decode(b1, start),
            Err(e) => Err(e),
        };
        if decoded.is_err() {
            self.failed = true;
        }
        Some(decoded)
    }
}
