use crate::error::SourceError;
use crate::source::BacktrackingSource;
use std::io;

/// A source over a genuinely forward-only stream of characters.
///
/// Nothing read outside a recording is kept; inside one, every character is
/// retained because the underlying stream cannot deliver it a second time.
#[derive(Debug)]
pub struct StreamSource<I> {
    chars: I,
    buffer: Vec<char>,
    recording: bool,
}

impl<I> StreamSource<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    pub fn new(chars: I) -> Self {
        StreamSource {
            chars,
            buffer: Vec::new(),
            recording: false,
        }
    }
}

impl<I> BacktrackingSource for StreamSource<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    fn read(&mut self) -> Result<char, SourceError> {
        let c = self.chars.next().ok_or(SourceError::EndOfInput)??;
        if self.recording {
            self.buffer.push(c);
        }
        Ok(c)
    }

    fn start_buffer(&mut self) {
        self.recording = true;
    }

    fn read_buffer(&self, offset: usize) -> char {
        assert!(
            offset < self.buffer.len(),
            "bug: buffer offset {} outside recorded window of {}",
            offset,
            self.buffer.len()
        );
        self.buffer[offset]
    }

    fn buf_size(&self) -> usize {
        self.buffer.len()
    }

    fn drop_buffer(&mut self) {
        self.buffer.clear();
        self.recording = false;
    }
}
