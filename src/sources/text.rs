use crate::error::SourceError;
use crate::source::BacktrackingSource;

/// A source over text that is fully resident in memory.
///
/// The whole input is kept anyway, so recording only remembers where the
/// window starts.
#[derive(Debug, Clone)]
pub struct TextSource {
    chars: Vec<char>,
    position: usize,
    record_offset: usize,
    recording: bool,
}

impl TextSource {
    pub fn new(text: &str) -> Self {
        TextSource {
            chars: text.chars().collect(),
            position: 0,
            record_offset: 0,
            recording: false,
        }
    }

    /// Number of characters handed out so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl BacktrackingSource for TextSource {
    fn read(&mut self) -> Result<char, SourceError> {
        let c = *self
            .chars
            .get(self.position)
            .ok_or(SourceError::EndOfInput)?;
        self.position += 1;
        Ok(c)
    }

    fn start_buffer(&mut self) {
        if !self.recording {
            self.record_offset = self.position;
            self.recording = true;
        }
    }

    fn read_buffer(&self, offset: usize) -> char {
        assert!(
            offset < self.buf_size(),
            "bug: buffer offset {} outside recorded window of {}",
            offset,
            self.buf_size()
        );
        self.chars[self.record_offset + offset]
    }

    fn buf_size(&self) -> usize {
        if self.recording {
            self.position - self.record_offset
        } else {
            0
        }
    }

    fn drop_buffer(&mut self) {
        self.record_offset = 0;
        self.recording = false;
    }
}
