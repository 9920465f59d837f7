use crate::error::SourceError;

/// A forward-only supply of characters that can record what it hands out.
///
/// The [`Scanner`](crate::scanner::Scanner) turns recording on when the first
/// snapshot is taken and off when the last one is released; while recording,
/// everything returned by [`read`](BacktrackingSource::read) must stay
/// available through [`read_buffer`](BacktrackingSource::read_buffer) so the
/// scanner can replay it after a rewind.
///
/// Offsets into the recorded window are logical: offset 0 is the first
/// character read after [`start_buffer`](BacktrackingSource::start_buffer).
pub trait BacktrackingSource {
    /// Get the next character, appending it to the recording if one is active
    fn read(&mut self) -> Result<char, SourceError>;

    /// Begin recording at the current cursor. Does nothing if already recording.
    fn start_buffer(&mut self);

    /// Get a recorded character by its logical offset
    ///
    /// # Panics
    ///
    /// Panics if `offset` is outside the recorded window.
    fn read_buffer(&self, offset: usize) -> char;

    /// Number of characters currently recorded
    fn buf_size(&self) -> usize;

    /// Stop recording and discard the recorded window
    fn drop_buffer(&mut self);
}

impl<S: BacktrackingSource + ?Sized> BacktrackingSource for Box<S> {
    fn read(&mut self) -> Result<char, SourceError> {
        (**self).read()
    }

    fn start_buffer(&mut self) {
        (**self).start_buffer()
    }

    fn read_buffer(&self, offset: usize) -> char {
        (**self).read_buffer(offset)
    }

    fn buf_size(&self) -> usize {
        (**self).buf_size()
    }

    fn drop_buffer(&mut self) {
        (**self).drop_buffer()
    }
}
