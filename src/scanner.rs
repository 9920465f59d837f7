//! Position-tracking reader with nested, rewindable snapshots.
//!
//! The scanner sits on a [`BacktrackingSource`] that can only move forward.
//! Taking the first snapshot switches the source into recording mode; every
//! character read from then on is retained. Rewinding a snapshot restores the
//! position saved with it and moves the scanner into *replay* mode, where
//! reads are served from the recording until it runs out, after which reads
//! go back to the source. Once the last snapshot is released and nothing is
//! left to replay, the recording is dropped, so memory is only spent while
//! speculation is in flight.
//!
//! Snapshot offsets are logical offsets into the recording. A snapshot taken
//! while replaying anchors at the replay offset, not at the end of the
//! recording, which is what lets an inner rewind leave an outer snapshot's
//! rewind intact.

use crate::error::SourceError;
use crate::position::TextPosition;
use crate::source::BacktrackingSource;
use crate::sources::{StreamSource, TextSource, Utf8Chars};
use log::{debug, trace};
use std::fmt;
use std::io::{self, BufReader, Read};

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    buffer_offset: usize,
    position: TextPosition,
}

/// Why [`Scanner::read`] did not return a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    EndOfInput,
    /// The source failed; the error itself is kept by the scanner
    SourceFailed,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::EndOfInput => write!(f, "Reached end of input"),
            ReadError::SourceFailed => write!(f, "input source failed"),
        }
    }
}

impl std::error::Error for ReadError {}

pub struct Scanner<'src> {
    source: Box<dyn BacktrackingSource + 'src>,
    position: TextPosition,
    snapshots: Vec<Snapshot>,
    /// `Some(offset)` while replaying recorded characters
    replay: Option<usize>,
    source_error: Option<SourceError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: impl BacktrackingSource + 'src) -> Self {
        Scanner {
            source: Box::new(source),
            position: TextPosition::start(),
            snapshots: Vec::new(),
            replay: None,
            source_error: None,
        }
    }

    /// Scan text that is already in memory
    pub fn from_text(text: &str) -> Self {
        Scanner::new(TextSource::new(text))
    }

    /// Scan a forward-only stream of characters
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: Iterator<Item = io::Result<char>> + 'src,
    {
        Scanner::new(StreamSource::new(chars))
    }

    /// Scan UTF-8 text from a reader, decoding it as it is consumed
    pub fn from_reader<R: Read + 'src>(reader: R) -> Self {
        Scanner::from_chars(Utf8Chars::new(BufReader::new(reader)))
    }

    /// Read the next character, advancing the position
    pub fn read(&mut self) -> Result<char, ReadError> {
        if let Some(offset) = self.replay {
            if offset < self.source.buf_size() {
                let c = self.source.read_buffer(offset);
                self.replay = Some(offset + 1);
                self.position = self.position.advance(c);
                return Ok(c);
            }
            self.finish_replay();
        }

        match self.source.read() {
            Ok(c) => {
                self.position = self.position.advance(c);
                Ok(c)
            }
            Err(SourceError::EndOfInput) => Err(ReadError::EndOfInput),
            Err(error) => {
                debug!("source failed at {}: {}", self.position, error);
                if self.source_error.is_none() {
                    self.source_error = Some(error);
                }
                Err(ReadError::SourceFailed)
            }
        }
    }

    /// The position of the next character [`read`](Scanner::read) will return
    pub fn position(&self) -> TextPosition {
        self.position
    }

    /// Save the current state so it can be rewound to later
    pub fn start_snapshot(&mut self) {
        if self.snapshots.is_empty() {
            self.source.start_buffer();
        }
        let buffer_offset = match self.replay {
            Some(offset) => offset,
            None => self.source.buf_size(),
        };
        self.snapshots.push(Snapshot {
            buffer_offset,
            position: self.position,
        });
        trace!(
            "start snapshot {} at {} (buffer offset {})",
            self.snapshots.len(),
            self.position,
            buffer_offset
        );
    }

    /// Return to the state saved by the most recent snapshot and release it.
    /// Everything read since will be read again.
    ///
    /// # Panics
    ///
    /// Panics if there is no outstanding snapshot.
    pub fn rewind_snapshot(&mut self) {
        let depth = self.snapshots.len();
        let Some(snapshot) = self.snapshots.pop() else {
            panic!("bug: rewinding to a snapshot that was never started");
        };
        trace!(
            "rewind snapshot {} from {} to {} (buffer offset {})",
            depth, self.position, snapshot.position, snapshot.buffer_offset
        );
        self.position = snapshot.position;
        self.replay = Some(snapshot.buffer_offset);
        if snapshot.buffer_offset >= self.source.buf_size() {
            self.finish_replay();
        }
    }

    /// Release the most recent snapshot, keeping everything read since.
    ///
    /// # Panics
    ///
    /// Panics if there is no outstanding snapshot.
    pub fn pop_snapshot(&mut self) {
        let depth = self.snapshots.len();
        if self.snapshots.pop().is_none() {
            panic!("bug: popped a snapshot that was never started");
        }
        trace!("pop snapshot {} at {}", depth, self.position);
        if self.snapshots.is_empty() && self.replay.is_none() {
            self.release_buffer();
        }
    }

    /// Number of outstanding snapshots
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    /// Take the first non end-of-input failure reported by the source, if any
    pub fn take_source_error(&mut self) -> Option<SourceError> {
        self.source_error.take()
    }

    fn finish_replay(&mut self) {
        self.replay = None;
        if self.snapshots.is_empty() {
            self.release_buffer();
        }
    }

    fn release_buffer(&mut self) {
        debug!(
            "dropping {} buffered characters at {}",
            self.source.buf_size(),
            self.position
        );
        self.source.drop_buffer();
    }
}

impl fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("depth", &self.snapshots.len())
            .field("replay", &self.replay)
            .field("buffered", &self.source.buf_size())
            .finish()
    }
}
