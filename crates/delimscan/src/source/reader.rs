use std::io::{self, Read, Seek, SeekFrom};

use crate::{error::SourceError, source::CharSource};

const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;
// Longest UTF-8 encoding of a scalar value.
const MAX_CHAR_LEN: usize = 4;

/// A [`CharSource`] that decodes UTF-8 from a seekable byte stream.
///
/// Bytes are pulled from the reader in chunks into a read-ahead window.
/// Positions are absolute byte offsets in the stream. Seeking inside the
/// window just moves the cursor; seeking anywhere else drops the window and
/// seeks the reader, so nothing decoded from the old cursor survives.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
    window: Vec<u8>,
    // Index of the next unread byte in `window`.
    head: usize,
    // Stream offset of `window[0]`.
    base: u64,
    chunk_size: usize,
    eof: bool,
}

impl<R: Read + Seek> ReaderSource<R> {
    /// Wraps `inner`, starting at its current stream position.
    ///
    /// # Errors
    ///
    /// Fails if the stream position cannot be queried.
    pub fn new(inner: R) -> Result<Self, SourceError> {
        Self::with_chunk_size(inner, DEFAULT_CHUNK_SIZE)
    }

    /// Like [`new`](Self::new), reading at most `chunk_size` bytes from the
    /// reader at a time (at least one).
    ///
    /// # Errors
    ///
    /// Fails if the stream position cannot be queried.
    pub fn with_chunk_size(mut inner: R, chunk_size: usize) -> Result<Self, SourceError> {
        let base = inner.stream_position()?;
        Ok(Self {
            inner,
            window: Vec::new(),
            head: 0,
            base,
            chunk_size: chunk_size.max(1),
            eof: false,
        })
    }

    /// The wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the reader. Its stream position is wherever read-ahead left
    /// it, not [`position`](CharSource::position).
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn buffered(&self) -> &[u8] {
        &self.window[self.head..]
    }

    /// Tops the window up until a whole character is available or the
    /// reader is exhausted.
    fn fill(&mut self) -> io::Result<()> {
        while !self.eof && self.buffered().len() < MAX_CHAR_LEN {
            if self.head > 0 {
                self.window.drain(..self.head);
                self.base += self.head as u64;
                self.head = 0;
            }
            let filled = self.window.len();
            self.window.resize(filled + self.chunk_size, 0);
            let read = loop {
                match self.inner.read(&mut self.window[filled..]) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => {
                        self.window.truncate(filled);
                        return Err(e);
                    }
                }
            };
            self.window.truncate(filled + read);
            self.eof = read == 0;
        }
        Ok(())
    }
}

impl<R: Read + Seek> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Result<Option<char>, SourceError> {
        self.fill()?;
        let bytes = self.buffered();
        let Some(&first) = bytes.first() else {
            return Ok(None);
        };
        let position = self.position();
        if (0x80..=0xBF).contains(&first) {
            return Err(SourceError::Misaligned(position));
        }
        match bstr::decode_utf8(bytes) {
            (Some(ch), len) => {
                self.head += len;
                Ok(Some(ch))
            }
            (None, _) => Err(SourceError::InvalidUtf8(position)),
        }
    }

    fn position(&self) -> u64 {
        self.base + self.head as u64
    }

    fn seek(&mut self, position: u64) -> Result<(), SourceError> {
        let window_end = self.base + self.window.len() as u64;
        if (self.base..=window_end).contains(&position) {
            // Fits in usize: bounded by the window length.
            self.head = usize::try_from(position - self.base)
                .map_err(|_| SourceError::OutOfBounds(position))?;
            return Ok(());
        }
        self.inner.seek(SeekFrom::Start(position))?;
        self.window.clear();
        self.head = 0;
        self.base = position;
        self.eof = false;
        Ok(())
    }
}
