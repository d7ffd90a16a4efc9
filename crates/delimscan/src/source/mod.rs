//! Seekable character sources.
//!
//! A [`CharSource`] yields one decoded `char` at a time and can be moved back
//! to any position it reported earlier. The scanner only ever seeks to
//! positions it observed through [`CharSource::position`], so a source is
//! free to pick whatever unit it likes for positions (both sources here use
//! byte offsets) as long as every reported position sits on a character
//! boundary.

mod reader;
mod str_source;

pub use reader::ReaderSource;
pub use str_source::StrSource;

use crate::error::SourceError;

/// A forward-reading, seekable stream of characters.
pub trait CharSource {
    /// Reads the next character, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Fails when the underlying data is unreadable or not valid text at the
    /// current position.
    fn next_char(&mut self) -> Result<Option<char>, SourceError>;

    /// The position of the next character `next_char` would return.
    fn position(&self) -> u64;

    /// Moves to `position`, dropping any read-ahead state past the old
    /// cursor.
    ///
    /// # Errors
    ///
    /// Fails when `position` cannot be reached or is not a character
    /// boundary (sources that can only tell lazily report the latter on the
    /// next read).
    fn seek(&mut self, position: u64) -> Result<(), SourceError>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn next_char(&mut self) -> Result<Option<char>, SourceError> {
        (**self).next_char()
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn seek(&mut self, position: u64) -> Result<(), SourceError> {
        (**self).seek(position)
    }
}
