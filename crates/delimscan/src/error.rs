use std::io;

use thiserror::Error;

/// A delimiter pattern that could not be built.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern text was empty.
    #[error("delimiter pattern is empty")]
    Empty,
    /// The regular expression did not compile.
    #[cfg(feature = "regex")]
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
}

/// Failure reported by a [`CharSource`](crate::CharSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// Malformed or truncated UTF-8 starting at the given position.
    #[error("invalid UTF-8 at byte {0}")]
    InvalidUtf8(u64),
    /// The cursor sits inside a character.
    #[error("position {0} is not on a character boundary")]
    Misaligned(u64),
    /// A seek target beyond the end of the source.
    #[error("position {0} is past the end of the source")]
    OutOfBounds(u64),
}

/// Where the scanner lost track of character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Desync {
    /// A matcher reported an offset that is not a character boundary of the
    /// probe, or that lies past its end.
    #[error("offset {offset} is not a character boundary of the {len}-byte probe")]
    Buffer {
        /// The offending byte offset.
        offset: usize,
        /// Byte length of the probe.
        len: usize,
    },
    /// The source landed inside a character after a seek.
    #[error("source position {position} is inside a character")]
    Source {
        /// Where the source found itself.
        position: u64,
    },
}

/// Error returned by [`Scanner::read`](crate::Scanner::read) and friends.
///
/// Running out of input is not an error; it is reported as
/// [`Token::EndOfInput`](crate::Token::EndOfInput).
#[derive(Debug, Error)]
pub enum ScanError {
    /// Rewinding would land between character boundaries.
    #[error("scanner desynchronized: {0}")]
    Desync(#[from] Desync),
    /// The character source failed.
    #[error("source error: {0}")]
    Source(SourceError),
    /// A word or delimiter grew past
    /// [`ScannerOptions::max_token_len`](crate::ScannerOptions::max_token_len).
    #[error("token exceeds {limit} characters")]
    TokenTooLong {
        /// The configured limit.
        limit: usize,
    },
}

impl From<SourceError> for ScanError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Misaligned(position) => ScanError::Desync(Desync::Source { position }),
            other => ScanError::Source(other),
        }
    }
}
