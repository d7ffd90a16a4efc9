//! Scanner: splits a character source into words and delimiters, one token
//! per call.
//!
//! What it does
//! - Pulls characters from a [`CharSource`] into a per-call buffer and asks a
//!   [`Matcher`] (usually a [`DelimiterSet`](crate::DelimiterSet)) where the
//!   first delimiter in that buffer is.
//! - Phase A looks for a boundary. A match that starts after the first
//!   buffered character ends a word: everything before the match is
//!   returned and the source is rewound to the match start. A match at
//!   offset zero means the buffer is itself a delimiter prefix.
//! - Phase B grows that delimiter one character at a time. It keeps going
//!   while the match still covers the whole buffer (or there is no match at
//!   all) and stops as soon as the extra character falls outside the match.
//!   The delimiter is the buffer prefix with as many characters as that
//!   match; the source is rewound to its end.
//!
//! The matcher only ever sees the buffer, never the unread stream, and the
//! scanner never reads more than one character past its current best
//! delimiter. Ties between patterns are the matcher's business.
//!
//! Invariants
//! - When `read` or `peek` returns, the source sits exactly at the start of
//!   the next token (or, for `peek`, where the call started).
//! - Rewinds only target positions the source reported while the buffer was
//!   filled; an offset between two recorded boundaries is a [`Desync`].
//! - Zero-length matches count as no match.

mod buffer;

use core::iter::FusedIterator;

use tracing::{debug, trace};

use self::buffer::TokenBuffer;
use crate::{
    error::{Desync, ScanError},
    matcher::{Match, Matcher},
    options::ScannerOptions,
    source::{CharSource, StrSource},
    token::Token,
};

/// A single-cursor word/delimiter scanner over a [`CharSource`].
///
/// ```rust
/// use delimscan::{Delimiter, DelimiterSet, Scanner, Token};
///
/// let ops: DelimiterSet = ["=", "=="]
///     .into_iter()
///     .map(Delimiter::literal)
///     .collect::<Result<_, _>>()?;
///
/// let mut scanner = Scanner::from("a==b");
/// let texts: Vec<String> = scanner
///     .tokens(&ops)
///     .map(|t| t.map(|t| t.text().unwrap_or_default().to_owned()))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(texts, ["a", "==", "b"]);
/// assert_eq!(scanner.read(&ops)?, Token::EndOfInput);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Scanner<S> {
    source: S,
    options: ScannerOptions,
}

impl<'a> From<&'a str> for Scanner<StrSource<'a>> {
    fn from(text: &'a str) -> Self {
        Self::new(StrSource::new(text))
    }
}

impl<S: CharSource> Scanner<S> {
    /// Wraps `source` with default options. Scanning starts at the
    /// source's current position.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    /// Wraps `source` with the given options.
    pub fn with_options(source: S, options: ScannerOptions) -> Self {
        Self { source, options }
    }

    /// The options this scanner was built with.
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Position of the next unread character.
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// The wrapped source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source. Moving its cursor between calls is
    /// allowed; the next `read` starts wherever it is left.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the source, positioned at the next unread token.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads the next word or delimiter.
    ///
    /// Returns [`Token::EndOfInput`] once the source is exhausted; calling
    /// again keeps returning it.
    ///
    /// # Errors
    ///
    /// Source failures, a matcher that reports a range outside the probe or
    /// inside a character ([`ScanError::Desync`]), or a token longer than
    /// [`ScannerOptions::max_token_len`]. After `TokenTooLong` the source is
    /// back where the call started.
    pub fn read<M: Matcher + ?Sized>(&mut self, delimiters: &M) -> Result<Token, ScanError> {
        let start = self.source.position();
        match self.scan(delimiters, start) {
            Ok(token) => Ok(token),
            Err(ScanError::TokenTooLong { limit }) => {
                debug!(position = start, limit, "token exceeds limit, rewinding");
                self.source.seek(start)?;
                Err(self.fail(ScanError::TokenTooLong { limit }))
            }
            Err(err) => {
                debug!(position = start, error = %err, "scan failed");
                Err(self.fail(err))
            }
        }
    }

    /// Reads the next token without consuming it: the following `read` or
    /// `peek` with the same delimiters sees the same token.
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read). The start position is restored on failure
    /// too, when the source allows it.
    pub fn peek<M: Matcher + ?Sized>(&mut self, delimiters: &M) -> Result<Token, ScanError> {
        let start = self.source.position();
        let token = self.read(delimiters);
        let restored = self.source.seek(start);
        let token = token?;
        restored?;
        Ok(token)
    }

    /// Iterates over words and delimiters until end of input.
    ///
    /// The iterator stops after the first error.
    pub fn tokens<'s, M: Matcher + ?Sized>(&'s mut self, delimiters: &'s M) -> Tokens<'s, S, M> {
        Tokens {
            scanner: self,
            delimiters,
            done: false,
        }
    }

    fn scan<M: Matcher + ?Sized>(&mut self, delimiters: &M, start: u64) -> Result<Token, ScanError> {
        let mut buf = TokenBuffer::new(start);

        // Phase A: find a boundary.
        let head = loop {
            if !self.advance(&mut buf)? {
                if buf.is_empty() {
                    trace!(position = start, "end of input");
                    return Ok(Token::EndOfInput);
                }
                trace!(position = start, len = buf.as_str().len(), "word at end of input");
                return Ok(Token::word(buf.as_str(), start));
            }
            match probe(delimiters, buf.as_str())? {
                None => {}
                Some(m) if m.start > 0 => {
                    self.rewind(&buf, m.start)?;
                    trace!(position = start, len = m.start, "word");
                    return Ok(Token::word(&buf.as_str()[..m.start], start));
                }
                Some(m) => break m,
            }
        };

        // Phase B: grow the delimiter. Lengths here are in characters;
        // `settled` is the longest prefix last covered by a match in full.
        let mut settled = buf.char_len(head)?;
        loop {
            if !self.advance(&mut buf)? {
                let chars = match probe(delimiters, buf.as_str())? {
                    Some(m) => buf.char_len(m)?,
                    None => settled,
                };
                return self.emit_delimiter(&buf, chars);
            }
            if let Some(m) = probe(delimiters, buf.as_str())? {
                let chars = buf.char_len(m)?;
                if chars < buf.char_count() {
                    return self.emit_delimiter(&buf, chars);
                }
                settled = chars;
            }
        }
    }

    /// Reads one character into `buf`. Returns `false` at end of input.
    fn advance(&mut self, buf: &mut TokenBuffer) -> Result<bool, ScanError> {
        if let Some(limit) = self.options.max_token_len {
            // One character of lookahead is allowed past the limit.
            if buf.char_count() > limit {
                return Err(ScanError::TokenTooLong { limit });
            }
        }
        match self.source.next_char()? {
            Some(ch) => {
                buf.push(ch, self.source.position());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Emits the first `chars` characters of `buf` as a delimiter.
    fn emit_delimiter(&mut self, buf: &TokenBuffer, chars: usize) -> Result<Token, ScanError> {
        let len = buf.prefix_len(chars);
        self.rewind(buf, len)?;
        trace!(position = buf.start(), len, "delimiter");
        Ok(Token::delimiter(&buf.as_str()[..len], buf.start()))
    }

    /// Moves the source back to just before byte `offset` of `buf`.
    fn rewind(&mut self, buf: &TokenBuffer, offset: usize) -> Result<(), ScanError> {
        let target = buf.position_at(offset)?;
        if target != self.source.position() {
            trace!(from = self.source.position(), to = target, "rewind");
            self.source.seek(target)?;
        }
        Ok(())
    }

    #[allow(clippy::unused_self)]
    fn fail(&self, err: ScanError) -> ScanError {
        #[cfg(any(test, feature = "fuzzing"))]
        if self.options.panic_on_error {
            panic!("scan error: {err}");
        }
        err
    }
}

/// Asks `delimiters` about `text`, dropping empty matches and rejecting
/// ranges that reach past the end.
fn probe<M: Matcher + ?Sized>(delimiters: &M, text: &str) -> Result<Option<Match>, Desync> {
    match delimiters.find(text) {
        Some(m) if m.is_empty() => Ok(None),
        Some(m) => match m.start.checked_add(m.len) {
            Some(end) if end <= text.len() => Ok(Some(m)),
            _ => Err(Desync::Buffer {
                offset: m.start.saturating_add(m.len),
                len: text.len(),
            }),
        },
        None => Ok(None),
    }
}

/// Iterator returned by [`Scanner::tokens`].
#[derive(Debug)]
pub struct Tokens<'s, S, M: ?Sized> {
    scanner: &'s mut Scanner<S>,
    delimiters: &'s M,
    done: bool,
}

impl<S: CharSource, M: Matcher + ?Sized> Iterator for Tokens<'_, S, M> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.read(self.delimiters) {
            Ok(Token::EndOfInput) => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: CharSource, M: Matcher + ?Sized> FusedIterator for Tokens<'_, S, M> {}
