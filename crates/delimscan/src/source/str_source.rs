use crate::{error::SourceError, source::CharSource};

/// A [`CharSource`] over a borrowed string. Positions are byte offsets.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> StrSource<'a> {
    /// A source positioned at the start of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// The input that has not been read yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// The whole input, read or not.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Result<Option<char>, SourceError> {
        let next = self.remaining().chars().next();
        if let Some(ch) = next {
            self.offset += ch.len_utf8();
        }
        Ok(next)
    }

    fn position(&self) -> u64 {
        self.offset as u64
    }

    fn seek(&mut self, position: u64) -> Result<(), SourceError> {
        let offset = usize::try_from(position).map_err(|_| SourceError::OutOfBounds(position))?;
        if offset > self.text.len() {
            return Err(SourceError::OutOfBounds(position));
        }
        if !self.text.is_char_boundary(offset) {
            return Err(SourceError::Misaligned(position));
        }
        self.offset = offset;
        Ok(())
    }
}
