use crate::{error::Desync, matcher::Match};

/// Characters read by one `Scanner::read` call, with the source position at
/// every character boundary.
///
/// Rewinds look positions up here instead of computing them, so a seek can
/// only ever target a place the source itself reported.
#[derive(Debug)]
pub(crate) struct TokenBuffer {
    text: String,
    // (byte offset into `text`, source position), one per boundary,
    // starting with (0, start) and strictly increasing in both.
    marks: Vec<(usize, u64)>,
}

impl TokenBuffer {
    pub(crate) fn new(start: u64) -> Self {
        Self {
            text: String::new(),
            marks: vec![(0, start)],
        }
    }

    pub(crate) fn push(&mut self, ch: char, position_after: u64) {
        self.text.push(ch);
        self.marks.push((self.text.len(), position_after));
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn char_count(&self) -> usize {
        self.marks.len() - 1
    }

    pub(crate) fn start(&self) -> u64 {
        self.marks[0].1
    }

    /// Source position just before the character at byte `offset`.
    pub(crate) fn position_at(&self, offset: usize) -> Result<u64, Desync> {
        self.boundary(offset).map(|i| self.marks[i].1)
    }

    /// Number of characters covered by `m`.
    pub(crate) fn char_len(&self, m: Match) -> Result<usize, Desync> {
        Ok(self.boundary(m.end())? - self.boundary(m.start)?)
    }

    /// Byte length of the first `chars` characters.
    pub(crate) fn prefix_len(&self, chars: usize) -> usize {
        self.marks[chars.min(self.char_count())].0
    }

    // Index of the mark at byte `offset`, i.e. the number of characters
    // before it.
    fn boundary(&self, offset: usize) -> Result<usize, Desync> {
        self.marks
            .binary_search_by_key(&offset, |&(o, _)| o)
            .map_err(|_| Desync::Buffer {
                offset,
                len: self.text.len(),
            })
    }
}
