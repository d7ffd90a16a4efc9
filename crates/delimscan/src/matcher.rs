use std::{ops::Range, rc::Rc, sync::Arc};

/// Location of a pattern inside a probe string, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Match {
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Length of the match in bytes.
    pub len: usize,
}

impl Match {
    /// A match of `len` bytes starting at byte `start`.
    #[must_use]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset just past the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The matched bytes as a range, ready for slicing the probe.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Whether the match covers nothing. The scanner treats such a match
    /// as no match at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Anything that can locate a delimiter inside a string.
///
/// Implementations answer against the probe they are handed and nothing
/// else: the scanner calls them with the characters it has buffered so far,
/// never with the rest of the stream.
///
/// ```rust
/// use delimscan::{Match, Matcher};
///
/// /// Splits on any ASCII digit.
/// struct Digit;
///
/// impl Matcher for Digit {
///     fn find(&self, probe: &str) -> Option<Match> {
///         probe.find(|c: char| c.is_ascii_digit()).map(|start| Match::new(start, 1))
///     }
/// }
///
/// assert_eq!(Digit.find("ab3"), Some(Match::new(2, 1)));
/// assert!(!Digit.is_match("abc"));
/// ```
pub trait Matcher {
    /// Returns the leftmost non-empty match in `probe`, if any.
    fn find(&self, probe: &str) -> Option<Match>;

    /// Whether `probe` contains a match anywhere.
    fn is_match(&self, probe: &str) -> bool {
        self.find(probe).is_some()
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn find(&self, probe: &str) -> Option<Match> {
        (**self).find(probe)
    }

    fn is_match(&self, probe: &str) -> bool {
        (**self).is_match(probe)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn find(&self, probe: &str) -> Option<Match> {
        (**self).find(probe)
    }

    fn is_match(&self, probe: &str) -> bool {
        (**self).is_match(probe)
    }
}

impl<M: Matcher + ?Sized> Matcher for Rc<M> {
    fn find(&self, probe: &str) -> Option<Match> {
        (**self).find(probe)
    }

    fn is_match(&self, probe: &str) -> bool {
        (**self).is_match(probe)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn find(&self, probe: &str) -> Option<Match> {
        (**self).find(probe)
    }

    fn is_match(&self, probe: &str) -> bool {
        (**self).is_match(probe)
    }
}
